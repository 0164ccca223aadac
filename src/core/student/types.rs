//! Student types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placement outcome of a single student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlacementStatus {
    #[default]
    #[serde(rename = "Not Placed")]
    NotPlaced,
    #[serde(rename = "Placed")]
    Placed,
    #[serde(rename = "Multiple Offers")]
    MultipleOffers,
}

impl PlacementStatus {
    /// Statuses counted towards a batch's placed students
    pub const PLACED: [PlacementStatus; 2] = [PlacementStatus::Placed, PlacementStatus::MultipleOffers];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::NotPlaced => "Not Placed",
            PlacementStatus::Placed => "Placed",
            PlacementStatus::MultipleOffers => "Multiple Offers",
        }
    }

    pub fn is_placed(&self) -> bool {
        Self::PLACED.contains(self)
    }
}

impl std::fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlacementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Placed" => Ok(PlacementStatus::NotPlaced),
            "Placed" => Ok(PlacementStatus::Placed),
            "Multiple Offers" => Ok(PlacementStatus::MultipleOffers),
            other => Err(format!("Unknown placement status: {}", other)),
        }
    }
}

/// Student to insert into the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub batch_id: Uuid,
    pub department_id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub placement_status: PlacementStatus,
}

/// Persisted student, as far as batch statistics are concerned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub department_id: Uuid,
    pub full_name: String,
    pub placement_status: PlacementStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
