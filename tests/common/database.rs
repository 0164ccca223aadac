//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use super::fixtures::{BatchFactory, StudentFactory};
use placement_rs::config::DatabaseConfig;
use placement_rs::core::batch::{BatchRecord, BatchService};
use placement_rs::storage::database::Database;
use std::sync::Arc;
use uuid::Uuid;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

/// A department with batches and enrolled students
#[derive(Debug, Clone)]
pub struct SeededDepartment {
    pub department_id: Uuid,
    /// 2021-2025 UG: 4 students, 3 placed
    pub senior: BatchRecord,
    /// 2024-2028 UG: 2 students, none placed
    pub junior: BatchRecord,
    /// 2024-2026 PG: no students
    pub postgraduate: BatchRecord,
}

impl TestDatabase {
    /// Create a new in-memory test database using SeaORM
    ///
    /// Each call creates a completely isolated database instance.
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database with one seeded department
    pub async fn seeded() -> (Self, SeededDepartment) {
        let db = Self::new().await;
        let seeded = db.seed_department().await;
        (db, seeded)
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }

    /// Batch service counting students from this database
    pub fn service(&self) -> BatchService {
        BatchService::with_database_students(self.db_arc())
    }

    async fn seed_department(&self) -> SeededDepartment {
        tracing::debug!("Seeding test database with a department");

        let department_id = Uuid::new_v4();
        let service = self.service();

        let senior = service
            .create_batch(&BatchFactory::undergraduate_in(department_id, 2021))
            .await
            .expect("Failed to seed senior batch");
        let junior = service
            .create_batch(&BatchFactory::undergraduate_in(department_id, 2024))
            .await
            .expect("Failed to seed junior batch");
        let postgraduate = service
            .create_batch(&BatchFactory::postgraduate_in(department_id, 2024))
            .await
            .expect("Failed to seed postgraduate batch");

        for student in StudentFactory::cohort(&senior, 3, 1)
            .into_iter()
            .chain(StudentFactory::cohort(&junior, 0, 2))
        {
            self.db()
                .insert_student(&student)
                .await
                .expect("Failed to seed student");
        }

        SeededDepartment {
            department_id,
            senior,
            junior,
            postgraduate,
        }
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1, // In-memory DB only supports 1 connection
        connection_timeout: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_database() {
        let (db, seeded) = TestDatabase::seeded().await;
        let batches = db
            .db()
            .list_department_batches(seeded.department_id, None)
            .await
            .unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(
            db.db().list_batch_students(seeded.senior.id).await.unwrap().len(),
            4
        );
    }
}
