//! Custom test assertions
//!
//! Provides domain-specific assertions for batch records.

use placement_rs::core::batch::BatchRecord;

/// Assertions for BatchRecord
pub trait BatchRecordAssertions {
    /// Assert the batch is active and not graduated
    fn assert_current(&self);

    /// Assert the batch is graduated and inactive
    fn assert_alumni(&self);

    /// Assert the cached placement counts
    fn assert_counts(&self, total: i32, placed: i32);
}

impl BatchRecordAssertions for BatchRecord {
    fn assert_current(&self) {
        assert!(
            self.is_active && !self.is_graduated,
            "Expected {} to be current, got active={} graduated={}",
            self.display_name(),
            self.is_active,
            self.is_graduated
        );
    }

    fn assert_alumni(&self) {
        assert!(
            !self.is_active && self.is_graduated,
            "Expected {} to be alumni, got active={} graduated={}",
            self.display_name(),
            self.is_active,
            self.is_graduated
        );
    }

    fn assert_counts(&self, total: i32, placed: i32) {
        assert_eq!(
            (self.total_students, self.placed_students),
            (total, placed),
            "Unexpected counts for {}",
            self.display_name()
        );
    }
}
