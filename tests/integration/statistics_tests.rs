//! Placement statistics integration tests
//!
//! Recomputes cached counts from student rows in the same SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::assertions::BatchRecordAssertions;
    use crate::common::{BatchFactory, StudentFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use placement_rs::core::batch::BatchStatistics;
    use placement_rs::core::student::{PlacementStatus, StudentStore};
    use placement_rs::utils::error::PlacementError;
    use uuid::Uuid;

    /// Counts come from the student rows and are written back
    #[tokio::test]
    async fn test_recompute_batch() {
        let (db, seeded) = TestDatabase::seeded().await;
        let service = db.service();

        let statistics = assert_ok!(service.recompute_statistics(seeded.senior.id).await);
        assert_eq!(statistics, BatchStatistics::new(4, 3));
        assert_eq!(statistics.placement_rate, 75);

        let stored = assert_ok!(service.get_batch(seeded.senior.id).await);
        stored.assert_counts(4, 3);
        assert_eq!(stored.placement_rate(), 75);
    }

    /// Both placed statuses count as placed
    #[tokio::test]
    async fn test_store_counts_placed_statuses() {
        let db = TestDatabase::new().await;
        let batch = assert_ok!(
            db.service()
                .create_batch(&BatchFactory::undergraduate(2024))
                .await
        );

        for status in [
            PlacementStatus::Placed,
            PlacementStatus::MultipleOffers,
            PlacementStatus::NotPlaced,
        ] {
            assert_ok!(
                db.db()
                    .insert_student(&StudentFactory::create(&batch, status))
                    .await
            );
        }

        assert_eq!(assert_ok!(db.db().count_by_batch(batch.id).await), 3);
        assert_eq!(assert_ok!(db.db().count_placed_by_batch(batch.id).await), 2);
    }

    /// A batch without students has a zero rate
    #[tokio::test]
    async fn test_recompute_empty_batch() {
        let (db, seeded) = TestDatabase::seeded().await;

        let statistics = assert_ok!(db.service().recompute_statistics(seeded.postgraduate.id).await);
        assert_eq!(statistics, BatchStatistics::new(0, 0));
        assert_eq!(statistics.placement_rate, 0);
    }

    /// Status changes show up on the next recompute
    #[tokio::test]
    async fn test_recompute_after_placement_change() {
        let (db, seeded) = TestDatabase::seeded().await;
        let service = db.service();

        let before = assert_ok!(service.recompute_statistics(seeded.junior.id).await);
        assert_eq!(before.placed_students, 0);

        let students = assert_ok!(db.db().list_batch_students(seeded.junior.id).await);
        assert_ok!(
            db.db()
                .update_student_placement_status(students[0].id, PlacementStatus::Placed)
                .await
        );

        let after = assert_ok!(service.recompute_statistics(seeded.junior.id).await);
        assert_eq!(after, BatchStatistics::new(2, 1));
        assert_eq!(after.placement_rate, 50);
    }

    /// Department-wide recompute covers every batch
    #[tokio::test]
    async fn test_recompute_department() {
        let (db, seeded) = TestDatabase::seeded().await;

        let results = assert_ok!(
            db.service()
                .recompute_department_statistics(seeded.department_id)
                .await
        );
        assert_eq!(results.len(), 3);

        for (batch, statistics) in &results {
            let expected = if batch.id == seeded.senior.id {
                BatchStatistics::new(4, 3)
            } else if batch.id == seeded.junior.id {
                BatchStatistics::new(2, 0)
            } else {
                BatchStatistics::new(0, 0)
            };
            assert_eq!(*statistics, expected, "{}", batch.display_name());
        }
    }

    /// Recomputing an unknown batch is NotFound
    #[tokio::test]
    async fn test_recompute_unknown_batch() {
        let db = TestDatabase::new().await;
        let err = assert_err!(db.service().recompute_statistics(Uuid::new_v4()).await);
        assert!(matches!(err, PlacementError::NotFound(_)));
    }
}
