//! Database integration tests
//!
//! Tests the SeaORM store directly using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use crate::common::{BatchFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use placement_rs::core::batch::{CourseType, validate_and_derive};
    use placement_rs::storage::StorageLayer;
    use placement_rs::storage::database::{Database, DatabaseBackendType};
    use placement_rs::config::StorageConfig;
    use uuid::Uuid;

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        assert_ok!(db.migrate().await);
        assert_ok!(db.health_check().await);
    }

    /// Health check fails before the schema exists
    #[tokio::test]
    async fn test_health_check_without_migrations() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert!(db.health_check().await.is_err());
    }

    /// The storage layer reports overall health
    #[tokio::test]
    async fn test_storage_layer() {
        let config = StorageConfig {
            database: test_db_config(),
        };
        let storage = assert_ok!(StorageLayer::new(&config).await);
        assert_ok!(storage.migrate().await);

        let health = storage.health_check().await;
        assert!(health.database);
        assert!(health.overall);
    }

    /// File-backed databases persist across connections
    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("placement.db");
        let mut config = test_db_config();
        config.url = format!("sqlite://{}?mode=rwc", path.display());

        let candidate = BatchFactory::undergraduate(2024);
        {
            let db = assert_ok!(Database::new(&config).await);
            assert_ok!(db.migrate().await);
            assert_ok!(db.insert_batch(&validate_and_derive(&candidate).unwrap()).await);
            assert_ok!(db.close().await);
        }

        let db = assert_ok!(Database::new(&config).await);
        let found = assert_ok!(
            db.find_batch_by_code(&candidate.batch_code, candidate.department_id)
                .await
        );
        assert!(found.is_some());
    }

    /// Code lookup is scoped to the department
    #[tokio::test]
    async fn test_find_batch_by_code_scoped_to_department() {
        let db = TestDatabase::new().await;
        let candidate = BatchFactory::undergraduate(2024);
        assert_ok!(
            db.db()
                .insert_batch(&validate_and_derive(&candidate).unwrap())
                .await
        );

        let other = assert_ok!(db.db().find_batch_by_code("2024-2028", Uuid::new_v4()).await);
        assert!(other.is_none());
    }

    /// The composite unique index rejects duplicates
    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let db = TestDatabase::new().await;
        let validated = validate_and_derive(&BatchFactory::undergraduate(2024)).unwrap();

        assert_ok!(db.db().insert_batch(&validated).await);
        let err = assert_err!(db.db().insert_batch(&validated).await);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    /// Course type filter on department listing
    #[tokio::test]
    async fn test_list_department_batches_by_course_type() {
        let (db, seeded) = TestDatabase::seeded().await;

        let ug = assert_ok!(
            db.db()
                .list_department_batches(seeded.department_id, Some(CourseType::Ug))
                .await
        );
        let start_years: Vec<_> = ug.iter().map(|b| b.start_year).collect();
        assert_eq!(start_years, vec![2024, 2021]);

        let diploma = assert_ok!(
            db.db()
                .list_department_batches(seeded.department_id, Some(CourseType::Diploma))
                .await
        );
        assert!(diploma.is_empty());
    }
}
