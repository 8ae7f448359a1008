mod common;

use migration::SchemaManager;
use migration::catalog::catalog;
use rust_kindergarten_model::config::{DatabaseConfig, RegistryConfig};
use rust_kindergarten_model::entity;
use rust_kindergarten_model::runtime::lifetime::startup::prepare_startup_with;
use rust_kindergarten_model::storage::{Scope, Storage};

#[tokio::test]
async fn test_migration_creates_every_table_and_index() {
    let storage = common::storage().await;
    let manager = SchemaManager::new(storage.connection());

    for schema in catalog() {
        assert!(
            manager.has_table(schema.table).await.unwrap(),
            "missing table {}",
            schema.table
        );
        for index in &schema.indexes {
            assert!(
                manager.has_index(schema.table, &index.name).await.unwrap(),
                "missing index {}",
                index.name
            );
        }
    }
}

#[tokio::test]
async fn test_frozen_column_names_are_kept() {
    let storage = common::storage().await;
    let manager = SchemaManager::new(storage.connection());

    assert!(
        manager
            .has_column("enrollment_applications", "applicationNumber")
            .await
            .unwrap()
    );
    assert!(
        manager
            .has_column("security_configs", "configKey")
            .await
            .unwrap()
    );
    assert!(manager.has_column("users", "real_name").await.unwrap());
    assert!(
        manager
            .has_index(
                "enrollment_applications",
                "enrollment_applications_application_number"
            )
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_fresh_database_is_empty() {
    let storage = common::storage().await;
    for table in entity::table_names() {
        assert_eq!(storage.count_rows(table, Scope::WithDeleted).await.unwrap(), 0);
    }
    // 实体名同样可用
    assert_eq!(storage.count_rows("Role", Scope::Default).await.unwrap(), 0);

    let err = storage
        .count_rows("lesson_plans", Scope::Default)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");
}

#[tokio::test]
async fn test_startup_reports_summary() {
    let registry = RegistryConfig {
        audit_on_startup: true,
        ..Default::default()
    };
    let startup = prepare_startup_with(&DatabaseConfig::in_memory(), &registry)
        .await
        .unwrap();

    assert_eq!(startup.summary.tables, catalog().len());
    assert_eq!(startup.summary.tables, entity::table_names().len());
    assert!(startup.summary.paranoid_tables > 0);
    assert!(startup.dangling.is_empty());
    assert_eq!(
        startup.storage.registry().summary(),
        startup.summary
    );
}
