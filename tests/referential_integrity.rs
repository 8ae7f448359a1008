mod common;

use sea_orm::ActiveValue::Set;

use rust_kindergarten_model::config::IntegrityMode;
use rust_kindergarten_model::entity::{classes, kindergartens, operation_logs, permissions};
use rust_kindergarten_model::errors::ViolationKind;
use rust_kindergarten_model::storage::{Scope, Storage};

fn log_for(user_id: i32) -> operation_logs::ActiveModel {
    operation_logs::ActiveModel {
        user_id: Set(Some(user_id)),
        module: Set("auth".to_string()),
        action: Set("login".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_permissive_mode_accepts_dangling_keys() {
    let storage = common::storage().await;
    assert_eq!(storage.integrity(), IntegrityMode::Permissive);

    let class = storage
        .repo::<classes::Entity>()
        .unwrap()
        .insert(common::class(999, "X1"))
        .await
        .unwrap();
    assert_eq!(class.kindergarten_id, 999);
}

#[tokio::test]
async fn test_strict_mode_rejects_missing_target() {
    let storage = common::strict_storage().await;
    let repo = storage.repo::<classes::Entity>().unwrap();

    let err = repo.insert(common::class(999, "X1")).await.unwrap_err();
    assert_eq!(err.code(), "E011");
    let violation = err.constraint().unwrap();
    assert_eq!(violation.column(), Some("kindergartenId"));
    assert_eq!(
        violation.on("kindergartenId"),
        Some(&ViolationKind::DanglingReference {
            target: "Kindergarten".to_string(),
            value: 999
        })
    );
    assert_eq!(repo.count(Scope::WithDeleted).await.unwrap(), 0);

    let kg = storage
        .repo::<kindergartens::Entity>()
        .unwrap()
        .insert(common::kindergarten("sunshine"))
        .await
        .unwrap();
    let class = repo.insert(common::class(kg.id, "X1")).await.unwrap();
    assert_eq!(class.kindergarten_id, kg.id);
}

#[tokio::test]
async fn test_soft_deleted_target_counts_as_missing() {
    let storage = common::strict_storage().await;
    let kg_repo = storage.repo::<kindergartens::Entity>().unwrap();
    let kg = kg_repo.insert(common::kindergarten("closed")).await.unwrap();
    kg_repo.delete(i64::from(kg.id)).await.unwrap();

    let err = storage
        .repo::<classes::Entity>()
        .unwrap()
        .insert(common::class(kg.id, "C1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("kindergartenId"),
        Some(ViolationKind::DanglingReference { .. })
    ));
}

#[tokio::test]
async fn test_null_and_advisory_keys_are_skipped() {
    let storage = common::strict_storage().await;

    // 可空外键为空时不检查
    let root = storage
        .repo::<permissions::Entity>()
        .unwrap()
        .insert(common::permission("root", None, 0))
        .await
        .unwrap();
    assert!(root.parent_id.is_none());

    // 操作日志的 userId 只作说明
    let log = storage
        .repo::<operation_logs::Entity>()
        .unwrap()
        .insert(log_for(404))
        .await
        .unwrap();
    assert_eq!(log.user_id, Some(404));
    assert_eq!(log.operation_result, "success");
}

#[tokio::test]
async fn test_strict_update_checks_changed_keys() {
    let storage = common::strict_storage().await;
    let kg = storage
        .repo::<kindergartens::Entity>()
        .unwrap()
        .insert(common::kindergarten("oak"))
        .await
        .unwrap();
    let repo = storage.repo::<classes::Entity>().unwrap();
    let class = repo.insert(common::class(kg.id, "O1")).await.unwrap();
    let id = i64::from(class.id);

    let err = repo
        .update(id, |class| {
            class.kindergarten_id = Set(12345);
        })
        .await
        .unwrap_err();
    assert!(err.constraint().unwrap().on("kindergartenId").is_some());
    assert_eq!(repo.get(id).await.unwrap().kindergarten_id, kg.id);

    // 不涉及外键的修改不受影响
    let renamed = repo
        .update(id, |class| {
            class.name = Set("橡树班".to_string());
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "橡树班");
}

#[tokio::test]
async fn test_audit_reports_dangling_parent() {
    let storage = common::storage().await;
    let repo = storage.repo::<permissions::Entity>().unwrap();
    let root = repo.insert(common::permission("root", None, 0)).await.unwrap();
    repo.insert(common::permission("root.child", Some(root.id), 0))
        .await
        .unwrap();

    assert!(storage.audit_references().await.unwrap().is_empty());

    repo.delete(i64::from(root.id)).await.unwrap();
    let reports = storage.audit_references().await.unwrap();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.source_table, "permissions");
    assert_eq!(report.alias, "parent");
    assert_eq!(report.target_table, "permissions");
    assert!(report.constraints);
    assert_eq!(report.missing, vec![i64::from(root.id)]);
}

#[tokio::test]
async fn test_audit_marks_advisory_relations() {
    let storage = common::storage().await;
    storage
        .repo::<operation_logs::Entity>()
        .unwrap()
        .insert(log_for(77))
        .await
        .unwrap();

    let reports = storage.audit_references().await.unwrap();
    let report = reports
        .iter()
        .find(|r| r.source_table == "operation_logs")
        .unwrap();
    assert!(!report.constraints);
    assert_eq!(report.missing, vec![77]);
}
