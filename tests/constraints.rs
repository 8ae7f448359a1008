mod common;

use sea_orm::ActiveValue::Set;

use rust_kindergarten_model::entity::{
    enrollment_plans, permissions, roles, security_configs, security_scan_logs, tasks,
    user_roles, users,
};
use rust_kindergarten_model::errors::ViolationKind;
use rust_kindergarten_model::models::identity::entities::UserRole;
use rust_kindergarten_model::storage::Scope;

#[tokio::test]
async fn test_role_code_is_unique() {
    let storage = common::storage().await;
    let repo = storage.repo::<roles::Entity>().unwrap();

    let first = repo.insert(common::role("teacher")).await.unwrap();
    let mut duplicate = common::role("teacher");
    duplicate.name = Set("另一个角色".to_string());
    let err = repo.insert(duplicate).await.unwrap_err();

    let violation = err.constraint().expect("constraint violation");
    assert_eq!(violation.table, "roles");
    assert_eq!(
        violation.on("code"),
        Some(&ViolationKind::Unique {
            columns: vec!["code".to_string()]
        })
    );

    // 第一行保持不变
    assert_eq!(repo.count(Scope::Default).await.unwrap(), 1);
    assert_eq!(repo.get(i64::from(first.id)).await.unwrap(), first);
}

#[tokio::test]
async fn test_permission_code_is_unique() {
    let storage = common::storage().await;
    let repo = storage.repo::<permissions::Entity>().unwrap();

    repo.insert(common::permission("view_students", None, 0))
        .await
        .unwrap();
    let err = repo
        .insert(common::permission("view_students", None, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err.constraint().and_then(|c| c.on("code")),
        Some(ViolationKind::Unique { .. })
    ));
    assert_eq!(repo.count(Scope::WithDeleted).await.unwrap(), 1);
}

#[tokio::test]
async fn test_security_config_key_is_unique() {
    let storage = common::storage().await;
    let repo = storage.repo::<security_configs::Entity>().unwrap();
    let config = |value: &str| security_configs::ActiveModel {
        config_key: Set("password_policy".to_string()),
        config_value: Set(value.to_string()),
        ..Default::default()
    };

    let first = repo.insert(config(r#"{"minLength":8}"#)).await.unwrap();
    assert_eq!(first.category, "general");
    assert!(first.is_active);

    let err = repo.insert(config(r#"{"minLength":12}"#)).await.unwrap_err();
    assert_eq!(err.code(), "E011");
    assert!(err.constraint().unwrap().on("configKey").is_some());
    assert_eq!(
        repo.get(i64::from(first.id)).await.unwrap().config_value,
        r#"{"minLength":8}"#
    );
}

#[tokio::test]
async fn test_composite_unique_on_join_rows() {
    let storage = common::storage().await;
    let repo = storage.repo::<user_roles::Entity>().unwrap();

    repo.insert_keys(&[("userId", 1), ("roleId", 2)]).await.unwrap();
    let err = repo
        .insert_keys(&[("userId", 1), ("roleId", 2)])
        .await
        .unwrap_err();
    assert_eq!(
        err.constraint().unwrap().on("userId"),
        Some(&ViolationKind::Unique {
            columns: vec!["userId".to_string(), "roleId".to_string()]
        })
    );
    // 不同组合可以共存
    repo.insert_keys(&[("userId", 1), ("roleId", 3)]).await.unwrap();
    assert_eq!(repo.count(Scope::Default).await.unwrap(), 2);
}

#[tokio::test]
async fn test_enum_rejects_undeclared_value() {
    let storage = common::storage().await;
    let repo = storage.repo::<users::Entity>().unwrap();

    let mut row = common::user("zhang");
    row.role = Set("root".to_string());
    let err = repo.insert(row).await.unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("role"),
        Some(ViolationKind::NotInEnum { value, .. }) if value == "root"
    ));
    assert_eq!(repo.count(Scope::WithDeleted).await.unwrap(), 0);
}

#[tokio::test]
async fn test_declared_enum_values_round_trip() {
    let storage = common::storage().await;
    let repo = storage.repo::<users::Entity>().unwrap();

    for (i, value) in UserRole::VALUES.iter().enumerate() {
        let mut row = common::user(&format!("user{i}"));
        row.role = Set(value.to_string());
        let saved = repo.insert(row).await.unwrap();
        let loaded = repo.get(i64::from(saved.id)).await.unwrap();
        assert_eq!(loaded.role, *value);
        assert_eq!(loaded.user_role().as_str(), *value);
    }
}

#[tokio::test]
async fn test_defaults_are_applied() {
    let storage = common::storage().await;
    let user = storage
        .repo::<users::Entity>()
        .unwrap()
        .insert(common::user("li"))
        .await
        .unwrap();
    assert_eq!(user.role, "parent");
    assert_eq!(user.status, "active");
    assert!(user.deleted_at.is_none());
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_every_offending_column_is_reported() {
    let storage = common::storage().await;
    let repo = storage.repo::<users::Entity>().unwrap();

    let row = users::ActiveModel {
        username: Set("a".repeat(51)),
        email: Set(Some("not-an-email".to_string())),
        status: Set("banned".to_string()),
        ..Default::default()
    };
    let err = repo.insert(row).await.unwrap_err();
    let violation = err.constraint().unwrap();

    assert!(matches!(
        violation.on("username"),
        Some(ViolationKind::TooLong { max: 50, actual: 51 })
    ));
    assert_eq!(violation.on("password"), Some(&ViolationKind::NotNull));
    assert_eq!(
        violation.on("email"),
        Some(&ViolationKind::Format("邮箱地址"))
    );
    assert!(matches!(
        violation.on("status"),
        Some(ViolationKind::NotInEnum { .. })
    ));
    assert_eq!(repo.count(Scope::WithDeleted).await.unwrap(), 0);
}

#[tokio::test]
async fn test_percent_is_range_checked() {
    let storage = common::storage().await;
    let repo = storage.repo::<tasks::Entity>().unwrap();
    let task = |progress: i32| tasks::ActiveModel {
        title: Set("整理教室".to_string()),
        creator_id: Set(1),
        progress: Set(progress),
        ..Default::default()
    };

    let err = repo.insert(task(101)).await.unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("progress"),
        Some(ViolationKind::OutOfRange { .. })
    ));
    let saved = repo.insert(task(100)).await.unwrap();
    assert_eq!(saved.task_status().as_str(), "pending");
}

#[tokio::test]
async fn test_nan_percent_is_rejected() {
    let storage = common::storage().await;
    let repo = storage.repo::<security_scan_logs::Entity>().unwrap();
    let scan = |risk_score: Option<f64>| security_scan_logs::ActiveModel {
        scan_type: Set("full".to_string()),
        started_at: Set(chrono::Utc::now()),
        risk_score: Set(risk_score),
        ..Default::default()
    };

    let err = repo.insert(scan(Some(f64::NAN))).await.unwrap_err();
    assert_eq!(err.code(), "E011");
    assert!(matches!(
        err.constraint().unwrap().on("riskScore"),
        Some(ViolationKind::OutOfRange { .. })
    ));
    assert_eq!(repo.count(Scope::WithDeleted).await.unwrap(), 0);
    let saved = repo.insert(scan(Some(42.5))).await.unwrap();
    assert_eq!(saved.risk_score, Some(42.5));

    let plans = storage.repo::<enrollment_plans::Entity>().unwrap();
    let mut plan = common::plan(1, "春季招生");
    plan.progress = Set(f64::NAN);
    let err = plans.insert(plan).await.unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("progress"),
        Some(ViolationKind::OutOfRange { .. })
    ));

    let saved = plans.insert(common::plan(1, "秋季招生")).await.unwrap();
    let err = plans
        .update(i64::from(saved.id), |plan| {
            plan.progress = Set(f64::NAN);
        })
        .await
        .unwrap_err();
    assert!(err.constraint().unwrap().on("progress").is_some());
}

#[tokio::test]
async fn test_update_validates_changed_columns() {
    let storage = common::storage().await;
    let repo = storage.repo::<users::Entity>().unwrap();
    let saved = repo.insert(common::user("wang")).await.unwrap();
    let id = i64::from(saved.id);

    let err = repo
        .update(id, |user| {
            user.email = Set(Some("broken".to_string()));
        })
        .await
        .unwrap_err();
    assert!(err.constraint().unwrap().on("email").is_some());
    assert_eq!(repo.get(id).await.unwrap().email, None);

    let updated = repo
        .update(id, |user| {
            user.email = Set(Some("wang@example.com".to_string()));
        })
        .await
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("wang@example.com"));
    assert!(updated.updated_at >= saved.updated_at);
}

#[tokio::test]
async fn test_update_cannot_take_another_rows_unique_key() {
    let storage = common::storage().await;
    let repo = storage.repo::<roles::Entity>().unwrap();
    repo.insert(common::role("admin")).await.unwrap();
    let other = repo.insert(common::role("staff")).await.unwrap();

    let err = repo
        .update(i64::from(other.id), |role| {
            role.code = Set("admin".to_string());
        })
        .await
        .unwrap_err();
    assert!(err.constraint().unwrap().on("code").is_some());

    // 写回自己的值不算冲突
    let same = repo
        .update(i64::from(other.id), |role| {
            role.code = Set("staff".to_string());
        })
        .await
        .unwrap();
    assert_eq!(same.code, "staff");
}

#[tokio::test]
async fn test_update_missing_row() {
    let storage = common::storage().await;
    let err = storage
        .repo::<roles::Entity>()
        .unwrap()
        .update(42, |role| {
            role.name = Set("x".to_string());
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E008");
}
