mod common;

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;

use rust_kindergarten_model::entity::{
    attendance_change_logs, attendances, classes, kindergartens, students,
};
use rust_kindergarten_model::errors::ViolationKind;
use rust_kindergarten_model::models::attendance::entities::{AttendanceStatus, ChangeType};
use rust_kindergarten_model::storage::{Scope, SeaOrmStorage, Storage};

struct Roll {
    kindergarten: kindergartens::Model,
    class: classes::Model,
    student: students::Model,
}

async fn roll(storage: &SeaOrmStorage) -> Roll {
    let kindergarten = storage
        .repo::<kindergartens::Entity>()
        .unwrap()
        .insert(common::kindergarten("maple"))
        .await
        .unwrap();
    let class = storage
        .repo::<classes::Entity>()
        .unwrap()
        .insert(common::class(kindergarten.id, "M1"))
        .await
        .unwrap();
    let student = storage
        .repo::<students::Entity>()
        .unwrap()
        .insert(common::student(kindergarten.id, "S2025101"))
        .await
        .unwrap();
    Roll {
        kindergarten,
        class,
        student,
    }
}

fn attendance(roll: &Roll, day: NaiveDate) -> attendances::ActiveModel {
    attendances::ActiveModel {
        student_id: Set(roll.student.id),
        class_id: Set(roll.class.id),
        kindergarten_id: Set(roll.kindergarten.id),
        attendance_date: Set(day),
        ..Default::default()
    }
}

fn change_log(attendance_id: i32, change_type: &str) -> attendance_change_logs::ActiveModel {
    attendance_change_logs::ActiveModel {
        attendance_id: Set(attendance_id),
        change_type: Set(change_type.to_string()),
        old_status: Set(Some("absent".to_string())),
        new_status: Set(Some("sick_leave".to_string())),
        change_reason: Set(Some("家长电话确认实际为病假".to_string())),
        changed_by: Set(404),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_record_attendance_and_navigate() {
    let storage = common::strict_storage().await;
    let roll = roll(&storage).await;
    let assoc = storage.associations();

    let saved = storage
        .repo::<attendances::Entity>()
        .unwrap()
        .insert(attendance(&roll, common::date(2025, 9, 1)))
        .await
        .unwrap();
    assert_eq!(saved.attendance_status(), AttendanceStatus::Present);
    assert!(saved.recorded_by.is_none());

    let records = assoc
        .children::<students::Entity, attendances::Entity>(&roll.student, "attendances")
        .await
        .unwrap();
    assert_eq!(records, vec![saved.clone()]);
    let student = assoc
        .parent::<attendances::Entity, students::Entity>(&saved, "student")
        .await
        .unwrap();
    assert_eq!(student, Some(roll.student.clone()));
}

#[tokio::test]
async fn test_one_record_per_student_per_day() {
    let storage = common::storage().await;
    let roll = roll(&storage).await;
    let repo = storage.repo::<attendances::Entity>().unwrap();

    repo.insert(attendance(&roll, common::date(2025, 9, 1)))
        .await
        .unwrap();
    let err = repo
        .insert(attendance(&roll, common::date(2025, 9, 1)))
        .await
        .unwrap_err();
    assert_eq!(
        err.constraint().unwrap().on("studentId"),
        Some(&ViolationKind::Unique {
            columns: vec!["studentId".to_string(), "attendanceDate".to_string()]
        })
    );
    repo.insert(attendance(&roll, common::date(2025, 9, 2)))
        .await
        .unwrap();
    assert_eq!(repo.count(Scope::Default).await.unwrap(), 2);
}

#[tokio::test]
async fn test_attendance_requires_student_in_strict_mode() {
    let storage = common::strict_storage().await;
    let roll = roll(&storage).await;
    let mut orphan = attendance(&roll, common::date(2025, 9, 1));
    orphan.student_id = Set(9999);

    let err = storage
        .repo::<attendances::Entity>()
        .unwrap()
        .insert(orphan)
        .await
        .unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("studentId"),
        Some(ViolationKind::DanglingReference { value: 9999, .. })
    ));
}

#[tokio::test]
async fn test_change_log_references_are_advisory() {
    let storage = common::strict_storage().await;
    let repo = storage.repo::<attendance_change_logs::Entity>().unwrap();

    // 指向不存在的考勤与用户也能写入
    let log = repo.insert(change_log(404, "update")).await.unwrap();
    assert_eq!(log.kind(), ChangeType::Update);
    assert_eq!(
        log.transition(),
        (
            Some(AttendanceStatus::Absent),
            Some(AttendanceStatus::SickLeave)
        )
    );

    let err = repo.insert(change_log(404, "rename")).await.unwrap_err();
    assert!(matches!(
        err.constraint().unwrap().on("changeType"),
        Some(ViolationKind::NotInEnum { .. })
    ));
}

#[tokio::test]
async fn test_change_log_outlives_deleted_attendance() {
    let storage = common::storage().await;
    let roll = roll(&storage).await;
    let repo = storage.repo::<attendances::Entity>().unwrap();
    let record = repo
        .insert(attendance(&roll, common::date(2025, 9, 1)))
        .await
        .unwrap();
    let log = storage
        .repo::<attendance_change_logs::Entity>()
        .unwrap()
        .insert(change_log(record.id, "reset"))
        .await
        .unwrap();

    let logs = storage
        .associations()
        .children::<attendances::Entity, attendance_change_logs::Entity>(&record, "changeLogs")
        .await
        .unwrap();
    assert_eq!(logs, vec![log.clone()]);

    repo.delete(i64::from(record.id)).await.unwrap();
    let reports = storage.audit_references().await.unwrap();
    let report = reports
        .iter()
        .find(|r| r.source_table == "attendance_change_logs" && r.alias == "attendance")
        .unwrap();
    assert!(!report.constraints);
    assert_eq!(report.missing, vec![i64::from(record.id)]);
    assert_eq!(
        storage
            .repo::<attendance_change_logs::Entity>()
            .unwrap()
            .count(Scope::Default)
            .await
            .unwrap(),
        1
    );
}
