//! 集成测试共用的内存库与行构造
#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use serde_json::json;

use rust_kindergarten_model::config::{DatabaseConfig, IntegrityMode, RegistryConfig};
use rust_kindergarten_model::entity::{
    classes, enrollment_application_materials, enrollment_applications, enrollment_plans,
    kindergartens, permissions, roles, students, teachers, users,
};
use rust_kindergarten_model::storage::SeaOrmStorage;

/// 宽松模式的内存库
pub async fn storage() -> SeaOrmStorage {
    open(IntegrityMode::Permissive).await
}

/// 严格模式的内存库
pub async fn strict_storage() -> SeaOrmStorage {
    open(IntegrityMode::Strict).await
}

pub async fn open(mode: IntegrityMode) -> SeaOrmStorage {
    let registry = RegistryConfig {
        referential_integrity: mode,
        audit_on_startup: false,
    };
    SeaOrmStorage::connect(&DatabaseConfig::in_memory(), &registry)
        .await
        .expect("failed to open in-memory storage")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn role(code: &str) -> roles::ActiveModel {
    roles::ActiveModel {
        name: Set(format!("{code} 角色")),
        code: Set(code.to_string()),
        ..Default::default()
    }
}

pub fn permission(code: &str, parent_id: Option<i32>, sort: i32) -> permissions::ActiveModel {
    permissions::ActiveModel {
        name: Set(code.to_string()),
        code: Set(code.to_string()),
        parent_id: Set(parent_id),
        sort: Set(sort),
        ..Default::default()
    }
}

pub fn user(username: &str) -> users::ActiveModel {
    users::ActiveModel {
        username: Set(username.to_string()),
        password: Set("$argon2id$placeholder".to_string()),
        ..Default::default()
    }
}

pub fn kindergarten(code: &str) -> kindergartens::ActiveModel {
    kindergartens::ActiveModel {
        name: Set(format!("{code} 幼儿园")),
        code: Set(code.to_string()),
        ..Default::default()
    }
}

pub fn class(kindergarten_id: i32, code: &str) -> classes::ActiveModel {
    classes::ActiveModel {
        name: Set(format!("{code} 班")),
        code: Set(code.to_string()),
        kindergarten_id: Set(kindergarten_id),
        ..Default::default()
    }
}

pub fn teacher(user_id: i32, kindergarten_id: i32, teacher_no: &str) -> teachers::ActiveModel {
    teachers::ActiveModel {
        user_id: Set(user_id),
        kindergarten_id: Set(kindergarten_id),
        teacher_no: Set(teacher_no.to_string()),
        ..Default::default()
    }
}

pub fn student(kindergarten_id: i32, student_no: &str) -> students::ActiveModel {
    students::ActiveModel {
        name: Set(format!("学生 {student_no}")),
        student_no: Set(student_no.to_string()),
        kindergarten_id: Set(kindergarten_id),
        gender: Set(1),
        ..Default::default()
    }
}

pub fn plan(kindergarten_id: i32, title: &str) -> enrollment_plans::ActiveModel {
    enrollment_plans::ActiveModel {
        kindergarten_id: Set(kindergarten_id),
        title: Set(title.to_string()),
        year: Set(2025),
        start_date: Set(date(2025, 3, 1)),
        end_date: Set(date(2025, 6, 30)),
        ..Default::default()
    }
}

pub fn application(
    number: &str,
    student_id: i32,
    parent_id: i32,
    kindergarten_id: i32,
) -> enrollment_applications::ActiveModel {
    enrollment_applications::ActiveModel {
        application_number: Set(number.to_string()),
        student_id: Set(student_id),
        parent_id: Set(parent_id),
        kindergarten_id: Set(kindergarten_id),
        preferred_start_date: Set(date(2025, 9, 1)),
        emergency_contacts: Set(json!([
            { "name": "王芳", "phone": "13800000000", "relationship": "mother" }
        ])),
        ..Default::default()
    }
}

pub fn material(material_type: &str, file_name: &str) -> enrollment_application_materials::ActiveModel {
    enrollment_application_materials::ActiveModel {
        material_type: Set(material_type.to_string()),
        file_name: Set(file_name.to_string()),
        file_url: Set(format!("https://files.example.com/{file_name}")),
        ..Default::default()
    }
}
