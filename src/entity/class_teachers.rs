//! 班级教师任职记录

use sea_orm::entity::prelude::*;

use crate::models::people::entities::ClassTeacherRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub teacher_id: i32,
    pub role: String,
    pub is_primary: bool,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn teacher_role(&self) -> ClassTeacherRole {
        self.role.parse().unwrap_or(ClassTeacherRole::AssistantTeacher)
    }

    /// 任职中：启用且未结束
    pub fn is_active(&self) -> bool {
        self.status == 1 && self.end_date.is_none()
    }
}
