//! 班级实体

use sea_orm::entity::prelude::*;

use crate::models::people::entities::ClassType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub kindergarten_id: i32,
    pub r#type: i32,
    pub grade: Option<String>,
    pub head_teacher_id: Option<i32>,
    pub capacity: i32,
    pub current_student_count: i32,
    pub status: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn class_type(&self) -> ClassType {
        ClassType::try_from(self.r#type).unwrap_or(ClassType::Junior)
    }

    /// 剩余学位
    pub fn remaining_seats(&self) -> i32 {
        (self.capacity - self.current_student_count).max(0)
    }
}
