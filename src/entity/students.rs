//! 学生实体

use sea_orm::entity::prelude::*;

use crate::models::people::entities::{Gender, StudentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub student_no: String,
    pub kindergarten_id: i32,
    pub class_id: Option<i32>,
    pub gender: i32,
    pub birth_date: Option<Date>,
    pub id_card_no: Option<String>,
    pub status: i32,
    pub enrollment_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub allergy_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_needs: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn student_gender(&self) -> Option<Gender> {
        Gender::try_from(self.gender).ok()
    }

    pub fn student_status(&self) -> StudentStatus {
        StudentStatus::try_from(self.status).unwrap_or(StudentStatus::Enrolled)
    }
}
