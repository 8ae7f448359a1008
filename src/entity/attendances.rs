//! 幼儿每日考勤

use sea_orm::entity::prelude::*;

use crate::models::attendance::entities::AttendanceStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub class_id: i32,
    pub kindergarten_id: i32,
    pub attendance_date: Date,
    pub status: String,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    /// 摄氏度
    pub temperature: Option<f64>,
    pub health_status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub leave_reason: Option<String>,
    pub recorded_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn attendance_status(&self) -> AttendanceStatus {
        self.status.parse().unwrap_or(AttendanceStatus::Present)
    }
}
