//! 考勤变更记录，考勤行被删除后仍保留

use sea_orm::entity::prelude::*;

use crate::models::attendance::entities::{AttendanceStatus, ChangeType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_change_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attendance_id: i32,
    pub change_type: String,
    pub old_status: Option<String>,
    pub new_status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub old_data: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub new_data: Option<String>,
    pub change_reason: Option<String>,
    pub changed_by: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn kind(&self) -> ChangeType {
        self.change_type.parse().unwrap_or(ChangeType::Update)
    }

    /// 变更前后的状态，未记录的一侧为 None
    pub fn transition(&self) -> (Option<AttendanceStatus>, Option<AttendanceStatus>) {
        let parse = |value: &Option<String>| -> Option<AttendanceStatus> {
            value.as_deref().and_then(|v| v.parse().ok())
        };
        (parse(&self.old_status), parse(&self.new_status))
    }
}
