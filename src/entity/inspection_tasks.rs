//! 督导检查任务，`parent_task_id` 自引用构成子任务

use sea_orm::entity::prelude::*;

use crate::models::workflow::entities::{
    InspectionTaskPriority, InspectionTaskStatus, InspectionTaskType,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inspection_plan_id: i32,
    pub parent_task_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub task_type: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: Option<i32>,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub progress: i32,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn kind(&self) -> InspectionTaskType {
        self.task_type.parse().unwrap_or(InspectionTaskType::Other)
    }

    pub fn task_status(&self) -> InspectionTaskStatus {
        self.status.parse().unwrap_or(InspectionTaskStatus::Pending)
    }

    pub fn task_priority(&self) -> InspectionTaskPriority {
        self.priority
            .parse()
            .unwrap_or(InspectionTaskPriority::Medium)
    }
}
