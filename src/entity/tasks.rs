//! 任务实体，删除为物理删除

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::Priority;
use crate::models::workflow::entities::{TaskStatus, TaskType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub r#type: String,
    pub creator_id: i32,
    pub assignee_id: Option<i32>,
    pub start_date: Option<DateTimeUtc>,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub progress: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn task_status(&self) -> TaskStatus {
        self.status.parse().unwrap_or(TaskStatus::Pending)
    }

    pub fn task_type(&self) -> TaskType {
        self.r#type.parse().unwrap_or(TaskType::Daily)
    }

    pub fn task_priority(&self) -> Priority {
        self.priority.parse().unwrap_or(Priority::Medium)
    }
}
