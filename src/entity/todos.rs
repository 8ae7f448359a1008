//! 待办事项

use sea_orm::entity::prelude::*;

use crate::models::json::{self, Decoded};
use crate::models::workflow::entities::{TaskStatus, TodoPriority};
use crate::models::workflow::payloads::TodoTags;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub priority: i32,
    pub status: String,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub user_id: i32,
    pub assigned_to: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tags: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub notify: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn todo_status(&self) -> TaskStatus {
        self.status.parse().unwrap_or(TaskStatus::Pending)
    }

    pub fn todo_priority(&self) -> TodoPriority {
        TodoPriority::try_from(self.priority).unwrap_or(TodoPriority::Normal)
    }

    pub fn tag_list(&self) -> Decoded<TodoTags> {
        json::decode(self.tags.as_deref())
    }
}
