//! 招生计划负责人

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::PlanAssigneeRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_plan_assignees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plan_id: i32,
    pub assignee_id: i32,
    pub role: String,
    pub target_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn assignee_role(&self) -> PlanAssigneeRole {
        self.role.parse().unwrap_or(PlanAssigneeRole::Staff)
    }
}
