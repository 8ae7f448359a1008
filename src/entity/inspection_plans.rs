//! 督导检查计划

use sea_orm::entity::prelude::*;

use crate::models::workflow::entities::InspectionPlanStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inspection_type_id: i32,
    pub kindergarten_id: i32,
    pub plan_name: String,
    pub plan_date: Date,
    pub responsible_user_id: Option<i32>,
    pub status: String,
    pub progress: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub result: Option<String>,
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub creator_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn plan_status(&self) -> InspectionPlanStatus {
        self.status.parse().unwrap_or(InspectionPlanStatus::Pending)
    }
}
