//! 招生计划实体

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::{EnrollmentPlanStage, EnrollmentPlanStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kindergarten_id: i32,
    pub title: String,
    pub year: i32,
    pub semester: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub target_count: i32,
    pub actual_count: i32,
    pub status: String,
    pub stage: String,
    /// 百分比
    pub progress: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub creator_id: Option<i32>,
    pub updater_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn plan_status(&self) -> EnrollmentPlanStatus {
        self.status.parse().unwrap_or(EnrollmentPlanStatus::Draft)
    }

    pub fn plan_stage(&self) -> EnrollmentPlanStage {
        self.stage
            .parse()
            .unwrap_or(EnrollmentPlanStage::PreRegistration)
    }
}
