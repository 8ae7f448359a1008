//! 入园申请实体
//!
//! 该表沿用 camelCase 物理列名。

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::{ApplicationStatus, ApplicationType, Priority};
use crate::models::enrollment::payloads::EmergencyContacts;
use crate::models::json::{self, Decoded};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "applicationNumber", unique)]
    pub application_number: String,
    #[sea_orm(column_name = "studentId")]
    pub student_id: i32,
    #[sea_orm(column_name = "parentId")]
    pub parent_id: i32,
    #[sea_orm(column_name = "kindergartenId")]
    pub kindergarten_id: i32,
    #[sea_orm(column_name = "enrollmentPlanId")]
    pub enrollment_plan_id: Option<i32>,
    #[sea_orm(column_name = "applicationType")]
    pub application_type: String,
    pub status: String,
    pub priority: String,
    #[sea_orm(column_name = "preferredStartDate")]
    pub preferred_start_date: Date,
    #[sea_orm(column_name = "preferredClass")]
    pub preferred_class: Option<String>,
    #[sea_orm(column_name = "specialNeeds", column_type = "Text", nullable)]
    pub special_needs: Option<String>,
    #[sea_orm(column_name = "medicalInfo")]
    pub medical_info: Option<Json>,
    #[sea_orm(column_name = "emergencyContacts")]
    pub emergency_contacts: Json,
    pub documents: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_name = "reviewNotes", column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    #[sea_orm(column_name = "submittedAt")]
    pub submitted_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "reviewedAt")]
    pub reviewed_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "reviewedBy")]
    pub reviewed_by: Option<i32>,
    #[sea_orm(column_name = "approvedAt")]
    pub approved_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "enrolledAt")]
    pub enrolled_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "rejectionReason", column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,
    #[sea_orm(column_name = "waitlistPosition")]
    pub waitlist_position: Option<i32>,
    pub score: Option<f64>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
    #[sea_orm(column_name = "deletedAt")]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn application_status(&self) -> ApplicationStatus {
        self.status.parse().unwrap_or(ApplicationStatus::Draft)
    }

    pub fn kind(&self) -> ApplicationType {
        self.application_type
            .parse()
            .unwrap_or(ApplicationType::NewEnrollment)
    }

    pub fn application_priority(&self) -> Priority {
        self.priority.parse().unwrap_or(Priority::Medium)
    }

    pub fn contacts(&self) -> Decoded<EmergencyContacts> {
        json::decode_value(Some(self.emergency_contacts.clone()))
    }
}
