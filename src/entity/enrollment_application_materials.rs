//! 入园申请材料

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::{MaterialReviewState, MaterialType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_application_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    pub material_type: String,
    pub file_name: String,
    pub file_url: String,
    pub file_size: Option<i32>,
    pub status: i32,
    pub uploaded_by: Option<i32>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remark: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn kind(&self) -> MaterialType {
        self.material_type.parse().unwrap_or(MaterialType::Other)
    }

    pub fn review_state(&self) -> MaterialReviewState {
        MaterialReviewState::try_from(self.status).unwrap_or(MaterialReviewState::Pending)
    }
}
