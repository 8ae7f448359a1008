//! 用户的 AI 偏好

use sea_orm::entity::prelude::*;

use crate::models::content::entities::AiRelationStatus;
use crate::models::content::payloads::AiSettings;
use crate::models::json::{self, Decoded};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ai_user_relations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_settings: Option<String>,
    pub last_interaction: Option<DateTimeUtc>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn relation_status(&self) -> AiRelationStatus {
        self.status.parse().unwrap_or(AiRelationStatus::Active)
    }

    pub fn settings(&self) -> Decoded<AiSettings> {
        json::decode(self.ai_settings.as_deref())
    }
}
