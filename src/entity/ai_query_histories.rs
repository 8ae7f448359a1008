//! AI 查询历史

use sea_orm::entity::prelude::*;

use crate::models::audit::entities::AiQueryType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ai_query_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub query_text: String,
    pub query_hash: String,
    pub query_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub response_data: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub response_text: Option<String>,
    pub model_used: Option<String>,
    pub execution_time: Option<i32>,
    pub session_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn kind(&self) -> AiQueryType {
        self.query_type.parse().unwrap_or(AiQueryType::DataQuery)
    }
}
