//! 操作日志

use sea_orm::entity::prelude::*;

use crate::models::audit::entities::OperationResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operation_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub module: String,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub request_method: Option<String>,
    pub request_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub request_params: Option<String>,
    pub request_ip: Option<String>,
    pub user_agent: Option<String>,
    pub operation_result: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub result_message: Option<String>,
    /// 毫秒
    pub execution_time: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn result(&self) -> OperationResult {
        self.operation_result
            .parse()
            .unwrap_or(OperationResult::Success)
    }
}
