//! 安全配置，物理列名为 camelCase

use sea_orm::entity::prelude::*;

use crate::models::json::{self, Decoded, JsonDocument};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "security_configs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "configKey", unique)]
    pub config_key: String,
    #[sea_orm(column_name = "configValue", column_type = "Text")]
    pub config_value: String,
    pub description: Option<String>,
    pub category: String,
    #[sea_orm(column_name = "isActive")]
    pub is_active: bool,
    #[sea_orm(column_name = "updatedBy")]
    pub updated_by: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 按调用方给定的文档类型解析配置值
    pub fn value<T: JsonDocument>(&self) -> Decoded<T> {
        json::decode(Some(&self.config_value))
    }
}
