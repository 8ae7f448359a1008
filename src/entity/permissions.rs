//! 权限实体，`parent_id` 自引用构成菜单树

use sea_orm::entity::prelude::*;

use crate::models::identity::entities::PermissionType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub chinese_name: Option<String>,
    #[sea_orm(unique)]
    pub code: String,
    pub r#type: String,
    pub parent_id: Option<i32>,
    pub path: Option<String>,
    pub component: Option<String>,
    pub icon: Option<String>,
    pub sort: i32,
    pub status: i32,
    pub is_hidden: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn permission_type(&self) -> PermissionType {
        self.r#type.parse().unwrap_or(PermissionType::Menu)
    }
}
