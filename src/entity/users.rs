//! 用户实体

use sea_orm::entity::prelude::*;

use crate::models::identity::entities::{UserRole, UserStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub status: String,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn user_role(&self) -> UserRole {
        self.role.parse().unwrap_or(UserRole::Parent)
    }

    pub fn user_status(&self) -> UserStatus {
        self.status.parse().unwrap_or(UserStatus::Active)
    }
}
