//! 招生咨询

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_consultations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kindergarten_id: i32,
    pub consultant_id: i32,
    pub parent_name: String,
    pub child_name: String,
    /// 月龄
    pub child_age: Option<i32>,
    pub contact_phone: String,
    pub source: i32,
    #[sea_orm(column_type = "Text")]
    pub consult_content: String,
    pub followup_status: i32,
    pub intention_level: i32,
    pub next_followup_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remark: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
