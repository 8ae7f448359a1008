//! 招生咨询跟进记录

use sea_orm::entity::prelude::*;

use crate::models::enrollment::entities::FollowupMethod;
use crate::models::enrollment::payloads::FollowupDetail;
use crate::models::json::{self, Decoded};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment_consultation_followups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub consultation_id: i32,
    pub followup_method: i32,
    #[sea_orm(column_type = "Text")]
    pub followup_content: String,
    pub followup_result: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub followup_detail: Option<String>,
    pub next_followup_date: Option<DateTimeUtc>,
    pub followup_user_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub remark: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn method(&self) -> FollowupMethod {
        FollowupMethod::try_from(self.followup_method).unwrap_or(FollowupMethod::Other)
    }

    pub fn detail(&self) -> Decoded<FollowupDetail> {
        json::decode(self.followup_detail.as_deref())
    }
}
