//! 海报元素，内容、样式与位置以 JSON 文本存储

use sea_orm::entity::prelude::*;

use crate::models::content::entities::PosterElementType;
use crate::models::content::payloads::{ElementContent, ElementPosition, ElementStyle};
use crate::models::json::{self, Decoded};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "poster_elements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: i32,
    pub r#type: String,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub style: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub position: Option<String>,
    pub z_index: i32,
    pub locked: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn element_type(&self) -> Option<PosterElementType> {
        self.r#type.parse().ok()
    }

    pub fn content_doc(&self) -> Decoded<ElementContent> {
        json::decode(self.content.as_deref())
    }

    pub fn style_doc(&self) -> Decoded<ElementStyle> {
        json::decode(self.style.as_deref())
    }

    pub fn position_doc(&self) -> Decoded<ElementPosition> {
        json::decode(self.position.as_deref())
    }
}
