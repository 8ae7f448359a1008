//! 家长学生关系，家长以用户身份关联

use sea_orm::entity::prelude::*;

use crate::models::people::entities::Relationship;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parent_student_relations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub student_id: i32,
    pub relationship: String,
    pub is_primary_contact: i32,
    pub is_legal_guardian: i32,
    pub id_card_no: Option<String>,
    pub work_unit: Option<String>,
    pub occupation: Option<String>,
    pub education: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remark: Option<String>,
    pub creator_id: Option<i32>,
    pub updater_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn parent_relationship(&self) -> Relationship {
        self.relationship.parse().unwrap_or(Relationship::Other)
    }
}
