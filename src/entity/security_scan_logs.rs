//! 安全扫描记录，物理列名为 camelCase

use sea_orm::entity::prelude::*;

use crate::models::audit::entities::ScanStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "security_scan_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "scanType")]
    pub scan_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub targets: Option<String>,
    pub status: String,
    #[sea_orm(column_name = "startedBy")]
    pub started_by: Option<i32>,
    #[sea_orm(column_name = "startedAt")]
    pub started_at: DateTimeUtc,
    #[sea_orm(column_name = "completedAt")]
    pub completed_at: Option<DateTimeUtc>,
    /// 秒
    pub duration: Option<i32>,
    #[sea_orm(column_name = "threatsFound")]
    pub threats_found: i32,
    #[sea_orm(column_name = "vulnerabilitiesFound")]
    pub vulnerabilities_found: i32,
    #[sea_orm(column_name = "riskScore")]
    pub risk_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub results: Option<String>,
    #[sea_orm(column_name = "errorMessage", column_type = "Text", nullable)]
    pub error_message: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub metadata: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn scan_status(&self) -> ScanStatus {
        self.status.parse().unwrap_or(ScanStatus::Pending)
    }
}
