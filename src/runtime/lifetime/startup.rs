use crate::config::{AppConfig, DatabaseConfig, RegistryConfig};
use crate::errors::Result;
use crate::registry::CatalogSummary;
use crate::storage::{DanglingReport, SeaOrmStorage, Storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub summary: CatalogSummary,
    /// 启动审计发现的悬空外键，未启用审计时为空
    pub dangling: Vec<DanglingReport>,
}

/// 按全局配置准备存储
pub async fn prepare_startup() -> Result<StartupContext> {
    let config = AppConfig::get();
    prepare_startup_with(&config.database, &config.registry).await
}

/// 连接数据库、建表、加载注册表，并按配置执行引用审计
pub async fn prepare_startup_with(
    database: &DatabaseConfig,
    registry: &RegistryConfig,
) -> Result<StartupContext> {
    let storage = SeaOrmStorage::connect(database, registry).await?;
    warn!("Storage backend initialized and migrations completed");

    let summary = storage.registry().summary();
    info!(
        "目录加载完成: {} 张表（{} 张软删除），{} 列，{} 个索引，{} 条关联",
        summary.tables, summary.paranoid_tables, summary.columns, summary.indexes, summary.relations
    );

    let dangling = if registry.audit_on_startup {
        let reports = storage.audit_references().await?;
        if !reports.is_empty() {
            warn!("启动审计发现 {} 条关联存在悬空外键", reports.len());
        }
        reports
    } else {
        debug!("未启用启动审计");
        Vec::new()
    };

    Ok(StartupContext {
        storage: Arc::new(storage),
        summary,
        dangling,
    })
}
