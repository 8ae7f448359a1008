//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod associations;
mod dispatch;
mod integrity;
mod repository;
mod unit_of_work;
mod values;

pub use associations::Associations;
pub use integrity::DanglingReport;
pub use repository::Repository;
pub use unit_of_work::UnitOfWork;

use crate::config::{DatabaseConfig, IntegrityMode, RegistryConfig};
use crate::entity::CatalogEntity;
use crate::errors::{ModelError, Result};
use crate::registry::Registry;
use crate::storage::{Scope, Storage};
use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
    registry: Arc<Registry>,
    integrity: IntegrityMode,
}

impl SeaOrmStorage {
    /// 连接数据库、建表并核对实体与表描述
    pub async fn connect(database: &DatabaseConfig, registry: &RegistryConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, database).await?
        } else {
            Self::connect_generic(&db_url, database).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ModelError::migration(format!("数据库迁移失败: {e}")))?;

        let storage = Self::from_connection(
            db,
            Arc::new(Registry::kindergarten()?),
            registry.referential_integrity,
        )?;

        info!(
            "SeaORM 存储初始化完成，数据库: {}，引用完整性: {}",
            db_url, storage.integrity
        );

        Ok(storage)
    }

    /// 使用已建立的连接与注册表
    pub fn from_connection(
        db: DatabaseConnection,
        registry: Arc<Registry>,
        integrity: IntegrityMode,
    ) -> Result<Self> {
        for schema in registry.tables() {
            dispatch::verify_binding(schema)?;
        }
        debug!("{} 个实体与表描述一致", registry.tables().len());
        Ok(Self {
            db,
            registry,
            integrity,
        })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ModelError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        let mut pool = SqlitePoolOptions::new()
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));
        // 内存库随连接关闭而消失，只能保持单个常驻连接
        pool = if in_memory {
            pool.max_connections(1).idle_timeout(None).max_lifetime(None)
        } else {
            pool.max_connections(config.pool_size)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| ModelError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| ModelError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ModelError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 某个实体的仓储
    pub fn repo<E: CatalogEntity>(&self) -> Result<Repository<'_, DatabaseConnection, E>> {
        Repository::new(&self.db, &self.registry, self.integrity)
    }

    pub fn associations(&self) -> Associations<'_, DatabaseConnection> {
        Associations::new(&self.db, &self.registry, self.integrity)
    }

    /// 开启事务
    pub async fn begin(&self) -> Result<UnitOfWork> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ModelError::database_operation(format!("开启事务失败: {e}")))?;
        Ok(UnitOfWork::new(txn, self.registry.clone(), self.integrity))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn shared_registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }
}

#[async_trait]
impl Storage for SeaOrmStorage {
    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn integrity(&self) -> IntegrityMode {
        self.integrity
    }

    async fn count_rows(&self, table: &str, scope: Scope) -> Result<u64> {
        let table = self.registry.require_table(table)?.table;
        dispatch::count_rows(&self.db, &self.registry, table, scope).await
    }

    async fn audit_references(&self) -> Result<Vec<DanglingReport>> {
        integrity::audit(&self.db, &self.registry).await
    }
}
