use crate::config::IntegrityMode;
use crate::errors::Result;
use crate::registry::Registry;

pub mod sea_orm_storage;

pub use sea_orm_storage::{
    Associations, DanglingReport, Repository, SeaOrmStorage, UnitOfWork,
};

/// 软删除可见范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// 只含未删除的行
    #[default]
    Default,
    /// 含已软删除的行
    WithDeleted,
    /// 只含已软删除的行，非软删除表恒为空
    OnlyDeleted,
}

/// 按表名操作的存储接口
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 启动时构建的注册表
    fn registry(&self) -> &Registry;
    /// 外键完整性模式
    fn integrity(&self) -> IntegrityMode;
    /// 统计表中的行数
    async fn count_rows(&self, table: &str, scope: Scope) -> Result<u64>;
    /// 扫描所有 BelongsTo 关联上的悬空外键
    async fn audit_references(&self) -> Result<Vec<DanglingReport>>;
}
