//! 事务内的一组写入
//!
//! 未提交就被丢弃的 [`UnitOfWork`] 随底层事务一起回滚。

use std::sync::Arc;

use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::{Associations, Repository};
use crate::config::IntegrityMode;
use crate::entity::CatalogEntity;
use crate::errors::{ModelError, Result};
use crate::registry::Registry;

pub struct UnitOfWork {
    txn: DatabaseTransaction,
    registry: Arc<Registry>,
    integrity: IntegrityMode,
}

impl UnitOfWork {
    pub(crate) fn new(
        txn: DatabaseTransaction,
        registry: Arc<Registry>,
        integrity: IntegrityMode,
    ) -> Self {
        Self {
            txn,
            registry,
            integrity,
        }
    }

    /// 事务内的仓储
    pub fn repo<E: CatalogEntity>(&self) -> Result<Repository<'_, DatabaseTransaction, E>> {
        Repository::new(&self.txn, &self.registry, self.integrity)
    }

    pub fn associations(&self) -> Associations<'_, DatabaseTransaction> {
        Associations::new(&self.txn, &self.registry, self.integrity)
    }

    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<()> {
        self.txn
            .commit()
            .await
            .map_err(|e| ModelError::database_operation(format!("事务提交失败: {e}")))?;
        debug!("事务已提交");
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.txn
            .rollback()
            .await
            .map_err(|e| ModelError::database_operation(format!("事务回滚失败: {e}")))?;
        debug!("事务已回滚");
        Ok(())
    }
}
