//! 外键引用检查
//!
//! 数据库层不建外键约束。严格模式下写入前在这里检查引用，
//! 审计则扫描全部 BelongsTo 关联上已经悬空的外键。

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{info, warn};

use migration::catalog::TableSchema;

use super::dispatch;
use crate::errors::{FieldViolation, Result, ViolationKind};
use crate::registry::{Registry, RelationDef, RelationKind};
use crate::storage::Scope;

/// 一条关联上的悬空外键
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReport {
    pub source_table: String,
    pub alias: String,
    /// 源表上的外键物理列
    pub column: String,
    pub target_table: String,
    /// 声明时是否要求约束；为 false 的关联只作说明
    pub constraints: bool,
    /// 指向不存在或已软删除行的键值
    pub missing: Vec<i64>,
}

/// 检查待写入的外键值，返回指向不存在行的违例
pub(crate) async fn dangling_references<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    schema: &TableSchema,
    candidates: Vec<(&RelationDef, i64)>,
) -> Result<Vec<FieldViolation>> {
    let mut violations = Vec::new();
    for (relation, key) in candidates {
        let exists = dispatch::row_exists(
            conn,
            registry,
            &relation.target_table,
            &relation.target_key,
            key,
            Scope::Default,
        )
        .await?;
        if exists {
            continue;
        }
        let column = schema
            .column(&relation.foreign_key)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| relation.foreign_key.clone());
        let target = registry
            .table(&relation.target_table)
            .map(|t| t.entity.to_string())
            .unwrap_or_else(|| relation.target_table.clone());
        violations.push(FieldViolation::new(
            column,
            ViolationKind::DanglingReference { target, value: key },
        ));
    }
    Ok(violations)
}

/// 扫描全部 BelongsTo 关联
pub(crate) async fn audit<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
) -> Result<Vec<DanglingReport>> {
    let mut reports = Vec::new();
    let belongs_to = registry
        .relations()
        .iter()
        .filter(|r| r.kind == RelationKind::BelongsTo);

    for relation in belongs_to {
        let keys = dispatch::key_values(
            conn,
            registry,
            &relation.source_table,
            &relation.foreign_key,
            &[],
            Scope::Default,
        )
        .await?;
        if keys.is_empty() {
            continue;
        }
        let existing = dispatch::existing_keys(
            conn,
            registry,
            &relation.target_table,
            &relation.target_key,
            &keys,
            Scope::Default,
        )
        .await?;
        let missing: Vec<i64> = keys.into_iter().filter(|k| !existing.contains(k)).collect();
        if missing.is_empty() {
            continue;
        }

        warn!(
            "{}.{} ({} -> {}) 有 {} 个悬空外键: {:?}",
            relation.source_table,
            relation.alias,
            relation.foreign_key,
            relation.target_table,
            missing.len(),
            missing
        );
        reports.push(DanglingReport {
            source_table: relation.source_table.clone(),
            alias: relation.alias.clone(),
            column: relation.foreign_key.clone(),
            target_table: relation.target_table.clone(),
            constraints: relation.constraints,
            missing,
        });
    }

    info!("引用审计完成，{} 条关联存在悬空外键", reports.len());
    Ok(reports)
}
