//! 按物理表名调用仓储
//!
//! 关联解析与引用检查只拿得到表名，这里把表名分派到对应实体的 [`Repository`]。

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, EntityTrait, IdenStatic, Iterable};

use migration::catalog::TableSchema;

use super::Repository;
use crate::config::IntegrityMode;
use crate::entity::for_table;
use crate::errors::{ModelError, Result};
use crate::registry::Registry;
use crate::storage::Scope;

fn unknown_table<T>(table: &str) -> Result<T> {
    Err(ModelError::schema(format!("没有实体对应表 {table}")))
}

/// 某个键列取指定值的行是否存在
pub(crate) async fn row_exists<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    table: &str,
    column: &str,
    key: i64,
    scope: Scope,
) -> Result<bool> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, IntegrityMode::Permissive)?
            .exists_by_keys(&[(column, key)], scope)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

/// 同时满足所有键列取值的未删除行是否存在
pub(crate) async fn row_exists_all<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    table: &str,
    keys: &[(&str, i64)],
) -> Result<bool> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, IntegrityMode::Permissive)?
            .exists_by_keys(keys, Scope::Default)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

pub(crate) async fn key_values<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    table: &str,
    key_column: &str,
    filters: &[(&str, i64)],
    scope: Scope,
) -> Result<Vec<i64>> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, IntegrityMode::Permissive)?
            .key_values(key_column, filters, scope)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

pub(crate) async fn existing_keys<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    table: &str,
    key_column: &str,
    keys: &[i64],
    scope: Scope,
) -> Result<HashSet<i64>> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, IntegrityMode::Permissive)?
            .existing_keys(key_column, keys, scope)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

/// 建立或恢复一条连接表记录
pub(crate) async fn relink<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    integrity: IntegrityMode,
    table: &str,
    keys: &[(&str, i64)],
) -> Result<()> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, integrity)?
            .relink(keys)
            .await
            .map(|_| ())
    })
    .unwrap_or_else(|| unknown_table(table))
}

pub(crate) async fn delete_where<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    integrity: IntegrityMode,
    table: &str,
    keys: &[(&str, i64)],
) -> Result<u64> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, integrity)?
            .delete_by_keys(keys)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

pub(crate) async fn count_rows<C: ConnectionTrait>(
    conn: &C,
    registry: &Registry,
    table: &str,
    scope: Scope,
) -> Result<u64> {
    for_table!(table, |E| {
        Repository::<C, E>::new(conn, registry, IntegrityMode::Permissive)?
            .count(scope)
            .await
    })
    .unwrap_or_else(|| unknown_table(table))
}

/// 实体列与表描述的物理列必须一致
pub(crate) fn verify_binding(schema: &TableSchema) -> Result<()> {
    let entity_columns = for_table!(schema.table, |E| {
        <E as EntityTrait>::Column::iter()
            .map(|c| c.as_str().to_string())
            .collect::<Vec<String>>()
    })
    .ok_or_else(|| ModelError::schema(format!("表 {} 没有对应的实体", schema.table)))?;

    let missing: Vec<&str> = schema
        .columns
        .iter()
        .map(|c| c.column_name())
        .filter(|name| !entity_columns.iter().any(|c| c == name))
        .collect();
    let extra: Vec<&str> = entity_columns
        .iter()
        .map(String::as_str)
        .filter(|name| schema.column(name).is_none())
        .collect();

    if missing.is_empty() && extra.is_empty() {
        return Ok(());
    }
    Err(ModelError::schema(format!(
        "实体 {} 与表描述不一致，缺少列 [{}]，多出列 [{}]",
        schema.entity,
        missing.join(", "),
        extra.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog::catalog;

    #[test]
    fn test_every_entity_matches_its_table() {
        for schema in catalog() {
            verify_binding(schema).unwrap();
        }
    }

    #[test]
    fn test_binding_detects_drift() {
        let mut schema = catalog()
            .iter()
            .find(|t| t.table == "roles")
            .cloned()
            .unwrap();
        schema.columns.retain(|c| c.name != "description");
        let err = verify_binding(&schema).unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("description"));
    }
}
