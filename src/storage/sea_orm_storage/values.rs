//! 表描述与 SeaORM 值之间的转换

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IdenStatic, Iterable, Value};

use migration::catalog::{ColumnSchema, ColumnType, DefaultValue, TableSchema};

use crate::errors::{ModelError, Result};
use crate::registry::validation::FieldValue;

/// 按物理列名找实体列
pub(crate) fn entity_column<E: EntityTrait>(physical: &str) -> Option<E::Column> {
    E::Column::iter().find(|c| c.as_str() == physical)
}

/// 按逻辑或物理列名解析为表描述列与实体列
pub(crate) fn resolve_column<'s, E: EntityTrait>(
    schema: &'s TableSchema,
    name: &str,
) -> Result<(&'s ColumnSchema, E::Column)> {
    let column = schema
        .column(name)
        .ok_or_else(|| ModelError::schema(format!("{} 上不存在列 '{name}'", schema.entity)))?;
    let entity_column = entity_column::<E>(column.column_name()).ok_or_else(|| {
        ModelError::schema(format!(
            "{} 的实体缺少列 '{}'",
            schema.entity,
            column.column_name()
        ))
    })?;
    Ok((column, entity_column))
}

/// 列默认值，类型与实体字段一致
pub(crate) fn default_value(column: &ColumnSchema) -> Option<Value> {
    let value = match (column.default?, column.ty) {
        (DefaultValue::Int(v), ColumnType::BigInteger) => Value::from(v),
        (DefaultValue::Int(v), ty) if ty.is_integer() => Value::from(i32::try_from(v).ok()?),
        (DefaultValue::Int(v), ColumnType::Decimal(_, _)) => Value::from(v as f64),
        (DefaultValue::Float(v), ColumnType::Decimal(_, _)) => Value::from(v),
        (DefaultValue::Bool(v), ColumnType::Boolean) => Value::from(v),
        (DefaultValue::Str(v), ty) if ty.is_textual() => Value::from(v.to_string()),
        (DefaultValue::Now, ColumnType::DateTime) => now(),
        _ => return None,
    };
    Some(value)
}

/// 键列上的取值
pub(crate) fn key_value(column: &ColumnSchema, key: i64) -> Result<Value> {
    match column.ty {
        ColumnType::BigInteger => Ok(Value::from(key)),
        ty if ty.is_integer() => i32::try_from(key)
            .map(Value::from)
            .map_err(|_| ModelError::validation(format!("键值 {key} 超出 {} 的范围", column.name))),
        _ => Err(ModelError::schema(format!("{} 不是整数键列", column.name))),
    }
}

/// 从列值中取整数键
pub(crate) fn key_of(value: &Value) -> Option<i64> {
    FieldValue::from(value).as_int()
}

pub(crate) fn now() -> Value {
    Value::from(Utc::now())
}

pub(crate) fn null_timestamp() -> Value {
    Value::from(Option::<chrono::DateTime<Utc>>::None)
}

/// ActiveModel 中已给出的值（含未修改的值）
pub(crate) fn present<A: ActiveModelTrait>(
    active: &A,
    column: <A::Entity as EntityTrait>::Column,
) -> Option<Value> {
    match active.get(column) {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

/// ActiveModel 中本次修改的值
pub(crate) fn changed<A: ActiveModelTrait>(
    active: &A,
    column: <A::Entity as EntityTrait>::Column,
) -> Option<Value> {
    match active.get(column) {
        ActiveValue::Set(v) => Some(v),
        _ => None,
    }
}
