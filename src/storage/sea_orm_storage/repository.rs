//! 按表描述驱动的通用仓储
//!
//! 写入前依次补默认值与时间戳、校验列约束、检查唯一键，严格模式下再检查外键；
//! 任何一项失败都不会落库。读取默认排除软删除的行。

use std::collections::HashSet;
use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, IntoActiveModel,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, SqlErr, Value,
};
use tracing::{debug, warn};

use migration::catalog::{TableSchema, Timestamp};

use super::{integrity, values};
use crate::config::IntegrityMode;
use crate::entity::CatalogEntity;
use crate::errors::{ConstraintViolation, FieldViolation, ModelError, Result, ViolationKind};
use crate::registry::validation::{self, FieldValue, WriteKind};
use crate::registry::{Registry, RelationDef, RelationKind};
use crate::storage::Scope;

/// IN 查询每批的键数量
const KEY_CHUNK: usize = 500;

/// 单个实体的仓储
pub struct Repository<'a, C, E> {
    conn: &'a C,
    registry: &'a Registry,
    integrity: IntegrityMode,
    schema: &'a TableSchema,
    entity: PhantomData<E>,
}

impl<'a, C, E: CatalogEntity> Repository<'a, C, E> {
    pub(crate) fn new(conn: &'a C, registry: &'a Registry, integrity: IntegrityMode) -> Result<Self> {
        let schema = registry.require_table(E::TABLE)?;
        Ok(Self {
            conn,
            registry,
            integrity,
            schema,
            entity: PhantomData,
        })
    }

    pub fn schema(&self) -> &'a TableSchema {
        self.schema
    }

    /// 把整数键写入 ActiveModel 的指定列
    pub fn set_key(&self, active: &mut E::Active, column: &str, key: i64) -> Result<()> {
        let (schema_column, entity_column) = values::resolve_column::<E>(self.schema, column)?;
        active.set(entity_column, values::key_value(schema_column, key)?);
        Ok(())
    }

    /// 模型上某个整数列的值
    pub fn key_of(&self, model: &E::Model, column: &str) -> Result<Option<i64>> {
        let (_, entity_column) = values::resolve_column::<E>(self.schema, column)?;
        Ok(values::key_of(&model.get(entity_column)))
    }

    fn id_column(&self) -> Result<E::Column> {
        let pk = self
            .schema
            .primary_key()
            .ok_or_else(|| ModelError::schema(format!("{} 没有主键", self.schema.entity)))?;
        Ok(values::resolve_column::<E>(self.schema, pk.name)?.1)
    }

    fn id_value(&self, id: i64) -> Result<Value> {
        let pk = self
            .schema
            .primary_key()
            .ok_or_else(|| ModelError::schema(format!("{} 没有主键", self.schema.entity)))?;
        values::key_value(pk, id)
    }

    fn timestamp_column(&self, kind: Timestamp) -> Option<E::Column> {
        self.schema
            .timestamp_column(kind)
            .and_then(values::entity_column::<E>)
    }

    fn deleted_column(&self) -> Option<E::Column> {
        self.timestamp_column(Timestamp::DeletedAt)
    }

    /// 按可见范围过滤，`None` 表示结果必为空
    fn scoped(&self, scope: Scope) -> Option<Select<E>> {
        let select = E::find();
        match (self.deleted_column(), scope) {
            (None, Scope::OnlyDeleted) => None,
            (None, _) | (Some(_), Scope::WithDeleted) => Some(select),
            (Some(column), Scope::Default) => Some(select.filter(column.is_null())),
            (Some(column), Scope::OnlyDeleted) => Some(select.filter(column.is_not_null())),
        }
    }

    /// 排序列优先，其次主键
    fn ordered(&self, mut select: Select<E>) -> Result<Select<E>> {
        if let Some(sort) = self.schema.sort_column() {
            select = select.order_by_asc(values::resolve_column::<E>(self.schema, sort)?.1);
        }
        Ok(select.order_by_asc(self.id_column()?))
    }

    fn filter_keys(&self, mut select: Select<E>, keys: &[(&str, i64)]) -> Result<Select<E>> {
        for (column, key) in keys {
            let (schema_column, entity_column) = values::resolve_column::<E>(self.schema, column)?;
            select = select.filter(entity_column.eq(values::key_value(schema_column, *key)?));
        }
        Ok(select)
    }

    fn apply_defaults(&self, active: &mut E::Active) {
        for column in &self.schema.columns {
            let Some(entity_column) = values::entity_column::<E>(column.column_name()) else {
                continue;
            };
            if values::present(active, entity_column).is_some() {
                continue;
            }
            if let Some(value) = values::default_value(column) {
                active.set(entity_column, value);
            }
        }
    }

    fn validate(&self, active: &E::Active, kind: WriteKind) -> Vec<FieldViolation> {
        validation::validate_row(self.schema, kind, |column| {
            let entity_column = values::entity_column::<E>(column.column_name())?;
            let value = match kind {
                WriteKind::Insert => values::present(active, entity_column),
                WriteKind::Update => values::changed(active, entity_column),
            }?;
            Some(FieldValue::from(&value))
        })
    }

    /// 严格模式下需要检查的外键值
    fn reference_candidates(
        &self,
        active: &E::Active,
        kind: WriteKind,
    ) -> Vec<(&'a RelationDef, i64)> {
        let registry: &'a Registry = self.registry;
        registry
            .relations_from(self.schema.table)
            .filter(|r| r.kind == RelationKind::BelongsTo && r.constraints)
            .filter_map(|relation| {
                let column = values::entity_column::<E>(&relation.foreign_key)?;
                let value = match kind {
                    WriteKind::Insert => values::present(active, column),
                    WriteKind::Update => values::changed(active, column),
                }?;
                Some((relation, values::key_of(&value)?))
            })
            .collect()
    }

    fn reject(&self, violations: Vec<FieldViolation>) -> Result<()> {
        if violations.is_empty() {
            return Ok(());
        }
        let violation = ConstraintViolation::new(self.schema.table, violations);
        debug!("{}", violation.message());
        Err(violation.into())
    }

    /// 数据库层的唯一键冲突转为结构化违例
    fn map_db_err(&self, err: DbErr, action: &str) -> ModelError {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            warn!("{} {action}触发数据库唯一约束: {message}", self.schema.table);
            if let Some(violation) = unique_violation(self.schema, &message) {
                return ConstraintViolation::new(self.schema.table, vec![violation]).into();
            }
        }
        ModelError::database_operation(format!("{} {action}失败: {err}", self.schema.table))
    }

    fn not_found(&self, id: i64) -> ModelError {
        ModelError::not_found(format!("{} 中不存在 id = {id} 的记录", self.schema.entity))
    }
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: CatalogEntity,
    E::Model: IntoActiveModel<E::Active> + Sync,
{
    /// 插入一行
    pub async fn insert(&self, mut active: E::Active) -> Result<E::Model> {
        self.apply_defaults(&mut active);
        let now = values::now();
        for kind in [Timestamp::CreatedAt, Timestamp::UpdatedAt] {
            if let Some(column) = self.timestamp_column(kind) {
                if values::present(&active, column).is_none() {
                    active.set(column, now.clone());
                }
            }
        }

        let mut violations = self.validate(&active, WriteKind::Insert);
        violations.extend(self.unique_violations(&active, None).await?);
        if self.integrity == IntegrityMode::Strict {
            let candidates = self.reference_candidates(&active, WriteKind::Insert);
            violations.extend(
                integrity::dangling_references(self.conn, self.registry, self.schema, candidates)
                    .await?,
            );
        }
        self.reject(violations)?;

        let model = active
            .insert(self.conn)
            .await
            .map_err(|e| self.map_db_err(e, "插入"))?;
        debug!("{} 插入一行", self.schema.table);
        Ok(model)
    }

    /// 在闭包中修改一行，只写回改动的列
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<E::Model>
    where
        F: FnOnce(&mut E::Active) + Send,
    {
        let model = self
            .find(id, Scope::Default)
            .await?
            .ok_or_else(|| self.not_found(id))?;
        let mut active = model.clone().into_active_model();
        apply(&mut active);
        if !active.is_changed() {
            return Ok(model);
        }
        if let Some(column) = self.timestamp_column(Timestamp::UpdatedAt) {
            active.set(column, values::now());
        }

        let mut violations = self.validate(&active, WriteKind::Update);
        violations.extend(self.unique_violations(&active, Some(id)).await?);
        if self.integrity == IntegrityMode::Strict {
            let candidates = self.reference_candidates(&active, WriteKind::Update);
            violations.extend(
                integrity::dangling_references(self.conn, self.registry, self.schema, candidates)
                    .await?,
            );
        }
        self.reject(violations)?;

        active
            .update(self.conn)
            .await
            .map_err(|e| self.map_db_err(e, "更新"))
    }

    /// 检查唯一约束，软删除的行同样占用唯一键
    async fn unique_violations(
        &self,
        active: &E::Active,
        current: Option<i64>,
    ) -> Result<Vec<FieldViolation>> {
        let mut violations = Vec::new();
        for constraint in self.schema.unique_constraints() {
            let touched = constraint.iter().any(|column| {
                values::entity_column::<E>(column.column_name())
                    .and_then(|c| values::changed(active, c))
                    .is_some()
            });
            if current.is_some() && !touched {
                continue;
            }

            let mut select = E::find();
            let mut complete = true;
            for column in &constraint {
                let value = values::entity_column::<E>(column.column_name())
                    .and_then(|c| values::present(active, c).map(|v| (c, v)));
                match value {
                    Some((c, v)) if !FieldValue::from(&v).is_null() => {
                        select = select.filter(c.eq(v));
                    }
                    _ => {
                        complete = false;
                        break;
                    }
                }
            }
            if !complete {
                continue;
            }
            if let Some(id) = current {
                select = select.filter(self.id_column()?.ne(self.id_value(id)?));
            }
            if select.one(self.conn).await?.is_some() {
                let columns: Vec<String> = constraint.iter().map(|c| c.name.to_string()).collect();
                violations.push(FieldViolation::new(
                    constraint[0].name,
                    ViolationKind::Unique { columns },
                ));
            }
        }
        Ok(violations)
    }

    /// 按主键查找
    pub async fn find(&self, id: i64, scope: Scope) -> Result<Option<E::Model>> {
        let Some(select) = self.scoped(scope) else {
            return Ok(None);
        };
        let model = select
            .filter(self.id_column()?.eq(self.id_value(id)?))
            .one(self.conn)
            .await?;
        Ok(model)
    }

    /// 按主键查找，不存在时报错
    pub async fn get(&self, id: i64) -> Result<E::Model> {
        self.find(id, Scope::Default)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// 按单列取值查找
    pub async fn find_where<V>(&self, column: &str, value: V, scope: Scope) -> Result<Vec<E::Model>>
    where
        V: Into<Value> + Send,
    {
        let value = value.into();
        let Some(select) = self.scoped(scope) else {
            return Ok(Vec::new());
        };
        let (_, entity_column) = values::resolve_column::<E>(self.schema, column)?;
        let select = self.ordered(select.filter(entity_column.eq(value)))?;
        Ok(select.all(self.conn).await?)
    }

    /// 按若干整数键列查找
    pub async fn find_by_keys(&self, keys: &[(&str, i64)], scope: Scope) -> Result<Vec<E::Model>> {
        let Some(select) = self.scoped(scope) else {
            return Ok(Vec::new());
        };
        let select = self.ordered(self.filter_keys(select, keys)?)?;
        Ok(select.all(self.conn).await?)
    }

    /// 键列取值在给定集合内的行
    pub async fn find_in(&self, column: &str, keys: &[i64], scope: Scope) -> Result<Vec<E::Model>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let Some(select) = self.scoped(scope) else {
            return Ok(Vec::new());
        };
        let (schema_column, entity_column) = values::resolve_column::<E>(self.schema, column)?;
        let keys = keys
            .iter()
            .map(|k| values::key_value(schema_column, *k))
            .collect::<Result<Vec<Value>>>()?;
        let select = self.ordered(select.filter(entity_column.is_in(keys)))?;
        Ok(select.all(self.conn).await?)
    }

    pub async fn list(&self, scope: Scope) -> Result<Vec<E::Model>> {
        let Some(select) = self.scoped(scope) else {
            return Ok(Vec::new());
        };
        Ok(self.ordered(select)?.all(self.conn).await?)
    }

    pub async fn count(&self, scope: Scope) -> Result<u64> {
        let Some(select) = self.scoped(scope) else {
            return Ok(0);
        };
        Ok(select.count(self.conn).await?)
    }

    pub async fn exists_by_keys(&self, keys: &[(&str, i64)], scope: Scope) -> Result<bool> {
        let Some(select) = self.scoped(scope) else {
            return Ok(false);
        };
        Ok(self.filter_keys(select, keys)?.one(self.conn).await?.is_some())
    }

    /// 满足条件的行上某个键列的取值，去重并保持顺序
    pub async fn key_values(
        &self,
        column: &str,
        filters: &[(&str, i64)],
        scope: Scope,
    ) -> Result<Vec<i64>> {
        let rows = self.find_by_keys(filters, scope).await?;
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for row in &rows {
            if let Some(key) = self.key_of(row, column)? {
                if seen.insert(key) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    /// 给定键中实际存在的部分
    pub async fn existing_keys(
        &self,
        column: &str,
        keys: &[i64],
        scope: Scope,
    ) -> Result<HashSet<i64>> {
        let mut found = HashSet::new();
        for chunk in keys.chunks(KEY_CHUNK) {
            for row in self.find_in(column, chunk, scope).await? {
                if let Some(key) = self.key_of(&row, column)? {
                    found.insert(key);
                }
            }
        }
        Ok(found)
    }

    /// 按表的删除策略删除：软删除表写入删除时间，其余物理删除
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let Some(column) = self.deleted_column() else {
            return self.force_delete(id).await;
        };
        let Some(model) = self.find(id, Scope::Default).await? else {
            return Ok(false);
        };
        let mut active = model.into_active_model();
        active.set(column, values::now());
        active
            .update(self.conn)
            .await
            .map_err(|e| self.map_db_err(e, "软删除"))?;
        debug!("{} 软删除 id = {id}", self.schema.table);
        Ok(true)
    }

    /// 按删除策略删除所有匹配的行
    pub async fn delete_by_keys(&self, keys: &[(&str, i64)]) -> Result<u64> {
        let pk = self.id_column_name()?;
        let ids = self.key_values(pk, keys, Scope::Default).await?;
        let mut removed = 0;
        for id in ids {
            if self.delete(id).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// 物理删除，忽略软删除策略
    pub async fn force_delete(&self, id: i64) -> Result<bool> {
        let result = E::delete_many()
            .filter(self.id_column()?.eq(self.id_value(id)?))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// 清除删除时间；非软删除表或行未删除时返回 false
    pub async fn restore(&self, id: i64) -> Result<bool> {
        let Some(column) = self.deleted_column() else {
            return Ok(false);
        };
        let Some(model) = self.find(id, Scope::OnlyDeleted).await? else {
            return Ok(false);
        };
        let mut active = model.into_active_model();
        active.set(column, values::null_timestamp());
        active
            .update(self.conn)
            .await
            .map_err(|e| self.map_db_err(e, "恢复"))?;
        debug!("{} 恢复 id = {id}", self.schema.table);
        Ok(true)
    }

    /// 只给出键列的插入，其余列取默认值
    pub async fn insert_keys(&self, keys: &[(&str, i64)]) -> Result<E::Model> {
        let mut active = <E::Active as ActiveModelBehavior>::new();
        for (column, key) in keys {
            self.set_key(&mut active, column, *key)?;
        }
        self.insert(active).await
    }

    /// 已软删除的同键行优先恢复，否则插入新行
    pub async fn relink(&self, keys: &[(&str, i64)]) -> Result<E::Model> {
        if self.deleted_column().is_some() {
            let deleted = self.find_by_keys(keys, Scope::OnlyDeleted).await?;
            if let Some(row) = deleted.first() {
                let pk = self.id_column_name()?;
                if let Some(id) = self.key_of(row, pk)? {
                    self.restore(id).await?;
                    return self.get(id).await;
                }
            }
        }
        self.insert_keys(keys).await
    }

    fn id_column_name(&self) -> Result<&'a str> {
        self.schema
            .primary_key()
            .map(|c| c.name)
            .ok_or_else(|| ModelError::schema(format!("{} 没有主键", self.schema.entity)))
    }
}

/// 按数据库报错里出现的列名认出唯一约束，认不出时返回 None
fn unique_violation(schema: &TableSchema, message: &str) -> Option<FieldViolation> {
    let constraints = schema.unique_constraints();
    let matched = constraints
        .iter()
        .find(|columns| columns.iter().all(|c| message.contains(c.column_name())))?;
    let columns: Vec<String> = matched.iter().map(|c| c.name.to_string()).collect();
    let column = columns.first()?.clone();
    Some(FieldViolation::new(column, ViolationKind::Unique { columns }))
}
