//! 按注册表中的关联别名导航与维护关系

use sea_orm::{ConnectionTrait, IntoActiveModel, ModelTrait};

use super::{Repository, dispatch, values};
use crate::config::IntegrityMode;
use crate::entity::CatalogEntity;
use crate::errors::{ModelError, Result};
use crate::registry::{Registry, RelationDef, RelationKind};
use crate::storage::Scope;

/// 关联访问器
pub struct Associations<'a, C> {
    conn: &'a C,
    registry: &'a Registry,
    integrity: IntegrityMode,
}

/// 模型上某个物理列的整数键
fn key_from<E: CatalogEntity>(model: &E::Model, physical: &str) -> Result<Option<i64>> {
    let column = values::entity_column::<E>(physical)
        .ok_or_else(|| ModelError::schema(format!("{} 上不存在列 '{physical}'", E::TABLE)))?;
    Ok(values::key_of(&model.get(column)))
}

fn required_key<E: CatalogEntity>(model: &E::Model, physical: &str) -> Result<i64> {
    key_from::<E>(model, physical)?
        .ok_or_else(|| ModelError::validation(format!("{} 的 {physical} 为空，无法建立关联", E::TABLE)))
}

impl<'a, C: ConnectionTrait> Associations<'a, C> {
    pub(crate) fn new(conn: &'a C, registry: &'a Registry, integrity: IntegrityMode) -> Self {
        Self {
            conn,
            registry,
            integrity,
        }
    }

    fn repo<E: CatalogEntity>(&self) -> Result<Repository<'a, C, E>> {
        Repository::new(self.conn, self.registry, self.integrity)
    }

    /// 查找关联并确认种类与目标实体
    fn relation<S: CatalogEntity, T: CatalogEntity>(
        &self,
        alias: &str,
        kinds: &[RelationKind],
    ) -> Result<&'a RelationDef> {
        let registry: &'a Registry = self.registry;
        let relation = registry.relation(S::TABLE, alias)?;
        if !kinds.contains(&relation.kind) {
            return Err(ModelError::association(format!(
                "{}.{alias} 是 {:?} 关联，不支持该操作",
                S::TABLE,
                relation.kind
            )));
        }
        if relation.target_table != T::TABLE {
            return Err(ModelError::association(format!(
                "{}.{alias} 指向 {}，而不是 {}",
                S::TABLE,
                relation.target_table,
                T::TABLE
            )));
        }
        Ok(relation)
    }

    fn join_columns(relation: &RelationDef) -> Result<(&str, &str)> {
        let through = relation.through_table.as_deref();
        let other = relation.other_key.as_deref();
        match (through, other) {
            (Some(through), Some(other)) => Ok((through, other)),
            _ => Err(ModelError::association(format!(
                "{}.{} 缺少关联表定义",
                relation.source_table, relation.alias
            ))),
        }
    }

    /// HasMany / HasOne 关联的目标行
    pub async fn children<S, T>(&self, source: &S::Model, alias: &str) -> Result<Vec<T::Model>>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: IntoActiveModel<T::Active> + Sync,
    {
        let relation =
            self.relation::<S, T>(alias, &[RelationKind::HasMany, RelationKind::HasOne])?;
        let Some(key) = key_from::<S>(source, &relation.source_key)? else {
            return Ok(Vec::new());
        };
        self.repo::<T>()?
            .find_by_keys(&[(relation.foreign_key.as_str(), key)], Scope::Default)
            .await
    }

    /// HasOne 关联的目标行
    pub async fn child<S, T>(&self, source: &S::Model, alias: &str) -> Result<Option<T::Model>>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: IntoActiveModel<T::Active> + Sync,
    {
        self.relation::<S, T>(alias, &[RelationKind::HasOne])?;
        Ok(self
            .children::<S, T>(source, alias)
            .await?
            .into_iter()
            .next())
    }

    /// BelongsTo 关联的目标行，外键为空或目标已删除时为 `None`
    pub async fn parent<S, T>(&self, source: &S::Model, alias: &str) -> Result<Option<T::Model>>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: IntoActiveModel<T::Active> + Sync,
    {
        let relation = self.relation::<S, T>(alias, &[RelationKind::BelongsTo])?;
        let Some(key) = key_from::<S>(source, &relation.foreign_key)? else {
            return Ok(None);
        };
        Ok(self
            .repo::<T>()?
            .find_by_keys(&[(relation.target_key.as_str(), key)], Scope::Default)
            .await?
            .into_iter()
            .next())
    }

    /// BelongsToMany 关联的目标行，跳过已软删除的连接记录
    pub async fn many<S, T>(&self, source: &S::Model, alias: &str) -> Result<Vec<T::Model>>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: IntoActiveModel<T::Active> + Sync,
    {
        let relation = self.relation::<S, T>(alias, &[RelationKind::BelongsToMany])?;
        let (through, other) = Self::join_columns(relation)?;
        let Some(key) = key_from::<S>(source, &relation.source_key)? else {
            return Ok(Vec::new());
        };
        let keys = dispatch::key_values(
            self.conn,
            self.registry,
            through,
            other,
            &[(relation.foreign_key.as_str(), key)],
            Scope::Default,
        )
        .await?;
        self.repo::<T>()?
            .find_in(&relation.target_key, &keys, Scope::Default)
            .await
    }

    /// 建立 BelongsToMany 关系，已软删除的连接记录会被恢复
    pub async fn link<S, T>(&self, source: &S::Model, alias: &str, target: &T::Model) -> Result<()>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: Sync,
    {
        let relation = self.relation::<S, T>(alias, &[RelationKind::BelongsToMany])?;
        let (through, other) = Self::join_columns(relation)?;
        let source_key = required_key::<S>(source, &relation.source_key)?;
        let target_key = required_key::<T>(target, &relation.target_key)?;
        let keys = [
            (relation.foreign_key.as_str(), source_key),
            (other, target_key),
        ];
        if dispatch::row_exists_all(self.conn, self.registry, through, &keys).await? {
            return Ok(());
        }
        dispatch::relink(self.conn, self.registry, self.integrity, through, &keys).await
    }

    /// 带附加列建立 BelongsToMany 关系，`join` 中的两个键列会被覆盖
    pub async fn link_with<S, T, J>(
        &self,
        source: &S::Model,
        alias: &str,
        target: &T::Model,
        mut join: J::Active,
    ) -> Result<J::Model>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: Sync,
        J: CatalogEntity,
        J::Model: IntoActiveModel<J::Active> + Sync,
    {
        let relation = self.relation::<S, T>(alias, &[RelationKind::BelongsToMany])?;
        let (through, other) = Self::join_columns(relation)?;
        if through != J::TABLE {
            return Err(ModelError::association(format!(
                "{}.{alias} 的关联表是 {through}，而不是 {}",
                S::TABLE,
                J::TABLE
            )));
        }
        let repo = self.repo::<J>()?;
        repo.set_key(
            &mut join,
            &relation.foreign_key,
            required_key::<S>(source, &relation.source_key)?,
        )?;
        repo.set_key(
            &mut join,
            other,
            required_key::<T>(target, &relation.target_key)?,
        )?;
        repo.insert(join).await
    }

    /// 解除 BelongsToMany 关系，按关联表的删除策略删除连接记录
    pub async fn unlink<S, T>(
        &self,
        source: &S::Model,
        alias: &str,
        target: &T::Model,
    ) -> Result<u64>
    where
        S: CatalogEntity,
        S::Model: Sync,
        T: CatalogEntity,
        T::Model: Sync,
    {
        let relation = self.relation::<S, T>(alias, &[RelationKind::BelongsToMany])?;
        let (through, other) = Self::join_columns(relation)?;
        let keys = [
            (
                relation.foreign_key.as_str(),
                required_key::<S>(source, &relation.source_key)?,
            ),
            (other, required_key::<T>(target, &relation.target_key)?),
        ];
        dispatch::delete_where(self.conn, self.registry, self.integrity, through, &keys).await
    }
}
