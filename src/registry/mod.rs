//! 表结构与关联注册表
//!
//! 启动分两步：先登记全部表描述，再声明关联；`build` 校验所有声明并生成不可变的
//! [`Registry`]。运行期只读，可在任务间通过 `Arc` 共享。

mod associations;
pub mod relations;
pub mod validation;

use std::collections::HashSet;

use tracing::debug;

use migration::catalog::{self, TableSchema};

use crate::errors::{ModelError, Result};
pub use relations::{Association, RelationDef, RelationKind};

/// 注册表构建器
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: Vec<TableSchema>,
    associations: Vec<Association>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记表描述
    pub fn register(mut self, schema: TableSchema) -> Self {
        self.tables.push(schema);
        self
    }

    /// 声明关联
    pub fn associate(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }

    pub fn associate_all(mut self, associations: impl IntoIterator<Item = Association>) -> Self {
        self.associations.extend(associations);
        self
    }

    /// 校验全部声明并生成注册表
    pub fn build(self) -> Result<Registry> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            let new_table = seen.insert(table.table);
            let new_entity = seen.insert(table.entity);
            if !new_table || !new_entity {
                return Err(ModelError::schema(format!(
                    "重复登记的表: {} ({})",
                    table.entity, table.table
                )));
            }
        }

        let mut relations: Vec<RelationDef> = Vec::with_capacity(self.associations.len());
        for association in &self.associations {
            let relation = resolve(&self.tables, association)?;
            let duplicate = relations
                .iter()
                .any(|r| r.source_table == relation.source_table && r.alias == relation.alias);
            if duplicate {
                return Err(ModelError::association(format!(
                    "{} 上的关联别名 '{}' 重复",
                    association.source, relation.alias
                )));
            }
            debug!(
                "关联 {}.{} -> {} ({:?})",
                relation.source_table, relation.alias, relation.target_table, relation.kind
            );
            relations.push(relation);
        }

        Ok(Registry {
            tables: self.tables,
            relations,
        })
    }
}

/// 不可变的表结构与关联注册表
#[derive(Debug, Clone)]
pub struct Registry {
    tables: Vec<TableSchema>,
    relations: Vec<RelationDef>,
}

/// 注册表概要，用于启动日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub tables: usize,
    pub paranoid_tables: usize,
    pub columns: usize,
    pub indexes: usize,
    pub relations: usize,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// 幼儿园平台的完整注册表
    pub fn kindergarten() -> Result<Self> {
        catalog::catalog()
            .iter()
            .cloned()
            .fold(Self::builder(), RegistryBuilder::register)
            .associate_all(associations::declarations())
            .build()
    }

    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// 按实体名或表名查找
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables
            .iter()
            .find(|t| t.table == name || t.entity == name)
    }

    pub fn require_table(&self, name: &str) -> Result<&TableSchema> {
        self.table(name)
            .ok_or_else(|| ModelError::schema(format!("未登记的实体或表: {name}")))
    }

    pub fn relations(&self) -> &[RelationDef] {
        &self.relations
    }

    /// 某表出发的全部关联
    pub fn relations_from<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a RelationDef> {
        self.relations.iter().filter(move |r| r.source_table == table)
    }

    /// 按源实体（或表名）与别名查找关联
    pub fn relation(&self, source: &str, alias: &str) -> Result<&RelationDef> {
        let table = self.require_table(source)?.table;
        self.relations_from(table)
            .find(|r| r.alias == alias)
            .ok_or_else(|| ModelError::association(format!("{source} 上没有名为 '{alias}' 的关联")))
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            tables: self.tables.len(),
            paranoid_tables: self.tables.iter().filter(|t| t.paranoid).count(),
            columns: self.tables.iter().map(|t| t.columns.len()).sum(),
            indexes: self.tables.iter().map(|t| t.indexes.len()).sum(),
            relations: self.relations.len(),
        }
    }
}

fn lookup<'a>(tables: &'a [TableSchema], name: &str) -> Result<&'a TableSchema> {
    tables
        .iter()
        .find(|t| t.entity == name || t.table == name)
        .ok_or_else(|| ModelError::association(format!("关联引用了未知实体: {name}")))
}

fn column_of(schema: &TableSchema, attribute: &str) -> Result<String> {
    schema
        .column(attribute)
        .map(|c| c.column_name().to_string())
        .ok_or_else(|| {
            ModelError::association(format!("{} 上不存在键列 '{attribute}'", schema.entity))
        })
}

/// `Teacher` -> `teacherId`
fn default_key(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => format!("{}{}Id", first.to_lowercase(), chars.as_str()),
        None => "id".to_string(),
    }
}

fn default_alias(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => String::new(),
    }
}

fn resolve(tables: &[TableSchema], association: &Association) -> Result<RelationDef> {
    let source = lookup(tables, association.source)?;
    let target = lookup(tables, association.target)?;
    let alias = if association.alias.is_empty() {
        default_alias(target.entity)
    } else {
        association.alias.to_string()
    };

    let relation = match association.kind {
        RelationKind::BelongsTo => {
            let fk = association
                .foreign_key
                .map(str::to_string)
                .unwrap_or_else(|| default_key(target.entity));
            let foreign_key = column_of(source, &fk)?;
            RelationDef {
                kind: association.kind,
                alias,
                source_table: source.table.to_string(),
                target_table: target.table.to_string(),
                source_key: foreign_key.clone(),
                target_key: column_of(target, association.key.unwrap_or("id"))?,
                foreign_key,
                through_table: None,
                other_key: None,
                constraints: association.constraints,
                order_by: None,
            }
        }
        RelationKind::HasOne | RelationKind::HasMany => {
            let fk = association
                .foreign_key
                .map(str::to_string)
                .unwrap_or_else(|| default_key(source.entity));
            let foreign_key = column_of(target, &fk)?;
            RelationDef {
                kind: association.kind,
                alias,
                source_table: source.table.to_string(),
                target_table: target.table.to_string(),
                source_key: column_of(source, association.key.unwrap_or("id"))?,
                target_key: foreign_key.clone(),
                foreign_key,
                through_table: None,
                other_key: None,
                constraints: association.constraints,
                order_by: target.sort_column().map(str::to_string),
            }
        }
        RelationKind::BelongsToMany => {
            let through_name = association.through.ok_or_else(|| {
                ModelError::association(format!(
                    "{}.{alias} 缺少关联表",
                    association.source
                ))
            })?;
            let through = lookup(tables, through_name)?;
            let fk = association
                .foreign_key
                .map(str::to_string)
                .unwrap_or_else(|| default_key(source.entity));
            let other = association
                .other_key
                .map(str::to_string)
                .unwrap_or_else(|| default_key(target.entity));
            RelationDef {
                kind: association.kind,
                alias,
                source_table: source.table.to_string(),
                target_table: target.table.to_string(),
                foreign_key: column_of(through, &fk)?,
                source_key: column_of(source, association.key.unwrap_or("id"))?,
                target_key: column_of(target, "id")?,
                through_table: Some(through.table.to_string()),
                other_key: Some(column_of(through, &other)?),
                constraints: association.constraints,
                order_by: target.sort_column().map(str::to_string),
            }
        }
    };
    Ok(relation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog::find_table;

    fn schema(name: &str) -> TableSchema {
        find_table(name).unwrap().clone()
    }

    #[test]
    fn test_kindergarten_registry_boots() {
        let registry = Registry::kindergarten().unwrap();
        let summary = registry.summary();
        assert_eq!(summary.tables, catalog::catalog().len());
        assert_eq!(summary.relations, registry.relations().len());
        assert!(summary.relations > 80);
        assert!(summary.paranoid_tables > 0);
    }

    #[test]
    fn test_self_reference_aliases_coexist() {
        let registry = Registry::kindergarten().unwrap();
        let parent = registry.relation("Permission", "parent").unwrap();
        assert_eq!(parent.kind, RelationKind::BelongsTo);
        assert_eq!(parent.foreign_key, "parent_id");
        assert_eq!(parent.target_table, "permissions");

        let children = registry.relation("permissions", "children").unwrap();
        assert_eq!(children.kind, RelationKind::HasMany);
        assert_eq!(children.order_by.as_deref(), Some("sort"));

        let subtasks = registry.relation("InspectionTask", "subtasks").unwrap();
        assert_eq!(subtasks.foreign_key, "parent_task_id");
        assert_eq!(subtasks.order_by.as_deref(), Some("sort_order"));
    }

    #[test]
    fn test_several_relations_to_same_target() {
        let registry = Registry::kindergarten().unwrap();
        let creator = registry.relation("Task", "creator").unwrap();
        let assignee = registry.relation("Task", "assignee").unwrap();
        assert_eq!(creator.target_table, assignee.target_table);
        assert_eq!(creator.foreign_key, "creator_id");
        assert_eq!(assignee.foreign_key, "assignee_id");
    }

    #[test]
    fn test_belongs_to_many_through_join_table() {
        let registry = Registry::kindergarten().unwrap();
        let permissions = registry.relation("Role", "permissions").unwrap();
        assert_eq!(permissions.through_table.as_deref(), Some("role_permissions"));
        assert_eq!(permissions.foreign_key, "role_id");
        assert_eq!(permissions.other_key.as_deref(), Some("permission_id"));
        assert_eq!(permissions.order_by.as_deref(), Some("sort"));

        let roles = registry.relation("Permission", "permissionRoles").unwrap();
        assert_eq!(roles.foreign_key, "permission_id");
    }

    #[test]
    fn test_frozen_table_uses_camel_case_keys() {
        let registry = Registry::kindergarten().unwrap();
        let reviewer = registry.relation("EnrollmentApplication", "reviewer").unwrap();
        assert_eq!(reviewer.foreign_key, "reviewedBy");
        let materials = registry.relation("EnrollmentApplication", "materials").unwrap();
        assert_eq!(materials.foreign_key, "application_id");
        assert!(registry.relation("EnrollmentApplication", "creator").is_err());
    }

    #[test]
    fn test_advisory_relations() {
        let registry = Registry::kindergarten().unwrap();
        assert!(!registry.relation("OperationLog", "user").unwrap().constraints);
        assert!(!registry.relation("SecurityScanLog", "starter").unwrap().constraints);
        assert!(registry.relation("Todo", "user").unwrap().constraints);
    }

    #[test]
    fn test_unknown_entity_fails_boot() {
        let err = Registry::builder()
            .register(schema("roles"))
            .associate(Association::belongs_to("Role", "Ghost").foreign_key("ghostId"))
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(err.message().contains("Ghost"));
    }

    #[test]
    fn test_missing_key_column_fails_boot() {
        let err = Registry::builder()
            .register(schema("roles"))
            .register(schema("users"))
            .associate(Association::belongs_to("Role", "User").alias("owner"))
            .build()
            .unwrap_err();
        assert!(err.message().contains("userId"));
    }

    #[test]
    fn test_duplicate_alias_fails_boot() {
        let err = Registry::builder()
            .register(schema("tasks"))
            .register(schema("users"))
            .associate(
                Association::belongs_to("Task", "User")
                    .alias("owner")
                    .foreign_key("creatorId"),
            )
            .associate(
                Association::belongs_to("Task", "User")
                    .alias("owner")
                    .foreign_key("assigneeId"),
            )
            .build()
            .unwrap_err();
        assert!(err.message().contains("owner"));
    }

    #[test]
    fn test_duplicate_table_fails_boot() {
        let err = Registry::builder()
            .register(schema("roles"))
            .register(schema("roles"))
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_default_keys_and_alias() {
        let registry = Registry::builder()
            .register(schema("teachers"))
            .register(schema("users"))
            .associate(Association::belongs_to("Teacher", "User"))
            .build()
            .unwrap();
        let relation = registry.relation("Teacher", "user").unwrap();
        assert_eq!(relation.foreign_key, "user_id");
        assert_eq!(relation.target_key, "id");
    }
}
