//! 表结构目录
//!
//! 每个实体用一份静态描述声明：表名、命名约定、列（语义类型、宽度、可空、默认值、唯一、校验）、
//! 命名索引以及软删除策略。迁移和运行时校验都从这里读取，不再各自维护一份表结构。

pub mod ddl;
pub mod enums;
pub mod naming;
mod tables;

use once_cell::sync::Lazy;

/// 列的语义类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    BigInteger,
    TinyInteger,
    /// DECIMAL(precision, scale)
    Decimal(u32, u32),
    /// VARCHAR(n)
    String(u32),
    Text,
    Boolean,
    /// 字符串枚举，MySQL 上为原生 ENUM，其余后端存为 VARCHAR
    Enum(&'static [&'static str]),
    /// 小整数枚举，物理上存为 TINYINT
    IntEnum(&'static [i32]),
    /// 仅日期
    Date,
    /// 日期时间
    DateTime,
    Json,
}

impl ColumnType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ColumnType::Integer
                | ColumnType::BigInteger
                | ColumnType::TinyInteger
                | ColumnType::IntEnum(_)
        )
    }

    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            ColumnType::String(_) | ColumnType::Text | ColumnType::Enum(_) | ColumnType::Json
        )
    }
}

/// 列默认值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'static str),
    /// 写入时刻
    Now,
}

/// 写入前的值校验
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// 闭区间 [min, max]
    Range { min: f64, max: f64 },
    /// 下界
    Min(f64),
    /// 字符数窗口 [min, max]
    Length { min: usize, max: usize },
    Email,
}

/// 列描述
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    /// 逻辑属性名（camelCase）
    pub name: &'static str,
    /// 显式指定的物理列名
    pub field: Option<&'static str>,
    /// 解析后的物理列名，由 [`TableSchema::finish`] 填充
    pub column: String,
    pub ty: ColumnType,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub unique: bool,
    pub checks: Vec<Check>,
    pub comment: Option<&'static str>,
}

impl ColumnSchema {
    pub fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            field: None,
            column: String::new(),
            ty,
            nullable: true,
            default: None,
            primary_key: false,
            auto_increment: false,
            unique: false,
            checks: Vec::new(),
            comment: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// 百分比字段，限定在 [0, 100]
    pub fn percent(self) -> Self {
        self.check(Check::Range {
            min: 0.0,
            max: 100.0,
        })
    }

    pub fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    /// 物理列名
    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// 插入时必须给出值
    pub fn required_on_insert(&self) -> bool {
        !self.nullable && self.default.is_none() && !self.auto_increment
    }
}

/// 整型自增主键 `id`
pub fn id() -> ColumnSchema {
    let mut column = ColumnSchema::new("id", ColumnType::Integer).not_null();
    column.primary_key = true;
    column.auto_increment = true;
    column
}

/// 普通列
pub fn col(name: &'static str, ty: ColumnType) -> ColumnSchema {
    ColumnSchema::new(name, ty)
}

/// 索引描述
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSchema {
    explicit_name: Option<&'static str>,
    fields: Vec<&'static str>,
    /// 解析后的索引名
    pub name: String,
    /// 解析后的物理列名
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexSchema {
    pub fn on(fields: &[&'static str]) -> Self {
        Self {
            explicit_name: None,
            fields: fields.to_vec(),
            name: String::new(),
            columns: Vec::new(),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.explicit_name = Some(name);
        self
    }
}

/// 时间戳列的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl Timestamp {
    fn attribute(&self) -> &'static str {
        match self {
            Timestamp::CreatedAt => "createdAt",
            Timestamp::UpdatedAt => "updatedAt",
            Timestamp::DeletedAt => "deletedAt",
        }
    }
}

/// 表描述
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    /// 实体名（PascalCase）
    pub entity: &'static str,
    /// 物理表名
    pub table: &'static str,
    /// camelCase 属性映射为 snake_case 列名
    pub underscored: bool,
    pub timestamps: bool,
    /// 软删除
    pub paranoid: bool,
    pub columns: Vec<ColumnSchema>,
    pub indexes: Vec<IndexSchema>,
    /// 列表默认排序的逻辑列
    pub sort: Option<&'static str>,
    pub comment: Option<&'static str>,
}

impl TableSchema {
    pub fn define(entity: &'static str, table: &'static str) -> Self {
        Self {
            entity,
            table,
            underscored: false,
            timestamps: true,
            paranoid: false,
            columns: Vec::new(),
            indexes: Vec::new(),
            sort: None,
            comment: None,
        }
    }

    pub fn underscored(mut self) -> Self {
        self.underscored = true;
        self
    }

    pub fn paranoid(mut self) -> Self {
        self.paranoid = true;
        self
    }

    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    pub fn sort_by(mut self, attribute: &'static str) -> Self {
        self.sort = Some(attribute);
        self
    }

    pub fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_column(mut self, column: ColumnSchema) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: IndexSchema) -> Self {
        self.indexes.push(index);
        self
    }

    /// 补齐时间戳列，解析物理列名与索引名
    pub fn finish(mut self) -> Self {
        if self.timestamps {
            self.columns.push(
                col(Timestamp::CreatedAt.attribute(), ColumnType::DateTime).not_null(),
            );
            self.columns.push(
                col(Timestamp::UpdatedAt.attribute(), ColumnType::DateTime).not_null(),
            );
        }
        if self.paranoid {
            self.columns
                .push(col(Timestamp::DeletedAt.attribute(), ColumnType::DateTime));
        }

        let underscored = self.underscored;
        for column in &mut self.columns {
            column.column = match column.field {
                Some(field) => field.to_string(),
                None => naming::physical_name(column.name, underscored),
            };
        }

        let mut indexes = std::mem::take(&mut self.indexes);
        for index in &mut indexes {
            index.columns = index
                .fields
                .iter()
                .map(|field| {
                    self.column(field)
                        .map(|c| c.column.clone())
                        .unwrap_or_else(|| naming::physical_name(field, underscored))
                })
                .collect();
            index.name = match index.explicit_name {
                Some(name) => name.to_string(),
                None => naming::index_name(self.table, &index.columns),
            };
        }
        self.indexes = indexes;
        self
    }

    /// 按逻辑名或物理列名查找列
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .or_else(|| self.columns.iter().find(|c| c.column == name))
    }

    pub fn primary_key(&self) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// 时间戳列的物理名，表未启用对应特性时返回 None
    pub fn timestamp_column(&self, kind: Timestamp) -> Option<&str> {
        let enabled = match kind {
            Timestamp::CreatedAt | Timestamp::UpdatedAt => self.timestamps,
            Timestamp::DeletedAt => self.paranoid,
        };
        if !enabled {
            return None;
        }
        self.column(kind.attribute()).map(|c| c.column_name())
    }

    /// 排序列的物理名
    pub fn sort_column(&self) -> Option<&str> {
        self.sort
            .and_then(|attribute| self.column(attribute))
            .map(|c| c.column_name())
    }

    /// 所有唯一约束，单列唯一与唯一索引合并
    pub fn unique_constraints(&self) -> Vec<Vec<&ColumnSchema>> {
        let mut constraints: Vec<Vec<&ColumnSchema>> = self
            .columns
            .iter()
            .filter(|c| c.unique && !c.primary_key)
            .map(|c| vec![c])
            .collect();

        for index in self.indexes.iter().filter(|i| i.unique) {
            let columns: Vec<&ColumnSchema> = index
                .columns
                .iter()
                .filter_map(|name| self.column(name))
                .collect();
            let duplicate = constraints.iter().any(|existing| {
                existing.len() == columns.len()
                    && existing.iter().zip(&columns).all(|(a, b)| a.name == b.name)
            });
            if !columns.is_empty() && !duplicate {
                constraints.push(columns);
            }
        }
        constraints
    }
}

static CATALOG: Lazy<Vec<TableSchema>> = Lazy::new(tables::all);

/// 全部表描述，顺序即建表顺序
pub fn catalog() -> &'static [TableSchema] {
    &CATALOG
}

/// 按表名或实体名查找
pub fn find_table(name: &str) -> Option<&'static TableSchema> {
    CATALOG
        .iter()
        .find(|t| t.table == name || t.entity == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_tables_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|t| t.table).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_every_table_has_primary_key() {
        for table in catalog() {
            let pk = table.primary_key().expect("missing primary key");
            assert_eq!(pk.column_name(), "id", "{}", table.table);
        }
    }

    #[test]
    fn test_underscored_naming() {
        let roles = find_table("roles").unwrap();
        assert_eq!(roles.column("isSystem").unwrap().column_name(), "is_system");
        assert_eq!(
            roles.timestamp_column(Timestamp::DeletedAt),
            Some("deleted_at")
        );
        assert!(roles.column("is_system").is_some());
    }

    #[test]
    fn test_frozen_naming() {
        let configs = find_table("SecurityConfig").unwrap();
        assert!(!configs.underscored);
        assert_eq!(
            configs.column("configKey").unwrap().column_name(),
            "configKey"
        );
        assert_eq!(
            configs.timestamp_column(Timestamp::CreatedAt),
            Some("createdAt")
        );
        assert_eq!(configs.timestamp_column(Timestamp::DeletedAt), None);
    }

    #[test]
    fn test_security_config_layout() {
        let configs = find_table("security_configs").unwrap();
        let category = configs.column("category").unwrap();
        assert!(!category.nullable);
        assert_eq!(category.default, Some(DefaultValue::Str("general")));
        let active = configs.column("isActive").unwrap();
        assert_eq!(active.default, Some(DefaultValue::Bool(true)));
        let names: Vec<&str> = configs.indexes.iter().map(|i| i.name.as_str()).collect();
        assert!(names.contains(&"security_configs_config_key"));
        assert!(names.contains(&"security_configs_category"));
        assert!(names.contains(&"security_configs_is_active"));
    }

    #[test]
    fn test_unique_constraints_merge_index_and_column() {
        let user_roles = find_table("user_roles").unwrap();
        let constraints = user_roles.unique_constraints();
        assert_eq!(constraints.len(), 1);
        let names: Vec<&str> = constraints[0].iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["userId", "roleId"]);

        let roles = find_table("roles").unwrap();
        let constraints = roles.unique_constraints();
        assert!(constraints.iter().any(|c| c.len() == 1 && c[0].name == "code"));
    }

    #[test]
    fn test_builder_and_lookup() {
        let schema = TableSchema::define("Sample", "samples")
            .underscored()
            .paranoid()
            .with_column(id())
            .with_column(col("displayName", ColumnType::String(50)).not_null())
            .with_column(col("legacyCode", ColumnType::String(10)).field("LegacyCode"))
            .index(IndexSchema::on(&["displayName"]).unique())
            .finish();

        assert_eq!(
            schema.column("displayName").unwrap().column_name(),
            "display_name"
        );
        assert_eq!(schema.column("display_name").unwrap().name, "displayName");
        assert_eq!(schema.column("legacyCode").unwrap().column_name(), "LegacyCode");
        assert!(schema.column("missing").is_none());
        assert_eq!(schema.indexes[0].columns, vec!["display_name".to_string()]);
        assert_eq!(schema.indexes[0].name, "samples_display_name");
        assert_eq!(
            schema.timestamp_column(Timestamp::DeletedAt),
            Some("deleted_at")
        );
    }

    #[test]
    fn test_sort_columns() {
        assert_eq!(find_table("permissions").unwrap().sort_column(), Some("sort"));
        assert_eq!(
            find_table("inspection_tasks").unwrap().sort_column(),
            Some("sort_order")
        );
        assert_eq!(find_table("tasks").unwrap().sort_column(), None);
    }

    #[test]
    fn test_percent_columns_are_range_checked() {
        let range = Check::Range {
            min: 0.0,
            max: 100.0,
        };
        for (table, column) in [
            ("tasks", "progress"),
            ("enrollment_plans", "progress"),
            ("inspection_plans", "score"),
            ("enrollment_applications", "score"),
            ("security_scan_logs", "riskScore"),
        ] {
            let schema = find_table(table).unwrap();
            assert!(
                schema.column(column).unwrap().checks.contains(&range),
                "{table}.{column}"
            );
        }
    }
}
