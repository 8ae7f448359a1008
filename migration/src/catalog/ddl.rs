//! 由表描述生成建表与建索引语句

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use super::{ColumnSchema, ColumnType, DefaultValue, TableSchema};

/// 建表语句
pub fn create_table(schema: &TableSchema, backend: DatabaseBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table.table(Alias::new(schema.table)).if_not_exists();
    if let Some(comment) = schema.comment {
        table.comment(comment);
    }
    for column in &schema.columns {
        table.col(column_def(column, backend));
    }
    table.to_owned()
}

/// 命名索引语句
pub fn create_indexes(schema: &TableSchema) -> Vec<IndexCreateStatement> {
    schema
        .indexes
        .iter()
        .map(|index| {
            let mut statement = Index::create();
            statement
                .if_not_exists()
                .name(index.name.as_str())
                .table(Alias::new(schema.table));
            for column in &index.columns {
                statement.col(Alias::new(column.clone()));
            }
            if index.unique {
                statement.unique();
            }
            statement.to_owned()
        })
        .collect()
}

pub fn drop_table(schema: &TableSchema) -> TableDropStatement {
    Table::drop()
        .table(Alias::new(schema.table))
        .if_exists()
        .to_owned()
}

fn column_def(column: &ColumnSchema, backend: DatabaseBackend) -> ColumnDef {
    let mut def = ColumnDef::new(Alias::new(column.column_name().to_string()));
    match column.ty {
        ColumnType::Integer => def.integer(),
        ColumnType::BigInteger => def.big_integer(),
        ColumnType::TinyInteger | ColumnType::IntEnum(_) => def.tiny_integer(),
        // SQLite 的 NUMERIC 亲和性会把整数值的小数存成 INTEGER
        ColumnType::Decimal(_, _) if backend == DatabaseBackend::Sqlite => def.double(),
        ColumnType::Decimal(precision, scale) => def.decimal_len(precision, scale),
        ColumnType::String(len) => def.string_len(len),
        ColumnType::Text => def.text(),
        ColumnType::Boolean => def.boolean(),
        // MySQL 用原生 ENUM，其余后端存为 VARCHAR，取值由写入校验约束
        ColumnType::Enum(values) if backend == DatabaseBackend::MySql => def.enumeration(
            Alias::new(column.column_name().to_string()),
            values.iter().map(|v| Alias::new(*v)),
        ),
        ColumnType::Enum(values) => def.string_len(enum_width(values)),
        ColumnType::Date => def.date(),
        ColumnType::DateTime if backend == DatabaseBackend::Postgres => {
            def.timestamp_with_time_zone()
        }
        ColumnType::DateTime => def.date_time(),
        ColumnType::Json => def.json(),
    };

    if column.nullable {
        def.null();
    } else {
        def.not_null();
    }
    if column.auto_increment {
        def.auto_increment();
    }
    if column.primary_key {
        def.primary_key();
    }
    if column.unique {
        def.unique_key();
    }
    if let Some(comment) = column.comment {
        def.comment(comment);
    }
    match column.default {
        Some(DefaultValue::Int(v)) => {
            def.default(v);
        }
        Some(DefaultValue::Float(v)) => {
            def.default(v);
        }
        Some(DefaultValue::Bool(v)) => {
            def.default(v);
        }
        Some(DefaultValue::Str(v)) => {
            def.default(v);
        }
        Some(DefaultValue::Now) => {
            def.default(Expr::current_timestamp());
        }
        None => {}
    }
    def.to_owned()
}

/// 枚举列宽度：最长取值，不小于 20
fn enum_width(values: &[&str]) -> u32 {
    let longest = values.iter().map(|v| v.len()).max().unwrap_or(0);
    Ord::max(
        <u32 as TryFrom<usize>>::try_from(longest).unwrap_or(u32::MAX),
        20,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{enums, find_table};

    #[test]
    fn test_create_table_sqlite() {
        let schema = find_table("security_configs").unwrap();
        let sql = create_table(schema, DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"security_configs\""));
        assert!(sql.contains("\"configKey\""));
        assert!(sql.contains("\"createdAt\""));
        assert!(!sql.contains("\"deletedAt\""));
    }

    #[test]
    fn test_create_table_underscored() {
        let schema = find_table("permissions").unwrap();
        let sql = create_table(schema, DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        assert!(sql.contains("\"parent_id\""));
        assert!(sql.contains("\"deleted_at\""));
        assert!(sql.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_decimal_width_on_mysql() {
        let schema = find_table("enrollment_applications").unwrap();
        let sql = create_table(schema, DatabaseBackend::MySql).to_string(MysqlQueryBuilder);
        assert!(sql.contains("decimal(5"));
        assert!(sql.contains("varchar(20)"));
    }

    #[test]
    fn test_index_statements() {
        let schema = find_table("user_roles").unwrap();
        let sqls: Vec<String> = create_indexes(schema)
            .iter()
            .map(|i| i.to_string(SqliteQueryBuilder))
            .collect();
        assert!(sqls.iter().any(|s| s.contains("UNIQUE")
            && s.contains("\"user_roles_user_id_role_id\"")));
        assert!(sqls.iter().any(|s| s.contains("\"user_roles_role_id\"")));
    }

    #[test]
    fn test_native_enum_on_mysql() {
        let schema = find_table("enrollment_applications").unwrap();
        let mysql = create_table(schema, DatabaseBackend::MySql).to_string(MysqlQueryBuilder);
        let expected = format!(
            "`status` ENUM('{}')",
            enums::APPLICATION_STATUS.join("', '")
        );
        assert!(mysql.contains(&expected), "{mysql}");

        let sqlite = create_table(schema, DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        assert!(!sqlite.contains("ENUM("));
        assert!(sqlite.contains("\"status\" varchar(20)"));
    }

    #[test]
    fn test_comments_on_mysql() {
        let schema = find_table("ai_user_relations").unwrap();
        let sql = create_table(schema, DatabaseBackend::MySql).to_string(MysqlQueryBuilder);
        assert!(sql.contains("COMMENT 'JSON AI 偏好设置'"), "{sql}");
        assert!(sql.contains(") COMMENT 'AI 用户关系表'"), "{sql}");

        // SQLite 不支持注释，语句里不出现
        let sql = create_table(schema, DatabaseBackend::Sqlite).to_string(SqliteQueryBuilder);
        assert!(!sql.contains("COMMENT"));
    }

    #[test]
    fn test_enum_width() {
        assert_eq!(enum_width(&["a", "b"]), 20);
        assert_eq!(
            enum_width(&["pre_registration_and_more_words"]),
            31
        );
    }
}
