//! 写入前的列校验
//!
//! 只依赖表描述与一行待写入的值，不访问数据库。唯一性与外键由仓储层另行检查。

use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::Value;

use migration::catalog::{Check, ColumnSchema, ColumnType, TableSchema};

use crate::errors::{FieldViolation, ViolationKind};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 校验用的列值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Date(String),
    Timestamp(String),
    /// JSON 等不参与校验的值
    Other,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(Some(v)) => FieldValue::Bool(*v),
            Value::TinyInt(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::SmallInt(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::Int(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::BigInt(Some(v)) => FieldValue::Int(*v),
            Value::TinyUnsigned(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::SmallUnsigned(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::Unsigned(Some(v)) => FieldValue::Int(i64::from(*v)),
            Value::Float(Some(v)) => FieldValue::Float(f64::from(*v)),
            Value::Double(Some(v)) => FieldValue::Float(*v),
            Value::String(Some(v)) => FieldValue::Text(v.to_string()),
            Value::ChronoDate(Some(v)) => FieldValue::Date(v.to_string()),
            Value::ChronoDateTimeUtc(Some(v)) => FieldValue::Timestamp(v.to_rfc3339()),
            Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::ChronoDate(None)
            | Value::ChronoDateTimeUtc(None)
            | Value::Json(None) => FieldValue::Null,
            _ => FieldValue::Other,
        }
    }
}

/// 写入种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// 未给出的必填列视为缺值
    Insert,
    /// 只校验本次修改的列
    Update,
}

/// 校验一行
///
/// `lookup` 返回列的待写入值，`None` 表示本次写入未涉及该列。
pub fn validate_row<F>(schema: &TableSchema, kind: WriteKind, lookup: F) -> Vec<FieldViolation>
where
    F: Fn(&ColumnSchema) -> Option<FieldValue>,
{
    let mut violations = Vec::new();
    for column in &schema.columns {
        if column.auto_increment {
            continue;
        }
        match lookup(column) {
            None => {
                if kind == WriteKind::Insert && column.required_on_insert() {
                    violations.push(FieldViolation::new(column.name, ViolationKind::NotNull));
                }
            }
            Some(FieldValue::Null) => {
                if !column.nullable {
                    violations.push(FieldViolation::new(column.name, ViolationKind::NotNull));
                }
            }
            Some(value) => {
                violations.extend(
                    check_value(column, &value)
                        .into_iter()
                        .map(|kind| FieldViolation::new(column.name, kind)),
                );
            }
        }
    }
    violations
}

/// 单个非空值的类型与校验规则
pub fn check_value(column: &ColumnSchema, value: &FieldValue) -> Vec<ViolationKind> {
    let mut found = Vec::new();

    match (&column.ty, value) {
        (ColumnType::Enum(allowed), FieldValue::Text(text)) => {
            if !allowed.contains(&text.as_str()) {
                found.push(ViolationKind::NotInEnum {
                    value: text.clone(),
                    allowed: allowed.iter().map(|v| v.to_string()).collect(),
                });
            }
        }
        (ColumnType::IntEnum(allowed), FieldValue::Int(code)) => {
            let known = i32::try_from(*code).is_ok_and(|code| allowed.contains(&code));
            if !known {
                found.push(ViolationKind::NotInEnum {
                    value: code.to_string(),
                    allowed: allowed.iter().map(|v| v.to_string()).collect(),
                });
            }
        }
        (ColumnType::String(max), FieldValue::Text(text)) => {
            let actual = text.chars().count();
            let max = *max as usize;
            if actual > max {
                found.push(ViolationKind::TooLong { max, actual });
            }
        }
        _ => {}
    }

    for check in &column.checks {
        match (check, value) {
            (Check::Range { min, max }, _) => match value.as_number() {
                Some(number) if !(*min..=*max).contains(&number) => {
                    found.push(ViolationKind::OutOfRange {
                        min: *min,
                        max: *max,
                        value: number,
                    });
                }
                _ => {}
            },
            (Check::Min(min), _) => match value.as_number() {
                // NaN 与任何值比较都不成立，须单独拒绝
                Some(number) if number.is_nan() || number < *min => {
                    found.push(ViolationKind::OutOfRange {
                        min: *min,
                        max: f64::INFINITY,
                        value: number,
                    });
                }
                _ => {}
            },
            (Check::Length { min, max }, FieldValue::Text(text)) => {
                let actual = text.chars().count();
                if actual < *min || actual > *max {
                    found.push(ViolationKind::Length {
                        min: *min,
                        max: *max,
                        actual,
                    });
                }
            }
            (Check::Email, FieldValue::Text(text)) => {
                if !EMAIL_RE.is_match(text) {
                    found.push(ViolationKind::Format("邮箱地址"));
                }
            }
            _ => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog::find_table;
    use std::collections::HashMap;

    fn row(values: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn validate(table: &str, kind: WriteKind, values: &[(&str, FieldValue)]) -> Vec<FieldViolation> {
        let schema = find_table(table).unwrap();
        let values = row(values);
        validate_row(schema, kind, |column| values.get(column.name).cloned())
    }

    fn columns(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.column.as_str()).collect()
    }

    #[test]
    fn test_missing_required_columns_on_insert() {
        let violations = validate("roles", WriteKind::Insert, &[]);
        let cols = columns(&violations);
        assert!(cols.contains(&"name"));
        assert!(cols.contains(&"code"));
        // 有默认值或可空的列不报
        assert!(!cols.contains(&"status"));
        assert!(!cols.contains(&"description"));
    }

    #[test]
    fn test_update_only_checks_touched_columns() {
        let violations = validate(
            "roles",
            WriteKind::Update,
            &[("description", FieldValue::Text("x".into()))],
        );
        assert!(violations.is_empty());

        let violations = validate("roles", WriteKind::Update, &[("name", FieldValue::Null)]);
        assert_eq!(violations[0].kind, ViolationKind::NotNull);
    }

    #[test]
    fn test_string_enum_membership() {
        let violations = validate(
            "users",
            WriteKind::Update,
            &[("status", FieldValue::Text("banned".into()))],
        );
        assert!(matches!(
            &violations[0].kind,
            ViolationKind::NotInEnum { value, .. } if value == "banned"
        ));
    }

    #[test]
    fn test_int_enum_membership() {
        let violations = validate("students", WriteKind::Update, &[("gender", FieldValue::Int(3))]);
        assert_eq!(columns(&violations), vec!["gender"]);
        let violations = validate("students", WriteKind::Update, &[("gender", FieldValue::Int(2))]);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_varchar_width_counts_chars() {
        // 50 个汉字不超宽
        let name: String = "园".repeat(50);
        let violations = validate("roles", WriteKind::Update, &[("name", FieldValue::Text(name))]);
        assert!(violations.is_empty());
        let name: String = "a".repeat(51);
        let violations = validate("roles", WriteKind::Update, &[("name", FieldValue::Text(name))]);
        assert_eq!(
            violations[0].kind,
            ViolationKind::TooLong {
                max: 50,
                actual: 51
            }
        );
    }

    #[test]
    fn test_percent_range() {
        let violations = validate(
            "tasks",
            WriteKind::Update,
            &[("progress", FieldValue::Int(101))],
        );
        assert!(matches!(violations[0].kind, ViolationKind::OutOfRange { .. }));
        let violations = validate(
            "enrollment_plans",
            WriteKind::Update,
            &[("progress", FieldValue::Float(99.5))],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let violations = validate(
            "security_scan_logs",
            WriteKind::Update,
            &[("riskScore", FieldValue::Float(f64::NAN))],
        );
        assert_eq!(columns(&violations), vec!["riskScore"]);
        assert!(matches!(violations[0].kind, ViolationKind::OutOfRange { .. }));

        let violations = validate(
            "classes",
            WriteKind::Update,
            &[("currentStudentCount", FieldValue::Float(f64::NAN))],
        );
        assert_eq!(columns(&violations), vec!["currentStudentCount"]);

        let violations = validate(
            "security_scan_logs",
            WriteKind::Update,
            &[("riskScore", FieldValue::Float(f64::INFINITY))],
        );
        assert_eq!(columns(&violations), vec!["riskScore"]);
    }

    #[test]
    fn test_min_and_length_window() {
        let violations = validate(
            "classes",
            WriteKind::Update,
            &[("currentStudentCount", FieldValue::Int(-1))],
        );
        assert_eq!(columns(&violations), vec!["currentStudentCount"]);

        let violations = validate(
            "enrollment_applications",
            WriteKind::Update,
            &[("applicationNumber", FieldValue::Text("A123".into()))],
        );
        assert!(matches!(
            violations[0].kind,
            ViolationKind::Length { min: 10, max: 20, actual: 4 }
        ));
    }

    #[test]
    fn test_email_format() {
        let violations = validate(
            "users",
            WriteKind::Update,
            &[("email", FieldValue::Text("not-an-email".into()))],
        );
        assert_eq!(violations[0].kind, ViolationKind::Format("邮箱地址"));
        let violations = validate(
            "users",
            WriteKind::Update,
            &[("email", FieldValue::Text("teacher@example.com".into()))],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_every_offending_column_is_listed() {
        let violations = validate(
            "users",
            WriteKind::Insert,
            &[
                ("role", FieldValue::Text("root".into())),
                ("email", FieldValue::Text("bad".into())),
            ],
        );
        let cols = columns(&violations);
        for expected in ["username", "password", "role", "email"] {
            assert!(cols.contains(&expected), "{expected}");
        }
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(FieldValue::from(&Value::from(7i32)), FieldValue::Int(7));
        assert_eq!(
            FieldValue::from(&Value::from("a".to_string())),
            FieldValue::Text("a".into())
        );
        assert!(FieldValue::from(&Value::from(Option::<String>::None)).is_null());
        assert!(FieldValue::from(&Value::from(Option::<i32>::None)).is_null());
    }
}
