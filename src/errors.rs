//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 约束违例单独携带结构化的列信息，便于调用方定位出错字段。

use std::fmt;

/// 单列违例的种类
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// 非空列缺值或写入 NULL
    NotNull,
    /// 值不在枚举集合内
    NotInEnum { value: String, allowed: Vec<String> },
    /// 超出 VARCHAR 宽度
    TooLong { max: usize, actual: usize },
    /// 长度不在窗口内
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
    /// 数值越界
    OutOfRange { min: f64, max: f64, value: f64 },
    /// 格式不合法
    Format(&'static str),
    /// 唯一键冲突，含参与约束的全部列
    Unique { columns: Vec<String> },
    /// 外键指向的行不存在（严格模式）
    DanglingReference { target: String, value: i64 },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::NotNull => write!(f, "不能为空"),
            ViolationKind::NotInEnum { value, allowed } => {
                write!(f, "取值 '{value}' 不在 [{}] 中", allowed.join(", "))
            }
            ViolationKind::TooLong { max, actual } => {
                write!(f, "长度 {actual} 超过上限 {max}")
            }
            ViolationKind::Length { min, max, actual } => {
                write!(f, "长度 {actual} 不在 {min}..={max} 内")
            }
            ViolationKind::OutOfRange { min, max, value } => {
                write!(f, "数值 {value} 不在 [{min}, {max}] 内")
            }
            ViolationKind::Format(what) => write!(f, "格式不是合法的{what}"),
            ViolationKind::Unique { columns } => {
                write!(f, "唯一键 ({}) 已存在", columns.join(", "))
            }
            ViolationKind::DanglingReference { target, value } => {
                write!(f, "引用的 {target} 记录 {value} 不存在")
            }
        }
    }
}

/// 单列违例
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// 出错的逻辑列名
    pub column: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(column: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            column: column.into(),
            kind,
        }
    }
}

/// 一次写入的全部约束违例
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    pub table: String,
    pub violations: Vec<FieldViolation>,
    message: String,
}

impl ConstraintViolation {
    pub fn new(table: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        let table = table.into();
        let details: Vec<String> = violations
            .iter()
            .map(|v| format!("{}: {}", v.column, v.kind))
            .collect();
        let message = format!("{table} 写入被拒绝: {}", details.join("; "));
        Self {
            table,
            violations,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 第一个出错列
    pub fn column(&self) -> Option<&str> {
        self.violations.first().map(|v| v.column.as_str())
    }

    /// 指定列上的违例
    pub fn on(&self, column: &str) -> Option<&ViolationKind> {
        self.violations
            .iter()
            .find(|v| v.column == column)
            .map(|v| &v.kind)
    }
}

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义（另含结构化的 `Constraint` 变体）
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_model_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?
    ; Constraint($constraint_code:literal, $constraint_name:literal)) => {
        #[derive(Debug, Clone)]
        pub enum ModelError {
            $($variant(String),)*
            Constraint(ConstraintViolation),
        }

        impl ModelError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ModelError::$variant(_) => $code,)*
                    ModelError::Constraint(_) => $constraint_code,
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ModelError::$variant(_) => $type_name,)*
                    ModelError::Constraint(_) => $constraint_name,
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ModelError::$variant(msg) => msg,)*
                    ModelError::Constraint(violation) => violation.message(),
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ModelError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ModelError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_model_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Migration("E004", "Migration Error"),
    Schema("E005", "Schema Definition Error"),
    Association("E006", "Association Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Config("E010", "Configuration Error");
    Constraint("E011", "Constraint Violation")
}

impl ModelError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 约束违例详情
    pub fn constraint(&self) -> Option<&ConstraintViolation> {
        match self {
            ModelError::Constraint(violation) => Some(violation),
            _ => None,
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ModelError {}

impl From<ConstraintViolation> for ModelError {
    fn from(violation: ConstraintViolation) -> Self {
        ModelError::Constraint(violation)
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ModelError {
    fn from(err: sea_orm::DbErr) -> Self {
        ModelError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ModelError {
    fn from(err: config::ConfigError) -> Self {
        ModelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
