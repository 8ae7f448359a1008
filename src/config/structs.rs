use serde::{Deserialize, Serialize};
use std::fmt;

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub registry: RegistryConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "幼儿园管理平台".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "kindergarten.db".to_string(),
            pool_size: 8,
            timeout: 10,
        }
    }
}

impl DatabaseConfig {
    /// 内存 SQLite，单连接保证所有查询落在同一个库上
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        }
    }
}

/// 外键引用完整性模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityMode {
    /// 外键仅作说明，允许悬空引用
    #[default]
    Permissive,
    /// 写入时校验外键指向未删除的行
    Strict,
}

impl fmt::Display for IntegrityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityMode::Permissive => write!(f, "permissive"),
            IntegrityMode::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for IntegrityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(IntegrityMode::Permissive),
            "strict" => Ok(IntegrityMode::Strict),
            _ => Err(format!("无效的引用完整性模式: {s}. 支持: permissive, strict")),
        }
    }
}

/// 注册表配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub referential_integrity: IntegrityMode,
    /// 启动时扫描悬空外键
    pub audit_on_startup: bool,
}
