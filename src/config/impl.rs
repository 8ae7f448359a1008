use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("KINDERGARTEN")
                    .separator("__")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "registry.referential_integrity",
                std::env::var("REFERENTIAL_INTEGRITY").ok(),
            )?;

        builder.build()?.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, IntegrityMode};

    #[test]
    fn test_defaults_are_permissive() {
        let config = AppConfig::default();
        assert_eq!(
            config.registry.referential_integrity,
            IntegrityMode::Permissive
        );
        assert!(!config.registry.audit_on_startup);
        assert!(config.is_development());
    }

    #[test]
    fn test_integrity_mode_from_str() {
        assert_eq!("strict".parse::<IntegrityMode>(), Ok(IntegrityMode::Strict));
        assert!("lenient".parse::<IntegrityMode>().is_err());
        assert_eq!(IntegrityMode::Permissive.to_string(), "permissive");
    }

    #[test]
    fn test_deserialize_partial_source() {
        let config: AppConfig = config::Config::builder()
            .set_override("registry.referential_integrity", "strict")
            .unwrap()
            .set_override("database.pool_size", 3)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.registry.referential_integrity, IntegrityMode::Strict);
        assert_eq!(config.database.pool_size, 3);
        assert_eq!(config.app.log_level, "info");
    }
}
