use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                system_name: "classworks".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite://classworks.db?mode=rwc".to_string(),
                pool_size: 8,
                timeout: 10,
            },
        }
    }
}
