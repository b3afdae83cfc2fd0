use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// Web服务配置
pub struct WebConfig {
    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `WEB_BIND_ADDR` 来调整，默认 `0.0.0.0:8080`
    pub bind_addr: String,
}

/// 程序配置
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// Web服务配置
    pub web: WebConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            web: WebConfig {
                bind_addr: std::env::var("WEB_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            },
        };
        Ok(Arc::new(config))
    }
}
