use color_eyre::Result;
use shared_lib::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚀 启动 Web Service...");

    let config = AppConfig::load()?;

    // 创建数据库连接池并执行迁移
    let pool = database::initialize_database(config.clone()).await?;

    // ctrl-c触发优雅退出
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到退出信号...");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(config, pool, shutdown_rx).await?;

    Ok(())
}
