//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{
    OrganizationRepository, OrganizationRepositoryTrait, ProjectBookmarkRepository, ProjectBookmarkRepositoryTrait,
    SavedQueryRepository, SavedQueryRepositoryTrait,
};
use shared_lib::AppConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod auth;
pub mod models;
pub mod routes;

#[cfg(test)]
pub mod testing;

/// 应用共享状态
///
/// 泛型参数是各仓库的抽象接口，测试时可替换为内存实现
pub struct AppState<SR, BR, OR>
where
    SR: SavedQueryRepositoryTrait,
    BR: ProjectBookmarkRepositoryTrait,
    OR: OrganizationRepositoryTrait,
{
    pub saved_query_repository: Arc<SR>,
    pub bookmark_repository: Arc<BR>,
    pub organization_repository: Arc<OR>,
}

// 手动实现Clone，避免derive给泛型参数加上不必要的Clone约束
impl<SR, BR, OR> Clone for AppState<SR, BR, OR>
where
    SR: SavedQueryRepositoryTrait,
    BR: ProjectBookmarkRepositoryTrait,
    OR: OrganizationRepositoryTrait,
{
    fn clone(&self) -> Self {
        Self {
            saved_query_repository: self.saved_query_repository.clone(),
            bookmark_repository: self.bookmark_repository.clone(),
            organization_repository: self.organization_repository.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<SavedQueryRepository, ProjectBookmarkRepository, OrganizationRepository>;

/// 启动 Web 服务
pub async fn start_web_service(config: Arc<AppConfig>, pool: Pool<Postgres>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state: ConcreteAppState = AppState {
        saved_query_repository: Arc::new(SavedQueryRepository::new(pool.clone())),
        bookmark_repository: Arc::new(ProjectBookmarkRepository::new(pool.clone())),
        organization_repository: Arc::new(OrganizationRepository::new(pool)),
    };

    let router = routes::create_app_router(shared_state);

    let bind_addr = &config.web.bind_addr;
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
