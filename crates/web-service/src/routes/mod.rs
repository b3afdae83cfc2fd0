//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::bookmarks::__path_bookmark_project;
use crate::routes::bookmarks::__path_list_bookmarks;
use crate::routes::bookmarks::__path_unbookmark_project;
use crate::routes::bookmarks::{bookmark_project, list_bookmarks, unbookmark_project};
use crate::routes::discover::__path_delete_homepage_query;
use crate::routes::discover::__path_get_homepage_query;
use crate::routes::discover::__path_put_homepage_query;
use crate::routes::discover::{delete_homepage_query, get_homepage_query, put_homepage_query};
use crate::AppState;
use axum::Router;
use database::{OrganizationRepositoryTrait, ProjectBookmarkRepositoryTrait, SavedQueryRepositoryTrait};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod bookmarks;
pub mod discover;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。一般存放数据库连接池之类的全局共享数据。
///
/// 主页查询的三个方法注册在同一个路径上，axum会自动对未注册的方法
/// （例如POST）返回405 Method Not Allowed。
fn routers<SR, BR, OR>(state: AppState<SR, BR, OR>) -> OpenApiRouter
where
    SR: SavedQueryRepositoryTrait,
    BR: ProjectBookmarkRepositoryTrait,
    OR: OrganizationRepositoryTrait,
{
    OpenApiRouter::new()
        .routes(routes!(get_homepage_query, put_homepage_query, delete_homepage_query))
        .routes(routes!(bookmark_project, unbookmark_project))
        .routes(routes!(list_bookmarks))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<SR, BR, OR>(shared_state: AppState<SR, BR, OR>) -> Router
where
    SR: SavedQueryRepositoryTrait,
    BR: ProjectBookmarkRepositoryTrait,
    OR: OrganizationRepositoryTrait,
{
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "discover-backend", description = r#"
Discover后端，覆盖场景：

- 用户主页查询（homepage query）的读取/设置/清除
- 项目收藏
- OpenAPI文档
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
