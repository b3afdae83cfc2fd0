//! 测试工具模块
//!
//! 提供仓库trait的内存实现和构造测试路由的辅助函数，
//! 让handler测试不依赖真实的PostgreSQL实例。

use crate::auth::USER_ID_HEADER;
use crate::{routes, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use database::{
    BookmarkAdd, DatabaseError, DatabaseResult, HomepageQueryUpdate, HomepageQueryUpsert, OrganizationInfo,
    OrganizationRepositoryTrait, ProjectBookmarkInfo, ProjectBookmarkRepositoryTrait, SavedQueryInfo,
    SavedQueryRepositoryTrait,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// 测试用的组织slug，内存组织仓库中预置
pub const TEST_ORG_SLUG: &str = "acme";
pub const TEST_ORG_ID: i64 = 1;
pub const TEST_USER_ID: i64 = 42;

/// 主页查询仓库的内存实现
///
/// 用 (organization_id, user_id) 作为key，天然满足
/// 每个用户每个组织最多一条主页查询的约束
#[derive(Default)]
pub struct MemorySavedQueryRepository {
    next_id: AtomicI64,
    rows: Mutex<HashMap<(i64, i64), SavedQueryInfo>>,
}

impl MemorySavedQueryRepository {
    /// 当前所有主页查询记录，测试断言用
    pub fn homepage_rows(&self) -> Vec<SavedQueryInfo> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl SavedQueryRepositoryTrait for MemorySavedQueryRepository {
    async fn get_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<Option<SavedQueryInfo>> {
        Ok(self.rows.lock().unwrap().get(&(organization_id, user_id)).cloned())
    }

    async fn upsert_homepage_query(
        &self,
        organization_id: i64,
        user_id: i64,
        update: HomepageQueryUpdate,
    ) -> DatabaseResult<HomepageQueryUpsert> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&(organization_id, user_id)) {
            Some(row) => {
                // 和SQL实现一致：更新时只覆盖名称和查询文档
                row.name = update.name;
                row.query = update.query;
                row.updated_at = Utc::now();
                Ok(HomepageQueryUpsert {
                    saved_query: row.clone(),
                    created: false,
                })
            }
            None => {
                let now = Utc::now();
                let saved_query = SavedQueryInfo {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                    organization_id,
                    created_by_id: user_id,
                    name: update.name,
                    query: update.query,
                    is_homepage: true,
                    created_at: now,
                    updated_at: now,
                };
                rows.insert((organization_id, user_id), saved_query.clone());
                Ok(HomepageQueryUpsert {
                    saved_query,
                    created: true,
                })
            }
        }
    }

    async fn clear_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<()> {
        self.rows.lock().unwrap().remove(&(organization_id, user_id));
        Ok(())
    }
}

/// 项目收藏仓库的内存实现
#[derive(Default)]
pub struct MemoryProjectBookmarkRepository {
    next_id: AtomicI64,
    rows: Mutex<Vec<ProjectBookmarkInfo>>,
}

impl MemoryProjectBookmarkRepository {
    /// 当前所有收藏记录，测试断言用
    pub fn bookmarks(&self) -> Vec<ProjectBookmarkInfo> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProjectBookmarkRepositoryTrait for MemoryProjectBookmarkRepository {
    async fn add_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<BookmarkAdd> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter()
            .find(|b| b.project_id == Some(project_id) && b.user_id == user_id)
        {
            return Ok(BookmarkAdd {
                bookmark: existing.clone(),
                created: false,
            });
        }

        let bookmark = ProjectBookmarkInfo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            project_id: Some(project_id),
            user_id,
            created_at: Utc::now(),
        };
        rows.push(bookmark.clone());
        Ok(BookmarkAdd { bookmark, created: true })
    }

    async fn remove_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<()> {
        self.rows
            .lock()
            .unwrap()
            .retain(|b| !(b.project_id == Some(project_id) && b.user_id == user_id));
        Ok(())
    }

    async fn list_bookmarks(&self, user_id: i64) -> DatabaseResult<Vec<ProjectBookmarkInfo>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// 组织仓库的内存实现，预置一个slug为 [`TEST_ORG_SLUG`] 的组织
pub struct MemoryOrganizationRepository {
    organizations: HashMap<String, OrganizationInfo>,
}

impl Default for MemoryOrganizationRepository {
    fn default() -> Self {
        let mut organizations = HashMap::new();
        organizations.insert(
            TEST_ORG_SLUG.to_string(),
            OrganizationInfo {
                id: TEST_ORG_ID,
                slug: TEST_ORG_SLUG.to_string(),
                name: "Acme".to_string(),
            },
        );
        Self { organizations }
    }
}

#[async_trait::async_trait]
impl OrganizationRepositoryTrait for MemoryOrganizationRepository {
    async fn get_organization_by_slug(&self, slug: &str) -> DatabaseResult<OrganizationInfo> {
        self.organizations
            .get(slug)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("组织 {slug} 不存在")))
    }
}

/// 测试用的AppState类型
pub type TestState = AppState<MemorySavedQueryRepository, MemoryProjectBookmarkRepository, MemoryOrganizationRepository>;

/// 创建基于内存仓库的共享状态
pub fn test_state() -> TestState {
    AppState {
        saved_query_repository: Arc::new(MemorySavedQueryRepository::default()),
        bookmark_repository: Arc::new(MemoryProjectBookmarkRepository::default()),
        organization_repository: Arc::new(MemoryOrganizationRepository::default()),
    }
}

/// 基于共享状态创建完整的App路由
///
/// state通过引用传入，测试可以保留一份用于检查仓库内容
pub fn test_app(state: &TestState) -> Router {
    routes::create_app_router(state.clone())
}

/// 发送一次请求并返回响应
///
/// - `user_id` 为 `Some` 时注入网关认证头
/// - `body` 为 `Some` 时作为json请求体发送
pub async fn send_request(app: Router, method: &str, uri: &str, user_id: Option<i64>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.oneshot(request).await.expect("response")
}

/// 发送一次带原始用户头的请求
///
/// 和 [`send_request`] 不同，`user_header` 不做任何处理直接注入，
/// 用于测试网关头格式不正确的场景
pub async fn send_request_with_user_header(app: Router, method: &str, uri: &str, user_header: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_ID_HEADER, user_header)
        .body(Body::empty())
        .expect("request");

    app.oneshot(request).await.expect("response")
}

/// 读取响应体并解析为json
pub async fn response_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&body).expect("json body")
}
