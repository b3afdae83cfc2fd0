//! 主页查询相关接口
//!
//! 每个用户在每个组织内可以把一条保存的查询设置为自己的主页查询
//! （homepage query），作为进入Discover页面时的默认视图。
//! 这里提供读取/设置/清除三个操作，POST未注册，axum会自动返回405。

use crate::auth::CurrentUser;
use crate::models::discover::{HomepageQueryPayload, SavedQueryInfo};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use color_eyre::Result;
use database::{HomepageQueryUpdate, OrganizationRepositoryTrait, ProjectBookmarkRepositoryTrait, SavedQueryRepositoryTrait};
use tracing::debug;
use validator::Validate;

/// 获取当前用户的主页查询
///
/// 返回当前用户在该组织内标记为主页的查询。不存在时返回204空响应，
/// 这是一个合法的空状态而不是错误。
#[utoipa::path(get,
    path = "/organizations/{org_slug}/discover/homepage",
    tag = "discover",
    params(
        ("org_slug" = String, Path, description = "组织slug")
    ),
    responses(
        (status = 200, description = "Homepage query", body = SavedQueryInfo),
        (status = 204, description = "No homepage query for this user")
    ),
)]
pub async fn get_homepage_query<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
    Path(org_slug): Path<String>,
) -> Result<Response, AppError> {
    debug!("🔍 获取主页查询 - 组织: {}, 用户: {}", org_slug, user.user_id);

    let organization = state.organization_repository.get_organization_by_slug(&org_slug).await?;

    let saved_query = state
        .saved_query_repository
        .get_homepage_query(organization.id, user.user_id)
        .await?;

    match saved_query {
        Some(saved_query) => Ok((StatusCode::OK, Json(SavedQueryInfo::from(saved_query))).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// 设置当前用户的主页查询
///
/// upsert语义：已存在主页查询时原地更新名称和查询文档并返回204；
/// 不存在时新建一条 `is_homepage = true` 的记录并返回201。
///
/// 同一用户的并发PUT由数据库唯一约束串行化，不会产生两条主页记录。
#[utoipa::path(put,
    path = "/organizations/{org_slug}/discover/homepage",
    tag = "discover",
    request_body = HomepageQueryPayload,
    responses(
        (status = 201, description = "Homepage query created", body = SavedQueryInfo),
        (status = 204, description = "Existing homepage query updated")
    ),
)]
pub async fn put_homepage_query<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
    Path(org_slug): Path<String>,
    Json(payload): Json<HomepageQueryPayload>,
) -> Result<Response, AppError> {
    debug!("📝 设置主页查询 - 组织: {}, 用户: {}, 请求: {:#?}", org_slug, user.user_id, payload);

    // 验证输入参数，确保有效性
    payload.validate()?;

    let organization = state.organization_repository.get_organization_by_slug(&org_slug).await?;

    let update = HomepageQueryUpdate {
        name: payload.name,
        query: serde_json::to_value(&payload.query)?,
    };

    let upsert = state
        .saved_query_repository
        .upsert_homepage_query(organization.id, user.user_id, update)
        .await?;

    if upsert.created {
        Ok((StatusCode::CREATED, Json(SavedQueryInfo::from(upsert.saved_query))).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// 清除当前用户的主页查询
///
/// 操作是幂等的，无论记录是否存在都返回204
#[utoipa::path(delete,
    path = "/organizations/{org_slug}/discover/homepage",
    tag = "discover",
    responses(
        (status = 204, description = "Homepage query cleared")
    ),
)]
pub async fn delete_homepage_query<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
    Path(org_slug): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("🗑️ 清除主页查询 - 组织: {}, 用户: {}", org_slug, user.user_id);

    let organization = state.organization_repository.get_organization_by_slug(&org_slug).await?;

    state
        .saved_query_repository
        .clear_homepage_query(organization.id, user.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
