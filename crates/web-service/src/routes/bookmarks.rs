//! 项目收藏相关接口
//!
//! 收藏关系属于 (项目, 用户) 二元组，收藏和取消收藏都是幂等操作。

use crate::auth::CurrentUser;
use crate::models::bookmarks::ProjectBookmarkInfo;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use color_eyre::Result;
use database::{OrganizationRepositoryTrait, ProjectBookmarkRepositoryTrait, SavedQueryRepositoryTrait};
use tracing::debug;

/// 收藏项目
///
/// 重复收藏同一个项目不会产生新记录：首次收藏返回201，
/// 已收藏时返回204。
#[utoipa::path(put,
    path = "/projects/{project_id}/bookmark",
    tag = "bookmarks",
    params(
        ("project_id" = i64, Path, description = "项目ID")
    ),
    responses(
        (status = 201, description = "Bookmark created", body = ProjectBookmarkInfo),
        (status = 204, description = "Project already bookmarked")
    ),
)]
pub async fn bookmark_project<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<Response, AppError> {
    debug!("📌 收藏项目 - 项目: {}, 用户: {}", project_id, user.user_id);

    let add = state.bookmark_repository.add_bookmark(project_id, user.user_id).await?;

    if add.created {
        Ok((StatusCode::CREATED, Json(ProjectBookmarkInfo::from(add.bookmark))).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// 取消收藏项目
///
/// 操作是幂等的，无论记录是否存在都返回204
#[utoipa::path(delete,
    path = "/projects/{project_id}/bookmark",
    tag = "bookmarks",
    responses(
        (status = 204, description = "Bookmark removed")
    ),
)]
pub async fn unbookmark_project<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("🗑️ 取消收藏 - 项目: {}, 用户: {}", project_id, user.user_id);

    state.bookmark_repository.remove_bookmark(project_id, user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 查询当前用户收藏的项目列表
#[utoipa::path(get,
    path = "/projects/bookmarks",
    tag = "bookmarks",
    responses(
        (status = 200, description = "Bookmarks of current user", body = Reply<Vec<ProjectBookmarkInfo>>)
    ),
)]
pub async fn list_bookmarks<SR: SavedQueryRepositoryTrait, BR: ProjectBookmarkRepositoryTrait, OR: OrganizationRepositoryTrait>(
    State(state): State<AppState<SR, BR, OR>>,
    user: CurrentUser,
) -> Result<Json<Reply<Vec<ProjectBookmarkInfo>>>, AppError> {
    debug!("🔍 查询收藏列表 - 用户: {}", user.user_id);

    let bookmarks = state.bookmark_repository.list_bookmarks(user.user_id).await?;

    Ok(Json(Reply {
        data: bookmarks.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::{response_json, send_request, test_app, test_state, TEST_USER_ID};
    use axum::http::StatusCode;

    const BOOKMARK_URL: &str = "/api/v1/projects/7/bookmark";
    const LIST_URL: &str = "/api/v1/projects/bookmarks";

    #[tokio::test]
    async fn bookmark_project_creates_record() {
        let state = test_state();

        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, Some(TEST_USER_ID), None).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["project_id"], 7);
        assert_eq!(body["user_id"], TEST_USER_ID);

        let bookmarks = state.bookmark_repository.bookmarks();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].project_id, Some(7));
    }

    #[tokio::test]
    async fn bookmark_project_twice_keeps_single_record() {
        let state = test_state();

        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, Some(TEST_USER_ID), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, Some(TEST_USER_ID), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        assert_eq!(state.bookmark_repository.bookmarks().len(), 1);
    }

    #[tokio::test]
    async fn unbookmark_project_removes_record() {
        let state = test_state();
        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, Some(TEST_USER_ID), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send_request(test_app(&state), "DELETE", BOOKMARK_URL, Some(TEST_USER_ID), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        assert!(state.bookmark_repository.bookmarks().is_empty());
    }

    #[tokio::test]
    async fn unbookmark_is_idempotent_without_existing_record() {
        let state = test_state();

        let response = send_request(test_app(&state), "DELETE", BOOKMARK_URL, Some(TEST_USER_ID), None).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn list_returns_only_own_bookmarks() {
        let state = test_state();
        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, Some(TEST_USER_ID), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let response = send_request(test_app(&state), "PUT", "/api/v1/projects/8/bookmark", Some(TEST_USER_ID + 1), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send_request(test_app(&state), "GET", LIST_URL, Some(TEST_USER_ID), None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let data = body["data"].as_array().expect("data array");
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["project_id"], 7);
    }

    #[tokio::test]
    async fn bookmark_requires_authentication() {
        let state = test_state();

        let response = send_request(test_app(&state), "PUT", BOOKMARK_URL, None, None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
