//! 项目收藏相关的响应模型

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// 项目收藏返回对象
#[derive(Serialize, Debug, ToSchema)]
pub struct ProjectBookmarkInfo {
    pub id: i64,
    pub project_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<database::ProjectBookmarkInfo> for ProjectBookmarkInfo {
    fn from(info: database::ProjectBookmarkInfo) -> Self {
        Self {
            id: info.id,
            project_id: info.project_id,
            user_id: info.user_id,
            created_at: info.created_at,
        }
    }
}
