//! 项目收藏仓库 trait 定义

use crate::models::project_bookmark::{BookmarkAdd, ProjectBookmarkInfo};
use crate::DatabaseResult;

/// 项目收藏仓库trait定义
///
/// 定义了项目收藏相关的数据库操作接口，支持：
/// - 收藏项目（幂等）
/// - 取消收藏（幂等）
/// - 查询用户的收藏列表
#[async_trait::async_trait]
pub trait ProjectBookmarkRepositoryTrait: Send + Sync + 'static {
    /// 收藏项目
    ///
    /// 每个 (project_id, user_id) 组合最多一条记录，重复收藏不会产生新记录。
    ///
    /// # 返回值
    /// 返回收藏记录，`created` 为 false 表示之前已收藏
    async fn add_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<BookmarkAdd>;

    /// 取消收藏项目
    ///
    /// 操作是幂等的，记录不存在时同样返回成功
    async fn remove_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<()>;

    /// 查询用户收藏的所有项目
    async fn list_bookmarks(&self, user_id: i64) -> DatabaseResult<Vec<ProjectBookmarkInfo>>;
}
