//! 项目收藏仓库
//!
//! 负责项目收藏相关的数据库操作

use crate::models::project_bookmark::{BookmarkAdd, ProjectBookmarkInfo};
use crate::repositories::traits::ProjectBookmarkRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 项目收藏仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectBookmarkRepository {
    pool: PgPool,
}

impl ProjectBookmarkRepository {
    /// 创建新的项目收藏仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectBookmarkRepositoryTrait for ProjectBookmarkRepository {
    /// 收藏项目
    ///
    /// # SQL 查询说明
    ///
    /// 使用 `ON CONFLICT DO NOTHING` 保证 (project_id, user_id) 的唯一约束：
    /// 重复收藏时插入不返回行，再查出已有记录返回给上层
    async fn add_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<BookmarkAdd> {
        debug!("📌 收藏项目 - 项目: {}, 用户: {}", project_id, user_id);

        let inserted = sqlx::query_as::<_, ProjectBookmarkInfo>(
            r#"
            INSERT INTO discover.project_bookmarks (project_id, user_id, created_at)
            VALUES ($1, $2, now())
            ON CONFLICT (project_id, user_id) DO NOTHING
            RETURNING id, project_id, user_id, created_at
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(bookmark) = inserted {
            debug!("✅ 收藏创建成功: {:?}", bookmark);
            return Ok(BookmarkAdd { bookmark, created: true });
        }

        // 冲突说明记录已存在，查出已有记录
        let bookmark = sqlx::query_as::<_, ProjectBookmarkInfo>(
            r#"
            SELECT id, project_id, user_id, created_at
            FROM discover.project_bookmarks
            WHERE project_id = $1
              AND user_id = $2
            LIMIT 1
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目已收藏过: {:?}", bookmark);
        Ok(BookmarkAdd { bookmark, created: false })
    }

    /// 取消收藏项目
    async fn remove_bookmark(&self, project_id: i64, user_id: i64) -> DatabaseResult<()> {
        debug!("🗑️ 取消收藏 - 项目: {}, 用户: {}", project_id, user_id);

        let result = sqlx::query(
            r#"
            DELETE FROM discover.project_bookmarks
            WHERE project_id = $1
              AND user_id = $2
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        debug!("✅ 取消收藏完成 - 删除记录数: {}", result.rows_affected());
        Ok(())
    }

    /// 查询用户收藏的所有项目
    async fn list_bookmarks(&self, user_id: i64) -> DatabaseResult<Vec<ProjectBookmarkInfo>> {
        debug!("🔍 查询用户收藏列表 - 用户: {}", user_id);

        let bookmarks = sqlx::query_as::<_, ProjectBookmarkInfo>(
            r#"
            SELECT id, project_id, user_id, created_at
            FROM discover.project_bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 收藏列表查询完成 - 共 {} 条", bookmarks.len());
        Ok(bookmarks)
    }
}
