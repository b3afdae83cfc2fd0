//! 查询收藏仓库
//!
//! 负责主页查询相关的数据库操作

use crate::models::saved_query::{HomepageQueryUpdate, HomepageQueryUpsert, SavedQueryInfo};
use crate::repositories::traits::SavedQueryRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 查询收藏仓库结构体
#[derive(Debug, Clone)]
pub struct SavedQueryRepository {
    pool: PgPool,
}

impl SavedQueryRepository {
    /// 创建新的查询收藏仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// upsert查询的返回行
///
/// 除了记录本身还带回 `inserted` 标志，用于区分新建和更新
#[derive(sqlx::FromRow)]
struct HomepageUpsertRow {
    #[sqlx(flatten)]
    saved_query: SavedQueryInfo,
    inserted: bool,
}

#[async_trait::async_trait]
impl SavedQueryRepositoryTrait for SavedQueryRepository {
    /// 查询用户在组织内标记为主页的查询
    ///
    /// 由于部分唯一索引的存在，符合条件的记录最多只有一条
    async fn get_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<Option<SavedQueryInfo>> {
        debug!("🔍 查询主页查询 - 组织: {}, 用户: {}", organization_id, user_id);

        let saved_query = sqlx::query_as::<_, SavedQueryInfo>(
            r#"
            SELECT id, organization_id, created_by_id, name, query, is_homepage, created_at, updated_at
            FROM discover.saved_queries
            WHERE organization_id = $1
              AND created_by_id = $2
              AND is_homepage
            LIMIT 1
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!("✅ 主页查询获取成功 - 存在: {}", saved_query.is_some());
        Ok(saved_query)
    }

    /// 创建或更新用户在组织内的主页查询
    ///
    /// # SQL 查询说明
    ///
    /// 使用 `INSERT ... ON CONFLICT ... DO UPDATE` 实现原子化upsert：
    /// 1. 冲突目标是 `(organization_id, created_by_id) WHERE is_homepage`
    ///    部分唯一索引，并发PUT会在索引上串行化，不会产生两条主页记录
    /// 2. 冲突时只覆盖 `name` 和 `query` 并刷新 `updated_at`
    /// 3. `(xmax = 0)` 在新插入的行上为真，用它区分新建和更新
    async fn upsert_homepage_query(
        &self,
        organization_id: i64,
        user_id: i64,
        update: HomepageQueryUpdate,
    ) -> DatabaseResult<HomepageQueryUpsert> {
        debug!("📝 upsert主页查询 - 组织: {}, 用户: {}, 名称: {}", organization_id, user_id, update.name);

        let row = sqlx::query_as::<_, HomepageUpsertRow>(
            r#"
            INSERT INTO discover.saved_queries (organization_id, created_by_id, name, query, is_homepage, created_at, updated_at)
            VALUES ($1, $2, $3, $4, TRUE, now(), now())
            ON CONFLICT (organization_id, created_by_id) WHERE is_homepage
            DO UPDATE SET name = EXCLUDED.name,
                          query = EXCLUDED.query,
                          updated_at = now()
            RETURNING id, organization_id, created_by_id, name, query, is_homepage, created_at, updated_at,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(&update.name)
        .bind(&update.query)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 主页查询写入成功 - 新建: {}", row.inserted);
        Ok(HomepageQueryUpsert {
            saved_query: row.saved_query,
            created: row.inserted,
        })
    }

    /// 清除用户在组织内的主页查询
    ///
    /// 直接删除记录而不是清除 `is_homepage` 标志，避免废弃记录的存储增长
    async fn clear_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<()> {
        debug!("🗑️ 清除主页查询 - 组织: {}, 用户: {}", organization_id, user_id);

        let result = sqlx::query(
            r#"
            DELETE FROM discover.saved_queries
            WHERE organization_id = $1
              AND created_by_id = $2
              AND is_homepage
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        debug!("✅ 主页查询清除完成 - 删除记录数: {}", result.rows_affected());
        Ok(())
    }
}
