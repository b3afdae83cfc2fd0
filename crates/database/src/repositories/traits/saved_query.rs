//! 查询收藏仓库 trait 定义
//!
//! 定义主页查询相关数据库操作的抽象接口

use crate::models::saved_query::{HomepageQueryUpdate, HomepageQueryUpsert, SavedQueryInfo};
use crate::DatabaseResult;

/// 查询收藏仓库trait定义
///
/// 定义了主页查询（homepage query）相关的数据库操作接口，支持：
/// - 查询用户在组织内的主页查询
/// - 原子化的创建/更新（upsert）
/// - 清除主页查询
#[async_trait::async_trait]
pub trait SavedQueryRepositoryTrait: Send + Sync + 'static {
    /// 查询用户在组织内标记为主页的查询
    ///
    /// # 参数
    /// - `organization_id`: 组织 ID
    /// - `user_id`: 用户 ID
    ///
    /// # 返回值
    /// 不存在主页查询时返回 `None`，这是一个合法的空状态而不是错误
    async fn get_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<Option<SavedQueryInfo>>;

    /// 创建或更新用户在组织内的主页查询
    ///
    /// 同一个 (organization_id, user_id) 最多只能存在一条主页查询，
    /// 并发调用时由数据库唯一约束保证不会产生重复记录。
    ///
    /// # 参数
    /// - `organization_id`: 组织 ID
    /// - `user_id`: 用户 ID
    /// - `update`: 新的名称和查询文档
    ///
    /// # 返回值
    /// 返回写入后的记录，`created` 标识本次是新建还是更新
    async fn upsert_homepage_query(
        &self,
        organization_id: i64,
        user_id: i64,
        update: HomepageQueryUpdate,
    ) -> DatabaseResult<HomepageQueryUpsert>;

    /// 清除用户在组织内的主页查询
    ///
    /// 操作是幂等的，记录不存在时同样返回成功
    async fn clear_homepage_query(&self, organization_id: i64, user_id: i64) -> DatabaseResult<()>;
}
