//! 查询收藏（SavedQuery）数据库模型
//!
//! 每个用户在每个组织内最多只能有一条 `is_homepage = true` 的记录，
//! 该约束由数据库的部分唯一索引保证。

use chrono::{DateTime, Utc};

/// 查询收藏信息结构体
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SavedQueryInfo {
    pub id: i64,
    pub organization_id: i64,
    pub created_by_id: i64,
    pub name: String,

    /// 查询文档，包含 fields/conditions/environment 等字段，存储为JSONB
    pub query: serde_json::Value,
    pub is_homepage: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 主页查询的更新参数
#[derive(Debug, Clone)]
pub struct HomepageQueryUpdate {
    pub name: String,
    pub query: serde_json::Value,
}

/// 主页查询upsert的结果
///
/// `created` 用于区分本次操作是新建记录还是更新已有记录，
/// 上层依赖它返回不同的http状态码（201/204）
#[derive(Debug, Clone)]
pub struct HomepageQueryUpsert {
    pub saved_query: SavedQueryInfo,
    pub created: bool,
}
