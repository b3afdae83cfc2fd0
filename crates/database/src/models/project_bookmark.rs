//! 项目收藏（书签）数据库模型

use chrono::{DateTime, Utc};

/// 项目收藏信息结构体
///
/// 表示用户与项目之间的收藏关系，每个 (project_id, user_id) 组合最多一条记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectBookmarkInfo {
    pub id: i64,

    /// 项目ID，允许为空且不做外键约束，项目聚合由外部系统管理
    pub project_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// 收藏创建的结果
#[derive(Debug, Clone)]
pub struct BookmarkAdd {
    pub bookmark: ProjectBookmarkInfo,

    /// false表示该项目之前已被收藏，本次操作没有写入新记录
    pub created: bool,
}
