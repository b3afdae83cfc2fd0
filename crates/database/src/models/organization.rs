//! 组织数据库模型

/// 组织信息结构体
///
/// 仅用于将url中的slug解析为组织ID，组织的其他信息由外部系统管理
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizationInfo {
    pub id: i64,
    pub slug: String,
    pub name: String,
}
