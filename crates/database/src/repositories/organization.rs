//! 组织仓库
//!
//! 负责组织相关的数据库操作

use crate::models::organization::OrganizationInfo;
use crate::repositories::traits::OrganizationRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// 组织仓库结构体
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    /// 创建新的组织仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl OrganizationRepositoryTrait for OrganizationRepository {
    /// 根据slug获取组织信息
    async fn get_organization_by_slug(&self, slug: &str) -> DatabaseResult<OrganizationInfo> {
        debug!("🔍 根据slug获取组织: {}", slug);

        let organization = sqlx::query_as::<_, OrganizationInfo>(
            r#"
            SELECT id, slug, name
            FROM discover.organizations
            WHERE slug = $1
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("组织 {slug} 不存在")))?;

        debug!("✅ 组织获取成功: {:?}", organization);
        Ok(organization)
    }
}
