//! 组织仓库 trait 定义

use crate::models::organization::OrganizationInfo;
use crate::DatabaseResult;

/// 组织仓库trait定义
///
/// 负责将url路径中的组织slug解析为组织信息
#[async_trait::async_trait]
pub trait OrganizationRepositoryTrait: Send + Sync + 'static {
    /// 根据slug获取组织信息
    ///
    /// # 返回值
    /// slug不存在时返回 [`DatabaseError::NotFound`]，最终转换为404
    ///
    /// [`DatabaseError::NotFound`]: crate::DatabaseError::NotFound
    async fn get_organization_by_slug(&self, slug: &str) -> DatabaseResult<OrganizationInfo>;
}
