//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod organization;
pub mod project_bookmark;
pub mod saved_query;
pub mod traits;

// 重新导出具体的类型
pub use organization::OrganizationRepository;
pub use project_bookmark::ProjectBookmarkRepository;
pub use saved_query::SavedQueryRepository;
pub use traits::{OrganizationRepositoryTrait, ProjectBookmarkRepositoryTrait, SavedQueryRepositoryTrait};
