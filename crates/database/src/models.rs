//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod organization;
pub mod project_bookmark;
pub mod saved_query;

// 重新导出具体的模型
pub use organization::OrganizationInfo;
pub use project_bookmark::{BookmarkAdd, ProjectBookmarkInfo};
pub use saved_query::{HomepageQueryUpdate, HomepageQueryUpsert, SavedQueryInfo};
