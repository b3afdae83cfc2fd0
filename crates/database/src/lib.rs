//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::organization::OrganizationInfo;
pub use models::project_bookmark::{BookmarkAdd, ProjectBookmarkInfo};
pub use models::saved_query::{HomepageQueryUpdate, HomepageQueryUpsert, SavedQueryInfo};
pub use repositories::{
    organization::OrganizationRepository, project_bookmark::ProjectBookmarkRepository, saved_query::SavedQueryRepository,
    traits::OrganizationRepositoryTrait, traits::ProjectBookmarkRepositoryTrait, traits::SavedQueryRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
