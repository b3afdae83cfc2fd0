//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! 所有 Repository trait 都遵循统一的设计模式，实现以下 trait 约束：
//!
//! ```text
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send`/`Sync`：异步方法返回的 `Future` 需要在不同线程间传递，
//!   仓库实例也会被多个并发请求共享
//! - `'static`：仓库作为应用服务长期运行，不依赖于短期引用
//!
//! Web层的handler通过泛型参数（而非 trait object）使用这些接口，
//! 测试时可以用内存实现替换真实的数据库实现。

pub mod organization;
pub mod project_bookmark;
pub mod saved_query;

// 重新导出
pub use organization::OrganizationRepositoryTrait;
pub use project_bookmark::ProjectBookmarkRepositoryTrait;
pub use saved_query::SavedQueryRepositoryTrait;
