//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! 所有 Repository trait 都遵循统一的设计模式，实现以下 trait 约束：
//!
//! ```text
//! pub trait XxxRepositoryTrait: Send + Sync + Clone + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：异步方法返回的 `Future` 需要在线程间传递，Repository
//!   实例作为共享服务被多个并发请求访问
//! - `Clone`：依赖注入时需要克隆 Repository 实例传递给服务层
//! - `'static`：异步 trait 方法返回的 `Future` 需要 `'static` 生命周期

pub mod user;

// 重新导出
pub use user::UserRepositoryTrait;
