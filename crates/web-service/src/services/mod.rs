//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，遵循六边形架构原则

pub mod traits;
pub mod users;

pub use traits::UserServiceTrait;
pub use users::UserService;
