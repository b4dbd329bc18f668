//! 用户仓库 trait 定义
//!
//! 定义用户数据库操作的抽象接口

use crate::models::user::{UserCreate, UserInfo, UserUpdate};
use crate::DatabaseResult;

/// 用户仓库trait定义
///
/// 定义了用户相关的数据库操作接口，支持：
/// - 用户创建
/// - 用户列表查询
/// - 用户查询
/// - 用户更新
/// - 用户删除
///
/// 查询、更新、删除返回 [`Option`]：`None` 表示记录不存在，不是错误。
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + Clone + 'static {
    /// 创建新用户
    ///
    /// # 参数
    /// - `user`: 用户创建信息
    ///
    /// # 返回值
    /// 返回创建的用户信息
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo>;

    /// 查询全部用户
    ///
    /// # 返回值
    /// 返回用户列表，没有数据时返回空列表
    async fn find_users(&self) -> DatabaseResult<Vec<UserInfo>>;

    /// 根据 ID 获取用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回用户信息，用户不存在时返回 `None`
    async fn get_user_by_id(&self, id: i32) -> DatabaseResult<Option<UserInfo>>;

    /// 更新用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的用户信息，用户不存在时返回 `None`
    async fn update_user(&self, id: i32, update: UserUpdate) -> DatabaseResult<Option<UserInfo>>;

    /// 删除用户
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回被删除的用户信息，用户不存在时返回 `None`
    async fn delete_user(&self, id: i32) -> DatabaseResult<Option<UserInfo>>;
}
