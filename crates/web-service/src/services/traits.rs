//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use database::{DatabaseResult, UserCreate, UserInfo, UserUpdate};

/// 用户服务 trait 定义
///
/// 定义了用户相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`UserService`](crate::services::UserService) 提供。
/// 路由层只依赖这个接口，测试时可以注入内存mock实现。
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync + Clone + 'static {
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
