//! 用户仓库
//!
//! 负责用户相关的数据库操作

use crate::models::user::{UserCreate, UserInfo, UserUpdate};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 用户仓库结构体
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// 创建新的用户仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    /// 创建新用户
    ///
    /// 根据用户输入参数创建用户信息
    ///
    /// # 参数
    /// - `user`: 用户创建信息
    ///
    /// # 返回值
    /// 返回创建的用户信息
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo> {
        debug!("📝 创建用户: {:#?}", user);

        let user_info = sqlx::query_as::<_, UserInfo>(
            r#"
            INSERT INTO users (name, email, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING id, name, email;
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 用户创建成功: {:#?}", user_info);
        Ok(user_info)
    }

    /// 查询全部用户
    ///
    /// # 返回值
    /// 返回用户列表 [`Vec<UserInfo>`]，没有数据时返回空列表
    async fn find_users(&self) -> DatabaseResult<Vec<UserInfo>> {
        debug!("🔍 查询全部用户");

        let users = sqlx::query_as::<_, UserInfo>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id;
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个用户", users.len());
        Ok(users)
    }

    /// 根据 ID 获取用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回用户信息，用户不存在时返回 `None`
    async fn get_user_by_id(&self, id: i32) -> DatabaseResult<Option<UserInfo>> {
        debug!("🔍 根据 ID 获取用户: {}", id);

        let user = sqlx::query_as::<_, UserInfo>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            LIMIT 1;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        debug!("✅ 用户获取完成: {:#?}", user);
        Ok(user)
    }

    /// 更新用户信息
    ///
    /// 根据用户指定的 `id` 和 修改信息 [`UserUpdate`] 来更新用户信息。
    ///
    /// ## SQL
    ///
    /// 由于更新数据中的字段大部分都是[`Option`]，因此我们使用了`postgresql`中的`coalesce`函数，如果用户输入的值
    /// 为None，那么会被转换为数据库的null，最终被转换为之前值。
    ///
    /// 两个好处：
    /// - 防止前端输入了空数据，导致数据被误清除
    /// - 不用`if`拼接的方式，代码可维护性更好
    ///
    /// # 参数
    /// - `id`: 用户 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的用户信息，用户不存在时返回 `None`
    async fn update_user(&self, id: i32, update: UserUpdate) -> DatabaseResult<Option<UserInfo>> {
        debug!("🔄 更新用户 {} 信息: {:#?}", id, update);

        let user = sqlx::query_as::<_, UserInfo>(
            r#"
            UPDATE users
            SET name       = coalesce($2, name),
                email      = coalesce($3, email),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, email;
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.email)
        .fetch_optional(&self.pool)
        .await?;

        debug!("✅ 用户更新完成: {:#?}", user);
        Ok(user)
    }

    /// 删除用户
    ///
    /// 删除指定的用户
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回被删除的用户信息，用户不存在时返回 `None`
    async fn delete_user(&self, id: i32) -> DatabaseResult<Option<UserInfo>> {
        debug!("🗑️ 删除用户: {}", id);

        let user = sqlx::query_as::<_, UserInfo>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        debug!("✅ 用户删除完成: {:#?}", user);
        Ok(user)
    }
}
