use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 用户信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct UserInfo {
    #[schema(example = 15)]
    /// 用户ID
    pub id: i32,

    #[schema(example = "alice")]
    /// 用户名称
    pub name: String,

    #[schema(example = "alice@example.com")]
    /// 用户邮箱
    pub email: String,
}

impl From<database::UserInfo> for UserInfo {
    fn from(user: database::UserInfo) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// 创建用户的请求body
///
/// 字段内容不做校验，由数据层负责
#[derive(Deserialize, Debug, ToSchema)]
pub struct UserCreate {
    #[schema(example = "alice")]
    /// 新建用户名称
    pub name: String,

    #[schema(example = "alice@example.com")]
    /// 新建用户邮箱
    pub email: String,
}

/// 更新用户的请求body，所有字段都是可选的
#[derive(Deserialize, Debug, ToSchema)]
pub struct UserUpdate {
    #[schema(example = "bob")]
    /// 更新后的用户名称
    pub name: Option<String>,

    #[schema(example = "bob@example.com")]
    /// 更新后的用户邮箱
    pub email: Option<String>,
}
