//! 用户数据库模型
//!
//! 定义用户相关的数据库模型结构体

use sqlx::FromRow;

/// 用户信息结构体
#[derive(Debug, Clone, FromRow)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// 用户创建参数
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// 用户更新参数
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
