//! 数据模型模块
//!
//! 定义API层使用的请求、响应模型

pub mod common;
pub mod err;
pub mod users;
