use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::DatabaseError;
use thiserror::Error;

use crate::models::common::{ApiResponse, MSG_USERS_NOT_FOUND};

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在，转换为404，body使用统一的 [`ApiResponse`] 格式
    #[error("{0}")]
    NotFound(String),

    /// 仓库层数据库错误，转换为500
    ///
    /// 只有创建用户接口会走到这里，其他接口对错误有各自的翻译逻辑
    #[error(transparent)]
    DatabaseError(#[from] DatabaseError),
}

impl AppError {
    /// 指定id的用户不存在
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound(format!("{MSG_USERS_NOT_FOUND} {id}"))
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::message(StatusCode::NOT_FOUND, msg)),
            )
                .into_response(),
            AppError::DatabaseError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {err}")).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_message() {
        let err = AppError::user_not_found(42);

        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "User not found 42"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_response_status() {
        let resp = AppError::user_not_found(42).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response_status() {
        let err = AppError::from(DatabaseError::connection("boom"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
