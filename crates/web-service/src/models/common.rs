use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 操作成功的通用消息
pub const MSG_SUCCESS: &str = "success";

/// "用户不存在"消息前缀，完整消息为 `"User not found <id>"`
pub const MSG_USERS_NOT_FOUND: &str = "User not found";

/// "用户已更新"消息前缀，完整消息为 `"User updated <id>"`
pub const MSG_USERS_UPDATE: &str = "User updated";

/// "用户已删除"消息前缀，完整消息为 `"User deleted <id>"`
pub const MSG_USERS_DELETE: &str = "User deleted";

/// 封装统一的API返回对象
///
/// 所有响应body都使用这个结构，包含：
/// - `status_code`: HTTP状态码，序列化为`statusCode`
/// - `message`: 人类可读的消息
/// - `data`: 可选的业务数据，为`None`时整个字段不出现在json中
///
/// 对象每次请求新建，构造后不再修改。
#[derive(Deserialize, Debug, ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub status_code: u16,

    #[schema(example = "success")]
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建携带业务数据的返回对象
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// 创建只携带消息的返回对象，json中不会出现`data`字段
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_with_data() {
        let reply = ApiResponse::new(StatusCode::OK, MSG_SUCCESS, vec![1, 2, 3]);
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["message"], "success");
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_serialize_without_data() {
        let reply = ApiResponse::<()>::message(StatusCode::NOT_FOUND, "User not found 42");
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(value["statusCode"], 404);
        assert_eq!(value["message"], "User not found 42");
        // data为None时字段整个被省略
        assert!(value.as_object().unwrap().get("data").is_none());
    }

    #[test]
    fn test_empty_list_is_still_data() {
        let reply = ApiResponse::new(StatusCode::OK, MSG_SUCCESS, Vec::<i32>::new());
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(value["data"], serde_json::json!([]));
    }
}
