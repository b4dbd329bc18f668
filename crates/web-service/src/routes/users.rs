//! 用户相关接口
//!
//! 五个接口统一的错误翻译规则：
//! - 查询/更新/删除：记录不存在**或服务调用失败**都返回404，消息为`"User not found <id>"`。
//!   服务错误被折叠进404是从老版本继承下来的行为，调用方无法区分"记录不存在"和"调用失败"，
//!   原始错误只写入日志。
//! - 列表：永远返回HTTP 200，服务错误时body里的`statusCode`为500。
//! - 创建：不做任何翻译，服务错误原样向上传播。

use crate::models::common::{ApiResponse, MSG_SUCCESS, MSG_USERS_DELETE, MSG_USERS_UPDATE};
use crate::models::err::AppError;
use crate::models::users::{UserCreate, UserInfo, UserUpdate};
use crate::services::UserServiceTrait;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, warn};

/// 创建用户
///
/// 根据用户输入参数创建用户信息。
///
/// 与其他接口不同，创建成功时直接返回用户对象本身，**不套** [`ApiResponse`]，
/// 这个不对称是接口契约的一部分。服务层错误也不做翻译，直接转换为500。
#[utoipa::path(post,
    path = "/users",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 201, description = "Created user", body = UserInfo)
    )
)]
pub async fn create_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Json(user): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserInfo>), AppError> {
    debug!("Creating user {:#?}", user);

    // 获取用户服务实例
    let user_service = state.user_service.clone();
    let db_user = database::UserCreate {
        name: user.name,
        email: user.email,
    };
    let user = user_service.create_user(db_user).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// 查询全部用户
///
/// 返回全部用户列表，没有数据时data为空列表，依然是成功。
///
/// 这个接口永远不会返回HTTP层面的错误：服务调用失败时，返回的body里
/// `statusCode`为500、`message`为错误信息，而HTTP状态码仍然是200。
///
/// ## 返回值
///
/// 返回值的类型是 [`Json<ApiResponse<Vec<UserInfo>>>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
/// 2. [`ApiResponse`] 是我们封装的统一返回对象
/// 3. [`UserInfo`] 是实际的业务返回对象
#[utoipa::path(get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserInfo>>)
    )
)]
pub async fn find_users<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
) -> Json<ApiResponse<Vec<UserInfo>>> {
    debug!("🔍 查询全部用户");

    let user_service = state.user_service.clone();

    match user_service.find_users().await {
        Ok(users) => Json(ApiResponse::new(
            StatusCode::OK,
            MSG_SUCCESS,
            users.into_iter().map(Into::into).collect::<Vec<UserInfo>>(),
        )),
        Err(err) => Json(ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())),
    }
}

/// 查询指定用户信息
///
/// 用户不存在或查询失败时返回404，消息为`"User not found <id>"`。
#[utoipa::path(get,
    path = "/users/{id}",
    tag = "users",
    responses(
        (status = 200, description = "User by id", body = ApiResponse<UserInfo>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i32>,
) -> Result<Json<ApiResponse<UserInfo>>, AppError> {
    debug!("Getting user id {:#?}", user_id);

    let user_service = state.user_service.clone();

    match user_service.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(Json(ApiResponse::new(StatusCode::OK, MSG_SUCCESS, user.into()))),
        Ok(None) => Err(AppError::user_not_found(user_id)),
        Err(err) => {
            // 服务错误折叠为404，原始错误只记日志
            warn!("查询用户{}失败，按不存在处理: {err}", user_id);
            Err(AppError::user_not_found(user_id))
        }
    }
}

/// 更新用户信息
///
/// 根据用户指定的 `id` 和 修改信息 [`UserUpdate`] 来更新用户信息。
///
/// 成功时消息为`"User updated <id>"`；用户不存在或更新失败时返回404。
#[utoipa::path(patch,
    path = "/users/{id}",
    tag = "users",
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<UserInfo>),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i32>,
    Json(info): Json<UserUpdate>,
) -> Result<Json<ApiResponse<UserInfo>>, AppError> {
    debug!("Updating user {} with {:#?}", user_id, info);

    let user_service = state.user_service.clone();
    let db_update = database::UserUpdate {
        name: info.name,
        email: info.email,
    };

    match user_service.update_user(user_id, db_update).await {
        Ok(Some(user)) => Ok(Json(ApiResponse::new(
            StatusCode::OK,
            format!("{MSG_USERS_UPDATE} {user_id}"),
            user.into(),
        ))),
        Ok(None) => Err(AppError::user_not_found(user_id)),
        Err(err) => {
            warn!("更新用户{}失败，按不存在处理: {err}", user_id);
            Err(AppError::user_not_found(user_id))
        }
    }
}

/// 删除指定的用户
///
/// 成功时消息为`"User deleted <id>"`，不携带data字段；
/// 用户不存在或删除失败时返回404。
#[utoipa::path(delete,
    path = "/users/{id}",
    tag = "users",
    responses(
        (status = 200, description = "Deleted user", body = ApiResponse<UserInfo>),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i32>,
) -> Result<Json<ApiResponse<UserInfo>>, AppError> {
    debug!("delete user {:#?}", user_id);

    let user_service = state.user_service.clone();

    match user_service.delete_user(user_id).await {
        Ok(Some(_)) => Ok(Json(ApiResponse::message(
            StatusCode::OK,
            format!("{MSG_USERS_DELETE} {user_id}"),
        ))),
        Ok(None) => Err(AppError::user_not_found(user_id)),
        Err(err) => {
            warn!("删除用户{}失败，按不存在处理: {err}", user_id);
            Err(AppError::user_not_found(user_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use database::{DatabaseError, DatabaseResult};
    use std::sync::Arc;

    /// mock服务的行为配置
    #[derive(Clone, Copy)]
    enum MockBehavior {
        /// 记录存在
        Found,
        /// 记录不存在
        Absent,
        /// 服务调用失败
        Error,
    }

    #[derive(Clone)]
    struct MockUserService {
        behavior: MockBehavior,
    }

    fn mock_state(behavior: MockBehavior) -> State<AppState<MockUserService>> {
        State(AppState {
            user_service: Arc::new(MockUserService { behavior }),
        })
    }

    fn sample_user(id: i32) -> database::UserInfo {
        database::UserInfo {
            id,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn mock_error() -> DatabaseError {
        DatabaseError::connection("boom")
    }

    #[async_trait::async_trait]
    impl UserServiceTrait for MockUserService {
        async fn create_user(&self, user: database::UserCreate) -> DatabaseResult<database::UserInfo> {
            match self.behavior {
                MockBehavior::Error => Err(mock_error()),
                _ => Ok(database::UserInfo {
                    id: 1,
                    name: user.name,
                    email: user.email,
                }),
            }
        }

        async fn find_users(&self) -> DatabaseResult<Vec<database::UserInfo>> {
            match self.behavior {
                MockBehavior::Found => Ok(vec![sample_user(1), sample_user(2)]),
                MockBehavior::Absent => Ok(vec![]),
                MockBehavior::Error => Err(mock_error()),
            }
        }

        async fn get_user_by_id(&self, id: i32) -> DatabaseResult<Option<database::UserInfo>> {
            match self.behavior {
                MockBehavior::Found => Ok(Some(sample_user(id))),
                MockBehavior::Absent => Ok(None),
                MockBehavior::Error => Err(mock_error()),
            }
        }

        async fn update_user(&self, id: i32, update: database::UserUpdate) -> DatabaseResult<Option<database::UserInfo>> {
            match self.behavior {
                MockBehavior::Found => {
                    let mut user = sample_user(id);
                    if let Some(name) = update.name {
                        user.name = name;
                    }
                    if let Some(email) = update.email {
                        user.email = email;
                    }
                    Ok(Some(user))
                }
                MockBehavior::Absent => Ok(None),
                MockBehavior::Error => Err(mock_error()),
            }
        }

        async fn delete_user(&self, id: i32) -> DatabaseResult<Option<database::UserInfo>> {
            match self.behavior {
                MockBehavior::Found => Ok(Some(sample_user(id))),
                MockBehavior::Absent => Ok(None),
                MockBehavior::Error => Err(mock_error()),
            }
        }
    }

    fn assert_not_found(err: AppError, id: i32) {
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, format!("User not found {id}")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user_returns_raw_user() {
        let body = UserCreate {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let (status, Json(user)) = create_user(mock_state(MockBehavior::Found), Json(body)).await.unwrap();

        // 创建接口不套ApiResponse，直接返回用户对象
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_user_propagates_service_error() {
        let body = UserCreate {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let err = create_user(mock_state(MockBehavior::Error), Json(body)).await.unwrap_err();

        // 创建接口不做错误翻译，服务错误原样传播为500
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_find_users_success() {
        let Json(reply) = find_users(mock_state(MockBehavior::Found)).await;

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.message, MSG_SUCCESS);
        assert_eq!(reply.data.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_users_empty_is_still_success() {
        let Json(reply) = find_users(mock_state(MockBehavior::Absent)).await;

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.message, MSG_SUCCESS);
        assert_eq!(reply.data.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_find_users_error_is_embedded_not_raised() {
        // 服务错误时handler依然正常返回，错误码只出现在body里
        let Json(reply) = find_users(mock_state(MockBehavior::Error)).await;

        assert_eq!(reply.status_code, 500);
        assert_eq!(reply.message, mock_error().to_string());
        assert!(reply.data.is_none());
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let Json(reply) = get_user(mock_state(MockBehavior::Found), Path(42)).await.unwrap();

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.message, MSG_SUCCESS);
        assert_eq!(reply.data.unwrap().id, 42);
    }

    #[tokio::test]
    async fn test_get_user_absent_is_not_found() {
        let err = get_user(mock_state(MockBehavior::Absent), Path(42)).await.unwrap_err();
        assert_not_found(err, 42);
    }

    #[tokio::test]
    async fn test_get_user_error_collapses_to_not_found() {
        // 服务错误和记录不存在对调用方不可区分
        let err = get_user(mock_state(MockBehavior::Error), Path(42)).await.unwrap_err();
        assert_not_found(err, 42);
    }

    #[tokio::test]
    async fn test_update_user_found() {
        let body = UserUpdate {
            name: Some("bob".to_string()),
            email: None,
        };

        let Json(reply) = update_user(mock_state(MockBehavior::Found), Path(7), Json(body)).await.unwrap();

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.message, "User updated 7");
        let user = reply.data.unwrap();
        assert_eq!(user.name, "bob");
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_user_absent_is_not_found() {
        let body = UserUpdate { name: None, email: None };

        let err = update_user(mock_state(MockBehavior::Absent), Path(7), Json(body)).await.unwrap_err();
        assert_not_found(err, 7);
    }

    #[tokio::test]
    async fn test_update_user_error_collapses_to_not_found() {
        let body = UserUpdate { name: None, email: None };

        let err = update_user(mock_state(MockBehavior::Error), Path(7), Json(body)).await.unwrap_err();
        assert_not_found(err, 7);
    }

    #[tokio::test]
    async fn test_delete_user_found_has_no_data() {
        let Json(reply) = delete_user(mock_state(MockBehavior::Found), Path(5)).await.unwrap();

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.message, "User deleted 5");
        assert!(reply.data.is_none());
    }

    #[tokio::test]
    async fn test_delete_user_absent_is_not_found() {
        let err = delete_user(mock_state(MockBehavior::Absent), Path(5)).await.unwrap_err();
        assert_not_found(err, 5);
    }

    #[tokio::test]
    async fn test_delete_user_error_collapses_to_not_found() {
        let err = delete_user(mock_state(MockBehavior::Error), Path(5)).await.unwrap_err();
        assert_not_found(err, 5);
    }

    #[tokio::test]
    async fn test_not_found_http_shape() {
        let err = get_user(mock_state(MockBehavior::Absent), Path(42)).await.unwrap_err();
        let resp = err.into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["statusCode"], 404);
        assert_eq!(value["message"], "User not found 42");
        assert!(value.as_object().unwrap().get("data").is_none());
    }
}
