//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{DatabasePool, UserRepository};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

use crate::services::{UserService, UserServiceTrait};

pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
pub struct AppState<US: UserServiceTrait> {
    pub user_service: Arc<US>,
}

impl<US: UserServiceTrait> Clone for AppState<US> {
    fn clone(&self) -> Self {
        Self {
            user_service: self.user_service.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<UserService<UserRepository>>;

/// 启动 Web 服务
pub async fn start_web_service(pool: DatabasePool, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState {
        user_service: Arc::new(UserService::new(UserRepository::new(pool.clone()))),
    };

    let router = routes::create_app_router(shared_state);

    let bind_addr = "0.0.0.0:8080";
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
