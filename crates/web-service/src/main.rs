use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").wrap_err("Can not load DATABASE_URL in environment")?;

    let pool = database::initialize_database(&db_url).await?;

    // ctrl-c触发优雅停机
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("收到退出信号，开始停机...");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(pool, shutdown_rx).await?;

    Ok(())
}
