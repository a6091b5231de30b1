use shared::utilities::{config::Config, errors::AppError};
use tokio::net::TcpListener;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;
use vehicle_market::{build_router, services::database::Database, utilities::app_state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let config = Config::init().await?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(config.tracing_level).into())
                .from_env_lossy(),
        )
        .init();

    let database = Database::new(&config).await?;

    let listener = TcpListener::bind(&config.server_address).await?;
    info!("🚗 Vehicle market listening on http://{}", config.server_address);

    let app = build_router(AppState { database, config })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl+c, {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
