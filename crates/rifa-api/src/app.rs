//! Application bootstrap — wires storage, services, and router.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use rifa_core::config::AppConfig;
use rifa_core::error::AppError;
use rifa_database::connection::DatabasePool;
use rifa_database::migration::run_migrations;
use rifa_database::repositories::ReservationRepositoryDispatch;
use rifa_service::auth::AuthService;
use rifa_service::mailer::MailerDispatch;
use rifa_service::reservation::ReservationService;

use crate::router::build_router;
use crate::state::AppState;

/// Build the application state from configuration and a repository.
pub fn build_state(
    config: AppConfig,
    repo: Arc<ReservationRepositoryDispatch>,
) -> Result<AppState, AppError> {
    let mailer = Arc::new(MailerDispatch::from_config(&config.mailer)?);
    let auth_service = Arc::new(AuthService::new(config.auth.accounts.clone()));
    let reservation_service = Arc::new(ReservationService::new(
        repo,
        mailer,
        config.raffle.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        auth_service,
        reservation_service,
    })
}

/// Create the reservation repository for the configured provider,
/// connecting (and migrating, when enabled) for the Postgres provider.
pub async fn build_repository(
    config: &AppConfig,
) -> Result<ReservationRepositoryDispatch, AppError> {
    match config.database.provider.as_str() {
        "memory" => {
            info!("Using in-memory reservation store");
            Ok(ReservationRepositoryDispatch::memory())
        }
        "postgres" => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.auto_migrate {
                run_migrations(pool.pool()).await?;
            }
            Ok(ReservationRepositoryDispatch::postgres(pool.into_pool()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database provider: {other}"
        ))),
    }
}

/// Run the HTTP server until shutdown.
pub async fn run_server(
    config: AppConfig,
    repo: Arc<ReservationRepositoryDispatch>,
) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, repo)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!(addr = %addr, "Rifa server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

/// Full bootstrap: storage, then server.
pub async fn bootstrap(config: AppConfig) -> Result<(), AppError> {
    let repo = Arc::new(build_repository(&config).await?);
    run_server(config, repo).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
    }
    info!("Shutdown signal received");
}
