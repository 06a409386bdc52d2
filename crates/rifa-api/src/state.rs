//! Application state shared across all handlers.

use std::sync::Arc;

use rifa_core::config::AppConfig;
use rifa_service::auth::AuthService;
use rifa_service::reservation::ReservationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Admin credential checker.
    pub auth_service: Arc<AuthService>,
    /// Reservation lifecycle service.
    pub reservation_service: Arc<ReservationService>,
}
