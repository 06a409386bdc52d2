//! Route definitions for the Rifa HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(raffle_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Raffle endpoints: reservations, free entries, progress, lookups
fn raffle_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/raffle/reservations",
            post(handlers::reservation::create),
        )
        .route(
            "/raffle/reservations/confirm",
            post(handlers::reservation::confirm),
        )
        .route(
            "/raffle/free-entries",
            post(handlers::reservation::free_entry),
        )
        .route("/raffle/progress", get(handlers::reservation::progress))
        .route(
            "/raffle/reservations/by-email/{email}",
            get(handlers::reservation::by_email),
        )
        .route(
            "/raffle/reservations/{code}/exists",
            get(handlers::reservation::exists),
        )
        .route(
            "/raffle/numbers/{number}/owner",
            get(handlers::reservation::number_owner),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
