//! Admin login handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use rifa_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state.auth_service.login(&req.username, &req.password)?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        role: account.role.clone(),
        message: format!("Welcome, {}", account.username),
    })))
}
