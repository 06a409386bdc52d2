//! Reservation handlers — create, confirm, free entry, and lookups.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use rifa_core::error::AppError;
use rifa_entity::NewReservation;

use crate::dto::request::{ConfirmReservationRequest, CreateReservationRequest, FreeEntryRequest};
use crate::dto::response::{
    ApiResponse, ConfirmResponse, EmailEntry, EmailReservationsResponse, ExistsResponse,
    NumberOwnerResponse, ProgressResponse, ReservationResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/raffle/reservations
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let reservation = state
        .reservation_service
        .create(NewReservation {
            code: req.code,
            buyer_name: req.buyer_name,
            phone: req.phone,
            city: req.city,
            email: req.email,
            combo_size: req.combo_size,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(reservation.into())),
    ))
}

/// POST /api/raffle/reservations/confirm
pub async fn confirm(
    State(state): State<AppState>,
    Json(req): Json<ConfirmReservationRequest>,
) -> Result<Json<ApiResponse<ConfirmResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let confirmed = state.reservation_service.confirm(&req.code).await?;

    Ok(Json(ApiResponse::ok(ConfirmResponse {
        code: confirmed.reservation.code,
        assigned_numbers: confirmed.reservation.assigned_numbers,
        notification: confirmed.notification,
    })))
}

/// POST /api/raffle/free-entries
pub async fn free_entry(
    State(state): State<AppState>,
    Json(req): Json<FreeEntryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ConfirmResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .reservation_service
        .free_entry(req.buyer_name, req.phone, req.city, req.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ConfirmResponse {
            code: entry.reservation.code,
            assigned_numbers: entry.reservation.assigned_numbers,
            notification: entry.notification,
        })),
    ))
}

/// GET /api/raffle/progress
pub async fn progress(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProgressResponse>>, ApiError> {
    let progress = state.reservation_service.progress().await?;
    Ok(Json(ApiResponse::ok(ProgressResponse {
        sold: progress.sold,
        total: progress.total,
    })))
}

/// GET /api/raffle/reservations/by-email/{email}
pub async fn by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<EmailReservationsResponse>>, ApiError> {
    let reservations = state.reservation_service.find_by_email(&email).await?;

    let status = if reservations.is_empty() {
        "not-found"
    } else if reservations.iter().any(|r| r.confirmed) {
        "ok"
    } else {
        "pending"
    };

    Ok(Json(ApiResponse::ok(EmailReservationsResponse {
        status: status.to_string(),
        entries: reservations.into_iter().map(EmailEntry::from).collect(),
    })))
}

/// GET /api/raffle/reservations/{code}/exists
pub async fn exists(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ExistsResponse>>, ApiError> {
    let exists = state.reservation_service.exists(&code).await?;
    Ok(Json(ApiResponse::ok(ExistsResponse { exists })))
}

/// GET /api/raffle/numbers/{number}/owner
pub async fn number_owner(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<ApiResponse<NumberOwnerResponse>>, ApiError> {
    let owner = state.reservation_service.number_owner(number).await?;
    Ok(Json(ApiResponse::ok(NumberOwnerResponse {
        buyer_name: owner.buyer_name,
        city: owner.city,
        code: owner.code,
    })))
}
