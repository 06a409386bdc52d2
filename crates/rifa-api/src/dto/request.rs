//! Request DTOs with validation.
//!
//! Structural checks (presence, length) live here; semantic checks
//! (email shape, code shape, combo bounds) live in the service layer
//! where they carry machine-readable reason codes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create-reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// Caller-supplied reservation code.
    pub code: String,
    /// Buyer display name.
    #[validate(length(min = 1, max = 255, message = "Buyer name is required"))]
    pub buyer_name: String,
    /// Buyer phone number.
    #[validate(length(min = 1, max = 64, message = "Phone is required"))]
    pub phone: String,
    /// Buyer city.
    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,
    /// Buyer email address.
    pub email: String,
    /// Number of tickets requested.
    pub combo_size: i32,
}

/// Confirm-reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmReservationRequest {
    /// Code of the reservation to confirm.
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

/// Free-entry request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FreeEntryRequest {
    /// Entrant display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub buyer_name: String,
    /// Entrant phone number.
    #[validate(length(min = 1, max = 64, message = "Phone is required"))]
    pub phone: String,
    /// Entrant city.
    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,
    /// Entrant email address.
    pub email: String,
}
