//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rifa_entity::Reservation;
use rifa_service::reservation::NotificationOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Role of the matched account.
    pub role: String,
    /// Greeting message.
    pub message: String,
}

/// A reservation as returned to its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Reservation code.
    pub code: String,
    /// Buyer display name.
    pub buyer_name: String,
    /// Buyer city.
    pub city: String,
    /// Number of tickets.
    pub combo_size: i32,
    /// Assigned ticket numbers, ascending.
    pub assigned_numbers: Vec<i32>,
    /// Whether the reservation is confirmed.
    pub confirmed: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            code: r.code,
            buyer_name: r.buyer_name,
            city: r.city,
            combo_size: r.combo_size,
            assigned_numbers: r.assigned_numbers,
            confirmed: r.confirmed,
            created_at: r.created_at,
        }
    }
}

/// Confirmation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    /// Reservation code.
    pub code: String,
    /// The confirmed ticket numbers, ascending.
    pub assigned_numbers: Vec<i32>,
    /// What happened to the result email.
    pub notification: NotificationOutcome,
}

/// Sales progress response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// Numbers sold (confirmed).
    pub sold: usize,
    /// Total pool size.
    pub total: usize,
}

/// One entry in a by-email listing.
///
/// Pending entries expose no numbers: nothing is final until the
/// reservation confirms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailEntry {
    /// Reservation code.
    pub code: String,
    /// `"ok"` for confirmed, `"pending"` otherwise.
    pub status: String,
    /// Assigned numbers, present only once confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_numbers: Option<Vec<i32>>,
}

impl From<Reservation> for EmailEntry {
    fn from(r: Reservation) -> Self {
        if r.confirmed {
            Self {
                code: r.code,
                status: "ok".to_string(),
                assigned_numbers: Some(r.assigned_numbers),
            }
        } else {
            Self {
                code: r.code,
                status: "pending".to_string(),
                assigned_numbers: None,
            }
        }
    }
}

/// By-email listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReservationsResponse {
    /// `"ok"` when any entry is confirmed, `"pending"` when entries
    /// exist but none is confirmed, `"not-found"` otherwise.
    pub status: String,
    /// The entries, oldest first.
    pub entries: Vec<EmailEntry>,
}

/// Code existence response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    /// Whether a reservation with the code exists.
    pub exists: bool,
}

/// Owner of a confirmed ticket number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberOwnerResponse {
    /// Buyer display name.
    pub buyer_name: String,
    /// Buyer city.
    pub city: String,
    /// Reservation code holding the number.
    pub code: String,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}
