//! Reservation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A buyer's reservation of one or more ticket numbers.
///
/// Created once at allocation time, mutated at most once (confirmation),
/// never deleted by the system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// Caller-supplied reservation code, unique across all reservations.
    pub code: String,
    /// Buyer display name.
    pub buyer_name: String,
    /// Buyer phone number, opaque.
    pub phone: String,
    /// Buyer city, opaque.
    pub city: String,
    /// Buyer email address.
    pub email: String,
    /// Number of tickets requested.
    pub combo_size: i32,
    /// Ticket numbers assigned to this reservation, stored ascending.
    pub assigned_numbers: Vec<i32>,
    /// Whether payment was confirmed. Only confirmed reservations
    /// occupy their numbers in the pool.
    pub confirmed: bool,
    /// Whether this record came from the free-entry sub-flow.
    pub free_entry: bool,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was confirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Whether this reservation holds the given ticket number.
    pub fn holds_number(&self, number: i32) -> bool {
        self.assigned_numbers.binary_search(&number).is_ok()
    }
}

/// Data required to create a new reservation.
///
/// Numbers are not part of the input: the service draws them from the
/// pool at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    /// Caller-supplied reservation code.
    pub code: String,
    /// Buyer display name.
    pub buyer_name: String,
    /// Buyer phone number.
    pub phone: String,
    /// Buyer city.
    pub city: String,
    /// Buyer email address.
    pub email: String,
    /// Number of tickets requested.
    pub combo_size: i32,
}
