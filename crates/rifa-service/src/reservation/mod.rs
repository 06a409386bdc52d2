//! Reservation lifecycle.

pub mod service;

pub use service::{ConfirmedReservation, NotificationOutcome, Progress, ReservationService};
