//! # rifa-entity
//!
//! Domain entities for the Rifa raffle backend.

pub mod reservation;

pub use reservation::model::{NewReservation, Reservation};
