//! Reservation repository implementations.

pub mod memory;
pub mod postgres;
pub mod reservation;

pub use reservation::{ReservationRepository, ReservationRepositoryDispatch};
