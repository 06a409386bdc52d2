//! # rifa-service
//!
//! Business logic for the Rifa raffle backend: the number allocation
//! engine, the reservation service that guards the ledger, admin
//! login, and outbound email.

pub mod allocation;
pub mod auth;
pub mod mailer;
pub mod reservation;
