//! # rifa-api
//!
//! HTTP layer for the Rifa raffle backend: router, handlers, DTOs,
//! error mapping, and server bootstrap.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
