//! Reservation repository trait and provider dispatch.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use rifa_core::result::AppResult;
use rifa_entity::Reservation;

use super::memory::MemoryReservationRepository;
use super::postgres::PgReservationRepository;

/// CRUD surface over the reservation ledger.
///
/// Implementations are dumb storage: every invariant (unique numbers,
/// unique codes, capacity) is enforced by the reservation service,
/// which serializes all read-decide-write sequences behind its
/// allocation lock. The only state derivation offered here is
/// [`confirmed_numbers`](Self::confirmed_numbers), re-computed from the
/// stored records on every call — there is no counter or free-list to
/// drift out of sync.
#[async_trait]
pub trait ReservationRepository: Send + Sync + std::fmt::Debug {
    /// Persist a freshly allocated reservation.
    async fn insert(&self, reservation: &Reservation) -> AppResult<()>;

    /// Load a reservation by its code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Reservation>>;

    /// Load all reservations for an email, oldest first.
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Reservation>>;

    /// Load the confirmed reservation holding the given number, if any.
    async fn find_confirmed_by_number(&self, number: i32) -> AppResult<Option<Reservation>>;

    /// Whether a reservation with this code exists.
    async fn code_exists(&self, code: &str) -> AppResult<bool>;

    /// Whether this email already registered a free entry.
    async fn free_entry_exists_for_email(&self, email: &str) -> AppResult<bool>;

    /// The union of assigned numbers over all confirmed reservations.
    async fn confirmed_numbers(&self) -> AppResult<HashSet<i32>>;

    /// Flip an unconfirmed reservation to confirmed and return the
    /// updated record. Fails with `NotFound` when no unconfirmed
    /// reservation has this code.
    async fn mark_confirmed(&self, code: &str, at: DateTime<Utc>) -> AppResult<Reservation>;
}

/// Dispatcher over the configured storage provider.
#[derive(Debug)]
pub enum ReservationRepositoryDispatch {
    /// PostgreSQL-backed ledger.
    Postgres(PgReservationRepository),
    /// In-memory ledger for single-node dev/test deployments.
    Memory(MemoryReservationRepository),
}

impl ReservationRepositoryDispatch {
    /// Create a Postgres-backed dispatcher.
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(PgReservationRepository::new(pool))
    }

    /// Create an in-memory dispatcher.
    pub fn memory() -> Self {
        Self::Memory(MemoryReservationRepository::new())
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryDispatch {
    async fn insert(&self, reservation: &Reservation) -> AppResult<()> {
        match self {
            Self::Postgres(inner) => inner.insert(reservation).await,
            Self::Memory(inner) => inner.insert(reservation).await,
        }
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Reservation>> {
        match self {
            Self::Postgres(inner) => inner.find_by_code(code).await,
            Self::Memory(inner) => inner.find_by_code(code).await,
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Reservation>> {
        match self {
            Self::Postgres(inner) => inner.find_by_email(email).await,
            Self::Memory(inner) => inner.find_by_email(email).await,
        }
    }

    async fn find_confirmed_by_number(&self, number: i32) -> AppResult<Option<Reservation>> {
        match self {
            Self::Postgres(inner) => inner.find_confirmed_by_number(number).await,
            Self::Memory(inner) => inner.find_confirmed_by_number(number).await,
        }
    }

    async fn code_exists(&self, code: &str) -> AppResult<bool> {
        match self {
            Self::Postgres(inner) => inner.code_exists(code).await,
            Self::Memory(inner) => inner.code_exists(code).await,
        }
    }

    async fn free_entry_exists_for_email(&self, email: &str) -> AppResult<bool> {
        match self {
            Self::Postgres(inner) => inner.free_entry_exists_for_email(email).await,
            Self::Memory(inner) => inner.free_entry_exists_for_email(email).await,
        }
    }

    async fn confirmed_numbers(&self) -> AppResult<HashSet<i32>> {
        match self {
            Self::Postgres(inner) => inner.confirmed_numbers().await,
            Self::Memory(inner) => inner.confirmed_numbers().await,
        }
    }

    async fn mark_confirmed(&self, code: &str, at: DateTime<Utc>) -> AppResult<Reservation> {
        match self {
            Self::Postgres(inner) => inner.mark_confirmed(code, at).await,
            Self::Memory(inner) => inner.mark_confirmed(code, at).await,
        }
    }
}
