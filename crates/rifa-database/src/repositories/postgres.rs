//! PostgreSQL reservation repository.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use rifa_core::error::{AppError, ErrorKind};
use rifa_core::result::AppResult;
use rifa_entity::Reservation;

use super::reservation::ReservationRepository;

/// Reservation repository backed by PostgreSQL.
///
/// Assigned numbers live in an `INT[]` column; all queries are
/// runtime-checked so the crate builds without a database.
#[derive(Debug, Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new Postgres reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO reservations \
             (id, code, buyer_name, phone, city, email, combo_size, assigned_numbers, \
              confirmed, free_entry, created_at, confirmed_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(reservation.id)
        .bind(&reservation.code)
        .bind(&reservation.buyer_name)
        .bind(&reservation.phone)
        .bind(&reservation.city)
        .bind(&reservation.email)
        .bind(reservation.combo_size)
        .bind(&reservation.assigned_numbers)
        .bind(reservation.confirmed)
        .bind(reservation.free_entry)
        .bind(reservation.created_at)
        .bind(reservation.confirmed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert reservation", e)
        })?;
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load reservation", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE email = $1 ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations by email", e)
        })
    }

    async fn find_confirmed_by_number(&self, number: i32) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE confirmed = TRUE AND $1 = ANY(assigned_numbers)",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up number owner", e)
        })
    }

    async fn code_exists(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reservations WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check code existence", e)
        })
    }

    async fn free_entry_exists_for_email(&self, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reservations WHERE free_entry = TRUE AND email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check free entry", e)
        })
    }

    async fn confirmed_numbers(&self) -> AppResult<HashSet<i32>> {
        let rows: Vec<Vec<i32>> = sqlx::query_scalar(
            "SELECT assigned_numbers FROM reservations WHERE confirmed = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to derive used numbers", e)
        })?;

        Ok(rows.into_iter().flatten().collect())
    }

    async fn mark_confirmed(&self, code: &str, at: DateTime<Utc>) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET confirmed = TRUE, confirmed_at = $2 \
             WHERE code = $1 AND confirmed = FALSE RETURNING *",
        )
        .bind(code)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to confirm reservation", e)
        })?
        .ok_or_else(|| {
            AppError::not_found(format!("No unconfirmed reservation with code {code}"))
        })
    }
}
