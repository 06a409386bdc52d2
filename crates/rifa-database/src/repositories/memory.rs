//! In-memory reservation repository.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use rifa_core::error::AppError;
use rifa_core::result::AppResult;
use rifa_entity::Reservation;

use super::reservation::ReservationRepository;

/// Reservation repository held entirely in process memory.
///
/// Keyed by reservation code. Suitable for single-node dev deployments
/// and tests; everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryReservationRepository {
    records: DashMap<String, Reservation>,
}

impl MemoryReservationRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> AppResult<()> {
        self.records
            .insert(reservation.code.clone(), reservation.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Reservation>> {
        Ok(self.records.get(code).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .records
            .iter()
            .filter(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }

    async fn find_confirmed_by_number(&self, number: i32) -> AppResult<Option<Reservation>> {
        Ok(self
            .records
            .iter()
            .find(|entry| entry.value().confirmed && entry.value().holds_number(number))
            .map(|entry| entry.value().clone()))
    }

    async fn code_exists(&self, code: &str) -> AppResult<bool> {
        Ok(self.records.contains_key(code))
    }

    async fn free_entry_exists_for_email(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .records
            .iter()
            .any(|entry| entry.value().free_entry && entry.value().email == email))
    }

    async fn confirmed_numbers(&self) -> AppResult<HashSet<i32>> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.value().confirmed)
            .flat_map(|entry| entry.value().assigned_numbers.clone())
            .collect())
    }

    async fn mark_confirmed(&self, code: &str, at: DateTime<Utc>) -> AppResult<Reservation> {
        let mut entry = self.records.get_mut(code).ok_or_else(|| {
            AppError::not_found(format!("No unconfirmed reservation with code {code}"))
        })?;
        if entry.confirmed {
            return Err(AppError::not_found(format!(
                "No unconfirmed reservation with code {code}"
            )));
        }
        entry.confirmed = true;
        entry.confirmed_at = Some(at);
        Ok(entry.clone())
    }
}
