//! Reservation service: allocation, confirmation, and ledger queries.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;
use validator::ValidateEmail;

use rifa_core::config::raffle::RaffleConfig;
use rifa_core::error::{AppError, reasons};
use rifa_core::result::AppResult;
use rifa_database::repositories::{ReservationRepository, ReservationRepositoryDispatch};
use rifa_entity::{NewReservation, Reservation};

use crate::allocation::AllocationEngine;
use crate::mailer::{Mailer, MailerDispatch};

/// Longest accepted reservation code.
const MAX_CODE_LENGTH: usize = 64;

/// Outcome of the result email attached to a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationOutcome {
    /// The result email was handed to the provider.
    Sent,
    /// Delivery failed; the state change stands regardless.
    Failed,
    /// Delivery is switched off for this deployment.
    Disabled,
}

/// A confirmed reservation together with its notification outcome.
#[derive(Debug, Clone)]
pub struct ConfirmedReservation {
    /// The updated reservation record.
    pub reservation: Reservation,
    /// What happened to the result email.
    pub notification: NotificationOutcome,
}

/// Sales progress, re-derived from the ledger on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progress {
    /// Count of numbers across all confirmed reservations.
    pub sold: usize,
    /// Total pool size.
    pub total: usize,
}

/// Owns the ledger consistency discipline.
///
/// Every read-derive-decide-write sequence (creation, free entry,
/// confirmation) runs under one global allocation lock, so no two
/// requests can observe the same used set and both commit. The used
/// set itself is always re-derived from the stored records — only
/// confirmed reservations occupy their numbers.
#[derive(Debug)]
pub struct ReservationService {
    repo: Arc<ReservationRepositoryDispatch>,
    engine: AllocationEngine,
    mailer: Arc<MailerDispatch>,
    config: RaffleConfig,
    allocation_lock: Mutex<()>,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(
        repo: Arc<ReservationRepositoryDispatch>,
        mailer: Arc<MailerDispatch>,
        config: RaffleConfig,
    ) -> Self {
        let engine = AllocationEngine::new(config.range_min, config.range_max);
        Self {
            repo,
            engine,
            mailer,
            config,
            allocation_lock: Mutex::new(()),
        }
    }

    /// Create a reservation: validate, draw numbers, persist.
    pub async fn create(&self, new: NewReservation) -> AppResult<Reservation> {
        validate_email(&new.email)?;
        validate_code(&new.code)?;
        self.validate_combo(new.combo_size)?;

        let _guard = self.allocation_lock.lock().await;

        if self.repo.code_exists(&new.code).await? {
            return Err(
                AppError::conflict(format!("A reservation with code {} already exists", new.code))
                    .with_reason(reasons::DUPLICATE_CODE),
            );
        }

        let used = self.repo.confirmed_numbers().await?;
        let numbers = self.engine.draw(new.combo_size as usize, &used)?;

        let reservation = Reservation {
            id: Uuid::new_v4(),
            code: new.code,
            buyer_name: new.buyer_name,
            phone: new.phone,
            city: new.city,
            email: new.email,
            combo_size: new.combo_size,
            assigned_numbers: numbers,
            confirmed: false,
            free_entry: false,
            created_at: Utc::now(),
            confirmed_at: None,
        };
        self.repo.insert(&reservation).await?;

        info!(
            code = %reservation.code,
            combo_size = reservation.combo_size,
            "Created reservation"
        );
        Ok(reservation)
    }

    /// Confirm a reservation, freezing its numbers and emailing the result.
    ///
    /// A pending reservation does not occupy its numbers, so another
    /// reservation may have confirmed an overlapping draw in the
    /// meantime; that case fails with `NUMBERS_TAKEN` instead of
    /// breaking the confirmed-union invariant.
    pub async fn confirm(&self, code: &str) -> AppResult<ConfirmedReservation> {
        let updated = {
            let _guard = self.allocation_lock.lock().await;

            let reservation = self
                .repo
                .find_by_code(code)
                .await?
                .ok_or_else(|| AppError::not_found(format!("No reservation with code {code}")))?;

            if reservation.confirmed {
                return Err(AppError::conflict(format!(
                    "Reservation {code} is already confirmed"
                ))
                .with_reason(reasons::ALREADY_CONFIRMED));
            }

            let used = self.repo.confirmed_numbers().await?;
            if reservation.assigned_numbers.iter().any(|n| used.contains(n)) {
                return Err(AppError::conflict(format!(
                    "The numbers of reservation {code} were confirmed by another buyer"
                ))
                .with_reason(reasons::NUMBERS_TAKEN));
            }

            self.repo.mark_confirmed(code, Utc::now()).await?
        };

        info!(
            code = %updated.code,
            numbers = ?updated.assigned_numbers,
            "Confirmed reservation"
        );

        let notification = self.send_result_email(&updated).await;
        Ok(ConfirmedReservation {
            reservation: updated,
            notification,
        })
    }

    /// Register a free raffle entry: one number, auto-confirmed, at
    /// most one per email.
    pub async fn free_entry(
        &self,
        buyer_name: String,
        phone: String,
        city: String,
        email: String,
    ) -> AppResult<ConfirmedReservation> {
        if !self.config.free_entry_enabled {
            return Err(AppError::conflict("The free-entry raffle is closed"));
        }
        validate_email(&email)?;

        let reservation = {
            let _guard = self.allocation_lock.lock().await;

            if self.repo.free_entry_exists_for_email(&email).await? {
                return Err(AppError::conflict(format!(
                    "{email} already registered a free entry"
                ))
                .with_reason(reasons::FREE_ENTRY_EXISTS));
            }

            let used = self.repo.confirmed_numbers().await?;
            let numbers = self.engine.draw(1, &used)?;
            let code = self.generate_free_code().await?;

            let now = Utc::now();
            let reservation = Reservation {
                id: Uuid::new_v4(),
                code,
                buyer_name,
                phone,
                city,
                email,
                combo_size: 1,
                assigned_numbers: numbers,
                confirmed: true,
                free_entry: true,
                created_at: now,
                confirmed_at: Some(now),
            };
            self.repo.insert(&reservation).await?;
            reservation
        };

        info!(
            code = %reservation.code,
            number = reservation.assigned_numbers[0],
            "Registered free entry"
        );

        let notification = self.send_result_email(&reservation).await;
        Ok(ConfirmedReservation {
            reservation,
            notification,
        })
    }

    /// Sales progress: sold numbers over total pool size.
    pub async fn progress(&self) -> AppResult<Progress> {
        let used = self.repo.confirmed_numbers().await?;
        Ok(Progress {
            sold: used.len(),
            total: self.engine.pool_size(),
        })
    }

    /// All reservations registered under an email, oldest first.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Reservation>> {
        self.repo.find_by_email(email).await
    }

    /// Whether a reservation with this code exists.
    pub async fn exists(&self, code: &str) -> AppResult<bool> {
        self.repo.code_exists(code).await
    }

    /// The confirmed reservation owning the given number.
    pub async fn number_owner(&self, number: i32) -> AppResult<Reservation> {
        if !self.engine.contains(number) {
            return Err(AppError::validation(format!(
                "Number {number} is outside the pool"
            )));
        }
        self.repo
            .find_confirmed_by_number(number)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Number {number} is not assigned")))
    }

    fn validate_combo(&self, combo_size: i32) -> AppResult<()> {
        if combo_size < 1 || combo_size as usize > self.engine.pool_size() {
            return Err(AppError::validation(format!(
                "Combo size must be between 1 and {}",
                self.engine.pool_size()
            ))
            .with_reason(reasons::INVALID_COMBO));
        }
        Ok(())
    }

    /// Generate an unused `FREE-XXXXXXXX` code. Collisions are
    /// vanishingly rare, but the existence check keeps the code column
    /// unique without relying on luck.
    async fn generate_free_code(&self) -> AppResult<String> {
        loop {
            let tag = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
            let code = format!("FREE-{tag}");
            if !self.repo.code_exists(&code).await? {
                return Ok(code);
            }
        }
    }

    /// Best-effort result email. Runs after the state change committed;
    /// failure is reported, never propagated.
    async fn send_result_email(&self, reservation: &Reservation) -> NotificationOutcome {
        if self.mailer.is_disabled() {
            return NotificationOutcome::Disabled;
        }

        let numbers = reservation
            .assigned_numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let subject = "Your raffle numbers are confirmed";
        let body = format!(
            "Hello {},\n\nYour reservation {} is confirmed.\nYour numbers: {}\n\nGood luck!",
            reservation.buyer_name, reservation.code, numbers
        );

        match self.mailer.send(&reservation.email, subject, &body).await {
            Ok(()) => NotificationOutcome::Sent,
            Err(e) => {
                warn!(code = %reservation.code, error = %e, "Result email failed");
                NotificationOutcome::Failed
            }
        }
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    if !email.validate_email() {
        return Err(
            AppError::validation(format!("{email} is not a valid email address"))
                .with_reason(reasons::INVALID_EMAIL),
        );
    }
    Ok(())
}

fn validate_code(code: &str) -> AppResult<()> {
    let trimmed = code.trim();
    if trimmed.is_empty() || trimmed.len() != code.len() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::validation(
            "Code must be non-empty, untrimmed-whitespace-free, and at most 64 characters",
        )
        .with_reason(reasons::INVALID_CODE));
    }
    Ok(())
}
