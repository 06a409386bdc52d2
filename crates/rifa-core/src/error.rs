//! Unified application error types for Rifa.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed (unknown account or wrong password).
    Unauthorized,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate code, already confirmed, exhausted pool).
    Conflict,
    /// A database error occurred.
    Database,
    /// An outbound notification (email) failed.
    Notification,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Notification => write!(f, "NOTIFICATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Machine-readable reason codes attached to caller-fault errors.
///
/// These are stable API strings: clients branch on them to show the
/// right message, so they never change casing or wording.
pub mod reasons {
    /// Email address failed validation.
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    /// Reservation code is empty, too long, or otherwise malformed.
    pub const INVALID_CODE: &str = "INVALID_CODE";
    /// Requested combo size is non-positive or exceeds the pool size.
    pub const INVALID_COMBO: &str = "INVALID_COMBO";
    /// A reservation with the same code already exists.
    pub const DUPLICATE_CODE: &str = "DUPLICATE_CODE";
    /// Fewer numbers remain in the pool than were requested.
    pub const CAPACITY_EXCEEDED: &str = "CAPACITY_EXCEEDED";
    /// The reservation was already confirmed.
    pub const ALREADY_CONFIRMED: &str = "ALREADY_CONFIRMED";
    /// The reservation's numbers were confirmed by someone else first.
    pub const NUMBERS_TAKEN: &str = "NUMBERS_TAKEN";
    /// The email already registered a free entry.
    pub const FREE_ENTRY_EXISTS: &str = "FREE_ENTRY_EXISTS";
}

/// The unified application error used throughout Rifa.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Machine-readable reason code for caller-fault errors.
    pub reason: Option<&'static str>,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            reason: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            reason: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Attach a machine-readable reason code.
    pub fn with_reason(mut self, reason: &'static str) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a notification error.
    pub fn notification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Notification, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            reason: self.reason,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
