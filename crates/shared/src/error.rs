//! Application-wide error envelope.
//!
//! Domain modules define their own `thiserror` enums; this envelope is what
//! the host application sees when it does not care about the specific
//! domain error. Nothing here ever terminates the process.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (user-correctable).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (policy error, no partial mutation occurred).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate journal number).
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Returns the stable error code for host consumption.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
        }
    }
}
