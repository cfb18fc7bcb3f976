//! Journal error types.
//!
//! Validation errors carry every violation found at once so the host can
//! show them together; state errors report a single rejected operation
//! with no partial mutation.

use folio_shared::error::AppError;
use folio_shared::types::JournalEntryId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::JournalStatus;
use super::validation::Violation;

/// Errors that can occur during journal ledger operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The entry failed validation; all violations are reported together.
    #[error("journal entry validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// Entry not found in the ledger.
    #[error("journal entry not found: {0}")]
    EntryNotFound(JournalEntryId),

    /// The requested status transition is not allowed.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: JournalStatus,
        /// The requested status.
        to: JournalStatus,
    },

    /// Posting requires debits and credits to balance.
    #[error("cannot post unbalanced entry. Debit: {debit}, Credit: {credit}")]
    UnbalancedEntry {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Posted entries are frozen; their lines cannot be edited.
    #[error("journal entry {0} is posted and cannot be modified")]
    ImmutableEntry(JournalEntryId),
}

impl JournalError {
    /// Returns the stable error code for host consumption.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
            Self::ImmutableEntry(_) => "IMMUTABLE_ENTRY",
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match &err {
            JournalError::Validation(_) => Self::Validation(err.to_string()),
            JournalError::EntryNotFound(_) => Self::NotFound(err.to_string()),
            JournalError::InvalidTransition { .. }
            | JournalError::UnbalancedEntry { .. }
            | JournalError::ImmutableEntry(_) => Self::BusinessRule(err.to_string()),
        }
    }
}

/// Errors that can occur when reversing a posted entry.
#[derive(Debug, Error)]
pub enum ReversalError {
    /// Entry not found in the ledger.
    #[error("journal entry not found: {0}")]
    EntryNotFound(JournalEntryId),

    /// Only posted entries can be reversed.
    #[error("journal entry {id} is {status}, only posted entries can be reversed")]
    NotPosted {
        /// The entry that was asked to be reversed.
        id: JournalEntryId,
        /// Its current status.
        status: JournalStatus,
    },

    /// An entry can be reversed at most once.
    #[error("journal entry {id} was already reversed by {reversed_by}")]
    AlreadyReversed {
        /// The entry that was asked to be reversed.
        id: JournalEntryId,
        /// The reversal that already exists.
        reversed_by: JournalEntryId,
    },
}

impl ReversalError {
    /// Returns the stable error code for host consumption.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::NotPosted { .. } => "NOT_POSTED",
            Self::AlreadyReversed { .. } => "ALREADY_REVERSED",
        }
    }
}

impl From<ReversalError> for AppError {
    fn from(err: ReversalError) -> Self {
        match &err {
            ReversalError::EntryNotFound(_) => Self::NotFound(err.to_string()),
            ReversalError::NotPosted { .. } | ReversalError::AlreadyReversed { .. } => {
                Self::BusinessRule(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            JournalError::Validation(vec![]).error_code(),
            "VALIDATION_FAILED"
        );
        assert_eq!(
            JournalError::UnbalancedEntry {
                debit: dec!(100),
                credit: dec!(50),
            }
            .error_code(),
            "UNBALANCED_ENTRY"
        );
        assert_eq!(
            ReversalError::NotPosted {
                id: JournalEntryId::new(),
                status: JournalStatus::Draft,
            }
            .error_code(),
            "NOT_POSTED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = JournalError::UnbalancedEntry {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "cannot post unbalanced entry. Debit: 100.00, Credit: 50.00"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let app: AppError = JournalError::Validation(vec![]).into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");

        let app: AppError = ReversalError::AlreadyReversed {
            id: JournalEntryId::new(),
            reversed_by: JournalEntryId::new(),
        }
        .into();
        assert_eq!(app.error_code(), "BUSINESS_RULE_VIOLATION");
    }
}
