//! Double-entry journal: entries, workflow, posting, and reversals.

pub mod error;
pub mod ledger;
pub mod reversal;
pub mod types;
pub mod validation;

pub use error::{JournalError, ReversalError};
pub use ledger::JournalLedger;
pub use reversal::ReversalEngine;
pub use types::{
    balance_tolerance, AuditAction, AuditRecord, CreateJournalInput, GlEntry, JournalEntry,
    JournalLine, JournalSource, JournalStatus, JournalType, LineInput,
};
pub use validation::{validate_entry, Violation};

#[cfg(test)]
mod ledger_props;
