//! Journal domain types.
//!
//! A journal entry is a balanced set of debit/credit lines representing one
//! business transaction. Entries move through an approval workflow and
//! become immutable once posted; posting is the only transition that
//! materializes general ledger rows.

use chrono::{DateTime, NaiveDate, Utc};
use folio_shared::types::{AccountId, GlEntryId, JournalEntryId, StaffId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Journal entry status in the approval workflow.
///
/// The valid transitions are:
/// - Draft → PendingApproval (submit)
/// - PendingApproval → Approved (approve)
/// - Approved → Posted (post)
/// - Draft / PendingApproval / Approved → Rejected (reject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JournalStatus {
    /// Entry is being drafted and can be modified.
    Draft,
    /// Entry has been submitted for approval.
    PendingApproval,
    /// Entry has been approved and is ready for posting.
    Approved,
    /// Entry has been posted to the ledger (immutable).
    Posted,
    /// Entry has been rejected.
    Rejected,
}

impl JournalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending-approval",
            Self::Approved => "approved",
            Self::Posted => "posted",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending-approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "posted" => Some(Self::Posted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the entry's lines can still be modified.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !self.is_immutable()
    }

    /// Returns true if the entry is frozen.
    #[must_use]
    pub const fn is_immutable(self) -> bool {
        matches!(self, Self::Posted)
    }

    /// Returns true if the transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::PendingApproval)
                | (Self::PendingApproval, Self::Approved)
                | (Self::Approved, Self::Posted)
                | (
                    Self::Draft | Self::PendingApproval | Self::Approved,
                    Self::Rejected
                )
        )
    }
}

impl fmt::Display for JournalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Journal classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalType {
    /// General journal entry.
    General,
    /// Guest and event revenue.
    Sales,
    /// Supplier purchases.
    Purchases,
    /// Payroll run.
    Payroll,
    /// Period-end adjustment.
    Adjustment,
}

/// Originating system of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalSource {
    /// Entered by hand in the back office.
    Manual,
    /// Fed from the front-office folio system.
    FrontOffice,
    /// Fed from purchasing.
    Purchasing,
    /// Fed from payroll.
    Payroll,
    /// Generated by the finance core itself (e.g., reversals).
    System,
}

/// A single debit or credit line of a journal entry.
///
/// Exactly one of `debit`/`credit` is non-zero; line numbers are 1-based
/// and contiguous within an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// 1-based position within the entry.
    pub line_number: u32,
    /// The account this line posts to.
    pub account_id: AccountId,
    /// Debit amount (zero if the line is a credit).
    pub debit: Decimal,
    /// Credit amount (zero if the line is a debit).
    pub credit: Decimal,
    /// Line description.
    pub description: String,
}

/// Input for a line before the ledger assigns line numbers.
#[derive(Debug, Clone)]
pub struct LineInput {
    /// The account to post to.
    pub account_id: AccountId,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Line description.
    pub description: String,
}

/// Input for creating a new journal entry.
#[derive(Debug, Clone)]
pub struct CreateJournalInput {
    /// Journal classification.
    pub journal_type: JournalType,
    /// Originating system.
    pub source: JournalSource,
    /// The date of the underlying transaction.
    pub transaction_date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Department the entry belongs to, when attributable.
    pub department: Option<String>,
    /// The lines (at least 2 required).
    pub lines: Vec<LineInput>,
}

/// Action recorded in an entry's audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Entry was created.
    Created,
    /// Lines were edited while still mutable.
    LinesUpdated,
    /// Entry was submitted for approval.
    Submitted,
    /// Entry was approved.
    Approved,
    /// Entry was posted to the ledger.
    Posted,
    /// Entry was rejected.
    Rejected,
    /// Entry was reversed by a later entry.
    Reversed,
}

/// One audit trail record: who did what, when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// The action performed.
    pub action: AuditAction,
    /// The staff member who performed it.
    pub actor: StaffId,
    /// When it was performed.
    pub at: DateTime<Utc>,
    /// Optional free-form note (e.g., rejection reason).
    pub note: Option<String>,
}

/// A journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry ID.
    pub id: JournalEntryId,
    /// Unique journal number (e.g., "JE-2026-0001").
    pub journal_number: String,
    /// Journal classification.
    pub journal_type: JournalType,
    /// Originating system.
    pub source: JournalSource,
    /// Workflow status.
    pub status: JournalStatus,
    /// The date of the underlying transaction.
    pub transaction_date: NaiveDate,
    /// Set only at posting.
    pub posting_date: Option<NaiveDate>,
    /// Fiscal period key ("YYYY-MM") derived from the transaction date.
    pub fiscal_period: String,
    /// Fiscal year derived from the transaction date.
    pub fiscal_year: i32,
    /// Department the entry belongs to, when attributable.
    pub department: Option<String>,
    /// Entry description.
    pub description: String,
    /// Ordered debit/credit lines.
    pub lines: Vec<JournalLine>,
    /// Sum of line debits.
    pub total_debit: Decimal,
    /// Sum of line credits.
    pub total_credit: Decimal,
    /// True if this entry reverses another.
    pub is_reversal: bool,
    /// The entry this one reverses, if any.
    pub reversal_of_entry_id: Option<JournalEntryId>,
    /// The entry that reversed this one, if any.
    pub reversed_by_entry_id: Option<JournalEntryId>,
    /// Chronological audit trail.
    pub audit_trail: Vec<AuditRecord>,
}

impl JournalEntry {
    /// Returns true if debits equal credits within the posting tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total_debit - self.total_credit).abs() < balance_tolerance()
    }
}

/// The tolerance within which an entry counts as balanced.
///
/// Host-entered lines may carry per-line rounding, so posting accepts a
/// difference strictly below 0.01.
#[must_use]
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// A materialized general ledger posting.
///
/// Created only when a journal entry posts; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlEntry {
    /// Posting ID.
    pub id: GlEntryId,
    /// The journal entry this posting came from.
    pub journal_entry_id: JournalEntryId,
    /// Code of the account posted to.
    pub account_code: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Transaction date of the source entry.
    pub transaction_date: NaiveDate,
    /// Department of the source entry, when attributable.
    pub department: Option<String>,
    /// Line description.
    pub description: String,
    /// Journal number of the source entry.
    pub source_document: String,
}
