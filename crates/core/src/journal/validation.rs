//! Business rule validation for journal entries.
//!
//! Unlike a first-error validator, every check runs and every violation is
//! reported, so the host can surface the complete list in one round trip.
//! Drafts are allowed to be works in progress; validation gates the
//! approval workflow, and the balance rule is enforced again at posting.

use folio_shared::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{balance_tolerance, JournalLine};
use crate::accounts::ChartOfAccounts;

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The entry description is empty.
    #[error("description is required")]
    MissingDescription,

    /// A journal entry needs at least two lines.
    #[error("at least 2 lines are required, found {count}")]
    InsufficientLines {
        /// Number of lines supplied.
        count: usize,
    },

    /// A line references an account the chart does not know.
    #[error("line {line}: unknown account {account_id}")]
    UnknownAccount {
        /// 1-based line number.
        line: u32,
        /// The unresolved account reference.
        account_id: AccountId,
    },

    /// A line references an inactive account.
    #[error("line {line}: account {account_id} is inactive")]
    InactiveAccount {
        /// 1-based line number.
        line: u32,
        /// The inactive account.
        account_id: AccountId,
    },

    /// A line carries neither a debit nor a credit.
    #[error("line {line}: either debit or credit must be non-zero")]
    EmptyLine {
        /// 1-based line number.
        line: u32,
    },

    /// A line carries both a debit and a credit.
    #[error("line {line}: a line may not carry both debit and credit")]
    BothSidesSet {
        /// 1-based line number.
        line: u32,
    },

    /// Amounts must not be negative.
    #[error("line {line}: amounts must not be negative")]
    NegativeAmount {
        /// 1-based line number.
        line: u32,
    },

    /// Debits and credits do not balance within tolerance.
    #[error("entry is unbalanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },
}

/// Validates a journal entry's description and lines against the chart.
///
/// Returns every violation found; an empty vector means the entry is valid.
#[must_use]
pub fn validate_entry(
    description: &str,
    lines: &[JournalLine],
    chart: &ChartOfAccounts,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if description.trim().is_empty() {
        violations.push(Violation::MissingDescription);
    }

    if lines.len() < 2 {
        violations.push(Violation::InsufficientLines { count: lines.len() });
    }

    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    for line in lines {
        match chart.get(line.account_id) {
            None => violations.push(Violation::UnknownAccount {
                line: line.line_number,
                account_id: line.account_id,
            }),
            Some(account) if !account.is_active => violations.push(Violation::InactiveAccount {
                line: line.line_number,
                account_id: line.account_id,
            }),
            Some(_) => {}
        }

        if line.debit.is_sign_negative() || line.credit.is_sign_negative() {
            violations.push(Violation::NegativeAmount {
                line: line.line_number,
            });
        }

        match (line.debit.is_zero(), line.credit.is_zero()) {
            (true, true) => violations.push(Violation::EmptyLine {
                line: line.line_number,
            }),
            (false, false) => violations.push(Violation::BothSidesSet {
                line: line.line_number,
            }),
            _ => {}
        }

        total_debit += line.debit;
        total_credit += line.credit;
    }

    if (total_debit - total_credit).abs() >= balance_tolerance() {
        violations.push(Violation::Unbalanced {
            debit: total_debit,
            credit: total_credit,
        });
    }

    violations
}
