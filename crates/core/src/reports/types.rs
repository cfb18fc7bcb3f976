//! Shared report view-model pieces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-fatal finding attached to a report.
///
/// Warnings never block a builder; the report is still produced (with
/// zero/empty sections where applicable) and the host decides how to
/// present the finding.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIntegrityWarning {
    /// Debit-side and credit-side trial balance totals disagree.
    #[error("trial balance out of balance by {difference}")]
    TrialBalanceMismatch {
        /// Debit-side total minus credit-side total.
        difference: Decimal,
    },

    /// Assets do not equal liabilities plus equity.
    #[error("balance sheet out of balance by {difference}")]
    BalanceSheetMismatch {
        /// Assets minus liabilities-and-equity.
        difference: Decimal,
    },

    /// The report period contained no eligible records.
    #[error("no records found for {report}")]
    EmptyPeriod {
        /// Which report came up empty.
        report: String,
    },
}

/// One labelled amount on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account code, when the line maps to a single account.
    pub account_code: Option<String>,
    /// Display label.
    pub label: String,
    /// Line amount.
    pub amount: Decimal,
}

impl StatementLine {
    /// Creates a line backed by a chart account.
    #[must_use]
    pub fn for_account(code: &str, name: &str, amount: Decimal) -> Self {
        Self {
            account_code: Some(code.to_string()),
            label: name.to_string(),
            amount,
        }
    }

    /// Creates a computed line with no backing account.
    #[must_use]
    pub fn computed(label: &str, amount: Decimal) -> Self {
        Self {
            account_code: None,
            label: label.to_string(),
            amount,
        }
    }
}
