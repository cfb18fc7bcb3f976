//! Trial balance builder.
//!
//! Aggregates the GL log per account and reduces each account to a single
//! signed balance on its normal side. A debit/credit mismatch is data
//! corruption upstream; it is surfaced as a warning on the report, never
//! as an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::DataIntegrityWarning;
use crate::accounts::{ChartOfAccounts, NormalBalance};
use crate::journal::GlEntry;

/// One account row of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// The account's normal balance side.
    pub normal_balance: NormalBalance,
    /// Sum of debits posted to the account.
    pub total_debit: Decimal,
    /// Sum of credits posted to the account.
    pub total_credit: Decimal,
    /// Signed balance on the normal side.
    pub balance: Decimal,
}

/// The trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Cutoff date, when one was given.
    pub as_of: Option<NaiveDate>,
    /// One row per account with activity, ordered by account code.
    pub rows: Vec<TrialBalanceRow>,
    /// Sum of balances of debit-normal accounts.
    pub total_debit_balances: Decimal,
    /// Sum of balances of credit-normal accounts.
    pub total_credit_balances: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the trial balance from GL postings up to `as_of` (all-time when
/// `None`).
#[must_use]
pub fn build(gl: &[GlEntry], chart: &ChartOfAccounts, as_of: Option<NaiveDate>) -> TrialBalance {
    // BTreeMap keeps rows ordered by account code.
    let mut activity: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for entry in gl {
        if as_of.is_some_and(|cutoff| entry.transaction_date > cutoff) {
            continue;
        }
        let sums = activity
            .entry(entry.account_code.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        sums.0 += entry.debit;
        sums.1 += entry.credit;
    }

    let mut rows = Vec::with_capacity(activity.len());
    let mut total_debit_balances = Decimal::ZERO;
    let mut total_credit_balances = Decimal::ZERO;

    for (code, (total_debit, total_credit)) in activity {
        let (name, normal_balance) = chart.get_by_code(code).map_or_else(
            // Postings to codes missing from the chart still count; the
            // mismatch they cause is what the warning below reports.
            || ("(unknown account)".to_string(), NormalBalance::Debit),
            |account| (account.name.clone(), account.normal_balance),
        );
        let balance = normal_balance.signed_balance(total_debit, total_credit);
        match normal_balance {
            NormalBalance::Debit => total_debit_balances += balance,
            NormalBalance::Credit => total_credit_balances += balance,
        }
        rows.push(TrialBalanceRow {
            account_code: code.to_string(),
            account_name: name,
            normal_balance,
            total_debit,
            total_credit,
            balance,
        });
    }

    let mut warnings = Vec::new();
    if rows.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "trial_balance".to_string(),
        });
    }
    let difference = total_debit_balances - total_credit_balances;
    if !difference.is_zero() {
        warn!(%difference, "trial balance out of balance");
        warnings.push(DataIntegrityWarning::TrialBalanceMismatch { difference });
    }

    TrialBalance {
        as_of,
        rows,
        total_debit_balances,
        total_credit_balances,
        warnings,
    }
}
