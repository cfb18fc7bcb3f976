//! Financial statement builders.
//!
//! Every builder is a pure function of an input snapshot, a resolved
//! period or cutoff, and the reporting configuration. Re-running a builder
//! with identical inputs produces identical output; warnings are attached
//! to results, never raised as errors.

pub mod aging;
pub mod cash_flow;
pub mod departmental;
pub mod statements;
pub mod tax;
pub mod trial_balance;
pub mod types;

pub use aging::{AgedInvoice, AgingBucket, AgingReport, BucketSummary, CounterpartyAging};
pub use cash_flow::{CashFlowSection, CashFlowStatement};
pub use departmental::{DepartmentPl, DepartmentalInputs, DepartmentalReport};
pub use statements::{BalanceSheet, BalanceSheetSection, ProfitAndLoss};
pub use tax::{TaxLine, TaxReconciliation};
pub use trial_balance::{TrialBalance, TrialBalanceRow};
pub use types::{DataIntegrityWarning, StatementLine};

#[cfg(test)]
mod props;
