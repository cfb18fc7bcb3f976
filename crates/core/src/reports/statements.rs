//! Profit-and-loss and balance-sheet builders.
//!
//! Both are pure projections over the GL log: the P&L over a resolved
//! period, the balance sheet as of a cutoff. Current-period earnings are
//! rolled into equity so a balanced ledger always produces a balanced
//! sheet; any residual difference is surfaced as a warning.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use folio_shared::types::percent_of;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{DataIntegrityWarning, StatementLine};
use crate::accounts::{Account, AccountSubtype, AccountType, ChartOfAccounts};
use crate::fiscal::DateRange;
use crate::journal::GlEntry;

/// The profit and loss statement for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// The reporting period.
    pub period: DateRange,
    /// Revenue lines by account.
    pub revenue: Vec<StatementLine>,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Cost-of-sales lines by account.
    pub cost_of_sales: Vec<StatementLine>,
    /// Total cost of sales.
    pub total_cost_of_sales: Decimal,
    /// Revenue minus cost of sales.
    pub gross_profit: Decimal,
    /// Gross profit as a percentage of revenue (0 when revenue is 0).
    pub gross_margin_percent: Decimal,
    /// Operating expense lines by account.
    pub operating_expenses: Vec<StatementLine>,
    /// Total operating expenses.
    pub total_operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub operating_income: Decimal,
    /// Operating income as a percentage of revenue.
    pub operating_margin_percent: Decimal,
    /// Expense lines outside cost of sales and operations.
    pub other_expenses: Vec<StatementLine>,
    /// Total other expenses.
    pub total_other_expenses: Decimal,
    /// Operating income minus other expenses.
    pub net_income: Decimal,
    /// Net income as a percentage of revenue.
    pub net_margin_percent: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the P&L from GL postings within `period`.
#[must_use]
pub fn profit_and_loss(gl: &[GlEntry], chart: &ChartOfAccounts, period: DateRange) -> ProfitAndLoss {
    let activity = account_sums(gl, |date| period.contains(date));

    let mut revenue = Vec::new();
    let mut cost_of_sales = Vec::new();
    let mut operating_expenses = Vec::new();
    let mut other_expenses = Vec::new();

    for (code, (debit, credit)) in &activity {
        let Some(account) = chart.get_by_code(code) else {
            continue;
        };
        let balance = account.normal_balance.signed_balance(*debit, *credit);
        let line = StatementLine::for_account(code, &account.name, balance);
        match account.account_type {
            AccountType::Revenue => revenue.push(line),
            AccountType::Expense => match account.subtype {
                Some(AccountSubtype::CostOfSales) => cost_of_sales.push(line),
                Some(AccountSubtype::OperatingExpense) | None => operating_expenses.push(line),
                Some(_) => other_expenses.push(line),
            },
            _ => {}
        }
    }

    let total_revenue: Decimal = revenue.iter().map(|l| l.amount).sum();
    let total_cost_of_sales: Decimal = cost_of_sales.iter().map(|l| l.amount).sum();
    let total_operating_expenses: Decimal = operating_expenses.iter().map(|l| l.amount).sum();
    let total_other_expenses: Decimal = other_expenses.iter().map(|l| l.amount).sum();

    let gross_profit = total_revenue - total_cost_of_sales;
    let operating_income = gross_profit - total_operating_expenses;
    let net_income = operating_income - total_other_expenses;

    let mut warnings = Vec::new();
    if revenue.is_empty() && cost_of_sales.is_empty() && operating_expenses.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "profit_and_loss".to_string(),
        });
    }

    ProfitAndLoss {
        period,
        revenue,
        total_revenue,
        cost_of_sales,
        total_cost_of_sales,
        gross_profit,
        gross_margin_percent: percent_of(gross_profit, total_revenue),
        operating_expenses,
        total_operating_expenses,
        operating_income,
        operating_margin_percent: percent_of(operating_income, total_revenue),
        other_expenses,
        total_other_expenses,
        net_income,
        net_margin_percent: percent_of(net_income, total_revenue),
        warnings,
    }
}

/// One grouped section of the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Lines in the section, ordered by account code.
    pub lines: Vec<StatementLine>,
    /// Section total.
    pub total: Decimal,
}

impl BalanceSheetSection {
    fn from_lines(lines: Vec<StatementLine>) -> Self {
        let total = lines.iter().map(|l| l.amount).sum();
        Self { lines, total }
    }
}

/// The balance sheet as of a cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Cutoff date, when one was given.
    pub as_of: Option<NaiveDate>,
    /// Cash, bank, receivables, inventory, prepaids.
    pub current_assets: BalanceSheetSection,
    /// Property, furniture and equipment.
    pub fixed_assets: BalanceSheetSection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Payables and accruals.
    pub current_liabilities: BalanceSheetSection,
    /// Loans and other long-term debt.
    pub long_term_liabilities: BalanceSheetSection,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Equity accounts plus current-period earnings.
    pub equity: BalanceSheetSection,
    /// Total liabilities plus equity.
    pub total_liabilities_and_equity: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the balance sheet from GL postings up to `as_of` (all-time when
/// `None`).
#[must_use]
pub fn balance_sheet(
    gl: &[GlEntry],
    chart: &ChartOfAccounts,
    as_of: Option<NaiveDate>,
) -> BalanceSheet {
    let activity = account_sums(gl, |date| !as_of.is_some_and(|cutoff| date > cutoff));

    let mut current_assets = Vec::new();
    let mut fixed_assets = Vec::new();
    let mut current_liabilities = Vec::new();
    let mut long_term_liabilities = Vec::new();
    let mut equity_lines = Vec::new();
    let mut period_earnings = Decimal::ZERO;

    for (code, (debit, credit)) in &activity {
        let Some(account) = chart.get_by_code(code) else {
            continue;
        };
        let balance = account.normal_balance.signed_balance(*debit, *credit);
        let line = StatementLine::for_account(code, &account.name, balance);
        match account.account_type {
            AccountType::Asset => {
                if is_fixed_asset(account) {
                    fixed_assets.push(line);
                } else {
                    current_assets.push(line);
                }
            }
            AccountType::Liability => {
                if is_long_term(account) {
                    long_term_liabilities.push(line);
                } else {
                    current_liabilities.push(line);
                }
            }
            AccountType::Equity => equity_lines.push(line),
            // Revenue and expense balances roll into equity as the
            // period's earnings.
            AccountType::Revenue => period_earnings += balance,
            AccountType::Expense => period_earnings -= balance,
        }
    }

    let had_activity = !activity.is_empty();
    equity_lines.push(StatementLine::computed(
        "Current Period Earnings",
        period_earnings,
    ));

    let current_assets = BalanceSheetSection::from_lines(current_assets);
    let fixed_assets = BalanceSheetSection::from_lines(fixed_assets);
    let current_liabilities = BalanceSheetSection::from_lines(current_liabilities);
    let long_term_liabilities = BalanceSheetSection::from_lines(long_term_liabilities);
    let equity = BalanceSheetSection::from_lines(equity_lines);

    let total_assets = current_assets.total + fixed_assets.total;
    let total_liabilities = current_liabilities.total + long_term_liabilities.total;
    let total_liabilities_and_equity = total_liabilities + equity.total;

    let mut warnings = Vec::new();
    if !had_activity {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "balance_sheet".to_string(),
        });
    }
    let difference = total_assets - total_liabilities_and_equity;
    if !difference.is_zero() {
        warn!(%difference, "balance sheet out of balance");
        warnings.push(DataIntegrityWarning::BalanceSheetMismatch { difference });
    }

    BalanceSheet {
        as_of,
        current_assets,
        fixed_assets,
        total_assets,
        current_liabilities,
        long_term_liabilities,
        total_liabilities,
        equity,
        total_liabilities_and_equity,
        warnings,
    }
}

fn is_fixed_asset(account: &Account) -> bool {
    account.subtype == Some(AccountSubtype::FixedAsset)
}

fn is_long_term(account: &Account) -> bool {
    account.subtype == Some(AccountSubtype::LongTermDebt)
}

/// Per-account (debit, credit) sums for GL entries matching `keep`,
/// ordered by account code.
fn account_sums(
    gl: &[GlEntry],
    keep: impl Fn(NaiveDate) -> bool,
) -> BTreeMap<String, (Decimal, Decimal)> {
    let mut activity: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for entry in gl {
        if !keep(entry.transaction_date) {
            continue;
        }
        let sums = activity
            .entry(entry.account_code.clone())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        sums.0 += entry.debit;
        sums.1 += entry.credit;
    }
    activity
}
