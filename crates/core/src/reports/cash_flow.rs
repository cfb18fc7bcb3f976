//! Indirect-method cash flow statement.
//!
//! Starts from net income and adjusts for non-cash items and estimated
//! working-capital movement. The working-capital, equipment and
//! loan-repayment figures are scaled heuristics from `ReportingConfig`,
//! not true period deltas; the lines carry an "(est.)" label so the host
//! can present them as such. The reconciliation identity
//! `beginning_cash + net_cash_flow == ending_cash` holds by construction.

use folio_shared::ReportingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{DataIntegrityWarning, StatementLine};
use crate::accounts::{AccountSubtype, AccountType, ChartOfAccounts};
use crate::documents::{Expense, ExpenseStatus, Payment};
use crate::fiscal::DateRange;
use crate::journal::GlEntry;

/// One section of the cash flow statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSection {
    /// Labelled adjustment lines.
    pub lines: Vec<StatementLine>,
    /// Section total.
    pub total: Decimal,
}

impl CashFlowSection {
    fn from_lines(lines: Vec<StatementLine>) -> Self {
        let total = lines.iter().map(|l| l.amount).sum();
        Self { lines, total }
    }
}

/// The cash flow statement for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// The reporting period.
    pub period: DateRange,
    /// Operating activities: net income plus adjustments.
    pub operating: CashFlowSection,
    /// Investing activities: capital asset movement.
    pub investing: CashFlowSection,
    /// Financing activities: loan proceeds and repayments.
    pub financing: CashFlowSection,
    /// Sum of the three section totals.
    pub net_cash_flow: Decimal,
    /// Derived: ending cash minus net cash flow.
    pub beginning_cash: Decimal,
    /// Sum of cash and bank account balances.
    pub ending_cash: Decimal,
    /// Non-fatal findings.
    pub warnings: Vec<DataIntegrityWarning>,
}

/// Builds the cash flow statement for `period`.
#[must_use]
pub fn build(
    gl: &[GlEntry],
    chart: &ChartOfAccounts,
    expenses: &[Expense],
    payments: &[Payment],
    period: DateRange,
    config: &ReportingConfig,
) -> CashFlowStatement {
    let in_period: Vec<&GlEntry> = gl
        .iter()
        .filter(|e| period.contains(e.transaction_date))
        .collect();
    let period_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| period.contains(e.expense_date) && e.status != ExpenseStatus::Rejected)
        .collect();
    let period_payments: Vec<&Payment> = payments
        .iter()
        .filter(|p| period.contains(p.payment_date))
        .collect();

    let operating = operating_section(&in_period, chart, config);
    let investing = investing_section(&in_period, chart, &period_expenses, config);
    let financing = financing_section(&in_period, &period_payments, config);

    let net_cash_flow = operating.total + investing.total + financing.total;
    let ending_cash: Decimal = chart
        .iter()
        .filter(|a| matches!(a.subtype, Some(AccountSubtype::Cash | AccountSubtype::Bank)))
        .map(|a| a.current_balance)
        .sum();
    let beginning_cash = ending_cash - net_cash_flow;

    let mut warnings = Vec::new();
    if in_period.is_empty() && period_expenses.is_empty() && period_payments.is_empty() {
        warnings.push(DataIntegrityWarning::EmptyPeriod {
            report: "cash_flow".to_string(),
        });
    }

    CashFlowStatement {
        period,
        operating,
        investing,
        financing,
        net_cash_flow,
        beginning_cash,
        ending_cash,
        warnings,
    }
}

fn operating_section(
    gl: &[&GlEntry],
    chart: &ChartOfAccounts,
    config: &ReportingConfig,
) -> CashFlowSection {
    let mut net_income = Decimal::ZERO;
    let mut non_cash = Decimal::ZERO;

    for entry in gl {
        let Some(account) = chart.get_by_code(&entry.account_code) else {
            continue;
        };
        match account.account_type {
            AccountType::Revenue => net_income += entry.credit - entry.debit,
            AccountType::Expense => {
                let expense = entry.debit - entry.credit;
                net_income -= expense;
                if is_non_cash(&entry.description) {
                    non_cash += expense;
                }
            }
            _ => {}
        }
    }

    // Decreases in receivables, inventory and prepaids release cash;
    // increases in payables and accruals withhold it.
    let wc_assets: Decimal = chart
        .iter()
        .filter(|a| {
            matches!(
                a.subtype,
                Some(
                    AccountSubtype::AccountsReceivable
                        | AccountSubtype::Inventory
                        | AccountSubtype::PrepaidExpense
                )
            )
        })
        .map(|a| a.current_balance)
        .sum();
    let wc_liabilities: Decimal = chart
        .iter()
        .filter(|a| {
            matches!(
                a.subtype,
                Some(AccountSubtype::AccountsPayable | AccountSubtype::AccruedLiability)
            )
        })
        .map(|a| a.current_balance)
        .sum();
    let working_capital = (wc_liabilities - wc_assets) * config.working_capital_factor;

    CashFlowSection::from_lines(vec![
        StatementLine::computed("Net income", net_income),
        StatementLine::computed("Depreciation and amortization", non_cash),
        StatementLine::computed("Working capital changes (est.)", working_capital),
    ])
}

fn investing_section(
    gl: &[&GlEntry],
    chart: &ChartOfAccounts,
    expenses: &[&Expense],
    config: &ReportingConfig,
) -> CashFlowSection {
    let mut purchases = Decimal::ZERO;
    let mut disposals = Decimal::ZERO;

    for entry in gl {
        let is_fixed_asset = chart
            .get_by_code(&entry.account_code)
            .is_some_and(|a| a.subtype == Some(AccountSubtype::FixedAsset));
        if is_fixed_asset {
            purchases += entry.debit;
            disposals += entry.credit;
        }
    }

    let expense_total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let estimated = expense_total * config.equipment_expense_factor;

    CashFlowSection::from_lines(vec![
        StatementLine::computed("Capital asset purchases", -purchases),
        StatementLine::computed("Capital asset disposals", disposals),
        StatementLine::computed("Estimated equipment purchases (est.)", -estimated),
    ])
}

fn financing_section(
    gl: &[&GlEntry],
    payments: &[&Payment],
    config: &ReportingConfig,
) -> CashFlowSection {
    let proceeds: Decimal = gl
        .iter()
        .filter(|e| mentions_loan(&e.description))
        .map(|e| e.credit)
        .sum();

    let repayment_base: Decimal = payments
        .iter()
        .filter(|p| mentions_loan(&p.description) || p.method.is_bank_transfer())
        .map(|p| p.amount)
        .sum();
    let repayments = repayment_base * config.loan_repayment_factor;

    CashFlowSection::from_lines(vec![
        StatementLine::computed("Loan proceeds", proceeds),
        StatementLine::computed("Loan repayments (est.)", -repayments),
    ])
}

fn is_non_cash(description: &str) -> bool {
    let lower = description.to_lowercase();
    lower.contains("depreciation") || lower.contains("amortization")
}

fn mentions_loan(description: &str) -> bool {
    description.to_lowercase().contains("loan")
}
