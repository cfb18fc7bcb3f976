//! Account domain types.

use folio_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification.
///
/// The five standard classes of the chart of accounts. The class implies
/// the conventional normal balance side; downstream sign logic assumes the
/// two are consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Revenue account (credit-normal).
    Revenue,
    /// Expense account (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns the conventional normal balance side for this class.
    #[must_use]
    pub const fn conventional_normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns the string representation of the account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

/// Normal balance side of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Balance grows with debits.
    Debit,
    /// Balance grows with credits.
    Credit,
}

impl NormalBalance {
    /// Reduces debit and credit totals to a single signed balance.
    ///
    /// Debit-normal: balance = debit - credit.
    /// Credit-normal: balance = credit - debit.
    #[must_use]
    pub fn signed_balance(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Finer account classification used by the statement builders.
///
/// Subtypes drive the balance sheet groupings, the cash-flow working
/// capital estimates, and the cash/bank rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    /// Cash on hand.
    Cash,
    /// Bank deposit accounts.
    Bank,
    /// Guest and city-ledger receivables.
    AccountsReceivable,
    /// Food, beverage and supplies stock.
    Inventory,
    /// Prepaid expenses.
    PrepaidExpense,
    /// Property, furniture and equipment.
    FixedAsset,
    /// Supplier payables.
    AccountsPayable,
    /// Accrued liabilities.
    AccruedLiability,
    /// Loans and other long-term debt.
    LongTermDebt,
    /// Cost of sales.
    CostOfSales,
    /// Operating expense.
    OperatingExpense,
}

/// A chart of accounts entry.
///
/// Created and edited externally; read-only to the ledger. The host keeps
/// `current_balance` up to date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Account code (e.g., "4100").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
    /// Finer classification, when the host provides one.
    pub subtype: Option<AccountSubtype>,
    /// Current balance as maintained by the host.
    pub current_balance: Decimal,
    /// Whether the account accepts new postings.
    pub is_active: bool,
}

impl Account {
    /// Returns the account code parsed as a number, when numeric.
    #[must_use]
    pub fn numeric_code(&self) -> Option<u32> {
        self.code.parse().ok()
    }
}
