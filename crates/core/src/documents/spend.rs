//! Expense and payment records.
//!
//! Fed from purchasing and the cash office; consumed read-only by budget
//! variance and cash-flow reporting.

use chrono::NaiveDate;
use folio_shared::types::{ExpenseId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spend classification used for budget variance matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Payroll and benefits.
    Salaries,
    /// Electricity, water, gas.
    Utilities,
    /// Repairs and upkeep.
    Maintenance,
    /// Food, beverage, linen, amenities.
    Supplies,
    /// Advertising and promotion.
    Marketing,
    /// Premiums.
    Insurance,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Returns the display label used in budget rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salaries => "Salaries",
            Self::Utilities => "Utilities",
            Self::Maintenance => "Maintenance",
            Self::Supplies => "Supplies",
            Self::Marketing => "Marketing",
            Self::Insurance => "Insurance",
            Self::Other => "Other",
        }
    }
}

/// Workflow status of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseStatus {
    /// Awaiting approval.
    Pending,
    /// Approved but not yet paid.
    Approved,
    /// Paid out.
    Paid,
    /// Rejected during approval.
    Rejected,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Credit or debit card.
    CreditCard,
    /// Paper cheque.
    Cheque,
}

impl PaymentMethod {
    /// Returns true for bank transfers, which the cash-flow financing
    /// section treats as potential loan repayments.
    #[must_use]
    pub const fn is_bank_transfer(self) -> bool {
        matches!(self, Self::BankTransfer)
    }
}

/// A recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Spend classification.
    pub category: ExpenseCategory,
    /// Department the spend belongs to.
    pub department: Option<String>,
    /// Amount spent.
    pub amount: Decimal,
    /// How it was (or will be) paid.
    pub payment_method: PaymentMethod,
    /// Workflow status.
    pub status: ExpenseStatus,
    /// What the money was spent on.
    pub description: String,
}

/// A recorded outgoing payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Date the payment was made.
    pub payment_date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// How it was paid.
    pub method: PaymentMethod,
    /// Bank or internal reference.
    pub reference: String,
    /// What the payment was for.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_transfer_detection() {
        assert!(PaymentMethod::BankTransfer.is_bank_transfer());
        assert!(!PaymentMethod::Cash.is_bank_transfer());
        assert!(!PaymentMethod::CreditCard.is_bank_transfer());
        assert!(!PaymentMethod::Cheque.is_bank_transfer());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ExpenseCategory::Salaries.as_str(), "Salaries");
        assert_eq!(ExpenseCategory::Other.as_str(), "Other");
    }
}
