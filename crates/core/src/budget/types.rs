//! Budget domain types.

use folio_shared::types::BudgetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::ExpenseCategory;
use crate::fiscal::DateRange;

/// One category allocation within a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// The spend category.
    pub category: ExpenseCategory,
    /// Amount allocated for the period.
    pub budgeted_amount: Decimal,
    /// Actual spend recorded against the category.
    pub actual_amount: Decimal,
}

/// A departmental budget for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Display name (e.g., "F&B Q2 2026").
    pub budget_name: String,
    /// Department the budget covers, when scoped to one.
    pub department: Option<String>,
    /// The period the budget covers.
    pub period: DateRange,
    /// Ordered category allocations.
    pub categories: Vec<BudgetCategory>,
    /// Sum of category budgeted amounts.
    pub total_budgeted: Decimal,
    /// Sum of category actual amounts.
    pub total_actual: Decimal,
}

impl Budget {
    /// Recomputes the budget totals from its categories.
    ///
    /// Call after any category change; totals are never derived lazily.
    pub fn recompute_totals(&mut self) {
        self.total_budgeted = self.categories.iter().map(|c| c.budgeted_amount).sum();
        self.total_actual = self.categories.iter().map(|c| c.actual_amount).sum();
    }
}
