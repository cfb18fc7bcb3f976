//! Budget variance analysis.
//!
//! Variance is budgeted minus actual: positive means under budget. A
//! symmetric percentage band around zero separates favorable, on-track
//! and unfavorable lines.

use folio_shared::types::percent_of;
use folio_shared::ReportingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Budget;
use crate::documents::{Expense, ExpenseCategory, ExpenseStatus};
use crate::fiscal::DateRange;

/// How a budget line compares to actual spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceStatus {
    /// Meaningfully under budget.
    Favorable,
    /// Meaningfully over budget.
    Unfavorable,
    /// Within the threshold band.
    OnTrack,
}

impl VarianceStatus {
    /// Classifies a variance percentage against a symmetric threshold.
    #[must_use]
    pub fn classify(variance_percent: Decimal, threshold_percent: Decimal) -> Self {
        if variance_percent > threshold_percent {
            Self::Favorable
        } else if variance_percent < -threshold_percent {
            Self::Unfavorable
        } else {
            Self::OnTrack
        }
    }
}

/// Variance of one budget category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVariance {
    /// The spend category.
    pub category: ExpenseCategory,
    /// Amount budgeted.
    pub budgeted: Decimal,
    /// Actual spend aggregated from expenses in the period.
    pub actual: Decimal,
    /// Budgeted minus actual.
    pub variance: Decimal,
    /// Variance as a percentage of budgeted (0 when budgeted is 0).
    pub variance_percent: Decimal,
    /// Favorable, unfavorable, or on track.
    pub status: VarianceStatus,
}

/// The budget variance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVarianceReport {
    /// Name of the analyzed budget.
    pub budget_name: String,
    /// Department scope, when the budget has one.
    pub department: Option<String>,
    /// The period actual spend was aggregated over.
    pub period: DateRange,
    /// One row per budget category, in budget order.
    pub categories: Vec<CategoryVariance>,
    /// Total budgeted across categories.
    pub total_budgeted: Decimal,
    /// Total actual across categories.
    pub total_actual: Decimal,
    /// Total budgeted minus total actual.
    pub total_variance: Decimal,
    /// Total variance as a percentage of total budgeted.
    pub total_variance_percent: Decimal,
    /// Classification of the total variance.
    pub status: VarianceStatus,
}

/// Compares a budget against actual spend from expense records in `period`.
///
/// When the budget is scoped to a department, only that department's
/// expenses count. Rejected expenses never count.
#[must_use]
pub fn analyze(
    budget: &Budget,
    expenses: &[Expense],
    period: DateRange,
    config: &ReportingConfig,
) -> BudgetVarianceReport {
    let threshold = config.variance_threshold_percent;

    let eligible: Vec<&Expense> = expenses
        .iter()
        .filter(|e| {
            period.contains(e.expense_date)
                && e.status != ExpenseStatus::Rejected
                && budget
                    .department
                    .as_ref()
                    .map_or(true, |scope| e.department.as_ref() == Some(scope))
        })
        .collect();

    let categories: Vec<CategoryVariance> = budget
        .categories
        .iter()
        .map(|line| {
            let actual: Decimal = eligible
                .iter()
                .filter(|e| e.category == line.category)
                .map(|e| e.amount)
                .sum();
            let variance = line.budgeted_amount - actual;
            let variance_percent = percent_of(variance, line.budgeted_amount);
            CategoryVariance {
                category: line.category,
                budgeted: line.budgeted_amount,
                actual,
                variance,
                variance_percent,
                status: VarianceStatus::classify(variance_percent, threshold),
            }
        })
        .collect();

    let total_budgeted: Decimal = categories.iter().map(|c| c.budgeted).sum();
    let total_actual: Decimal = categories.iter().map(|c| c.actual).sum();
    let total_variance = total_budgeted - total_actual;
    let total_variance_percent = percent_of(total_variance, total_budgeted);

    BudgetVarianceReport {
        budget_name: budget.budget_name.clone(),
        department: budget.department.clone(),
        period,
        categories,
        total_budgeted,
        total_actual,
        total_variance,
        total_variance_percent,
        status: VarianceStatus::classify(total_variance_percent, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::PaymentMethod;
    use chrono::NaiveDate;
    use folio_shared::types::{BudgetId, ExpenseId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn period() -> DateRange {
        DateRange::new(march(1), march(31))
    }

    fn budget(category: ExpenseCategory, budgeted: Decimal) -> Budget {
        let mut budget = Budget {
            id: BudgetId::new(),
            budget_name: "March".to_string(),
            department: None,
            period: period(),
            categories: vec![crate::budget::BudgetCategory {
                category,
                budgeted_amount: budgeted,
                actual_amount: Decimal::ZERO,
            }],
            total_budgeted: Decimal::ZERO,
            total_actual: Decimal::ZERO,
        };
        budget.recompute_totals();
        budget
    }

    fn expense(category: ExpenseCategory, amount: Decimal, department: Option<&str>) -> Expense {
        Expense {
            id: ExpenseId::new(),
            expense_date: march(15),
            category,
            department: department.map(str::to_string),
            amount,
            payment_method: PaymentMethod::Cash,
            status: ExpenseStatus::Paid,
            description: "spend".to_string(),
        }
    }

    #[rstest]
    #[case(dec!(1200), dec!(-200), dec!(-20.00), VarianceStatus::Unfavorable)]
    #[case(dec!(800), dec!(200), dec!(20.00), VarianceStatus::Favorable)]
    #[case(dec!(1030), dec!(-30), dec!(-3.00), VarianceStatus::OnTrack)]
    #[case(dec!(970), dec!(30), dec!(3.00), VarianceStatus::OnTrack)]
    fn test_variance_sign_and_status(
        #[case] actual: Decimal,
        #[case] variance: Decimal,
        #[case] percent: Decimal,
        #[case] status: VarianceStatus,
    ) {
        let budget = budget(ExpenseCategory::Supplies, dec!(1000));
        let expenses = vec![expense(ExpenseCategory::Supplies, actual, None)];

        let report = analyze(&budget, &expenses, period(), &ReportingConfig::default());
        let row = &report.categories[0];
        assert_eq!(row.actual, actual);
        assert_eq!(row.variance, variance);
        assert_eq!(row.variance_percent, percent);
        assert_eq!(row.status, status);
    }

    #[test]
    fn test_zero_budget_yields_zero_percent() {
        let budget = budget(ExpenseCategory::Marketing, dec!(0));
        let expenses = vec![expense(ExpenseCategory::Marketing, dec!(100), None)];

        let report = analyze(&budget, &expenses, period(), &ReportingConfig::default());
        assert_eq!(report.categories[0].variance, dec!(-100));
        assert_eq!(report.categories[0].variance_percent, dec!(0));
        assert_eq!(report.categories[0].status, VarianceStatus::OnTrack);
    }

    #[test]
    fn test_department_scope_and_rejected_excluded() {
        let mut scoped = budget(ExpenseCategory::Supplies, dec!(1000));
        scoped.department = Some("F&B".to_string());

        let mut rejected = expense(ExpenseCategory::Supplies, dec!(400), Some("F&B"));
        rejected.status = ExpenseStatus::Rejected;
        let expenses = vec![
            expense(ExpenseCategory::Supplies, dec!(300), Some("F&B")),
            expense(ExpenseCategory::Supplies, dec!(500), Some("Rooms")),
            rejected,
        ];

        let report = analyze(&scoped, &expenses, period(), &ReportingConfig::default());
        assert_eq!(report.categories[0].actual, dec!(300));
    }

    #[test]
    fn test_out_of_period_spend_excluded() {
        let budget = budget(ExpenseCategory::Utilities, dec!(500));
        let mut late = expense(ExpenseCategory::Utilities, dec!(500), None);
        late.expense_date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();

        let report = analyze(&budget, &[late], period(), &ReportingConfig::default());
        assert_eq!(report.categories[0].actual, dec!(0));
        assert_eq!(report.categories[0].variance, dec!(500));
    }
}
