//! Cost and profit center performance analysis.
//!
//! Cost centers are ranked by variance (budget minus actual, descending),
//! profit centers by profit. Margins and utilization follow the shared
//! percentage convention: zero denominators yield zero.

use folio_shared::types::percent_of;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CostCenter, ProfitCenter};

/// Computed performance of one cost center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterPerformance {
    /// Cost center code.
    pub code: String,
    /// Cost center name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Cost budgeted for the period.
    pub budgeted_cost: Decimal,
    /// Cost actually incurred.
    pub actual_cost: Decimal,
    /// Budget minus actual; positive means under budget.
    pub variance: Decimal,
    /// Actual as a percentage of budget (0 when budget is 0).
    pub utilization_percent: Decimal,
}

/// Computed performance of one profit center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitCenterPerformance {
    /// Profit center code.
    pub code: String,
    /// Profit center name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Revenue targeted for the period.
    pub target_revenue: Decimal,
    /// Revenue actually earned.
    pub actual_revenue: Decimal,
    /// Cost actually incurred.
    pub actual_cost: Decimal,
    /// Revenue minus cost.
    pub profit: Decimal,
    /// Profit as a percentage of revenue (0 when revenue is 0).
    pub margin_percent: Decimal,
    /// Actual revenue as a percentage of target (0 when target is 0).
    pub target_attainment_percent: Decimal,
}

/// Analyzes cost centers, ranked by descending variance.
#[must_use]
pub fn analyze_cost_centers(centers: &[CostCenter]) -> Vec<CostCenterPerformance> {
    let mut rows: Vec<CostCenterPerformance> = centers
        .iter()
        .map(|center| CostCenterPerformance {
            code: center.code.clone(),
            name: center.name.clone(),
            department: center.department.clone(),
            budgeted_cost: center.budgeted_cost,
            actual_cost: center.actual_cost,
            variance: center.budgeted_cost - center.actual_cost,
            utilization_percent: percent_of(center.actual_cost, center.budgeted_cost),
        })
        .collect();
    rows.sort_by(|a, b| b.variance.cmp(&a.variance).then(a.code.cmp(&b.code)));
    rows
}

/// Analyzes profit centers, ranked by descending profit.
#[must_use]
pub fn analyze_profit_centers(centers: &[ProfitCenter]) -> Vec<ProfitCenterPerformance> {
    let mut rows: Vec<ProfitCenterPerformance> = centers
        .iter()
        .map(|center| {
            let profit = center.actual_revenue - center.actual_cost;
            ProfitCenterPerformance {
                code: center.code.clone(),
                name: center.name.clone(),
                department: center.department.clone(),
                target_revenue: center.target_revenue,
                actual_revenue: center.actual_revenue,
                actual_cost: center.actual_cost,
                profit,
                margin_percent: percent_of(profit, center.actual_revenue),
                target_attainment_percent: percent_of(center.actual_revenue, center.target_revenue),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.profit.cmp(&a.profit).then(a.code.cmp(&b.code)));
    rows
}
