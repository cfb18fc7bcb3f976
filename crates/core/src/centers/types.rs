//! Cost and profit center records.

use folio_shared::types::{CostCenterId, ProfitCenterId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cost center: a unit that spends against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    /// Cost center ID.
    pub id: CostCenterId,
    /// Short code (e.g., "HK-01").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Department the center belongs to.
    pub department: String,
    /// Cost budgeted for the period.
    pub budgeted_cost: Decimal,
    /// Cost actually incurred.
    pub actual_cost: Decimal,
}

/// A profit center: a unit that earns revenue and carries costs.
///
/// A profit center references the cost centers feeding it but does not
/// own them; several profit centers may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitCenter {
    /// Profit center ID.
    pub id: ProfitCenterId,
    /// Short code (e.g., "FB-REST").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Department the center belongs to.
    pub department: String,
    /// Revenue targeted for the period.
    pub target_revenue: Decimal,
    /// Revenue actually earned.
    pub actual_revenue: Decimal,
    /// Cost actually incurred.
    pub actual_cost: Decimal,
    /// Cost centers attributed to this profit center.
    pub cost_center_ids: Vec<CostCenterId>,
}
