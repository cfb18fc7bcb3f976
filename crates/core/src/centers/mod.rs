//! Cost and profit centers.

pub mod analyzer;
pub mod types;

pub use analyzer::{
    analyze_cost_centers, analyze_profit_centers, CostCenterPerformance, ProfitCenterPerformance,
};
pub use types::{CostCenter, ProfitCenter};
