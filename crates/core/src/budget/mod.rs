//! Budgets and variance analysis.

pub mod analyzer;
pub mod types;

pub use analyzer::{analyze, BudgetVarianceReport, CategoryVariance, VarianceStatus};
pub use types::{Budget, BudgetCategory};
