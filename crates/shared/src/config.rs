//! Reporting configuration.
//!
//! Centralizes the tunable constants the statement builders depend on so a
//! host can override them without recompiling. The cash-flow estimation
//! factors are heuristics carried over from the legacy system and are
//! pending confirmation from the finance team; treat them as estimates,
//! not accounting policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunable constants for statement builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Symmetric band (in percent) around zero variance inside which a
    /// budget line is considered on track.
    pub variance_threshold_percent: Decimal,
    /// Fraction of working-capital account balances treated as the period
    /// delta in the cash-flow operating section.
    pub working_capital_factor: Decimal,
    /// Fraction of period expenses attributed to equipment purchases in
    /// the cash-flow investing section.
    pub equipment_expense_factor: Decimal,
    /// Fraction of loan-related payments treated as principal repayment in
    /// the cash-flow financing section.
    pub loan_repayment_factor: Decimal,
    /// Inclusive account-code range treated as revenue when attributing GL
    /// postings to departments.
    pub revenue_code_start: u32,
    /// Upper bound (inclusive) of the revenue account-code range.
    pub revenue_code_end: u32,
    /// Label used for payables whose supplier name is missing.
    pub unknown_supplier_label: String,
    /// Label used for receivables whose guest name is missing.
    pub unknown_guest_label: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            variance_threshold_percent: Decimal::new(5, 0),
            working_capital_factor: Decimal::new(10, 2),
            equipment_expense_factor: Decimal::new(20, 2),
            loan_repayment_factor: Decimal::new(5, 2),
            revenue_code_start: 4000,
            revenue_code_end: 4999,
            unknown_supplier_label: "Unknown Supplier".to_string(),
            unknown_guest_label: "Unknown Guest".to_string(),
        }
    }
}

impl ReportingConfig {
    /// Returns true if the given account code falls in the revenue range.
    #[must_use]
    pub fn is_revenue_code(&self, code: u32) -> bool {
        (self.revenue_code_start..=self.revenue_code_end).contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ReportingConfig::default();
        assert_eq!(config.variance_threshold_percent, dec!(5));
        assert_eq!(config.working_capital_factor, dec!(0.10));
        assert_eq!(config.equipment_expense_factor, dec!(0.20));
        assert_eq!(config.loan_repayment_factor, dec!(0.05));
    }

    #[test]
    fn test_revenue_code_range() {
        let config = ReportingConfig::default();
        assert!(config.is_revenue_code(4000));
        assert!(config.is_revenue_code(4999));
        assert!(!config.is_revenue_code(3999));
        assert!(!config.is_revenue_code(5000));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: ReportingConfig =
            serde_json::from_str(r#"{"variance_threshold_percent":"3"}"#).unwrap();
        assert_eq!(config.variance_threshold_percent, dec!(3));
        assert_eq!(config.working_capital_factor, dec!(0.10));
    }
}
