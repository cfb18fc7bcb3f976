//! Fiscal calendar and reporting period resolution.

pub mod period;

pub use period::{fiscal_period_key, fiscal_year, DateRange, ReportingPeriod};
