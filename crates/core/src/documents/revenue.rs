//! Hotel revenue feeds: folio charges and outlet orders.
//!
//! Supplied by the front office and point-of-sale systems; the
//! departmental P&L builder attributes their amounts to departments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A charge posted to a guest folio (room, minibar, laundry, spa).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioCharge {
    /// Date the charge was posted to the folio.
    pub charge_date: NaiveDate,
    /// Department earning the revenue.
    pub department: String,
    /// Charge amount.
    pub amount: Decimal,
    /// What was charged.
    pub description: String,
}

/// Status of an outlet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order open or in progress.
    Open,
    /// Order completed and billed.
    Completed,
    /// Order cancelled; earns no revenue.
    Cancelled,
}

/// A restaurant or bar order from a point-of-sale outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Date the order was taken.
    pub order_date: NaiveDate,
    /// Outlet department (e.g., "F&B").
    pub department: String,
    /// Order total.
    pub amount: Decimal,
    /// Order status.
    pub status: OrderStatus,
}

impl Order {
    /// Returns true if the order contributes revenue.
    #[must_use]
    pub const fn earns_revenue(&self) -> bool {
        !matches!(self.status, OrderStatus::Cancelled)
    }
}
