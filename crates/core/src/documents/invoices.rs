//! Supplier (AP) and guest (AR) invoices.
//!
//! These records arrive from purchasing and the front office and are
//! consumed read-only by the reporting builders. An invoice counts as
//! outstanding for aging when its status is not terminal and it still
//! carries a positive balance.

use chrono::NaiveDate;
use folio_shared::types::{GuestInvoiceId, SupplierInvoiceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Workflow status of a supplier invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplierInvoiceStatus {
    /// Invoice received, awaiting approval.
    Received,
    /// Approved for payment.
    Approved,
    /// Partially paid.
    PartiallyPaid,
    /// Fully settled and posted.
    Posted,
    /// Cancelled before settlement.
    Cancelled,
    /// Rejected during approval.
    Rejected,
}

impl SupplierInvoiceStatus {
    /// Returns true if the invoice can still owe money.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Posted | Self::Cancelled | Self::Rejected)
    }
}

/// An accounts-payable invoice from a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierInvoice {
    /// Invoice ID.
    pub id: SupplierInvoiceId,
    /// Supplier's invoice number.
    pub invoice_number: String,
    /// Supplier name; aging groups missing names under a placeholder.
    pub supplier_name: Option<String>,
    /// Date the invoice was issued.
    pub invoice_date: NaiveDate,
    /// Date payment is due; the AP aging reference date.
    pub due_date: NaiveDate,
    /// Invoice amount before tax.
    pub amount: Decimal,
    /// Tax rate applied, as a percentage (e.g., 10 for 10%).
    pub tax_rate: Decimal,
    /// Tax amount paid to the supplier.
    pub tax_amount: Decimal,
    /// Outstanding balance still owed.
    pub balance: Decimal,
    /// Workflow status.
    pub status: SupplierInvoiceStatus,
}

impl SupplierInvoice {
    /// Returns true if this invoice belongs in the AP aging schedule.
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.status.is_open() && self.balance > Decimal::ZERO
    }
}

/// Workflow status of a guest invoice (folio bill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuestInvoiceStatus {
    /// Open and collectible.
    Open,
    /// Partially paid.
    PartiallyPaid,
    /// Fully settled and posted.
    Posted,
    /// Cancelled before settlement.
    Cancelled,
    /// Refunded to the guest.
    Refunded,
}

impl GuestInvoiceStatus {
    /// Returns true if the invoice can still be owed by the guest.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Posted | Self::Cancelled | Self::Refunded)
    }
}

/// A single billed line on a guest invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestInvoiceLine {
    /// What was billed.
    pub description: String,
    /// Department the charge belongs to (e.g., "Rooms", "F&B").
    pub department: Option<String>,
    /// Line amount before tax.
    pub amount: Decimal,
    /// Tax rate applied, as a percentage.
    pub tax_rate: Decimal,
    /// Tax collected on this line.
    pub tax_amount: Decimal,
}

/// An accounts-receivable invoice issued to a guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestInvoice {
    /// Invoice ID.
    pub id: GuestInvoiceId,
    /// Invoice number issued to the guest.
    pub invoice_number: String,
    /// Guest name; aging groups missing names under a placeholder.
    pub guest_name: Option<String>,
    /// Issue date; the AR aging reference date.
    pub invoice_date: NaiveDate,
    /// Billed line items.
    pub line_items: Vec<GuestInvoiceLine>,
    /// Service charge added on top of the line items.
    pub service_charge: Decimal,
    /// Tax collected on the service charge.
    pub service_charge_tax: Decimal,
    /// Outstanding balance still owed.
    pub balance: Decimal,
    /// Workflow status.
    pub status: GuestInvoiceStatus,
}

impl GuestInvoice {
    /// Returns true if this invoice belongs in the AR aging schedule.
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.status.is_open() && self.balance > Decimal::ZERO
    }
}
