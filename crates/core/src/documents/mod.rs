//! External transactional inputs consumed read-only by reporting.

pub mod invoices;
pub mod revenue;
pub mod spend;

pub use invoices::{
    GuestInvoice, GuestInvoiceLine, GuestInvoiceStatus, SupplierInvoice, SupplierInvoiceStatus,
};
pub use revenue::{FolioCharge, Order, OrderStatus};
pub use spend::{Expense, ExpenseCategory, ExpenseStatus, Payment, PaymentMethod};
