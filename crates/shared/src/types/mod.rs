//! Shared type definitions.

pub mod amount;
pub mod id;

pub use amount::percent_of;
pub use id::{
    AccountId, BudgetId, CostCenterId, ExpenseId, GlEntryId, GuestInvoiceId, JournalEntryId,
    PaymentId, ProfitCenterId, StaffId, SupplierInvoiceId,
};
