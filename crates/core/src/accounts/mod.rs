//! Chart of accounts.
//!
//! The chart is owned and edited by the host application; the finance core
//! only reads it. Account lookups feed journal validation, and the
//! normal-balance convention drives every signed-balance reduction in the
//! statement builders.

pub mod registry;
pub mod types;

pub use registry::ChartOfAccounts;
pub use types::{Account, AccountSubtype, AccountType, NormalBalance};
