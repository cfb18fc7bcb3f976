//! Hotel back-office finance core.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The host application owns persistence and presentation;
//! everything here is a deterministic function of the collections it is
//! handed plus an explicitly injected clock.
//!
//! # Modules
//!
//! - `accounts` - Chart of accounts registry
//! - `journal` - Double-entry journal ledger, posting and reversal
//! - `fiscal` - Reporting period resolution
//! - `documents` - Read-only transactional inputs (invoices, expenses, payments)
//! - `reports` - Statement builders (trial balance, P&L, cash flow, aging, tax)
//! - `budget` - Budget variance analysis
//! - `centers` - Cost and profit center analysis

pub mod accounts;
pub mod budget;
pub mod centers;
pub mod documents;
pub mod fiscal;
pub mod journal;
pub mod reports;
