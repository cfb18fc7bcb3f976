//! Shared types, errors, and configuration for the folio finance core.
//!
//! This crate holds the cross-cutting building blocks used by every
//! domain module: typed identifiers, the error envelope exposed to the
//! host application, and the reporting configuration knobs.

pub mod config;
pub mod error;
pub mod types;

pub use config::ReportingConfig;
pub use error::{AppError, AppResult};
