//! Daybook Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic of the Daybook trading
//! journal: the calendar of trading days, journal entries and weekly notes,
//! per-user settings, accounts and the derived-metrics engine.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod calendar;
pub mod constants;
pub mod errors;
pub mod journal;
pub mod metrics;
pub mod quotes;
pub mod settings;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
