//! SQLite storage for Daybook.
//!
//! Implements the repository traits of `daybook-core` with Diesel over a
//! pooled SQLite database. Reads go through the r2d2 pool; every write is
//! serialized through a single writer task and runs in its own immediate
//! transaction.
//!
//! Diesel never leaks out of this crate: repositories take and return core
//! types, and all failures are converted to `daybook_core::Error`.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

pub mod journal;
pub mod settings;
pub mod users;

#[cfg(test)]
mod test_utils;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use daybook_core::errors::{DatabaseError, Error, Result};
