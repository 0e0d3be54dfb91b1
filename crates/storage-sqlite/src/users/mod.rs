//! SQLite storage implementation for user accounts.

mod model;
mod repository;

pub use model::{NewUserDB, UserDB};
pub use repository::UserRepository;

// Re-export trait from core for convenience
pub use daybook_core::users::UserRepositoryTrait;
