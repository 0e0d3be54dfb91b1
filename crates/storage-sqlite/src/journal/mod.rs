//! SQLite storage implementation for journal entries and weekly notes.

mod model;
mod repository;

pub use model::{JournalEntryDB, WeeklyNoteDB};
pub use repository::JournalRepository;

// Re-export trait from core for convenience
pub use daybook_core::journal::JournalRepositoryTrait;
