//! Journal module - daily entries, weekly notes, services, and traits.

mod amount;
mod journal_model;
mod journal_service;
mod journal_traits;


pub use amount::{deserialize_lenient_amount, parse_amount};
pub use journal_model::{
    deserialize_optional_status, entry_id_for_date, is_non_trading, DayStatus, JournalEntry, JournalEntryInput, WeeklyNote,
    WeeklyNoteInput,
};
pub use journal_service::JournalService;
pub use journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
