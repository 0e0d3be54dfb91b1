use crate::errors::Result;
use crate::journal::journal_model::{JournalEntry, JournalEntryInput, WeeklyNote, WeeklyNoteInput};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Persistence gateway for journal days and weekly notes.
///
/// Every operation is scoped to the owning user.
#[async_trait]
pub trait JournalRepositoryTrait: Send + Sync {
    /// Entries with `start <= date <= end`, ordered by date.
    fn get_entries(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<JournalEntry>>;

    /// All entries of the user, ordered by date.
    fn get_all_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>>;

    /// Insert or replace the entry keyed by its date-derived id.
    async fn upsert_entry(&self, user_id: &str, entry: JournalEntryInput) -> Result<JournalEntry>;

    fn get_weekly_notes(&self, user_id: &str, week_keys: &[String]) -> Result<Vec<WeeklyNote>>;

    /// Insert or replace the note keyed by its Monday date.
    async fn upsert_weekly_note(&self, user_id: &str, note: WeeklyNoteInput)
        -> Result<WeeklyNote>;
}

/// Trait for journal service operations
#[async_trait]
pub trait JournalServiceTrait: Send + Sync {
    fn get_entries(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<JournalEntry>>;
    fn get_all_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>>;
    async fn save_entry(&self, user_id: &str, input: JournalEntryInput) -> Result<JournalEntry>;
    fn get_weekly_notes(&self, user_id: &str, week_keys: &[String]) -> Result<Vec<WeeklyNote>>;
    async fn save_weekly_note(&self, user_id: &str, input: WeeklyNoteInput) -> Result<WeeklyNote>;
}
