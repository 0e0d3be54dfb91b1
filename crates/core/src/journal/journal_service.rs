use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::journal_model::{JournalEntry, JournalEntryInput, WeeklyNote, WeeklyNoteInput};
use super::journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
use crate::calendar::{is_weekend, week_monday, WeekKey};
use crate::errors::{Error, Result, ValidationError};

pub struct JournalService {
    repository: Arc<dyn JournalRepositoryTrait>,
}

impl JournalService {
    pub fn new(repository: Arc<dyn JournalRepositoryTrait>) -> Self {
        JournalService { repository }
    }

    fn normalize_week_keys(week_keys: &[String]) -> Result<Vec<String>> {
        let mut keys = week_keys
            .iter()
            .map(|raw| raw.parse::<WeekKey>().map(|key| key.to_string()))
            .collect::<Result<Vec<_>>>()?;
        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}

#[async_trait]
impl JournalServiceTrait for JournalService {
    fn get_entries(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<JournalEntry>> {
        if start > end {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Range start {} is after range end {}",
                start, end
            ))));
        }
        self.repository.get_entries(user_id, start, end)
    }

    fn get_all_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        self.repository.get_all_entries(user_id)
    }

    async fn save_entry(&self, user_id: &str, input: JournalEntryInput) -> Result<JournalEntry> {
        if is_weekend(input.date) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} falls on a weekend; only weekdays can be journaled",
                input.date
            ))));
        }
        debug!("Saving journal entry {} for user {}", input.id(), user_id);
        self.repository.upsert_entry(user_id, input).await
    }

    fn get_weekly_notes(&self, user_id: &str, week_keys: &[String]) -> Result<Vec<WeeklyNote>> {
        let keys = Self::normalize_week_keys(week_keys)?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.get_weekly_notes(user_id, &keys)
    }

    async fn save_weekly_note(&self, user_id: &str, input: WeeklyNoteInput) -> Result<WeeklyNote> {
        let key: WeekKey = input.week_key.parse()?;
        if WeekKey::of(input.week_start) != key {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} does not belong to week {}",
                input.week_start, key
            ))));
        }
        let normalized = WeeklyNoteInput {
            week_key: key.to_string(),
            week_start: week_monday(input.week_start),
            note: input.note,
        };
        debug!("Saving weekly note {} for user {}", normalized.week_key, user_id);
        self.repository.upsert_weekly_note(user_id, normalized).await
    }
}
