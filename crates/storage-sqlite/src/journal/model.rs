//! Database models for journal entries and weekly notes.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{amount_from_db, amount_to_db};
use daybook_core::journal::{DayStatus, JournalEntry, JournalEntryInput, WeeklyNote, WeeklyNoteInput};

/// Database model for a journal day. Amounts are TEXT decimals.
#[derive(
    Queryable, Selectable, Insertable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::journal_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryDB {
    pub user_id: String,
    pub id: String,
    pub date: NaiveDate,
    pub capital: Option<String>,
    pub profit: Option<String>,
    pub brokerage: Option<String>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl JournalEntryDB {
    pub fn from_input(user_id: &str, input: &JournalEntryInput, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            id: input.id(),
            date: input.date,
            capital: amount_to_db(input.capital),
            profit: amount_to_db(input.profit),
            brokerage: amount_to_db(input.brokerage),
            status: input.status.as_ref().map(|s| s.as_str().to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<JournalEntryDB> for JournalEntry {
    fn from(db: JournalEntryDB) -> Self {
        Self {
            capital: amount_from_db(db.capital.as_deref()),
            profit: amount_from_db(db.profit.as_deref()),
            brokerage: amount_from_db(db.brokerage.as_deref()),
            status: db.status.as_deref().and_then(DayStatus::parse),
            id: db.id,
            user_id: db.user_id,
            date: db.date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Database model for a weekly note, keyed by the week's Monday.
#[derive(
    Queryable, Selectable, Insertable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::weekly_notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNoteDB {
    pub user_id: String,
    pub id: String,
    pub week_key: String,
    pub week_start: NaiveDate,
    pub note: String,
    pub updated_at: NaiveDateTime,
}

impl WeeklyNoteDB {
    pub fn from_input(user_id: &str, input: &WeeklyNoteInput, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            id: input.id(),
            week_key: input.week_key.clone(),
            week_start: input.week_start,
            note: input.note.clone(),
            updated_at: now,
        }
    }
}

impl From<WeeklyNoteDB> for WeeklyNote {
    fn from(db: WeeklyNoteDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            week_key: db.week_key,
            week_start: db.week_start,
            note: db.note,
            updated_at: db.updated_at,
        }
    }
}
