use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::{JournalEntryDB, WeeklyNoteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{journal_entries, weekly_notes};
use crate::utils::chunk_for_sqlite;
use daybook_core::errors::Result;
use daybook_core::journal::{
    JournalEntry, JournalEntryInput, JournalRepositoryTrait, WeeklyNote, WeeklyNoteInput,
};

pub struct JournalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl JournalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        JournalRepository { pool, writer }
    }
}

#[async_trait]
impl JournalRepositoryTrait for JournalRepository {
    fn get_entries(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = journal_entries::table
            .filter(journal_entries::user_id.eq(user_id))
            .filter(journal_entries::date.ge(start))
            .filter(journal_entries::date.le(end))
            .order(journal_entries::date.asc())
            .select(JournalEntryDB::as_select())
            .load::<JournalEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(JournalEntry::from).collect())
    }

    fn get_all_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = journal_entries::table
            .filter(journal_entries::user_id.eq(user_id))
            .order(journal_entries::date.asc())
            .select(JournalEntryDB::as_select())
            .load::<JournalEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(JournalEntry::from).collect())
    }

    async fn upsert_entry(&self, user_id: &str, entry: JournalEntryInput) -> Result<JournalEntry> {
        let row = JournalEntryDB::from_input(user_id, &entry, Utc::now().naive_utc());
        debug!("Upserting journal entry {} for user {}", row.id, row.user_id);

        self.writer
            .exec(move |conn| {
                // created_at is only written on insert.
                diesel::insert_into(journal_entries::table)
                    .values(&row)
                    .on_conflict((journal_entries::user_id, journal_entries::id))
                    .do_update()
                    .set((
                        journal_entries::capital.eq(&row.capital),
                        journal_entries::profit.eq(&row.profit),
                        journal_entries::brokerage.eq(&row.brokerage),
                        journal_entries::status.eq(&row.status),
                        journal_entries::updated_at.eq(row.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                journal_entries::table
                    .filter(journal_entries::user_id.eq(&row.user_id))
                    .filter(journal_entries::id.eq(&row.id))
                    .select(JournalEntryDB::as_select())
                    .first::<JournalEntryDB>(conn)
                    .map(JournalEntry::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    fn get_weekly_notes(&self, user_id: &str, week_keys: &[String]) -> Result<Vec<WeeklyNote>> {
        let mut conn = get_connection(&self.pool)?;
        let mut notes = Vec::new();
        for chunk in chunk_for_sqlite(week_keys) {
            let rows = weekly_notes::table
                .filter(weekly_notes::user_id.eq(user_id))
                .filter(weekly_notes::week_key.eq_any(chunk))
                .select(WeeklyNoteDB::as_select())
                .load::<WeeklyNoteDB>(&mut conn)
                .map_err(StorageError::from)?;
            notes.extend(rows.into_iter().map(WeeklyNote::from));
        }
        notes.sort_by_key(|n| n.week_start);
        Ok(notes)
    }

    async fn upsert_weekly_note(&self, user_id: &str, note: WeeklyNoteInput) -> Result<WeeklyNote> {
        let row = WeeklyNoteDB::from_input(user_id, &note, Utc::now().naive_utc());

        self.writer
            .exec(move |conn| {
                diesel::insert_into(weekly_notes::table)
                    .values(&row)
                    .on_conflict((weekly_notes::user_id, weekly_notes::id))
                    .do_update()
                    .set((
                        weekly_notes::week_key.eq(&row.week_key),
                        weekly_notes::note.eq(&row.note),
                        weekly_notes::updated_at.eq(row.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                weekly_notes::table
                    .filter(weekly_notes::user_id.eq(&row.user_id))
                    .filter(weekly_notes::id.eq(&row.id))
                    .select(WeeklyNoteDB::as_select())
                    .first::<WeeklyNoteDB>(conn)
                    .map(WeeklyNote::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_db, insert_test_user};
    use daybook_core::errors::{DatabaseError, Error};
    use daybook_core::journal::DayStatus;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(day: NaiveDate) -> JournalEntryInput {
        JournalEntryInput {
            date: day,
            capital: Some(dec!(100000)),
            profit: Some(dec!(1500.25)),
            brokerage: Some(dec!(40)),
            status: Some(DayStatus::TargetAchieved),
        }
    }

    #[tokio::test]
    async fn test_upsert_entry_is_keyed_by_date() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "user-1");
        let repo = JournalRepository::new(pool, writer);

        let first = repo
            .upsert_entry("user-1", input(date(2026, 1, 19)))
            .await
            .unwrap();
        assert_eq!(first.id, "20260119");
        assert_eq!(first.profit, Some(dec!(1500.25)));

        let mut changed = input(date(2026, 1, 19));
        changed.profit = Some(dec!(-200));
        changed.status = Some(DayStatus::Losing);
        let second = repo.upsert_entry("user-1", changed).await.unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.status, Some(DayStatus::Losing));
        let all = repo.get_all_entries("user-1").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].net_profit(), dec!(-240));
    }

    #[tokio::test]
    async fn test_entries_range_is_inclusive_ordered_and_scoped() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "alice");
        insert_test_user(&pool, "bob");
        let repo = JournalRepository::new(pool, writer);

        for day in [date(2026, 1, 21), date(2026, 1, 19), date(2026, 1, 23)] {
            repo.upsert_entry("alice", input(day)).await.unwrap();
        }
        repo.upsert_entry("bob", input(date(2026, 1, 20))).await.unwrap();

        let range = repo
            .get_entries("alice", date(2026, 1, 19), date(2026, 1, 21))
            .unwrap();
        let dates: Vec<_> = range.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2026, 1, 19), date(2026, 1, 21)]);
        assert_eq!(repo.get_all_entries("bob").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_status_and_blank_amounts_round_trip() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "user-1");
        let repo = JournalRepository::new(pool, writer);

        let entry = repo
            .upsert_entry(
                "user-1",
                JournalEntryInput {
                    date: date(2026, 1, 22),
                    status: DayStatus::parse("Revenge trade"),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(entry.capital, None);
        assert_eq!(
            entry.status,
            Some(DayStatus::Unknown("Revenge trade".to_string()))
        );
    }

    #[tokio::test]
    async fn test_failed_write_leaves_state_unchanged() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        let repo = JournalRepository::new(pool, writer);

        // No such user: the foreign key rejects the row.
        let result = repo.upsert_entry("ghost", input(date(2026, 1, 19))).await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
        ));
        assert!(repo.get_all_entries("ghost").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_weekly_notes_upsert_and_lookup() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "user-1");
        let repo = JournalRepository::new(pool, writer);

        let note = WeeklyNoteInput {
            week_key: "2026-W04".to_string(),
            week_start: date(2026, 1, 19),
            note: "Cut losers early".to_string(),
        };
        repo.upsert_weekly_note("user-1", note.clone()).await.unwrap();
        let updated = repo
            .upsert_weekly_note(
                "user-1",
                WeeklyNoteInput {
                    note: "Cut losers earlier".to_string(),
                    ..note
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, "20260119");

        let mut keys: Vec<String> = (1..=600).map(|i| format!("1900-W{}", i)).collect();
        keys.push("2026-W04".to_string());
        let notes = repo.get_weekly_notes("user-1", &keys).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note, "Cut losers earlier");
        assert!(repo
            .get_weekly_notes("someone-else", &keys)
            .unwrap()
            .is_empty());
    }
}
