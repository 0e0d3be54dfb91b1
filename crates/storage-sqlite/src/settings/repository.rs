use async_trait::async_trait;
use diesel::prelude::*;
use log::warn;
use std::sync::Arc;

use super::model::{UserSettingDB, INITIAL_CAPITAL_KEY, START_DATE_KEY, THEME_KEY};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_settings;
use crate::utils::{amount_from_db, amount_to_db, date_from_db};
use daybook_core::errors::Result;
use daybook_core::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

/// Splits an update into rows to upsert and keys to delete.
fn changes_for_update(
    user_id: &str,
    update: &SettingsUpdate,
) -> (Vec<UserSettingDB>, Vec<&'static str>) {
    let row = |key: &str, value: String| UserSettingDB {
        user_id: user_id.to_string(),
        setting_key: key.to_string(),
        setting_value: value,
    };
    let mut rows = Vec::new();
    let mut cleared = Vec::new();
    if let Some(capital) = update.initial_capital {
        match amount_to_db(capital) {
            Some(value) => rows.push(row(INITIAL_CAPITAL_KEY, value)),
            None => cleared.push(INITIAL_CAPITAL_KEY),
        }
    }
    match update.start_date {
        Some(Some(start)) => rows.push(row(START_DATE_KEY, start.format("%Y-%m-%d").to_string())),
        Some(None) => cleared.push(START_DATE_KEY),
        None => {}
    }
    if let Some(ref theme) = update.theme {
        rows.push(row(THEME_KEY, theme.clone()));
    }
    (rows, cleared)
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self, user_id: &str) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, String)> = user_settings::table
            .filter(user_settings::user_id.eq(user_id))
            .select((user_settings::setting_key, user_settings::setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        let mut settings = Settings::default();
        for (key, value) in rows {
            match key.as_str() {
                INITIAL_CAPITAL_KEY => settings.initial_capital = amount_from_db(Some(&value)),
                START_DATE_KEY => {
                    settings.start_date = date_from_db(&value);
                    if settings.start_date.is_none() {
                        warn!("Ignoring unreadable start date '{}' for user {}", value, user_id);
                    }
                }
                THEME_KEY => settings.theme = value,
                _ => {}
            }
        }
        Ok(settings)
    }

    async fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<()> {
        let (rows, cleared) = changes_for_update(user_id, update);
        if rows.is_empty() && cleared.is_empty() {
            return Ok(());
        }
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn| {
                for row in &rows {
                    diesel::replace_into(user_settings::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                if !cleared.is_empty() {
                    diesel::delete(
                        user_settings::table
                            .filter(user_settings::user_id.eq(&owner))
                            .filter(user_settings::setting_key.eq_any(cleared.iter().copied())),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_db, insert_test_user};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_defaults_then_partial_updates() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "user-1");
        insert_test_user(&pool, "user-2");
        let repo = SettingsRepository::new(pool, writer);

        let defaults = repo.get_settings("user-1").unwrap();
        assert_eq!(defaults, Settings::default());

        repo.update_settings(
            "user-1",
            &SettingsUpdate {
                initial_capital: Some(Some(dec!(250000))),
                start_date: Some(NaiveDate::from_ymd_opt(2026, 1, 5)),
                theme: None,
            },
        )
        .await
        .unwrap();
        repo.update_settings(
            "user-1",
            &SettingsUpdate {
                theme: Some("dark".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let settings = repo.get_settings("user-1").unwrap();
        assert_eq!(settings.initial_capital, Some(dec!(250000)));
        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2026, 1, 5));
        assert_eq!(settings.theme, "dark");
        assert_eq!(repo.get_settings("user-2").unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_clearing_removes_capital_and_start_date() {
        let (pool, writer, _temp_dir) = create_test_db().await;
        insert_test_user(&pool, "user-1");
        insert_test_user(&pool, "user-2");
        let repo = SettingsRepository::new(pool.clone(), writer);

        let configured = SettingsUpdate {
            initial_capital: Some(Some(dec!(250000))),
            start_date: Some(NaiveDate::from_ymd_opt(2026, 1, 5)),
            theme: Some("light".to_string()),
        };
        repo.update_settings("user-1", &configured).await.unwrap();
        repo.update_settings("user-2", &configured).await.unwrap();

        repo.update_settings(
            "user-1",
            &SettingsUpdate {
                initial_capital: Some(None),
                start_date: Some(None),
                theme: None,
            },
        )
        .await
        .unwrap();

        let settings = repo.get_settings("user-1").unwrap();
        assert_eq!(settings.initial_capital, None);
        assert_eq!(settings.start_date, None);
        assert_eq!(settings.theme, "light");

        let mut conn = get_connection(&pool).unwrap();
        let keys: Vec<String> = user_settings::table
            .filter(user_settings::user_id.eq("user-1"))
            .select(user_settings::setting_key)
            .load(&mut conn)
            .unwrap();
        assert_eq!(keys, vec![THEME_KEY.to_string()]);

        let other = repo.get_settings("user-2").unwrap();
        assert_eq!(other.initial_capital, Some(dec!(250000)));
        assert_eq!(other.start_date, NaiveDate::from_ymd_opt(2026, 1, 5));

        // Clearing what was never stored is a no-op.
        repo.update_settings(
            "user-1",
            &SettingsUpdate {
                start_date: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(repo.get_settings("user-1").unwrap().start_date, None);
    }
}
