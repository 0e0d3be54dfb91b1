//! Database model for per-user settings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One key/value setting of one user.
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::user_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserSettingDB {
    pub user_id: String,
    pub setting_key: String,
    pub setting_value: String,
}

pub const INITIAL_CAPITAL_KEY: &str = "initial_capital";
pub const START_DATE_KEY: &str = "start_date";
pub const THEME_KEY: &str = "theme";
