use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_THEME;
use crate::journal::deserialize_lenient_amount;

/// Themes the front-end knows how to render.
pub const SUPPORTED_THEMES: [&str; 3] = ["light", "dark", "system"];

/// Per-user settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub initial_capital: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_capital: None,
            start_date: None,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Settings {
    pub fn trading_config(&self) -> TradingConfig {
        TradingConfig {
            initial_capital: self.initial_capital,
            start_date: self.start_date,
        }
    }
}

/// Partial settings update.
///
/// An absent field is left untouched. For the capital and the start date,
/// `null` or a blank value clears what is stored (`Some(None)`); a
/// non-numeric capital clears it as well.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(
        default,
        deserialize_with = "deserialize_capital_change",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_capital: Option<Option<Decimal>>,
    #[serde(
        default,
        deserialize_with = "deserialize_date_change",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.initial_capital.is_none() && self.start_date.is_none() && self.theme.is_none()
    }
}

// Only called when the field is present in the payload.
fn deserialize_capital_change<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_lenient_amount(deserializer).map(Some)
}

fn deserialize_date_change<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(Some(None)),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| Some(Some(date)))
            .map_err(|_| de::Error::custom(format!("'{}' is not a YYYY-MM-DD date", text))),
    }
}

/// The trading parameters the metrics engine needs.
///
/// Loaded explicitly from the settings store and passed into every
/// computation that depends on it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradingConfig {
    pub initial_capital: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
}

impl TradingConfig {
    pub fn new(initial_capital: Decimal, start_date: NaiveDate) -> Self {
        Self {
            initial_capital: Some(initial_capital),
            start_date: Some(start_date),
        }
    }
}
