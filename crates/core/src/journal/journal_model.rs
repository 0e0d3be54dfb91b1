//! Journal domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::amount::deserialize_lenient_amount;

/// Outcome tag an operator assigns to a trading day.
///
/// Values are normalized at the boundary; anything unrecognized is kept
/// verbatim in `Unknown` so it survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayStatus {
    Losing,
    TargetAchieved,
    TargetFailed,
    MarketHoliday,
    SpecialOccasion,
    NoTrade,
    Unknown(String),
}

impl DayStatus {
    /// Normalizes a raw status. Blank input means "unset".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Some(match normalized.as_str() {
            "losing" | "losing_day" | "loss" => DayStatus::Losing,
            "target_achieved" => DayStatus::TargetAchieved,
            "target_failed" => DayStatus::TargetFailed,
            "market_holiday" | "holiday" => DayStatus::MarketHoliday,
            "special_occasion" => DayStatus::SpecialOccasion,
            "no_trade" => DayStatus::NoTrade,
            _ => DayStatus::Unknown(trimmed.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            DayStatus::Losing => "losing",
            DayStatus::TargetAchieved => "target_achieved",
            DayStatus::TargetFailed => "target_failed",
            DayStatus::MarketHoliday => "market_holiday",
            DayStatus::SpecialOccasion => "special_occasion",
            DayStatus::NoTrade => "no_trade",
            DayStatus::Unknown(raw) => raw,
        }
    }

    /// Human-readable label; unknown statuses show their raw value.
    pub fn label(&self) -> &str {
        match self {
            DayStatus::Losing => "Losing Day",
            DayStatus::TargetAchieved => "Target Achieved",
            DayStatus::TargetFailed => "Target Failed",
            DayStatus::MarketHoliday => "Market Holiday",
            DayStatus::SpecialOccasion => "Special Occasion",
            DayStatus::NoTrade => "No Trade",
            DayStatus::Unknown(raw) => raw,
        }
    }

    /// Holidays, special occasions and no-trade days are not trading days.
    pub fn is_trading_day(&self) -> bool {
        !matches!(
            self,
            DayStatus::MarketHoliday | DayStatus::SpecialOccasion | DayStatus::NoTrade
        )
    }

    pub fn is_win(&self) -> bool {
        matches!(self, DayStatus::TargetAchieved)
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, DayStatus::Losing)
    }
}

impl From<String> for DayStatus {
    fn from(value: String) -> Self {
        DayStatus::parse(&value).unwrap_or(DayStatus::Unknown(value))
    }
}

impl From<DayStatus> for String {
    fn from(value: DayStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an optional status excludes the day from trading statistics.
pub fn is_non_trading(status: Option<&DayStatus>) -> bool {
    status.is_some_and(|s| !s.is_trading_day())
}

/// Deterministic row identifier for a date: `2026-01-19` -> `20260119`.
pub fn entry_id_for_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Domain model representing one journal day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub capital: Option<Decimal>,
    pub profit: Option<Decimal>,
    pub brokerage: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<DayStatus>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl JournalEntry {
    /// Profit minus brokerage, treating unrecorded figures as zero.
    pub fn net_profit(&self) -> Decimal {
        self.profit.unwrap_or_default() - self.brokerage.unwrap_or_default()
    }

    pub fn is_non_trading(&self) -> bool {
        is_non_trading(self.status.as_ref())
    }
}

/// Input model for saving a journal day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryInput {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub capital: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub profit: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub brokerage: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<DayStatus>,
}

impl JournalEntryInput {
    pub fn id(&self) -> String {
        entry_id_for_date(self.date)
    }
}

/// Serde adapter for an optional status; blank strings and null are unset.
pub fn deserialize_optional_status<'de, D>(deserializer: D) -> Result<Option<DayStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(DayStatus::parse))
}

/// Domain model for a weekly note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNote {
    pub id: String,
    pub user_id: String,
    pub week_key: String,
    pub week_start: NaiveDate,
    pub note: String,
    pub updated_at: NaiveDateTime,
}

/// Input model for saving a weekly note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNoteInput {
    pub week_key: String,
    pub week_start: NaiveDate,
    pub note: String,
}

impl WeeklyNoteInput {
    pub fn id(&self) -> String {
        entry_id_for_date(self.week_start)
    }
}
