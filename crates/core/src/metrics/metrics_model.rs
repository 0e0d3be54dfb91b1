//! Derived metrics models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::journal::{deserialize_optional_status, DayStatus, JournalEntry};

/// Figures derived for one trading day.
///
/// `None` means the value cannot be computed from what was recorded (e.g. no
/// capital) and is rendered blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMetrics {
    pub date: NaiveDate,
    /// Initial capital compounded at 1% per elapsed trading day
    pub projected_capital: Option<Decimal>,
    /// 1% of the day's capital
    pub target: Option<Decimal>,
    /// 2% of the day's capital
    pub max_stop_loss: Option<Decimal>,
    /// 0.2% of the day's capital
    pub max_brokerage: Option<Decimal>,
    /// Profit minus brokerage
    pub net_profit: Decimal,
    /// Net profit relative to capital, in percent
    pub profit_percent: Option<Decimal>,
    /// Brokerage relative to gross profit, in percent
    pub brokerage_percent: Option<Decimal>,
}

/// Sums over a set of days. The same reduction is used for weeks, months and
/// the whole journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub total_profit: Decimal,
    pub total_brokerage: Decimal,
    pub realized_profit: Decimal,
    pub entry_count: usize,
}

impl PeriodTotals {
    pub fn add(&mut self, entry: &JournalEntry) {
        self.total_profit += entry.profit.unwrap_or_default();
        self.total_brokerage += entry.brokerage.unwrap_or_default();
        self.realized_profit = self.total_profit - self.total_brokerage;
        self.entry_count += 1;
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }
}

/// One bucket of the weekly or monthly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// `YYYY-Www` or `YYYY-MM`
    pub key: String,
    /// `Jan 19` (Monday of the week) or `Jan 2026`
    pub label: String,
    pub start_date: NaiveDate,
    pub totals: PeriodTotals,
}

/// Point on the cumulative net profit curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub net_profit: Decimal,
    pub cumulative_profit: Decimal,
}

/// A day as it appears in the best/worst rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResult {
    pub date: NaiveDate,
    pub net_profit: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<DayStatus>,
}

impl From<&JournalEntry> for DayResult {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            date: entry.date,
            net_profit: entry.net_profit(),
            status: entry.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStats {
    pub totals: PeriodTotals,
    pub trading_days: usize,
    pub win_days: usize,
    pub loss_days: usize,
    pub win_rate: Decimal,
    pub avg_daily_profit: Decimal,
    pub best_day: Option<DayResult>,
    pub worst_day: Option<DayResult>,
    pub top_wins: Vec<DayResult>,
    pub top_losses: Vec<DayResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Loss,
}

/// A run of consecutive wins or losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRun {
    pub kind: StreakKind,
    pub length: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_win_streak: u32,
    pub current_loss_streak: u32,
    pub last_outcome: Option<StreakKind>,
    pub longest_win: Option<StreakRun>,
    pub longest_loss: Option<StreakRun>,
}

impl StreakSummary {
    pub fn longest_win_len(&self) -> u32 {
        self.longest_win.as_ref().map_or(0, |run| run.length)
    }

    pub fn longest_loss_len(&self) -> u32 {
        self.longest_loss.as_ref().map_or(0, |run| run.length)
    }
}

/// Everything the insights page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub stats: TradingStats,
    pub streaks: StreakSummary,
    pub weekly: Vec<PeriodSummary>,
    pub monthly: Vec<PeriodSummary>,
    pub cumulative: Vec<CumulativePoint>,
}

/// A row of the month journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDay {
    pub date: NaiveDate,
    pub entry: Option<JournalEntry>,
    pub status_label: Option<String>,
    pub metrics: DayMetrics,
}

/// One ISO week of the month journal with its totals and note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalWeek {
    pub week_key: String,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// `Jan 19 - Jan 23`
    pub range_label: String,
    pub days: Vec<JournalDay>,
    pub totals: PeriodTotals,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthJournal {
    pub month: YearMonth,
    pub label: String,
    pub weeks: Vec<JournalWeek>,
    pub totals: PeriodTotals,
    pub previous_month: Option<YearMonth>,
    pub next_month: Option<YearMonth>,
}
