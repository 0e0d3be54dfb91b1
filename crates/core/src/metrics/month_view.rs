use std::collections::HashMap;

use chrono::NaiveDate;

use super::day_metrics::compute_day_metrics;
use super::{JournalDay, JournalWeek, MonthJournal, PeriodTotals};
use crate::calendar::{can_navigate_to, group_by_week, trading_days_in_month, YearMonth};
use crate::journal::{JournalEntry, WeeklyNote};
use crate::settings::TradingConfig;

/// Assembles the journal table for `month`: trading days grouped by ISO week,
/// each with its entry, derived metrics, weekly totals and note.
///
/// Entries and notes outside the displayed days are ignored, so month totals
/// are exactly the sum of the weekly totals.
pub fn build_month_journal(
    config: &TradingConfig,
    month: YearMonth,
    entries: &[JournalEntry],
    notes: &[WeeklyNote],
) -> MonthJournal {
    let by_date: HashMap<NaiveDate, &JournalEntry> =
        entries.iter().map(|entry| (entry.date, entry)).collect();
    let notes_by_week: HashMap<&str, &str> = notes
        .iter()
        .map(|note| (note.week_key.as_str(), note.note.as_str()))
        .collect();

    let days = trading_days_in_month(month, config.start_date);
    let mut month_totals = PeriodTotals::default();
    let mut weeks = Vec::new();

    for (week_key, week_days) in group_by_week(&days) {
        let (Some(&first_day), Some(&last_day)) = (week_days.first(), week_days.last()) else {
            continue;
        };
        let mut totals = PeriodTotals::default();
        let rows = week_days
            .iter()
            .map(|&date| {
                let entry = by_date.get(&date).copied();
                if let Some(entry) = entry {
                    totals.add(entry);
                    month_totals.add(entry);
                }
                JournalDay {
                    date,
                    entry: entry.cloned(),
                    status_label: entry
                        .and_then(|e| e.status.as_ref())
                        .map(|status| status.label().to_string()),
                    metrics: compute_day_metrics(config, date, entry),
                }
            })
            .collect();
        let key = week_key.to_string();
        let note = notes_by_week.get(key.as_str()).map(|n| n.to_string());

        weeks.push(JournalWeek {
            first_day,
            last_day,
            range_label: format!("{} - {}", first_day.format("%b %d"), last_day.format("%b %d")),
            week_key: key,
            days: rows,
            totals,
            note,
        });
    }

    let previous_month = month
        .previous()
        .filter(|prev| can_navigate_to(*prev, config.start_date));

    MonthJournal {
        month,
        label: month.first_day().format("%B %Y").to_string(),
        weeks,
        totals: month_totals,
        previous_month,
        next_month: month.next(),
    }
}
