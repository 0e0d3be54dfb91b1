use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::{CumulativePoint, PeriodSummary, PeriodTotals};
use crate::calendar::{WeekKey, YearMonth};
use crate::journal::JournalEntry;

/// Entries in chronological order. Stable, so same-day rows keep input order.
pub(crate) fn sorted_by_date(entries: &[JournalEntry]) -> Vec<&JournalEntry> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Totals per ISO week, ordered by week key.
pub fn summarize_by_week(entries: &[JournalEntry]) -> Vec<PeriodSummary> {
    let mut buckets: BTreeMap<WeekKey, PeriodTotals> = BTreeMap::new();
    for entry in entries {
        buckets.entry(WeekKey::of(entry.date)).or_default().add(entry);
    }
    buckets
        .into_iter()
        .filter_map(|(key, totals)| {
            let monday = key.monday()?;
            Some(PeriodSummary {
                key: key.to_string(),
                label: monday.format("%b %d").to_string(),
                start_date: monday,
                totals,
            })
        })
        .collect()
}

/// Totals per calendar month, ordered by month.
pub fn summarize_by_month(entries: &[JournalEntry]) -> Vec<PeriodSummary> {
    let mut buckets: BTreeMap<YearMonth, PeriodTotals> = BTreeMap::new();
    for entry in entries {
        buckets.entry(YearMonth::of(entry.date)).or_default().add(entry);
    }
    buckets
        .into_iter()
        .map(|(month, totals)| PeriodSummary {
            key: month.to_string(),
            label: month.label(),
            start_date: month.first_day(),
            totals,
        })
        .collect()
}

/// Running sum of daily net profit.
pub fn cumulative_profit(entries: &[JournalEntry]) -> Vec<CumulativePoint> {
    let mut running = Decimal::ZERO;
    sorted_by_date(entries)
        .into_iter()
        .map(|entry| {
            let net_profit = entry.net_profit();
            running += net_profit;
            CumulativePoint {
                date: entry.date,
                net_profit,
                cumulative_profit: running,
            }
        })
        .collect()
}
