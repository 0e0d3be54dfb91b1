use rust_decimal::Decimal;

use super::aggregation::sorted_by_date;
use super::day_metrics::percent_of;
use super::{DayResult, PeriodTotals, TradingStats};
use crate::constants::{DECIMAL_PRECISION, LEADERBOARD_SIZE};
use crate::journal::JournalEntry;

/// Win rate, averages and leaderboards over the whole journal.
///
/// Only entries with a status that is a trading status count as trading days.
/// Rankings exclude holidays, special occasions and no-trade days but keep
/// days without a status.
pub fn compute_trading_stats(entries: &[JournalEntry]) -> TradingStats {
    let sorted = sorted_by_date(entries);
    let totals = PeriodTotals::from_entries(sorted.iter().copied());

    let trading_days = sorted
        .iter()
        .filter(|e| e.status.as_ref().is_some_and(|s| s.is_trading_day()))
        .count();
    let win_days = sorted
        .iter()
        .filter(|e| e.status.as_ref().is_some_and(|s| s.is_win()))
        .count();
    let loss_days = sorted
        .iter()
        .filter(|e| e.status.as_ref().is_some_and(|s| s.is_loss()))
        .count();

    let days = Decimal::from(trading_days);
    let win_rate = percent_of(Decimal::from(win_days), days).unwrap_or_default();
    let avg_daily_profit = totals
        .realized_profit
        .checked_div(days)
        .map(|avg| avg.round_dp(DECIMAL_PRECISION))
        .unwrap_or_default();

    // Strict comparisons keep the earliest day on ties.
    let mut best_day: Option<&JournalEntry> = None;
    let mut worst_day: Option<&JournalEntry> = None;
    for entry in sorted.iter().copied() {
        let net = entry.net_profit();
        if best_day.map_or(true, |best| net > best.net_profit()) {
            best_day = Some(entry);
        }
        if worst_day.map_or(true, |worst| net < worst.net_profit()) {
            worst_day = Some(entry);
        }
    }

    let mut ranked: Vec<DayResult> = sorted
        .iter()
        .filter(|e| !e.is_non_trading())
        .map(|e| DayResult::from(*e))
        .collect();
    ranked.sort_by(|a, b| b.net_profit.cmp(&a.net_profit));
    let top_wins: Vec<DayResult> = ranked.iter().take(LEADERBOARD_SIZE).cloned().collect();
    ranked.sort_by(|a, b| a.net_profit.cmp(&b.net_profit).then(a.date.cmp(&b.date)));
    let top_losses: Vec<DayResult> = ranked.into_iter().take(LEADERBOARD_SIZE).collect();

    TradingStats {
        totals,
        trading_days,
        win_days,
        loss_days,
        win_rate,
        avg_daily_profit,
        best_day: best_day.map(DayResult::from),
        worst_day: worst_day.map(DayResult::from),
        top_wins,
        top_losses,
    }
}
