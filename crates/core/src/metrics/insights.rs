use super::aggregation::{cumulative_profit, summarize_by_month, summarize_by_week};
use super::streaks::compute_streaks;
use super::trading_stats::compute_trading_stats;
use super::Insights;
use crate::journal::JournalEntry;

/// Stats, streaks, weekly/monthly summaries and the cumulative curve in one
/// payload.
pub fn compute_insights(entries: &[JournalEntry]) -> Insights {
    Insights {
        stats: compute_trading_stats(entries),
        streaks: compute_streaks(entries),
        weekly: summarize_by_week(entries),
        monthly: summarize_by_month(entries),
        cumulative: cumulative_profit(entries),
    }
}
