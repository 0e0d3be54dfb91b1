//! Derived metrics - per-day figures, period totals, trading stats, streaks
//! and the month journal view.
//!
//! Everything here except the service is a pure function of its inputs and
//! never fails: missing figures count as zero in sums and as `None` in
//! derived values.

mod aggregation;
mod day_metrics;
mod insights;
mod metrics_model;
mod metrics_service;
mod metrics_traits;
mod month_view;
mod streaks;
mod trading_stats;


pub use aggregation::{cumulative_profit, summarize_by_month, summarize_by_week};
pub use day_metrics::{compute_day_metrics, projected_capital};
pub use insights::compute_insights;
pub use metrics_model::{
    CumulativePoint, DayMetrics, DayResult, Insights, JournalDay, JournalWeek, MonthJournal,
    PeriodSummary, PeriodTotals, StreakKind, StreakRun, StreakSummary, TradingStats,
};
pub use metrics_service::MetricsService;
pub use metrics_traits::MetricsServiceTrait;
pub use month_view::build_month_journal;
pub use streaks::compute_streaks;
pub use trading_stats::compute_trading_stats;
