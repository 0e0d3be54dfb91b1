use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};

use super::DayMetrics;
use crate::calendar::weekdays_before;
use crate::constants::{
    DAILY_TARGET_RATE, DECIMAL_PRECISION, MAX_BROKERAGE_RATE, MAX_STOP_LOSS_RATE,
    PROJECTED_DAILY_GROWTH,
};
use crate::journal::JournalEntry;
use crate::settings::TradingConfig;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Initial capital compounded at 1% for every weekday elapsed since the start
/// date.
///
/// `None` before the start date or when the initial capital or start date is
/// not configured. The start date itself yields the initial capital exactly.
pub fn projected_capital(config: &TradingConfig, day: NaiveDate) -> Option<Decimal> {
    let capital = config.initial_capital.filter(|c| *c > Decimal::ZERO)?;
    let start = config.start_date?;
    if day < start {
        return None;
    }
    let elapsed = weekdays_before(start, day);
    if elapsed == 0 {
        return Some(capital);
    }
    PROJECTED_DAILY_GROWTH
        .checked_powu(u64::from(elapsed))
        .and_then(|factor| capital.checked_mul(factor))
        .map(|value| value.round_dp(DECIMAL_PRECISION))
}

/// `numerator / denominator * 100`, `None` for a zero denominator.
pub(crate) fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .map(|value| value.round_dp(DECIMAL_PRECISION))
}

/// Derives the per-day figures for `day`. `entry` is the recorded row, if any.
pub fn compute_day_metrics(
    config: &TradingConfig,
    day: NaiveDate,
    entry: Option<&JournalEntry>,
) -> DayMetrics {
    let capital = entry
        .and_then(|e| e.capital)
        .filter(|c| *c > Decimal::ZERO);
    let profit = entry.and_then(|e| e.profit).unwrap_or_default();
    let brokerage = entry.and_then(|e| e.brokerage).unwrap_or_default();
    let net_profit = profit - brokerage;

    DayMetrics {
        date: day,
        projected_capital: projected_capital(config, day),
        target: capital.map(|c| c * DAILY_TARGET_RATE),
        max_stop_loss: capital.map(|c| c * MAX_STOP_LOSS_RATE),
        max_brokerage: capital.map(|c| c * MAX_BROKERAGE_RATE),
        net_profit,
        profit_percent: capital.and_then(|c| percent_of(net_profit, c)),
        // Sign of profit is kept as is, so a loss day yields a negative ratio.
        brokerage_percent: percent_of(brokerage, profit),
    }
}
