//! Property-based tests for the derived-metrics engine.
//!
//! These tests verify that the aggregation and ranking invariants hold for
//! arbitrary journals, using the `proptest` crate for random test case
//! generation.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use daybook_core::calendar::weekdays_before;
use daybook_core::journal::{DayStatus, JournalEntry};
use daybook_core::metrics::{
    compute_day_metrics, compute_insights, projected_capital, PeriodTotals,
};
use daybook_core::settings::TradingConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn arb_status() -> impl Strategy<Value = Option<DayStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(DayStatus::Losing)),
        Just(Some(DayStatus::TargetAchieved)),
        Just(Some(DayStatus::TargetFailed)),
        Just(Some(DayStatus::MarketHoliday)),
        Just(Some(DayStatus::SpecialOccasion)),
        Just(Some(DayStatus::NoTrade)),
        Just(Some(DayStatus::Unknown("scalp".to_string()))),
    ]
}

/// Money in cents so sums stay exact.
fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((-500_000i64..500_000).prop_map(|cents| Decimal::new(cents, 2)))
}

fn arb_entry() -> impl Strategy<Value = (u64, Option<Decimal>, Option<Decimal>, Option<Decimal>, Option<DayStatus>)> {
    (0u64..730, arb_amount(), arb_amount(), arb_amount(), arb_status())
}

/// A journal with at most one entry per date.
fn arb_journal(max_count: usize) -> impl Strategy<Value = Vec<JournalEntry>> {
    proptest::collection::vec(arb_entry(), 0..=max_count).prop_map(|rows| {
        let mut by_date = BTreeMap::new();
        for (offset, capital, profit, brokerage, status) in rows {
            let date = base_date().checked_add_days(Days::new(offset)).unwrap();
            by_date.insert(
                date,
                JournalEntry {
                    id: date.format("%Y%m%d").to_string(),
                    user_id: "user-1".to_string(),
                    date,
                    capital,
                    profit,
                    brokerage,
                    status,
                    created_at: NaiveDateTime::default(),
                    updated_at: NaiveDateTime::default(),
                },
            );
        }
        // Reverse so the engine has to sort.
        by_date.into_values().rev().collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Realized profit is the same whether summed by day, week or month.
    #[test]
    fn prop_realized_profit_consistent_across_granularities(entries in arb_journal(60)) {
        let insights = compute_insights(&entries);
        let overall = PeriodTotals::from_entries(&entries);
        let weekly: Decimal = insights.weekly.iter().map(|w| w.totals.realized_profit).sum();
        let monthly: Decimal = insights.monthly.iter().map(|m| m.totals.realized_profit).sum();
        let daily: Decimal = entries.iter().map(|e| e.net_profit()).sum();

        prop_assert_eq!(overall.realized_profit, daily);
        prop_assert_eq!(weekly, daily);
        prop_assert_eq!(monthly, daily);
        prop_assert_eq!(insights.stats.totals.realized_profit, daily);
        prop_assert_eq!(
            insights.cumulative.last().map(|p| p.cumulative_profit).unwrap_or_default(),
            daily
        );
    }

    /// Win rate counts target_achieved over days with a trading status.
    #[test]
    fn prop_win_rate_denominator_excludes_non_trading(entries in arb_journal(60)) {
        let stats = compute_insights(&entries).stats;
        let trading = entries
            .iter()
            .filter(|e| matches!(
                e.status,
                Some(DayStatus::Losing)
                    | Some(DayStatus::TargetAchieved)
                    | Some(DayStatus::TargetFailed)
                    | Some(DayStatus::Unknown(_))
            ))
            .count();
        let wins = entries
            .iter()
            .filter(|e| e.status == Some(DayStatus::TargetAchieved))
            .count();

        prop_assert_eq!(stats.trading_days, trading);
        prop_assert_eq!(stats.win_days, wins);
        prop_assert!(stats.win_rate >= Decimal::ZERO);
        prop_assert!(stats.win_rate <= Decimal::ONE_HUNDRED);
        if trading == 0 {
            prop_assert_eq!(stats.win_rate, Decimal::ZERO);
            prop_assert_eq!(stats.avg_daily_profit, Decimal::ZERO);
        }
    }

    /// Leaderboards hold at most five trading days sorted by net profit.
    #[test]
    fn prop_leaderboards_sorted_and_filtered(entries in arb_journal(60)) {
        let stats = compute_insights(&entries).stats;
        prop_assert!(stats.top_wins.len() <= 5);
        prop_assert!(stats.top_losses.len() <= 5);
        for day in stats.top_wins.iter().chain(stats.top_losses.iter()) {
            prop_assert!(day.status.as_ref().map_or(true, |s| s.is_trading_day()));
        }
        prop_assert!(stats.top_wins.windows(2).all(|w| w[0].net_profit >= w[1].net_profit));
        prop_assert!(stats.top_losses.windows(2).all(|w| w[0].net_profit <= w[1].net_profit));

        if let Some(best) = stats.best_day {
            prop_assert!(entries.iter().all(|e| e.net_profit() <= best.net_profit));
        }
        if let Some(worst) = stats.worst_day {
            prop_assert!(entries.iter().all(|e| e.net_profit() >= worst.net_profit));
        }
    }

    /// Longest runs bound the current ones.
    #[test]
    fn prop_streaks_bounded(entries in arb_journal(60)) {
        let streaks = compute_insights(&entries).streaks;
        prop_assert!(streaks.current_win_streak <= streaks.longest_win_len());
        prop_assert!(streaks.current_loss_streak <= streaks.longest_loss_len());
        prop_assert!(streaks.current_win_streak == 0 || streaks.current_loss_streak == 0);
    }

    /// Thresholds are blank unless capital is positive; net profit is always
    /// profit minus brokerage.
    #[test]
    fn prop_day_metrics_blank_without_capital(entries in arb_journal(20)) {
        let config = TradingConfig::default();
        for entry in &entries {
            let metrics = compute_day_metrics(&config, entry.date, Some(entry));
            let positive = entry.capital.is_some_and(|c| c > Decimal::ZERO);
            prop_assert_eq!(metrics.target.is_some(), positive);
            prop_assert_eq!(metrics.max_stop_loss.is_some(), positive);
            prop_assert_eq!(metrics.max_brokerage.is_some(), positive);
            prop_assert_eq!(
                metrics.net_profit,
                entry.profit.unwrap_or_default() - entry.brokerage.unwrap_or_default()
            );
        }
    }

    /// The compounding exponent matches a day-by-day count of weekdays.
    #[test]
    fn prop_weekdays_before_matches_brute_force(start in 0u64..400, span in 0u64..200) {
        let start = base_date().checked_add_days(Days::new(start)).unwrap();
        let day = start.checked_add_days(Days::new(span)).unwrap();
        let expected = start
            .iter_days()
            .take_while(|d| *d < day)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32;
        prop_assert_eq!(weekdays_before(start, day), expected);
    }

    /// Projected capital starts at the initial capital and never shrinks.
    #[test]
    fn prop_projected_capital_monotonic(cents in 1i64..1_000_000_000, offset in 0u64..300) {
        let initial = Decimal::new(cents, 2);
        let config = TradingConfig::new(initial, base_date());
        prop_assert_eq!(projected_capital(&config, base_date()), Some(initial));

        let day = base_date().checked_add_days(Days::new(offset)).unwrap();
        let next = day.succ_opt().unwrap();
        let today = projected_capital(&config, day).unwrap();
        let tomorrow = projected_capital(&config, next).unwrap();
        prop_assert!(today >= initial);
        prop_assert!(tomorrow >= today);
    }
}
