use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{WeekKey, YearMonth};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Ordered weekdays of `month` that fall on or after `start_date` (if set).
///
/// A start date in a later month yields an empty list.
pub fn trading_days_in_month(month: YearMonth, start_date: Option<NaiveDate>) -> Vec<NaiveDate> {
    let last = month.last_day();
    month
        .first_day()
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| !is_weekend(*day))
        .filter(|day| start_date.map_or(true, |start| *day >= start))
        .collect()
}

/// Whether the journal may display `month` given the configured start date.
///
/// Months lying entirely before the start date's month are refused.
pub fn can_navigate_to(month: YearMonth, start_date: Option<NaiveDate>) -> bool {
    match start_date {
        Some(start) => month >= YearMonth::of(start),
        None => true,
    }
}

/// Number of weekdays `d` with `start <= d < day`.
///
/// This is the compounding exponent of the projected capital curve: the start
/// date itself maps to 0 and every elapsed weekday adds one.
pub fn weekdays_before(start: NaiveDate, day: NaiveDate) -> u32 {
    let span = (day - start).num_days();
    if span <= 0 {
        return 0;
    }
    let full_weeks = span / 7;
    let remainder = span % 7;
    let tail_start = start
        .checked_add_days(Days::new((full_weeks * 7) as u64))
        .unwrap_or(start);
    let tail = tail_start
        .iter_days()
        .take(remainder as usize)
        .filter(|d| !is_weekend(*d))
        .count() as i64;
    (full_weeks * 5 + tail) as u32
}

/// Monday of the ISO week containing `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Groups chronologically ordered days by ISO week, preserving order.
pub fn group_by_week(days: &[NaiveDate]) -> Vec<(WeekKey, Vec<NaiveDate>)> {
    let mut groups: Vec<(WeekKey, Vec<NaiveDate>)> = Vec::new();
    for day in days {
        let key = WeekKey::of(*day);
        match groups.last_mut() {
            Some((last_key, members)) if *last_key == key => members.push(*day),
            _ => groups.push((key, vec![*day])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn brute_force_weekdays(start: NaiveDate, day: NaiveDate) -> u32 {
        start
            .iter_days()
            .take_while(|d| *d < day)
            .filter(|d| !is_weekend(*d))
            .count() as u32
    }

    #[test]
    fn test_month_without_start_date_skips_weekends() {
        // January 2026: 31 days, starts on a Thursday, 22 weekdays.
        let days = trading_days_in_month(YearMonth::new(2026, 1).unwrap(), None);
        assert_eq!(days.len(), 22);
        assert_eq!(days.first(), Some(&date(2026, 1, 1)));
        assert_eq!(days.last(), Some(&date(2026, 1, 30)));
        assert!(days.iter().all(|d| !is_weekend(*d)));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mid_month_start_date_trims_leading_days() {
        let days = trading_days_in_month(YearMonth::new(2026, 1).unwrap(), Some(date(2026, 1, 19)));
        assert_eq!(days.first(), Some(&date(2026, 1, 19)));
        assert_eq!(days.len(), 10);
    }

    #[test]
    fn test_start_date_in_later_month_yields_nothing() {
        let days = trading_days_in_month(YearMonth::new(2026, 1).unwrap(), Some(date(2026, 3, 2)));
        assert!(days.is_empty());
    }

    #[test]
    fn test_navigation_guard() {
        let start = Some(date(2026, 1, 19));
        assert!(can_navigate_to(YearMonth::new(2026, 1).unwrap(), start));
        assert!(can_navigate_to(YearMonth::new(2026, 5).unwrap(), start));
        assert!(!can_navigate_to(YearMonth::new(2025, 12).unwrap(), start));
        assert!(can_navigate_to(YearMonth::new(1999, 1).unwrap(), None));
    }

    #[test]
    fn test_weekdays_before_counts_start_but_not_day() {
        let monday = date(2026, 1, 19);
        assert_eq!(weekdays_before(monday, monday), 0);
        assert_eq!(weekdays_before(monday, date(2026, 1, 20)), 1);
        assert_eq!(weekdays_before(monday, date(2026, 1, 26)), 5);
        assert_eq!(weekdays_before(monday, date(2026, 1, 10)), 0);
        // Weekend start contributes nothing until Monday has passed.
        assert_eq!(weekdays_before(date(2026, 1, 17), date(2026, 1, 19)), 0);
        assert_eq!(weekdays_before(date(2026, 1, 17), date(2026, 1, 20)), 1);
    }

    #[test]
    fn test_weekdays_before_matches_day_by_day_count() {
        let start = date(2025, 12, 3);
        for offset in 0..120u64 {
            let day = start.checked_add_days(Days::new(offset)).unwrap();
            assert_eq!(
                weekdays_before(start, day),
                brute_force_weekdays(start, day),
                "mismatch at {}",
                day
            );
        }
    }

    #[test]
    fn test_week_monday_and_grouping() {
        assert_eq!(week_monday(date(2026, 1, 23)), date(2026, 1, 19));
        assert_eq!(week_monday(date(2026, 1, 19)), date(2026, 1, 19));

        let days = trading_days_in_month(YearMonth::new(2026, 1).unwrap(), None);
        let weeks = group_by_week(&days);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].0.to_string(), "2026-W01");
        assert_eq!(weeks[0].1, vec![date(2026, 1, 1), date(2026, 1, 2)]);
        assert_eq!(weeks[4].1.len(), 5);
        let total: usize = weeks.iter().map(|(_, d)| d.len()).sum();
        assert_eq!(total, days.len());
    }
}
