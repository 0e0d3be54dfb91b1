//! Calendar module - month/week keys and the trading-day generator.

mod calendar_model;
mod trading_days;

pub use calendar_model::{WeekKey, YearMonth};
pub use trading_days::{
    can_navigate_to, group_by_week, is_weekend, trading_days_in_month, week_monday,
    weekdays_before,
};
