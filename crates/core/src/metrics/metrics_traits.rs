use crate::calendar::YearMonth;
use crate::errors::Result;
use crate::metrics::{Insights, MonthJournal};

/// Read-only views computed from the journal and the user's trading config.
pub trait MetricsServiceTrait: Send + Sync {
    /// The journal table for one month. Months entirely before the configured
    /// start date are refused.
    fn get_month_view(&self, user_id: &str, month: YearMonth) -> Result<MonthJournal>;

    fn get_insights(&self, user_id: &str) -> Result<Insights>;
}
