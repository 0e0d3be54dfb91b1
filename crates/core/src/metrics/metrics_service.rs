use log::debug;
use std::sync::Arc;

use super::insights::compute_insights;
use super::month_view::build_month_journal;
use super::{Insights, MetricsServiceTrait, MonthJournal};
use crate::calendar::{can_navigate_to, group_by_week, trading_days_in_month, YearMonth};
use crate::errors::{Error, Result, ValidationError};
use crate::journal::JournalRepositoryTrait;
use crate::settings::SettingsServiceTrait;

pub struct MetricsService {
    journal_repository: Arc<dyn JournalRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl MetricsService {
    pub fn new(
        journal_repository: Arc<dyn JournalRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            journal_repository,
            settings_service,
        }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn get_month_view(&self, user_id: &str, month: YearMonth) -> Result<MonthJournal> {
        let config = self.settings_service.get_trading_config(user_id)?;
        if !can_navigate_to(month, config.start_date) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} is before the journal start date",
                month
            ))));
        }

        let entries =
            self.journal_repository
                .get_entries(user_id, month.first_day(), month.last_day())?;

        let days = trading_days_in_month(month, config.start_date);
        let week_keys: Vec<String> = group_by_week(&days)
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect();
        let notes = if week_keys.is_empty() {
            Vec::new()
        } else {
            self.journal_repository
                .get_weekly_notes(user_id, &week_keys)?
        };

        debug!(
            "Month view {} for user {}: {} entries, {} notes",
            month,
            user_id,
            entries.len(),
            notes.len()
        );
        Ok(build_month_journal(&config, month, &entries, &notes))
    }

    fn get_insights(&self, user_id: &str) -> Result<Insights> {
        let entries = self.journal_repository.get_all_entries(user_id)?;
        Ok(compute_insights(&entries))
    }
}
