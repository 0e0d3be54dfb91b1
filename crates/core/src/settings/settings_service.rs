use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::settings_model::SUPPORTED_THEMES;
use super::{Settings, SettingsRepositoryTrait, SettingsServiceTrait, SettingsUpdate, TradingConfig};
use crate::errors::{Error, Result, ValidationError};

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    // Last settings loaded per user; served when the store cannot be read.
    cache: RwLock<HashMap<String, Settings>>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn validate(update: &SettingsUpdate) -> Result<()> {
        if let Some(ref theme) = update.theme {
            if !SUPPORTED_THEMES.contains(&theme.as_str()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Unsupported theme '{}', expected one of {}",
                    theme,
                    SUPPORTED_THEMES.join(", ")
                ))));
            }
        }
        if let Some(Some(capital)) = update.initial_capital {
            if capital < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Initial capital cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    fn remember(&self, user_id: &str, settings: &Settings) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(user_id.to_string(), settings.clone());
        }
    }

    fn cached(&self, user_id: &str) -> Option<Settings> {
        self.cache
            .read()
            .ok()
            .and_then(|cache| cache.get(user_id).cloned())
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self, user_id: &str) -> Result<Settings> {
        match self.settings_repository.get_settings(user_id) {
            Ok(settings) => {
                self.remember(user_id, &settings);
                Ok(settings)
            }
            Err(e) => match self.cached(user_id) {
                Some(settings) => {
                    warn!(
                        "Failed to load settings for user {}, using last known values: {}",
                        user_id, e
                    );
                    Ok(settings)
                }
                None => Err(e),
            },
        }
    }

    async fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<Settings> {
        Self::validate(update)?;
        if !update.is_empty() {
            debug!("Updating settings for user {}", user_id);
            self.settings_repository
                .update_settings(user_id, update)
                .await?;
        }
        self.get_settings(user_id)
    }

    fn get_trading_config(&self, user_id: &str) -> Result<TradingConfig> {
        Ok(self.get_settings(user_id)?.trading_config())
    }
}
