//! Repository and service traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate, TradingConfig};

/// Repository trait for per-user settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// All settings of the user, with defaults for keys never written.
    fn get_settings(&self, user_id: &str) -> Result<Settings>;

    /// Write every present field of `update`, leaving the others untouched.
    async fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self, user_id: &str) -> Result<Settings>;

    async fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<Settings>;

    /// Trading parameters for the metrics engine.
    fn get_trading_config(&self, user_id: &str) -> Result<TradingConfig>;
}
