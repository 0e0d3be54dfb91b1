mod settings_model;
mod settings_service;
mod settings_traits;


pub use settings_model::{Settings, SettingsUpdate, TradingConfig, SUPPORTED_THEMES};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
