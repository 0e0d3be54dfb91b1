//! SQLite storage implementation for per-user settings.

mod model;
mod repository;

pub use model::UserSettingDB;
pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use daybook_core::settings::SettingsRepositoryTrait;
