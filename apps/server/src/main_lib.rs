use std::collections::HashSet;
use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use daybook_core::{
    journal::{JournalService, JournalServiceTrait},
    metrics::{MetricsService, MetricsServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
    users::{normalize_email, UserService, UserServiceTrait},
};
use daybook_storage_sqlite::{
    db::{self, write_actor},
    journal::JournalRepository,
    settings::SettingsRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub journal_service: Arc<dyn JournalServiceTrait>,
    pub metrics_service: Arc<dyn MetricsServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub allowed_emails: Option<HashSet<String>>,
}

impl AppState {
    /// Whether a newly registered account starts active.
    pub fn is_email_allowed(&self, email: &str) -> bool {
        self.allowed_emails
            .as_ref()
            .is_none_or(|emails| emails.contains(&normalize_email(email)))
    }
}

/// Installs the global subscriber. Records emitted through the `log` facade
/// by the library crates are forwarded into tracing.
pub fn init_tracing() {
    let log_format = std::env::var("DAYBOOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let journal_repo = Arc::new(JournalRepository::new(pool.clone(), writer));

    let user_service = Arc::new(UserService::new(user_repo));
    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(settings_repo));
    let journal_service = Arc::new(JournalService::new(journal_repo.clone()));
    let metrics_service = Arc::new(MetricsService::new(
        journal_repo,
        settings_service.clone(),
    ));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        user_service,
        settings_service,
        journal_service,
        metrics_service,
        auth,
        allowed_emails: config.allowed_emails.clone(),
    }))
}
