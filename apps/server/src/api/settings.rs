use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use daybook_core::settings::{Settings, SettingsUpdate};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_settings(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Settings>> {
    let settings = state.settings_service.get_settings(&user.id)?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(update): Json<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    let settings = state
        .settings_service
        .update_settings(&user.id, &update)
        .await?;
    Ok(Json(settings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
