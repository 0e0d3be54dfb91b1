use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use daybook_core::metrics::Insights;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_insights(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Insights>> {
    let insights = state.metrics_service.get_insights(&user.id)?;
    Ok(Json(insights))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/insights", get(get_insights))
}
