use axum::{routing::get, Json, Router};
use daybook_core::quotes::{quote_at, TRADING_QUOTES};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use crate::main_lib::AppState;

#[derive(Serialize)]
struct QuoteResponse {
    quote: &'static str,
}

/// A random trading quote, picked anew on every request.
async fn get_quote() -> Json<QuoteResponse> {
    let index = rand::thread_rng().gen_range(0..TRADING_QUOTES.len());
    Json(QuoteResponse {
        quote: quote_at(index),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", get(get_quote))
}
