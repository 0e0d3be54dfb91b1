use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use daybook_core::{
    calendar::YearMonth,
    journal::{
        deserialize_lenient_amount, DayStatus, JournalEntry, JournalEntryInput, WeeklyNote,
        WeeklyNoteInput,
    },
    metrics::MonthJournal,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct EntriesQuery {
    start: Option<String>,
    end: Option<String>,
}

/// Body of a day save. The date comes from the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryBody {
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    capital: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    profit: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    brokerage: Option<Decimal>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotesQuery {
    week_keys: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteBody {
    week_start: NaiveDate,
    #[serde(default)]
    note: String,
}

fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("'{}' is not a YYYY-MM-DD date", raw)))
}

async fn get_entries(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<EntriesQuery>,
) -> ApiResult<Json<Vec<JournalEntry>>> {
    let entries = match (query.start.as_deref(), query.end.as_deref()) {
        (Some(start), Some(end)) => {
            let (start, end) = (parse_date(start)?, parse_date(end)?);
            if start > end {
                return Err(ApiError::BadRequest(format!(
                    "start {} is after end {}",
                    start, end
                )));
            }
            state.journal_service.get_entries(&user.id, start, end)?
        }
        (None, None) => state.journal_service.get_all_entries(&user.id)?,
        _ => {
            return Err(ApiError::BadRequest(
                "start and end must be given together".to_string(),
            ))
        }
    };
    Ok(Json(entries))
}

async fn save_entry(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(date): Path<String>,
    Json(body): Json<EntryBody>,
) -> ApiResult<Json<JournalEntry>> {
    let input = JournalEntryInput {
        date: parse_date(&date)?,
        capital: body.capital,
        profit: body.profit,
        brokerage: body.brokerage,
        status: body.status.as_deref().and_then(DayStatus::parse),
    };
    let entry = state.journal_service.save_entry(&user.id, input).await?;
    Ok(Json(entry))
}

async fn get_notes(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<NotesQuery>,
) -> ApiResult<Json<Vec<WeeklyNote>>> {
    let keys: Vec<String> = query
        .week_keys
        .unwrap_or_default()
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    let notes = state.journal_service.get_weekly_notes(&user.id, &keys)?;
    Ok(Json(notes))
}

async fn save_note(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(week_key): Path<String>,
    Json(body): Json<NoteBody>,
) -> ApiResult<Json<WeeklyNote>> {
    let input = WeeklyNoteInput {
        week_key,
        week_start: body.week_start,
        note: body.note,
    };
    let note = state
        .journal_service
        .save_weekly_note(&user.id, input)
        .await?;
    Ok(Json(note))
}

async fn get_month(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(month): Path<String>,
) -> ApiResult<Json<MonthJournal>> {
    let month: YearMonth = month.parse()?;
    let view = state.metrics_service.get_month_view(&user.id, month)?;
    Ok(Json(view))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/journal/entries", get(get_entries))
        .route("/journal/entries/{date}", put(save_entry))
        .route("/journal/notes", get(get_notes))
        .route("/journal/notes/{week_key}", put(save_note))
        .route("/journal/months/{month}", get(get_month))
}
