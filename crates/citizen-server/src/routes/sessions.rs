use std::num::NonZeroUsize;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use citizen_schema::SessionKey;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Serialize)]
pub struct CreatedSession {
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct HistoryView {
    pub total: usize,
    pub shown: usize,
    pub markdown: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}/history", get(get_history))
}

async fn create_session(State(state): State<AppState>) -> Json<CreatedSession> {
    let key = state.sessions.create().await;
    Json(CreatedSession { session_id: key.0 })
}

async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryView>, StatusCode> {
    let limit = match query.limit {
        Some(n) => NonZeroUsize::new(n).ok_or(StatusCode::BAD_REQUEST)?,
        None => state.history_limit,
    };
    let log = state
        .sessions
        .get(&SessionKey(id))
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    let log = log.lock().await;

    Ok(Json(HistoryView {
        total: log.len(),
        shown: log.recent(limit).len(),
        markdown: log.render_recent(limit),
    }))
}
