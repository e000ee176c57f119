use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use citizen_core::ChatReply;
use citizen_schema::SessionKey;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatInput {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatOutput {
    pub reply: String,
    /// Whether the exchange was added to the session history.
    pub logged: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(chat))
}

async fn chat(
    State(state): State<AppState>,
    Json(input): Json<ChatInput>,
) -> Result<Json<ChatOutput>, StatusCode> {
    let key = SessionKey(input.session_id);
    let log = state
        .sessions
        .get(&key)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    // The log is only locked after the assistant answers, so a slow model
    // call never blocks history reads for the same session. Holding `log`
    // keeps the session from being evicted meanwhile.
    let reply = state.assistant.ask(&input.message).await;
    let text = reply.text();
    let logged = match reply {
        ChatReply::Answered(record) => {
            log.lock().await.append(record);
            state.sessions.touch(&key).await;
            true
        }
        ChatReply::EmptyMessage | ChatReply::Failed(_) => false,
    };
    tracing::debug!(session = %key, logged, "chat turn finished");

    Ok(Json(ChatOutput {
        reply: text,
        logged,
    }))
}
