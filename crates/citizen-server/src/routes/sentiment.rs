use axum::{extract::State, routing::post, Json, Router};
use citizen_schema::SentimentResult;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SentimentInput {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct SentimentOutput {
    pub markdown: String,
    pub result: Option<SentimentResult>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(analyze))
}

async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<SentimentInput>,
) -> Json<SentimentOutput> {
    let outcome = state.scorer.score(&input.text);
    Json(SentimentOutput {
        markdown: outcome.render(),
        result: outcome.result().cloned(),
    })
}
