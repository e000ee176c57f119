use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    pub name: String,
    pub model: String,
    pub ready: bool,
    pub active_sessions: usize,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(status))
}

async fn status(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        name: state.app_name.clone(),
        model: state.assistant.model().to_string(),
        ready: true,
        active_sessions: state.sessions.len().await,
    })
}

#[cfg(test)]
mod tests {
    use tower::ServiceExt;

    use super::router;
    use crate::state::test_support::{body_json, get, stub_state};

    #[tokio::test]
    async fn reports_name_and_model() {
        let state = stub_state();
        state.sessions.create().await;
        let app = router().with_state(state);

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Citizen AI");
        assert_eq!(body["model"], "stub-model");
        assert_eq!(body["ready"], true);
        assert_eq!(body["active_sessions"], 1);
    }
}
