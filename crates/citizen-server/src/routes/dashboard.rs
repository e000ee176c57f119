use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use citizen_core::{DashboardSnapshot, UNINITIALIZED_ANALYTICS, UNINITIALIZED_STATS};
use citizen_schema::SessionKey;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardView {
    pub stats: String,
    pub analytics: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, StatusCode> {
    let Some(id) = query.session_id else {
        return Ok(Json(DashboardView {
            stats: UNINITIALIZED_STATS.to_string(),
            analytics: UNINITIALIZED_ANALYTICS.to_string(),
        }));
    };

    let log = state
        .sessions
        .get(&SessionKey(id))
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    let snapshot =
        DashboardSnapshot::capture(&*log.lock().await, state.assistant.model(), Utc::now());

    Ok(Json(DashboardView {
        stats: snapshot.render_stats(),
        analytics: snapshot.render_analytics(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use citizen_schema::InteractionRecord;
    use tower::ServiceExt;

    use super::router;
    use crate::state::test_support::{body_json, get, stub_state};

    #[tokio::test]
    async fn without_session_shows_placeholder() {
        let app = router().with_state(stub_state());
        let body = body_json(app.oneshot(get("/")).await.unwrap()).await;
        assert!(body["stats"].as_str().unwrap().contains("Session Not Started"));
        assert!(body["analytics"]
            .as_str()
            .unwrap()
            .contains("Analytics Unavailable"));
    }

    #[tokio::test]
    async fn counts_session_conversations() {
        let state = stub_state();
        let key = state.sessions.create().await;
        {
            let log = state.sessions.get(&key).await.unwrap();
            let mut log = log.lock().await;
            log.append(InteractionRecord::new("a", "b"));
            log.append(InteractionRecord::new("c", "d"));
        }
        let app = router().with_state(state);
        let body = body_json(
            app.oneshot(get(&format!("/?session_id={}", key.0)))
                .await
                .unwrap(),
        )
        .await;
        assert!(body["stats"]
            .as_str()
            .unwrap()
            .contains("**Total Conversations:** 2"));
        assert!(body["stats"].as_str().unwrap().contains("stub-model"));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let app = router().with_state(stub_state());
        let response = app.oneshot(get("/?session_id=nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
