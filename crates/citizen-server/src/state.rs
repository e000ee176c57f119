use std::num::NonZeroUsize;
use std::sync::Arc;

use citizen_core::{CitizenAssistant, CitizenConfig, SentimentScorer, SessionStore};

/// Shared application state accessible from all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub assistant: Arc<CitizenAssistant>,
    pub scorer: Arc<SentimentScorer>,
    /// Per-session conversation logs
    pub sessions: Arc<SessionStore>,
    pub history_limit: NonZeroUsize,
}

impl AppState {
    pub fn new(
        app_name: impl Into<String>,
        assistant: CitizenAssistant,
        scorer: SentimentScorer,
        sessions: SessionStore,
        history_limit: NonZeroUsize,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            assistant: Arc::new(assistant),
            scorer: Arc::new(scorer),
            sessions: Arc::new(sessions),
            history_limit,
        }
    }

    pub fn from_config(config: &CitizenConfig) -> Self {
        Self::new(
            config.app.name.clone(),
            config.build_assistant(),
            config.scorer(),
            config.session_store(),
            config.history.limit,
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use citizen_core::{AssistantSettings, DEFAULT_HISTORY_LIMIT};
    use citizen_provider::{
        AssistantClient, AssistantError, ChatRequest, ChatResponse, StubClient,
    };

    pub struct FailingClient;

    #[async_trait]
    impl AssistantClient for FailingClient {
        async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, AssistantError> {
            Err(AssistantError::AuthFailure {
                status: 401,
                message: "invalid token".into(),
            })
        }
    }

    pub fn state_with(client: Arc<dyn AssistantClient>, sessions: SessionStore) -> AppState {
        let settings = AssistantSettings {
            model: "stub-model".into(),
            ..AssistantSettings::default()
        };
        AppState::new(
            "Citizen AI",
            CitizenAssistant::new(client, settings),
            SentimentScorer::default(),
            sessions,
            DEFAULT_HISTORY_LIMIT,
        )
    }

    pub fn stub_state() -> AppState {
        state_with(Arc::new(StubClient), SessionStore::default())
    }

    pub fn failing_state() -> AppState {
        state_with(Arc::new(FailingClient), SessionStore::default())
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
