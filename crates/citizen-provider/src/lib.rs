pub mod error;
pub mod openai;
pub mod types;

use async_trait::async_trait;

pub use error::{AssistantError, ErrorKind};
pub use openai::OpenAiCompatClient;
pub use types::*;

/// Hugging Face inference router, Together backend.
pub const HF_ROUTER_TOGETHER_BASE: &str = "https://router.huggingface.co/together/v1";

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AssistantError>;
}

/// Echoes the last user message back; used for offline runs and tests.
pub struct StubClient;

#[async_trait]
impl AssistantClient for StubClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AssistantError> {
        let user_text = request.last_user_text().unwrap_or_default();
        Ok(ChatResponse {
            text: format!("[stub:{}] {}", request.model, user_text),
            input_tokens: None,
            output_tokens: None,
            finish_reason: Some("stop".into()),
        })
    }
}
