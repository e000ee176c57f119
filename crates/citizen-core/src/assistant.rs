use std::sync::Arc;

use citizen_provider::{AssistantClient, AssistantError, ChatRequest};
use citizen_schema::InteractionRecord;

pub const EMPTY_MESSAGE_PROMPT: &str = "Please enter a message.";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Citizen AI, an intelligent assistant for government services. You are a helpful, accurate, and professional assistant. Provide detailed, comprehensive responses with all relevant information about government services such as passport applications, property tax, birth certificates, driving licenses, voter ID, and general inquiries. Always identify yourself as Citizen AI in your responses.";

#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: "openai/gpt-oss-120b".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: 1500,
            temperature: 0.7,
        }
    }
}

/// Result of one chat turn.
#[derive(Debug)]
pub enum ChatReply {
    /// The message was blank; nothing was sent.
    EmptyMessage,
    /// The assistant answered; the record belongs in the session log.
    Answered(InteractionRecord),
    /// The assistant call failed; nothing should be logged.
    Failed(AssistantError),
}

impl ChatReply {
    pub fn text(&self) -> String {
        match self {
            Self::EmptyMessage => EMPTY_MESSAGE_PROMPT.to_string(),
            Self::Answered(record) => record.ai_response().to_string(),
            Self::Failed(err) => format!("Error: {err}"),
        }
    }

    pub fn record(&self) -> Option<&InteractionRecord> {
        match self {
            Self::Answered(record) => Some(record),
            _ => None,
        }
    }
}

/// Sends citizen questions to the configured model.
///
/// Holds no conversation state; each session keeps its own log.
pub struct CitizenAssistant {
    client: Arc<dyn AssistantClient>,
    settings: AssistantSettings,
}

impl CitizenAssistant {
    pub fn new(client: Arc<dyn AssistantClient>, settings: AssistantSettings) -> Self {
        Self { client, settings }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub async fn ask(&self, message: &str) -> ChatReply {
        if message.trim().is_empty() {
            return ChatReply::EmptyMessage;
        }

        let request = ChatRequest::simple(
            self.settings.model.clone(),
            Some(self.settings.system_prompt.clone()),
            message.to_string(),
        )
        .with_max_tokens(self.settings.max_tokens)
        .with_temperature(self.settings.temperature);

        match self.client.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    model = %self.settings.model,
                    output_tokens = ?response.output_tokens,
                    "assistant answered"
                );
                ChatReply::Answered(InteractionRecord::new(message, response.text))
            }
            Err(err) => {
                tracing::warn!(
                    model = %self.settings.model,
                    kind = ?err.kind(),
                    "assistant request failed: {err}"
                );
                ChatReply::Failed(err)
            }
        }
    }
}
