use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{AssistantClient, AssistantError, ChatMessage, ChatRequest, ChatResponse};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for any endpoint speaking the OpenAI chat-completions protocol.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    timeout_secs: u64,
}

impl OpenAiCompatClient {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self::with_timeout(api_key, api_base, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let client = http_client(
            reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)),
        );
        Self::with_client(client, api_key, api_base, timeout_secs)
    }

    /// Use a caller-built HTTP client. `timeout_secs` is still applied to
    /// every request.
    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn to_api_request(request: ChatRequest) -> ApiRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system {
            messages.push(ChatMessage::system(system));
        }
        messages.extend(
            request
                .messages
                .into_iter()
                .filter(|m| !m.content.is_empty()),
        );

        ApiRequest {
            model: request.model,
            messages,
            max_tokens: Some(request.max_tokens),
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl AssistantClient for OpenAiCompatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AssistantError> {
        let url = format!("{}/chat/completions", self.api_base);
        let payload = Self::to_api_request(request);
        tracing::debug!(model = %payload.model, %url, "sending chat completion");

        let resp = match self
            .client
            .post(url)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                return Err(AssistantError::Timeout {
                    secs: self.timeout_secs,
                });
            }
            Err(e) if e.is_connect() => return Err(AssistantError::Connect(e.to_string())),
            Err(e) => return Err(AssistantError::Unknown(e.to_string())),
        };

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<ApiErrorEnvelope>(&text).ok();
            return Err(format_api_error(status, parsed, &text));
        }

        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| AssistantError::Unknown(format!("invalid response body: {e}")))?;
        to_chat_response(body)
    }
}

fn http_client(builder: reqwest::ClientBuilder) -> reqwest::Client {
    match builder.build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("failed to build http client, using defaults: {e}");
            reqwest::Client::new()
        }
    }
}

fn to_chat_response(body: ApiResponse) -> Result<ChatResponse, AssistantError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or(AssistantError::EmptyResponse)?;

    let text = choice
        .message
        .content
        .filter(|text| !text.trim().is_empty())
        .ok_or(AssistantError::EmptyResponse)?;

    Ok(ChatResponse {
        text,
        input_tokens: body.usage.as_ref().map(|u| u.prompt_tokens),
        output_tokens: body.usage.as_ref().map(|u| u.completion_tokens),
        finish_reason: choice.finish_reason,
    })
}

fn format_api_error(
    status: StatusCode,
    parsed: Option<ApiErrorEnvelope>,
    raw: &str,
) -> AssistantError {
    let message = match parsed {
        Some(envelope) => match envelope.error.r#type {
            Some(kind) => format!("{} ({kind})", envelope.error.message),
            None => envelope.error.message,
        },
        None if raw.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        None => raw.trim().to_string(),
    };
    AssistantError::from_status(status, message)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub choices: Vec<ApiChoice>,
    #[serde(default)]
    pub usage: Option<ApiUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiChoice {
    pub message: ApiAssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiAssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(rename = "type", default)]
    pub r#type: Option<String>,
    pub message: String,
}
