use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format used wherever an interaction timestamp is shown to a person.
/// Records are stamped in UTC, so the zone is spelled out.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One completed exchange with the assistant.
///
/// Fields are private so a record cannot change once it has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    timestamp: DateTime<Utc>,
    user_input: String,
    ai_response: String,
}

impl InteractionRecord {
    pub fn new(user_input: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self::at(Utc::now(), user_input, ai_response)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        user_input: impl Into<String>,
        ai_response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user_input: user_input.into(),
            ai_response: ai_response.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn ai_response(&self) -> &str {
        &self.ai_response
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub word_count: usize,
}
