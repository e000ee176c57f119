use std::{fs, num::NonZeroUsize, path::Path, sync::Arc, time::Duration};

use anyhow::{anyhow, Context, Result};
use citizen_provider::{OpenAiCompatClient, HF_ROUTER_TOGETHER_BASE};
use serde::{Deserialize, Serialize};

use crate::assistant::{AssistantSettings, CitizenAssistant, DEFAULT_SYSTEM_PROMPT};
use crate::conversation::DEFAULT_HISTORY_LIMIT;
use crate::sentiment::{Lexicon, SentimentScorer, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::session::{SessionStore, DEFAULT_SESSION_TTL};

pub const API_KEY_ENV: &str = "HF_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Citizen AI".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 7860,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub system_prompt: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        let settings = AssistantSettings::default();
        Self {
            api_base: HF_ROUTER_TOGETHER_BASE.to_string(),
            api_key: format!("${{{API_KEY_ENV}}}"),
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: 60,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub limit: NonZeroUsize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds a session may sit unused before its log is dropped.
    pub idle_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: DEFAULT_SESSION_TTL.as_secs(),
        }
    }
}

/// Optional replacement lexicons; a missing side keeps the built-in list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CitizenConfig {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
    pub history: HistoryConfig,
    pub session: SessionConfig,
    pub sentiment: SentimentConfig,
}

impl CitizenConfig {
    /// Built-in defaults with `${VAR}` placeholders resolved.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        resolve_config_env(&mut config);
        config
    }

    pub fn lexicon(&self) -> Lexicon {
        let positive: Vec<String> = match &self.sentiment.positive {
            Some(words) => words.clone(),
            None => POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        let negative: Vec<String> = match &self.sentiment.negative {
            Some(words) => words.clone(),
            None => NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        Lexicon::new(positive, negative)
    }

    pub fn scorer(&self) -> SentimentScorer {
        SentimentScorer::new(self.lexicon())
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(Duration::from_secs(self.session.idle_ttl_secs))
    }

    pub fn assistant_settings(&self) -> AssistantSettings {
        AssistantSettings {
            model: self.assistant.model.clone(),
            system_prompt: self.assistant.system_prompt.clone(),
            max_tokens: self.assistant.max_tokens,
            temperature: self.assistant.temperature,
        }
    }

    pub fn build_assistant(&self) -> CitizenAssistant {
        let client = OpenAiCompatClient::with_timeout(
            self.assistant.api_key.clone(),
            self.assistant.api_base.clone(),
            self.assistant.timeout_secs,
        );
        tracing::info!(
            api_base = %client.api_base(),
            model = %self.assistant.model,
            "assistant client configured"
        );
        CitizenAssistant::new(Arc::new(client), self.assistant_settings())
    }
}

pub fn resolve_env_var(raw: &str) -> String {
    let mut output = String::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);

        let candidate = &rest[start + 2..];
        let Some(end) = candidate.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &candidate[..end];
        output.push_str(&std::env::var(key).unwrap_or_default());
        rest = &candidate[end + 1..];
    }

    output.push_str(rest);
    output
}

fn resolve_config_env(config: &mut CitizenConfig) {
    config.app.name = resolve_env_var(&config.app.name);
    config.server.bind = resolve_env_var(&config.server.bind);
    config.assistant.api_base = resolve_env_var(&config.assistant.api_base);
    config.assistant.api_key = resolve_env_var(&config.assistant.api_key);
    config.assistant.model = resolve_env_var(&config.assistant.model);
}

/// Read a YAML config file and resolve `${VAR}` placeholders.
pub fn load_config(path: &Path) -> Result<CitizenConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let mut config: CitizenConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse yaml file: {}", path.display()))?;
    resolve_config_env(&mut config);
    Ok(config)
}

pub fn load_or_default(path: Option<&Path>) -> Result<CitizenConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(CitizenConfig::from_env()),
    }
}

/// Checks everything needed to talk to the assistant endpoint.
pub fn validate_config(config: &CitizenConfig) -> Result<()> {
    let assistant = &config.assistant;

    if assistant.api_key.trim().is_empty() {
        return Err(anyhow!(
            "{API_KEY_ENV} not found: set it in the environment or put assistant.api_key in the config file"
        ));
    }
    if !(assistant.api_base.starts_with("http://") || assistant.api_base.starts_with("https://")) {
        return Err(anyhow!(
            "assistant.api_base must be an http(s) url: {}",
            assistant.api_base
        ));
    }
    if assistant.model.trim().is_empty() {
        return Err(anyhow!("assistant.model must not be empty"));
    }
    if assistant.max_tokens == 0 {
        return Err(anyhow!("assistant.max_tokens must be greater than 0"));
    }
    if !(0.0..=2.0).contains(&assistant.temperature) {
        return Err(anyhow!(
            "assistant.temperature must be within 0.0..=2.0, got {}",
            assistant.temperature
        ));
    }
    if assistant.timeout_secs == 0 {
        return Err(anyhow!("assistant.timeout_secs must be greater than 0"));
    }

    if config.session.idle_ttl_secs == 0 {
        return Err(anyhow!("session.idle_ttl_secs must be greater than 0"));
    }

    let lexicon = config.lexicon();
    if lexicon.positive().is_empty() {
        return Err(anyhow!("sentiment.positive has no usable entries"));
    }
    if lexicon.negative().is_empty() {
        return Err(anyhow!("sentiment.negative has no usable entries"));
    }

    Ok(())
}
