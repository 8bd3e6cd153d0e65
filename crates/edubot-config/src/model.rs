// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for EduBot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Environment variable holding the math provider credential.
pub const MATH_API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Environment variable holding the general provider credential.
pub const GENERAL_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Top-level EduBot configuration.
///
/// Constructed once at process start and passed by reference into the
/// router, the provider adapters and the gateway.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EduBotConfig {
    /// HTTP endpoint settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Math provider (Hugging Face Inference API).
    #[serde(default)]
    pub math: MathProviderConfig,

    /// General provider (OpenRouter chat completions).
    #[serde(default)]
    pub general: GeneralProviderConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal chat client settings.
    #[serde(default)]
    pub client: ClientConfig,
}

impl EduBotConfig {
    /// Names of credential variables that are absent or empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.math.api_key) {
            missing.push(MATH_API_KEY_ENV);
        }
        if is_blank(&self.general.api_key) {
            missing.push(GENERAL_API_KEY_ENV);
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).is_none_or(str::is_empty)
}

/// HTTP endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Value of `Access-Control-Allow-Origin`: `*` or a single origin.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_allowed_origin() -> String {
    "*".to_string()
}

/// Math provider configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MathProviderConfig {
    /// Hugging Face API token. `None` falls back to `HUGGINGFACE_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model repository id.
    #[serde(default = "default_math_model")]
    pub model: String,

    /// Inference API base URL (without the `/models/...` suffix).
    #[serde(default = "default_math_base_url")]
    pub base_url: String,

    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// HTTP client timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MathProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_math_model(),
            base_url: default_math_base_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MathProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_math_model() -> String {
    "mistralai/mathstral-7b-v0.1".to_string()
}

fn default_math_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

/// General provider configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralProviderConfig {
    /// OpenRouter API key. `None` falls back to `OPENROUTER_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier as listed by OpenRouter.
    #[serde(default = "default_general_model")]
    pub model: String,

    /// API base URL (without `/chat/completions`).
    #[serde(default = "default_general_base_url")]
    pub base_url: String,

    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// HTTP client timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneralProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_general_model(),
            base_url: default_general_base_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GeneralProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_general_model() -> String {
    "mistralai/mistral-7b-instruct".to_string()
}

fn default_general_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level for EduBot crates (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Terminal chat client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Endpoint the chat client posts questions to.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Second endpoint tried when the first one is unreachable or errors.
    #[serde(default)]
    pub fallback_api_url: Option<String>,

    /// Path of the JSON file holding the conversation history.
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            fallback_api_url: None,
            history_path: default_history_path(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:3000/api/ask".to_string()
}

fn default_history_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("edubot").join("history.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("edubot-history.json"))
        .to_string_lossy()
        .to_string()
}
