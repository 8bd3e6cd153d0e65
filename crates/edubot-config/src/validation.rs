// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Missing credentials are deliberately not an error here: the endpoint
//! reports them per request with the variable name.

use crate::diagnostic::ConfigError;
use crate::model::EduBotConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every failure.
pub fn validate_config(config: &EduBotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else if host.parse::<std::net::IpAddr>().is_err()
        && !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        fail(format!(
            "server.host `{host}` is not a valid IP address or hostname"
        ));
    }

    let origin = config.server.allowed_origin.trim();
    if origin != "*" && !is_http_url(origin) {
        fail(format!(
            "server.allowed_origin must be `*` or an http(s) origin, got `{origin}`"
        ));
    }

    let providers = [
        (
            "math",
            &config.math.base_url,
            config.math.max_tokens,
            config.math.temperature,
            config.math.timeout_secs,
        ),
        (
            "general",
            &config.general.base_url,
            config.general.max_tokens,
            config.general.temperature,
            config.general.timeout_secs,
        ),
    ];
    for (section, base_url, max_tokens, temperature, timeout_secs) in providers {
        if !is_http_url(base_url) {
            fail(format!(
                "{section}.base_url must start with http:// or https://, got `{base_url}`"
            ));
        }
        if max_tokens == 0 {
            fail(format!("{section}.max_tokens must be at least 1"));
        }
        if !(0.0..=2.0).contains(&temperature) {
            fail(format!(
                "{section}.temperature must be between 0.0 and 2.0, got {temperature}"
            ));
        }
        if timeout_secs == 0 {
            fail(format!("{section}.timeout_secs must be at least 1"));
        }
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        fail(format!(
            "logging.level must be one of {}, got `{}`",
            LOG_LEVELS.join(", "),
            config.logging.level
        ));
    }

    if !is_http_url(&config.client.api_url) {
        fail(format!(
            "client.api_url must start with http:// or https://, got `{}`",
            config.client.api_url
        ));
    }
    if let Some(url) = &config.client.fallback_api_url
        && !is_http_url(url)
    {
        fail(format!(
            "client.fallback_api_url must start with http:// or https://, got `{url}`"
        ));
    }

    if config.client.history_path.trim().is_empty() {
        fail("client.history_path must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(r) if !r.is_empty() && !r.contains(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&EduBotConfig::default()).is_ok());
    }

    #[test]
    fn exact_origin_is_accepted() {
        let mut config = EduBotConfig::default();
        config.server.allowed_origin = "https://edubot.example.com".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_origin_fails() {
        let mut config = EduBotConfig::default();
        config.server.allowed_origin = "edubot.example.com".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "allowed_origin"));
    }

    #[test]
    fn collects_every_error() {
        let mut config = EduBotConfig::default();
        config.math.temperature = 3.5;
        config.general.max_tokens = 0;
        config.logging.level = "loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(has_message(&errors, "math.temperature"));
        assert!(has_message(&errors, "general.max_tokens"));
        assert!(has_message(&errors, "logging.level"));
    }

    #[test]
    fn non_http_base_url_fails() {
        let mut config = EduBotConfig::default();
        config.general.base_url = "ftp://openrouter.ai".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "general.base_url"));
    }

    #[test]
    fn missing_credentials_are_not_validation_errors() {
        let config = EduBotConfig::default();
        assert!(!config.missing_credentials().is_empty());
        assert!(validate_config(&config).is_ok());
    }
}
