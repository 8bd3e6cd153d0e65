// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./edubot.toml` > `~/.config/edubot/edubot.toml` > `/etc/edubot/edubot.toml`,
//! then the plain deployment variables (`HUGGINGFACE_API_KEY`, `OPENROUTER_API_KEY`,
//! `PORT`, `ALLOWED_ORIGIN`), then `EDUBOT_*` overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::{EduBotConfig, GENERAL_API_KEY_ENV, MATH_API_KEY_ENV};

/// Sections that `EDUBOT_<SECTION>_<KEY>` variables may address.
const SECTIONS: &[&str] = &["server", "math", "general", "logging", "client"];

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/edubot/edubot.toml`
/// 3. `~/.config/edubot/edubot.toml`
/// 4. `./edubot.toml`
/// 5. Plain deployment variables
/// 6. `EDUBOT_*` environment variables
pub fn load_config() -> Result<EduBotConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<EduBotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EduBotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<EduBotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EduBotConfig::default()))
        .merge(Toml::file(path))
        .merge(deployment_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the default lookup (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(EduBotConfig::default()))
        .merge(Toml::file("/etc/edubot/edubot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("edubot/edubot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("edubot.toml"))
        .merge(deployment_env_provider())
        .merge(env_provider())
}

/// The unprefixed variable names used by existing deployments.
fn deployment_env_provider() -> Env {
    Env::raw()
        .only(&[MATH_API_KEY_ENV, GENERAL_API_KEY_ENV, "PORT", "ALLOWED_ORIGIN"])
        .map(|key| map_deployment_key(key.as_str()).into())
}

/// Map an unprefixed deployment variable to its dotted config key.
fn map_deployment_key(key: &str) -> String {
    let lower = key.to_ascii_lowercase();
    match lower.as_str() {
        "huggingface_api_key" => "math.api_key".to_string(),
        "openrouter_api_key" => "general.api_key".to_string(),
        "port" => "server.port".to_string(),
        "allowed_origin" => "server.allowed_origin".to_string(),
        _ => lower,
    }
}

/// `EDUBOT_` variables, mapped section-first with `map()` rather than `split("_")`
/// so that `EDUBOT_SERVER_ALLOWED_ORIGIN` becomes `server.allowed_origin`.
fn env_provider() -> Env {
    Env::prefixed("EDUBOT_").map(|key| map_prefixed_key(key.as_str()).into())
}

/// Map a prefix-stripped `EDUBOT_` variable name to its dotted config key.
fn map_prefixed_key(key: &str) -> String {
    let lower = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = lower.strip_prefix(&format!("{section}_")) {
            return format!("{section}.{rest}");
        }
    }
    lower
}
