// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `edubot config` command: print the effective configuration.

use colored::Colorize;
use edubot_config::EduBotConfig;
use edubot_core::EduBotError;

const REDACTED: &str = "[redacted]";

/// Render `config` as TOML with API keys masked.
pub fn render_config(config: &EduBotConfig) -> Result<String, EduBotError> {
    let mut shown = config.clone();
    if shown.math.api_key.is_some() {
        shown.math.api_key = Some(REDACTED.into());
    }
    if shown.general.api_key.is_some() {
        shown.general.api_key = Some(REDACTED.into());
    }
    toml::to_string_pretty(&shown)
        .map_err(|e| EduBotError::Internal(format!("failed to render config: {e}")))
}

pub fn run_config(config: &EduBotConfig) -> Result<(), EduBotError> {
    println!("{}", render_config(config)?);

    let missing = config.missing_credentials();
    if missing.is_empty() {
        println!("{}", "all provider credentials set".green());
    } else {
        for variable in missing {
            println!("{} {variable} is not set", "missing:".yellow());
        }
    }
    Ok(())
}
