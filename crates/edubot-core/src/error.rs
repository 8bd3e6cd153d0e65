// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for EduBot.

use thiserror::Error;

/// The primary error type used across the router, providers, gateway and client.
#[derive(Debug, Error)]
pub enum EduBotError {
    /// The question failed length or content rules. The reason is user-facing.
    #[error("{reason}")]
    Validation { reason: String },

    /// A required credential is absent from configuration.
    #[error("missing required configuration: {variable}")]
    MissingCredential {
        /// Environment variable name an operator should set.
        variable: String,
    },

    /// Other configuration errors (invalid header values, bad URLs).
    #[error("configuration error: {0}")]
    Config(String),

    /// One provider call failed (network, non-success status, or provider-reported error).
    #[error("provider error ({provider}): {message}")]
    Provider {
        provider: String,
        /// Upstream HTTP status, when the request reached the provider.
        status: Option<u16>,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Both the primary and the fallback provider failed.
    #[error("both providers failed (primary: {primary}; fallback: {fallback})")]
    TotalFailure { primary: String, fallback: String },

    /// Reading or writing the local conversation history failed.
    #[error("history error: {message}")]
    History {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EduBotError {
    /// Shorthand for a provider error without an upstream status.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        EduBotError::Provider {
            provider: provider.into(),
            status: None,
            message: message.into(),
            source: None,
        }
    }

    /// Returns true for errors caused by the user's input rather than the system.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, EduBotError::Validation { .. })
    }
}
