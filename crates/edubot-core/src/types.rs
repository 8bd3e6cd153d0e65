// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared by the router, gateway and chat client.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Coarse topic tag chosen by the student or inferred from the question.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Subject {
    #[default]
    General,
    Math,
    Science,
    History,
    Language,
}

impl Subject {
    /// Comma-separated list of accepted subject names, for error messages.
    pub fn valid_names() -> String {
        use strum::IntoEnumIterator;
        Subject::iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single student submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub subject: Subject,
}

impl Question {
    pub fn new(text: impl Into<String>, subject: Subject) -> Self {
        Self {
            text: text.into(),
            subject,
        }
    }
}

/// Which position in the attempt order produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderUsed {
    Primary,
    Fallback,
}

/// Identifies the adapter behind an answer, used to label chat bubbles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTag {
    /// The math-specialised model.
    Mathstral,
    /// The general-purpose tutor model.
    General,
}

impl ModelTag {
    /// Short label shown above a bot message.
    pub fn label(&self) -> &'static str {
        match self {
            ModelTag::Mathstral => "🧮 Mathstral",
            ModelTag::General => "🌟 General tutor",
        }
    }
}

/// The router's result for one question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub provider_used: ProviderUsed,
    pub model: ModelTag,
}

/// Author of a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One line of client-side conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// Millisecond timestamp, strictly increasing within a history.
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub subject: Subject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_tag: Option<ModelTag>,
}
