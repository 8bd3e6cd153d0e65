// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for the external inference APIs.

use async_trait::async_trait;

use crate::error::EduBotError;
use crate::types::ModelTag;

/// Uniform `ask(text) -> answer` contract over one third-party inference API.
///
/// Implementations return `Ok(String::new())` when the provider responds
/// successfully but without usable text. Callers decide whether an empty
/// answer counts as failure.
#[async_trait]
pub trait TutorProvider: Send + Sync + 'static {
    /// Human-readable adapter name used in logs.
    fn name(&self) -> &str;

    /// Tag attached to answers produced by this adapter.
    fn model_tag(&self) -> ModelTag;

    /// Sends a question and returns the generated answer text.
    async fn ask(&self, text: &str) -> Result<String, EduBotError>;
}
