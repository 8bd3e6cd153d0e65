// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! General tutor provider backed by OpenRouter chat completions.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use edubot_config::model::{GENERAL_API_KEY_ENV, GeneralProviderConfig};
use edubot_core::{EduBotError, ModelTag, TutorProvider};
use tracing::{debug, info};

use crate::client::{OpenRouterClient, PROVIDER_NAME};
use crate::types::{ChatMessage, ChatRequest};

/// System persona for science, history and language-arts questions.
pub const GENERAL_PERSONA: &str = "You are an educational tutor for children aged 8–14, \
    teaching subjects like science, history, and language arts. Provide clear, accurate, \
    unbiased, and age-appropriate answers. For procedural questions, explain step-by-step \
    in a simple, engaging way. For general knowledge, use fun examples or analogies.";

/// OpenRouter provider implementing [`TutorProvider`].
pub struct OpenRouterProvider {
    client: OpenRouterClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenRouterProvider {
    /// Creates the provider from the `[general]` config section.
    ///
    /// Fails with [`EduBotError::MissingCredential`] when no API key is set.
    pub fn new(config: &GeneralProviderConfig) -> Result<Self, EduBotError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| EduBotError::MissingCredential {
                variable: GENERAL_API_KEY_ENV.to_string(),
            })?;

        let client = OpenRouterClient::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %config.model, "OpenRouter provider initialized");

        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn to_request(&self, question: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(GENERAL_PERSONA), ChatMessage::user(question)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl TutorProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_tag(&self) -> ModelTag {
        ModelTag::General
    }

    async fn ask(&self, text: &str) -> Result<String, EduBotError> {
        debug!(model = %self.model, "asking general provider");
        self.client.complete(&self.to_request(text)).await
    }
}
