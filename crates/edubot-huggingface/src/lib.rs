// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Math tutor provider backed by the Hugging Face Inference API.
//!
//! This crate implements [`TutorProvider`] for a hosted Mathstral model. The
//! question is wrapped in a step-by-step math persona prompt before sending.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use edubot_config::model::{MATH_API_KEY_ENV, MathProviderConfig};
use edubot_core::{EduBotError, ModelTag, TutorProvider};
use tracing::{debug, info};

use crate::client::{HuggingFaceClient, PROVIDER_NAME};
use crate::types::{GenerationParameters, InferenceRequest};

/// Build the math tutor prompt around a student's question.
pub fn math_prompt(question: &str) -> String {
    format!(
        "You are an educational tutor for children aged 8–14, teaching math. \
         Provide clear, accurate, unbiased, and age-appropriate answers. \
         Solve the question step-by-step in a simple, engaging way, like talking \
         to a middle school student. Question: {question}"
    )
}

/// Hugging Face Mathstral provider implementing [`TutorProvider`].
pub struct MathstralProvider {
    client: HuggingFaceClient,
    max_new_tokens: u32,
    temperature: f32,
}

impl MathstralProvider {
    /// Creates the provider from the `[math]` config section.
    ///
    /// Fails with [`EduBotError::MissingCredential`] when no API key is set,
    /// before any request is made.
    pub fn new(config: &MathProviderConfig) -> Result<Self, EduBotError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| EduBotError::MissingCredential {
                variable: MATH_API_KEY_ENV.to_string(),
            })?;

        let client = HuggingFaceClient::new(
            api_key,
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %config.model, "Hugging Face provider initialized");

        Ok(Self {
            client,
            max_new_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn to_request(&self, question: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: math_prompt(question),
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        }
    }
}

#[async_trait]
impl TutorProvider for MathstralProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_tag(&self) -> ModelTag {
        ModelTag::Mathstral
    }

    async fn ask(&self, text: &str) -> Result<String, EduBotError> {
        debug!(endpoint = self.client.endpoint(), "asking math provider");
        self.client.generate(&self.to_request(text)).await
    }
}
