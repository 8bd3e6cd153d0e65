// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Hugging Face text-generation inference endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /models/{model}`.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    /// Keep the persona prompt out of the generated text.
    pub return_full_text: bool,
}

/// Response body. The endpoint answers either a list of generations or an
/// object carrying an `error` string (model loading, bad token, rate limit).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Generated(Vec<Generation>),
    Error(ApiErrorResponse),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub generated_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

impl InferenceResponse {
    /// The first generation's text, or empty when none was returned.
    pub fn into_text(self) -> Result<String, ApiErrorResponse> {
        match self {
            InferenceResponse::Generated(generations) => Ok(generations
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .unwrap_or_default()),
            InferenceResponse::Error(err) => Err(err),
        }
    }
}
