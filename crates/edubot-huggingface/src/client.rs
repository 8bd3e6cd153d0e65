// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Hugging Face Inference API.
//!
//! Provides [`HuggingFaceClient`] which handles bearer authentication, request
//! construction and error mapping. No retries: the router owns fallback.

use std::time::Duration;

use edubot_core::EduBotError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, InferenceRequest, InferenceResponse};

pub(crate) const PROVIDER_NAME: &str = "mathstral";

/// HTTP client for one hosted text-generation model.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HuggingFaceClient {
    /// Creates a client posting to `{base_url}/models/{model}`.
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, EduBotError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                EduBotError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: None,
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
        })
    }

    /// The full inference URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one generation request and returns the generated text.
    ///
    /// A success status carrying an `error` field is still a failure. A
    /// response with no generation yields an empty string.
    pub async fn generate(&self, request: &InferenceRequest) -> Result<String, EduBotError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: None,
                message: format!("request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "inference response received");

        let body = response.text().await.map_err(|e| EduBotError::Provider {
            provider: PROVIDER_NAME.into(),
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: Some(status.as_u16()),
                message: format!("API returned {status}: {detail}"),
                source: None,
            });
        }

        let parsed: InferenceResponse =
            serde_json::from_str(&body).map_err(|e| EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: Some(status.as_u16()),
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        parsed.into_text().map_err(|err| EduBotError::Provider {
            provider: PROVIDER_NAME.into(),
            status: Some(status.as_u16()),
            message: format!("Hugging Face API error: {}", err.error),
            source: None,
        })
    }
}
