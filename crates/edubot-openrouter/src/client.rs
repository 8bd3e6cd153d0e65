// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenRouter chat-completions API.

use std::time::Duration;

use edubot_core::EduBotError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

pub(crate) const PROVIDER_NAME: &str = "openrouter";

/// HTTP client for `{base_url}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenRouterClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, EduBotError> {
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
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one completion request and returns the first choice's content.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, EduBotError> {
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
        debug!(status = %status, "completion response received");

        let body = response.text().await.map_err(|e| EduBotError::Provider {
            provider: PROVIDER_NAME.into(),
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: Some(status.as_u16()),
                message: format!("API returned {status}: {detail}"),
                source: None,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: Some(status.as_u16()),
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if let Some(err) = parsed.error {
            return Err(EduBotError::Provider {
                provider: PROVIDER_NAME.into(),
                status: Some(status.as_u16()),
                message: format!("OpenRouter API error: {}", err.message),
                source: None,
            });
        }

        Ok(parsed.first_content())
    }
}
