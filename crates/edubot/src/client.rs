// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for a running EduBot endpoint.
//!
//! Posts to the primary API URL and, unless the server rejected the question
//! itself, retries once against the optional fallback URL.

use edubot_core::{EduBotError, Question};
use edubot_gateway::{AskResponse, ErrorResponse};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct AskBody<'a> {
    question: &'a str,
    subject: String,
}

/// Client for `POST /api/ask`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
    fallback_api_url: Option<String>,
}

impl ApiClient {
    pub fn new(api_url: impl Into<String>, fallback_api_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            fallback_api_url,
        }
    }

    /// Ask the endpoint. A 400 with an `{error}` body is returned as
    /// [`EduBotError::Validation`] carrying the server's message and is not
    /// retried; any other failure tries the fallback URL once.
    pub async fn ask(&self, question: &Question) -> Result<AskResponse, EduBotError> {
        match self.post(&self.api_url, question).await {
            Ok(answer) => Ok(answer),
            Err(e @ EduBotError::Validation { .. }) => Err(e),
            Err(primary) => match &self.fallback_api_url {
                Some(fallback) => {
                    warn!(error = %primary, url = %fallback, "primary API failed, trying fallback URL");
                    self.post(fallback, question).await
                }
                None => Err(primary),
            },
        }
    }

    async fn post(&self, url: &str, question: &Question) -> Result<AskResponse, EduBotError> {
        let body = AskBody {
            question: &question.text,
            subject: question.subject.to_string(),
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EduBotError::Provider {
                provider: url.to_string(),
                status: None,
                message: format!("request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(%status, url, "API response received");
        let text = response.text().await.map_err(|e| EduBotError::Provider {
            provider: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| EduBotError::Provider {
                provider: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("unexpected response: {e}"),
                source: Some(Box::new(e)),
            });
        }

        let parsed = serde_json::from_str::<ErrorResponse>(&text).ok();
        match parsed {
            Some(body) if status == reqwest::StatusCode::BAD_REQUEST => {
                Err(EduBotError::Validation { reason: body.error })
            }
            parsed => Err(EduBotError::Provider {
                provider: url.to_string(),
                status: Some(status.as_u16()),
                message: parsed
                    .map(|body| body.error)
                    .unwrap_or_else(|| format!("server returned {status}")),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use edubot_core::{ModelTag, ProviderUsed, Subject};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn ok_body() -> serde_json::Value {
        serde_json::json!({"answer": "x=2", "model": "mathstral", "provider": "primary"})
    }

    #[tokio::test]
    async fn posts_question_and_subject() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .and(body_json(serde_json::json!({"question": "Solve 2x+3=7", "subject": "math"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api/ask", server.uri()), None);
        let answer = client
            .ask(&Question::new("Solve 2x+3=7", Subject::Math))
            .await
            .unwrap();
        assert_eq!(answer.answer, "x=2");
        assert_eq!(answer.model, ModelTag::Mathstral);
        assert_eq!(answer.provider, ProviderUsed::Primary);
    }

    #[tokio::test]
    async fn server_error_uses_fallback_url() {
        let primary = MockServer::start().await;
        let fallback = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(
                serde_json::json!({"error": "Both providers failed. Please try again later."}),
            ))
            .expect(1)
            .mount(&primary)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&fallback)
            .await;

        let client = ApiClient::new(primary.uri(), Some(fallback.uri()));
        let answer = client
            .ask(&Question::new("Solve 2x+3=7", Subject::General))
            .await
            .unwrap();
        assert_eq!(answer.answer, "x=2");
    }

    #[tokio::test]
    async fn client_error_is_not_retried() {
        let primary = MockServer::start().await;
        let fallback = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Question is too short"})),
            )
            .mount(&primary)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(0)
            .mount(&fallback)
            .await;

        let client = ApiClient::new(primary.uri(), Some(fallback.uri()));
        let err = client
            .ask(&Question::new("hey", Subject::General))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Question is too short");
    }

    #[tokio::test]
    async fn wrong_host_not_found_uses_fallback_url() {
        let primary = MockServer::start().await;
        let fallback = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .expect(1)
            .mount(&primary)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&fallback)
            .await;

        let client = ApiClient::new(primary.uri(), Some(fallback.uri()));
        let answer = client
            .ask(&Question::new("Solve 2x+3=7", Subject::Math))
            .await
            .unwrap();
        assert_eq!(answer.answer, "x=2");
    }

    #[tokio::test]
    async fn bad_request_without_error_body_is_not_validation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("<html>bad</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), None);
        let err = client
            .ask(&Question::new("Explain photosynthesis", Subject::Science))
            .await
            .unwrap_err();
        assert!(
            matches!(err, EduBotError::Provider { status: Some(400), .. }),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn server_error_without_fallback_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(
                serde_json::json!({"error": "Both providers failed. Please try again later."}),
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), None);
        let err = client
            .ask(&Question::new("Explain photosynthesis", Subject::Science))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Both providers failed"), "got: {err}");
    }
}
