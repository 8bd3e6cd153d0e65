// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the ask endpoint.
//!
//! Handles POST /api/ask, OPTIONS /api/ask, GET /health.

use std::str::FromStr;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use edubot_core::{EduBotError, ModelTag, ProviderUsed, Question, Subject};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::server::{GatewayState, TutorBackend};

/// Returned to the client when both providers fail.
pub const TOTAL_FAILURE_MESSAGE: &str = "Both providers failed. Please try again later.";

/// Request body for POST /api/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
    /// Subject name; absent means `general`.
    #[serde(default)]
    pub subject: Option<String>,
}

/// Response body for a successful POST /api/ask.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: ModelTag,
    pub provider: ProviderUsed,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// False when any provider credential is missing.
    pub providers_configured: bool,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Any other method on /api/ask.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// POST /api/ask
///
/// Checks credentials, parses the body, then routes the question.
pub async fn post_ask(State(state): State<GatewayState>, body: Bytes) -> Response {
    let router = match &state.backend {
        TutorBackend::Ready(router) => router.clone(),
        TutorBackend::Unconfigured { missing } => {
            error!(?missing, "ask rejected: provider credentials missing");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server configuration error: missing {}", missing.join(", ")),
            );
        }
    };

    let request = match serde_json::from_slice::<AskRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "malformed request body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let question = match parse_question(request) {
        Ok(question) => question,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    match router.route(&question).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(AskResponse {
                answer: answer.text,
                model: answer.model,
                provider: answer.provider_used,
            }),
        )
            .into_response(),
        Err(EduBotError::Validation { reason }) => {
            error_response(StatusCode::BAD_REQUEST, reason)
        }
        Err(EduBotError::TotalFailure { .. }) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, TOTAL_FAILURE_MESSAGE)
        }
        Err(e) => {
            error!(error = %e, "unexpected routing error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, TOTAL_FAILURE_MESSAGE)
        }
    }
}

/// Turn a raw body into a [`Question`], or a 400 message.
fn parse_question(request: AskRequest) -> Result<Question, String> {
    let text = match request.question {
        Some(text) if !text.is_empty() => text,
        _ => return Err("Question is required".to_string()),
    };

    let subject = match request.subject.as_deref() {
        None | Some("") => Subject::General,
        Some(name) => Subject::from_str(name).map_err(|_| {
            format!(
                "Unknown subject \"{name}\". Valid subjects: {}",
                Subject::valid_names()
            )
        })?,
    };

    Ok(Question::new(text, subject))
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        providers_configured: state.backend.is_ready(),
    })
}
