// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, CORS and tracing middleware, and shared state.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    http::{HeaderValue, Method, Request, header},
    routing::{get, post},
};
use edubot_config::EduBotConfig;
use edubot_config::model::ServerConfig;
use edubot_core::EduBotError;
use edubot_huggingface::MathstralProvider;
use edubot_openrouter::OpenRouterProvider;
use edubot_router::TutorRouter;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};

use crate::handlers;

/// What the ask endpoint has to work with.
#[derive(Clone)]
pub enum TutorBackend {
    /// Both providers are configured.
    Ready(Arc<TutorRouter>),
    /// One or more credentials are absent. Requests get a 500 naming them.
    Unconfigured { missing: Vec<&'static str> },
}

impl TutorBackend {
    /// Build the real providers from config, or record which credentials are missing.
    pub fn from_config(config: &EduBotConfig) -> Result<Self, EduBotError> {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            warn!(?missing, "provider credentials missing, /api/ask will return 500");
            return Ok(TutorBackend::Unconfigured { missing });
        }

        let math = MathstralProvider::new(&config.math)?;
        let general = OpenRouterProvider::new(&config.general)?;
        Ok(TutorBackend::Ready(Arc::new(TutorRouter::new(
            Arc::new(math),
            Arc::new(general),
        ))))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, TutorBackend::Ready(_))
    }
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub backend: TutorBackend,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(backend: TutorBackend) -> Self {
        Self {
            backend,
            start_time: Instant::now(),
        }
    }
}

/// Build the CORS layer for `allowed_origin` (`*` or one exact origin).
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, EduBotError> {
    let origin = if allowed_origin == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(allowed_origin).map_err(|e| {
            EduBotError::Config(format!("invalid allowed_origin {allowed_origin:?}: {e}"))
        })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Assemble the application router.
///
/// Routes:
/// - POST /api/ask (other methods 405; OPTIONS is answered by the CORS layer)
/// - GET /health
pub fn build_router(state: GatewayState, allowed_origin: &str) -> Result<Router, EduBotError> {
    let ask_route = post(handlers::post_ask).fallback(handlers::method_not_allowed);

    let app = Router::new()
        .route("/api/ask", ask_route)
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(cors_layer(allowed_origin)?)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                info_span!(
                    "request",
                    request_id = %uuid::Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        );

    Ok(app)
}

/// Bind and serve until `shutdown` resolves, then drain in-flight requests.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), EduBotError> {
    let app = build_router(state, &config.allowed_origin)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EduBotError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    info!("EduBot gateway listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| EduBotError::Internal(format!("gateway server error: {e}")))?;

    info!("EduBot gateway stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_exact_origins_build() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("https://edubot.example.com").is_ok());
    }

    #[test]
    fn origin_with_newline_is_config_error() {
        assert!(matches!(
            cors_layer("https://bad\norigin"),
            Err(EduBotError::Config(_))
        ));
    }

    #[test]
    fn backend_unconfigured_without_keys() {
        let backend = TutorBackend::from_config(&EduBotConfig::default()).unwrap();
        match backend {
            TutorBackend::Unconfigured { missing } => {
                assert_eq!(missing, vec!["HUGGINGFACE_API_KEY", "OPENROUTER_API_KEY"]);
            }
            TutorBackend::Ready(_) => panic!("backend should not be ready without keys"),
        }
    }

    #[test]
    fn backend_ready_with_both_keys() {
        let mut config = EduBotConfig::default();
        config.math.api_key = Some("hf_test".into());
        config.general.api_key = Some("sk-or-test".into());
        assert!(TutorBackend::from_config(&config).unwrap().is_ready());
    }
}
