// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `edubot serve` command implementation.
//!
//! Builds both providers from config and serves `POST /api/ask` until SIGINT
//! or SIGTERM. Missing credentials do not stop startup; the endpoint answers
//! 500 naming them instead.

use edubot_config::EduBotConfig;
use edubot_core::EduBotError;
use edubot_gateway::{GatewayState, TutorBackend, start_server};
use tracing::info;

use crate::shutdown;

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run_serve(config: EduBotConfig) -> Result<(), EduBotError> {
    let backend = TutorBackend::from_config(&config)?;
    if backend.is_ready() {
        info!(
            math_model = %config.math.model,
            general_model = %config.general.model,
            "tutor providers ready"
        );
    }

    let cancel = shutdown::install_signal_handler();
    let state = GatewayState::new(backend);

    start_server(&config.server, state, async move {
        cancel.cancelled().await;
    })
    .await?;

    info!("edubot serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edubot={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
