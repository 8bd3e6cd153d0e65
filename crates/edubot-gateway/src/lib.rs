// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP endpoint for EduBot.
//!
//! Exposes the tutor router as `POST /api/ask` with CORS and method checks,
//! plus an unauthenticated `GET /health` for process supervisors.

pub mod handlers;
pub mod server;

pub use handlers::{AskRequest, AskResponse, ErrorResponse, HealthResponse, TOTAL_FAILURE_MESSAGE};
pub use server::{GatewayState, TutorBackend, build_router, cors_layer, start_server};
