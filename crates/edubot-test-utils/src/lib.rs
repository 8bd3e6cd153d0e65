// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for EduBot integration tests.
//!
//! Provides mock providers and a small harness for fast, deterministic,
//! CI-runnable tests without calling any hosted model.
//!
//! # Components
//!
//! - [`MockProvider`] - Scripted tutor provider that records what it was asked
//! - [`TestHarness`] - A [`TutorRouter`](edubot_router::TutorRouter) wired to two mocks

pub mod harness;
pub mod mock_provider;

pub use harness::TestHarness;
pub use mock_provider::{MockOutcome, MockProvider};
