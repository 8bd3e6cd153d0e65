// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question validation, math classification and provider routing for EduBot.
//!
//! This crate provides:
//! - [`keywords`]: the shared math keyword table and content denylist
//! - [`validate`]: length and content checks with user-facing reasons
//! - [`is_math_query`]: whole-word keyword classifier
//! - [`TutorRouter`]: primary/fallback dispatch across two providers

pub mod classifier;
pub mod keywords;
pub mod router;
pub mod validator;

pub use classifier::{is_math_query, matched_keyword};
pub use router::{RoutePlan, TutorRouter, plan};
pub use validator::{InvalidQuestion, MAX_CHARS, MIN_CHARS, validate};
