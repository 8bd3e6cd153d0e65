// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for EduBot.
//!
//! Provides the error type, the domain types exchanged between the client,
//! gateway and router, and the [`TutorProvider`] trait every inference
//! adapter implements.

pub mod error;
pub mod traits;
pub mod types;

pub use error::EduBotError;
pub use traits::TutorProvider;
pub use types::{Answer, ConversationEntry, ModelTag, ProviderUsed, Question, Role, Subject};
