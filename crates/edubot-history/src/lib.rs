// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side state for the EduBot terminal chat: the persisted conversation
//! and the follow-up prompts offered under each answer.

pub mod followup;
pub mod store;

pub use followup::FollowUp;
pub use store::{ConversationHistory, HISTORY_KEY};
