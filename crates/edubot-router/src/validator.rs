// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question length and content checks.
//!
//! Rules run in order and the first failure wins. Failure messages are shown
//! to the student as-is.

use thiserror::Error;

use crate::keywords::DENYLIST;

/// Minimum trimmed length, in characters.
pub const MIN_CHARS: usize = 3;

/// Maximum trimmed length, in characters.
pub const MAX_CHARS: usize = 1000;

/// Why a question was rejected. `Display` is the user-facing reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    #[error("Please enter a valid question")]
    Empty,
    #[error("Question is too short")]
    TooShort,
    #[error("Question is too long")]
    TooLong,
    #[error("Please ask educational questions that are appropriate for school")]
    Inappropriate,
}

/// Check a raw question against the length bounds and the denylist.
pub fn validate(text: &str) -> Result<(), InvalidQuestion> {
    if text.is_empty() {
        return Err(InvalidQuestion::Empty);
    }

    let trimmed = text.trim();
    let chars = trimmed.chars().count();
    if chars < MIN_CHARS {
        return Err(InvalidQuestion::TooShort);
    }
    if chars > MAX_CHARS {
        return Err(InvalidQuestion::TooLong);
    }

    let lower = trimmed.to_lowercase();
    if DENYLIST.iter().any(|word| lower.contains(word)) {
        return Err(InvalidQuestion::Inappropriate);
    }

    Ok(())
}
