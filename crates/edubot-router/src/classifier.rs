// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based math question detection.
//!
//! Pure and deterministic: no network, no state.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::MATH_KEYWORDS;

/// `\b(?:solve|calculate|...)\b`, compiled once from the shared table.
static MATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MATH_KEYWORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("math keyword pattern is valid")
});

/// Returns true when `text` contains a math keyword as a whole word.
pub fn is_math_query(text: &str) -> bool {
    MATH_PATTERN.is_match(text)
}

/// The first math keyword found in `text`, lowercased. Used for log fields.
pub fn matched_keyword(text: &str) -> Option<String> {
    MATH_PATTERN.find(text).map(|m| m.as_str().to_lowercase())
}
