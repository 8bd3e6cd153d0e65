// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared keyword tables read by both the classifier and the validator.
//!
//! The chat client and the server link the same tables, so math detection
//! and content filtering cannot drift between them.

/// Words that mark a question as math-leaning (whole-word, case-insensitive).
pub const MATH_KEYWORDS: &[&str] = &[
    // Core set.
    "solve", "calculate", "math", "equation", "algebra", "geometry",
    // Extended set.
    "formula", "arithmetic", "fraction", "decimal", "percentage", "graph",
    "function", "derivative", "integral", "theorem", "proof", "angle",
    "triangle", "circle", "square", "rectangle", "volume", "area",
    "perimeter", "probability", "statistics", "mean", "median", "mode",
    "sum", "product", "difference", "quotient", "multiply", "divide", "add",
    "subtract", "plus", "minus", "times", "equals", "number", "digit",
    "integer",
];

/// Substrings that reject a question outright (matched against lowercase input).
pub const DENYLIST: &[&str] = &[
    "violence", "weapon", "hurt", "kill", "hate", "stupid", "dumb", "idiot",
];
