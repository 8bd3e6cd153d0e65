// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dual-provider routing with a single ordered fallback.
//!
//! Order of operations: validate > pick primary from subject and classifier >
//! ask primary > on error or empty answer ask the other provider once.

use std::sync::Arc;

use edubot_core::{Answer, EduBotError, ProviderUsed, Question, Subject, TutorProvider};
use tracing::{debug, error, info, warn};

use crate::classifier;
use crate::validator;

/// Which adapter goes first for a question, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePlan {
    /// True when the math adapter is primary.
    pub math_leaning: bool,
    /// Whether the classifier was consulted (only for `Subject::General`).
    pub classified: bool,
}

/// Decide the attempt order without calling anything.
///
/// An explicit subject always wins; only `general` defers to the classifier.
pub fn plan(question: &Question) -> RoutePlan {
    match question.subject {
        Subject::Math => RoutePlan {
            math_leaning: true,
            classified: false,
        },
        Subject::General => RoutePlan {
            math_leaning: classifier::is_math_query(&question.text),
            classified: true,
        },
        Subject::Science | Subject::History | Subject::Language => RoutePlan {
            math_leaning: false,
            classified: false,
        },
    }
}

/// Routes questions between a math-specialised and a general provider.
pub struct TutorRouter {
    math: Arc<dyn TutorProvider>,
    general: Arc<dyn TutorProvider>,
}

impl TutorRouter {
    /// Create a router over the two adapters.
    pub fn new(math: Arc<dyn TutorProvider>, general: Arc<dyn TutorProvider>) -> Self {
        Self { math, general }
    }

    /// Answer a question, falling back to the other provider at most once.
    ///
    /// Returns `Validation` without calling any provider when the question is
    /// rejected, and `TotalFailure` when both providers fail.
    pub async fn route(&self, question: &Question) -> Result<Answer, EduBotError> {
        if let Err(invalid) = validator::validate(&question.text) {
            debug!(reason = %invalid, "question rejected by validator");
            return Err(EduBotError::Validation {
                reason: invalid.to_string(),
            });
        }

        let plan = plan(question);
        let (primary, secondary) = if plan.math_leaning {
            (&self.math, &self.general)
        } else {
            (&self.general, &self.math)
        };

        let keyword = if plan.classified {
            classifier::matched_keyword(&question.text)
        } else {
            None
        };
        info!(
            subject = %question.subject,
            math_leaning = plan.math_leaning,
            keyword = keyword.as_deref().unwrap_or(""),
            primary = primary.name(),
            "routing question"
        );

        let primary_failure = match attempt(primary.as_ref(), &question.text).await {
            Ok(text) => {
                return Ok(Answer {
                    text,
                    provider_used: ProviderUsed::Primary,
                    model: primary.model_tag(),
                });
            }
            Err(reason) => reason,
        };

        warn!(
            provider = primary.name(),
            error = %primary_failure,
            fallback = secondary.name(),
            "primary provider failed, falling back"
        );

        match attempt(secondary.as_ref(), &question.text).await {
            Ok(text) => {
                info!(provider = secondary.name(), "fallback provider answered");
                Ok(Answer {
                    text,
                    provider_used: ProviderUsed::Fallback,
                    model: secondary.model_tag(),
                })
            }
            Err(fallback_failure) => {
                error!(
                    primary = primary.name(),
                    primary_error = %primary_failure,
                    fallback = secondary.name(),
                    fallback_error = %fallback_failure,
                    "both providers failed"
                );
                Err(EduBotError::TotalFailure {
                    primary: primary_failure,
                    fallback: fallback_failure,
                })
            }
        }
    }
}

/// One provider call. An empty or whitespace-only answer counts as failure.
async fn attempt(provider: &dyn TutorProvider, text: &str) -> Result<String, String> {
    match provider.ask(text).await {
        Ok(answer) if answer.trim().is_empty() => {
            Err(format!("{} returned an empty answer", provider.name()))
        }
        Ok(answer) => Ok(answer),
        Err(e) => Err(e.to_string()),
    }
}
