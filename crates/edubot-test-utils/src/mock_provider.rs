// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock tutor provider for deterministic testing.
//!
//! `MockProvider` implements `TutorProvider` with a scripted outcome queue,
//! so routing and fallback can be exercised without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::Mutex;

use edubot_core::{EduBotError, ModelTag, TutorProvider};

/// One scripted result for a call to [`MockProvider::ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Return this text (may be empty).
    Answer(String),
    /// Fail with a provider error carrying this message.
    Failure(String),
}

/// A tutor provider that replays pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned.
pub struct MockProvider {
    name: String,
    model_tag: ModelTag,
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: AtomicUsize,
    received: StdMutex<Vec<String>>,
}

impl MockProvider {
    /// Create a mock with an empty queue.
    pub fn new(name: impl Into<String>, model_tag: ModelTag) -> Self {
        Self {
            name: name.into(),
            model_tag,
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
            received: StdMutex::new(Vec::new()),
        }
    }

    /// Create a mock pre-loaded with the given outcomes.
    pub fn with_outcomes(
        name: impl Into<String>,
        model_tag: ModelTag,
        outcomes: Vec<MockOutcome>,
    ) -> Self {
        let mock = Self::new(name, model_tag);
        // Fresh mutex, never contended here.
        if let Ok(mut queue) = mock.outcomes.try_lock() {
            queue.extend(outcomes);
        }
        mock
    }

    /// Queue a successful answer.
    pub async fn push_answer(&self, text: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(MockOutcome::Answer(text.into()));
    }

    /// Queue a provider failure.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(MockOutcome::Failure(message.into()));
    }

    /// Number of times `ask` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The question texts passed to `ask`, in call order.
    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    async fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Answer("mock response".to_string()))
    }
}

#[async_trait]
impl TutorProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model_tag(&self) -> ModelTag {
        self.model_tag
    }

    async fn ask(&self, text: &str) -> Result<String, EduBotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut received) = self.received.lock() {
            received.push(text.to_string());
        }
        match self.next_outcome().await {
            MockOutcome::Answer(answer) => Ok(answer),
            MockOutcome::Failure(message) => Err(EduBotError::provider(self.name.clone(), message)),
        }
    }
}
