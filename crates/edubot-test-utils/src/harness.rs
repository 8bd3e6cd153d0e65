// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring a [`TutorRouter`] to two mock providers.
//!
//! Gives gateway and client tests a ready router plus handles on each mock
//! so they can script outcomes and assert on call counts.

use std::path::PathBuf;
use std::sync::Arc;

use edubot_core::{Answer, EduBotError, ModelTag, Question, Subject};
use edubot_router::TutorRouter;

use crate::mock_provider::{MockOutcome, MockProvider};

/// Builder for [`TestHarness`].
pub struct TestHarnessBuilder {
    math: Vec<MockOutcome>,
    general: Vec<MockOutcome>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            math: Vec::new(),
            general: Vec::new(),
        }
    }

    /// Script the math provider's outcomes.
    pub fn with_math(mut self, outcomes: Vec<MockOutcome>) -> Self {
        self.math = outcomes;
        self
    }

    /// Script the general provider's outcomes.
    pub fn with_general(mut self, outcomes: Vec<MockOutcome>) -> Self {
        self.general = outcomes;
        self
    }

    /// Build the harness with a fresh temp directory for history files.
    pub fn build(self) -> Result<TestHarness, EduBotError> {
        let temp_dir = tempfile::TempDir::new().map_err(|e| EduBotError::History {
            message: "failed to create temp dir".into(),
            source: Some(e.into()),
        })?;

        let math = Arc::new(MockProvider::with_outcomes(
            "mathstral-mock",
            ModelTag::Mathstral,
            self.math,
        ));
        let general = Arc::new(MockProvider::with_outcomes(
            "general-mock",
            ModelTag::General,
            self.general,
        ));
        let router = Arc::new(TutorRouter::new(math.clone(), general.clone()));

        Ok(TestHarness {
            math,
            general,
            router,
            _temp_dir: temp_dir,
        })
    }
}

/// A router over two scripted providers.
pub struct TestHarness {
    pub math: Arc<MockProvider>,
    pub general: Arc<MockProvider>,
    pub router: Arc<TutorRouter>,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Route one question through the full validate/classify/fallback path.
    pub async fn ask(&self, text: &str, subject: Subject) -> Result<Answer, EduBotError> {
        self.router.route(&Question::new(text, subject)).await
    }

    /// A history file path inside the harness temp dir. The file does not exist yet.
    pub fn history_path(&self) -> PathBuf {
        self._temp_dir.path().join("history.json")
    }
}
