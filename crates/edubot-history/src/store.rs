// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only conversation history persisted as a local JSON document.
//!
//! The document holds the entry list under [`HISTORY_KEY`] and is rewritten
//! after every mutation. A bot entry may only follow a user entry.

use std::fs;
use std::path::{Path, PathBuf};

use edubot_core::{ConversationEntry, EduBotError, ModelTag, Role, Subject};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed key the entry list is stored under.
pub const HISTORY_KEY: &str = "edubot_conversation";

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(rename = "edubot_conversation", default)]
    entries: Vec<ConversationEntry>,
}

/// The client's conversation, backed by one JSON file.
#[derive(Debug)]
pub struct ConversationHistory {
    path: PathBuf,
    entries: Vec<ConversationEntry>,
}

impl ConversationHistory {
    /// Read history from `path`. A missing file is an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, EduBotError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => {
                let doc: HistoryDocument =
                    serde_json::from_str(&content).map_err(|e| EduBotError::History {
                        message: format!("failed to parse {}: {e}", path.display()),
                        source: Some(Box::new(e)),
                    })?;
                doc.entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(EduBotError::History {
                    message: format!("failed to read {}", path.display()),
                    source: Some(Box::new(e)),
                });
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "history loaded");
        Ok(Self { path, entries })
    }

    /// A history with no entries, written to `path` on the first mutation.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent bot entry, the target of follow-up prompts.
    pub fn last_bot(&self) -> Option<&ConversationEntry> {
        self.entries.iter().rev().find(|e| e.role == Role::Bot)
    }

    /// Record a student submission and persist.
    pub fn append_user(
        &mut self,
        content: impl Into<String>,
        subject: Subject,
    ) -> Result<&ConversationEntry, EduBotError> {
        let entry = ConversationEntry {
            id: self.next_id(now_millis()),
            role: Role::User,
            content: content.into(),
            subject,
            model_tag: None,
        };
        self.push(entry)
    }

    /// Record a reply to the latest user entry and persist.
    ///
    /// Fails when the last entry is not a user entry.
    pub fn append_bot(
        &mut self,
        content: impl Into<String>,
        subject: Subject,
        model_tag: Option<ModelTag>,
    ) -> Result<&ConversationEntry, EduBotError> {
        match self.entries.last() {
            Some(last) if last.role == Role::User => {}
            _ => {
                return Err(EduBotError::History {
                    message: "bot entry must follow a user entry".into(),
                    source: None,
                });
            }
        }

        let entry = ConversationEntry {
            id: self.next_id(now_millis()),
            role: Role::Bot,
            content: content.into(),
            subject,
            model_tag,
        };
        self.push(entry)
    }

    /// Remove every entry and persist the empty document.
    ///
    /// On a failed save the entries are kept, matching the file.
    pub fn clear(&mut self) -> Result<(), EduBotError> {
        let old = std::mem::take(&mut self.entries);
        if let Err(e) = self.save() {
            self.entries = old;
            return Err(e);
        }
        Ok(())
    }

    /// `max(now, last_id + 1)`: unique and increasing even within one millisecond.
    fn next_id(&self, now: i64) -> i64 {
        match self.entries.last() {
            Some(last) => now.max(last.id + 1),
            None => now,
        }
    }

    /// Append and persist. The entry is dropped again if the save fails.
    fn push(&mut self, entry: ConversationEntry) -> Result<&ConversationEntry, EduBotError> {
        self.entries.push(entry);
        if let Err(e) = self.save() {
            self.entries.pop();
            return Err(e);
        }
        self.entries.last().ok_or_else(|| EduBotError::Internal("history empty after push".into()))
    }

    /// Write the whole document via a sibling temp file and rename.
    fn save(&self) -> Result<(), EduBotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| EduBotError::History {
                message: format!("failed to create {}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }

        let doc = HistoryDocument {
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&doc).map_err(|e| EduBotError::History {
            message: "failed to serialize history".into(),
            source: Some(Box::new(e)),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|e| EduBotError::History {
                message: format!("failed to write {}", self.path.display()),
                source: Some(Box::new(e)),
            })
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
