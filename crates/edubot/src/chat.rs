// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `edubot chat` command implementation.
//!
//! An interactive terminal client for a running EduBot endpoint. Validates
//! locally, auto-detects math questions, persists the conversation and offers
//! follow-up prompts under each answer.

use std::str::FromStr;

use colored::{Color, Colorize};
use edubot_config::EduBotConfig;
use edubot_core::{ConversationEntry, EduBotError, Question, Role, Subject};
use edubot_history::{ConversationHistory, FollowUp};
use edubot_router::{is_math_query, validate};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use strum::IntoEnumIterator;
use tracing::warn;

use crate::client::ApiClient;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Ask(String),
    SetSubject(Subject),
    UnknownSubject(String),
    FollowUp(FollowUp),
    Clear,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl ChatCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return ChatCommand::Ask(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "quit" | "exit" => ChatCommand::Quit,
            "clear" => ChatCommand::Clear,
            "history" => ChatCommand::History,
            "help" => ChatCommand::Help,
            "subject" => match Subject::from_str(arg) {
                Ok(subject) => ChatCommand::SetSubject(subject),
                Err(_) => ChatCommand::UnknownSubject(arg.to_string()),
            },
            other => match FollowUp::from_str(other) {
                Ok(follow_up) => ChatCommand::FollowUp(follow_up),
                Err(_) => ChatCommand::Unknown(other.to_string()),
            },
        }
    }
}

/// The chat's mutable state: selected subject, history and API client.
pub struct ChatSession {
    pub subject: Subject,
    pub history: ConversationHistory,
    client: ApiClient,
}

impl ChatSession {
    pub fn new(history: ConversationHistory, client: ApiClient) -> Self {
        Self {
            subject: Subject::General,
            history,
            client,
        }
    }

    /// Submit one question and return the bot entry recorded for it.
    ///
    /// Every submission records a user entry followed by exactly one bot
    /// entry, whether the answer came back, validation failed, or the
    /// request errored.
    pub async fn submit(&mut self, text: &str) -> Result<ConversationEntry, EduBotError> {
        if let Err(invalid) = validate(text) {
            self.history.append_user(text, self.subject)?;
            return self
                .history
                .append_bot(invalid.to_string(), Subject::General, None)
                .cloned();
        }

        let subject = if self.subject == Subject::General && is_math_query(text) {
            Subject::Math
        } else {
            self.subject
        };

        self.history.append_user(text, subject)?;

        match self.client.ask(&Question::new(text, subject)).await {
            Ok(response) => self
                .history
                .append_bot(response.answer, subject, Some(response.model))
                .cloned(),
            Err(e) => {
                warn!(error = %e, "ask failed");
                let message = match &e {
                    EduBotError::Validation { reason } => reason.clone(),
                    other => format!(
                        "Sorry, I'm having trouble right now: {other}\n\nPlease try asking your question again! 🤔"
                    ),
                };
                self.history
                    .append_bot(message, Subject::General, None)
                    .cloned()
            }
        }
    }

    /// Empty the conversation. A failed save leaves it as it was.
    pub fn clear(&mut self) -> Result<(), EduBotError> {
        self.history.clear()
    }

    /// Build the follow-up question for the most recent answer.
    pub fn follow_up(&self, kind: FollowUp) -> Option<String> {
        self.history.last_bot().map(|entry| kind.prompt(&entry.content))
    }
}

fn subject_color(subject: Subject) -> Color {
    match subject {
        Subject::General => Color::Cyan,
        Subject::Math => Color::Blue,
        Subject::Science => Color::Green,
        Subject::History => Color::Yellow,
        Subject::Language => Color::Magenta,
    }
}

/// Render an entry for the terminal: label line, then content with line
/// breaks preserved.
pub fn render_entry(entry: &ConversationEntry) -> String {
    match entry.role {
        Role::User => format!("{} {}", "you>".bold(), entry.content),
        Role::Bot => {
            let color = subject_color(entry.subject);
            let mut out = String::new();
            if let Some(tag) = entry.model_tag {
                out.push_str(&format!("{}\n", tag.label().dimmed()));
            }
            for line in entry.content.lines() {
                out.push_str(&format!("{}\n", line.color(color)));
            }
            out.trim_end_matches('\n').to_string()
        }
    }
}

fn follow_up_hint() -> String {
    FollowUp::iter()
        .map(|f| format!("/{f} ({})", f.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_help() {
    println!("Commands:");
    println!("  /subject <{}>", Subject::valid_names().replace(", ", "|"));
    println!("  /explain /hint /example /steps   follow up on the last answer");
    println!("  /history   show the saved conversation");
    println!("  /clear     forget the saved conversation");
    println!("  /quit      leave");
}

/// Runs the `edubot chat` interactive REPL.
pub async fn run_chat(config: EduBotConfig) -> Result<(), EduBotError> {
    let history = match ConversationHistory::load(&config.client.history_path) {
        Ok(history) => history,
        Err(e) => {
            eprintln!("{}: {e}; starting a fresh conversation", "warning".yellow());
            ConversationHistory::empty(&config.client.history_path)
        }
    };

    let client = ApiClient::new(&config.client.api_url, config.client.fallback_api_url.clone());
    let mut session = ChatSession::new(history, client);

    let mut rl = DefaultEditor::new()
        .map_err(|e| EduBotError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "🤖 EduBot".bold().green());
    println!("Your homework helper for math, science, history and language.");
    println!("Type {} for commands, {} to exit.\n", "/help".yellow(), "/quit".yellow());

    if !session.history.is_empty() {
        println!(
            "{}",
            format!("({} saved messages, /history to show)", session.history.len()).dimmed()
        );
    }

    loop {
        let prompt = format!("{}> ", session.subject.to_string().color(subject_color(session.subject)));
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        let question = match ChatCommand::parse(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Help => {
                print_help();
                continue;
            }
            ChatCommand::Clear => {
                match session.clear() {
                    Ok(()) => println!("{}", "conversation cleared".dimmed()),
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
                continue;
            }
            ChatCommand::History => {
                for entry in session.history.entries() {
                    println!("{}\n", render_entry(entry));
                }
                continue;
            }
            ChatCommand::SetSubject(subject) => {
                session.subject = subject;
                println!("subject set to {}", subject.to_string().color(subject_color(subject)));
                continue;
            }
            ChatCommand::UnknownSubject(name) => {
                eprintln!(
                    "{}: unknown subject {name:?}. Valid subjects: {}",
                    "error".red(),
                    Subject::valid_names()
                );
                continue;
            }
            ChatCommand::Unknown(name) => {
                eprintln!("{}: unknown command /{name}, try /help", "error".red());
                continue;
            }
            ChatCommand::FollowUp(kind) => match session.follow_up(kind) {
                Some(question) => {
                    println!("{} {}", "you>".bold(), question);
                    question
                }
                None => {
                    eprintln!("{}", "nothing to follow up on yet".yellow());
                    continue;
                }
            },
            ChatCommand::Ask(text) => text,
        };

        println!("{}", "thinking...".dimmed());
        match session.submit(&question).await {
            Ok(entry) => {
                println!("{}", render_entry(&entry));
                println!("{}\n", follow_up_hint().dimmed());
            }
            Err(e) => eprintln!("{}: {e}", "error".red()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use edubot_core::ModelTag;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn session_for(dir: &tempfile::TempDir, api_url: String) -> ChatSession {
        let history = ConversationHistory::load(dir.path().join("history.json")).unwrap();
        ChatSession::new(history, ApiClient::new(api_url, None))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(ChatCommand::parse("/quit"), ChatCommand::Quit);
        assert_eq!(ChatCommand::parse("/clear"), ChatCommand::Clear);
        assert_eq!(
            ChatCommand::parse("/subject Science"),
            ChatCommand::SetSubject(Subject::Science)
        );
        assert_eq!(
            ChatCommand::parse("/subject astrology"),
            ChatCommand::UnknownSubject("astrology".into())
        );
        assert_eq!(ChatCommand::parse("/hint"), ChatCommand::FollowUp(FollowUp::Hint));
        assert_eq!(ChatCommand::parse("/dance"), ChatCommand::Unknown("dance".into()));
        assert_eq!(
            ChatCommand::parse("What is a noun?"),
            ChatCommand::Ask("What is a noun?".into())
        );
    }

    #[tokio::test]
    async fn invalid_question_recorded_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut session = session_for(&dir, server.uri());
        let entry = session.submit("hi").await.unwrap();

        assert_eq!(entry.role, Role::Bot);
        assert_eq!(entry.content, "Question is too short");
        assert_eq!(entry.subject, Subject::General);
        assert_eq!(session.history.len(), 2);
    }

    #[tokio::test]
    async fn math_question_auto_detected_from_general() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"subject": "math"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "answer": "x=2", "model": "mathstral", "provider": "primary"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = session_for(&dir, server.uri());
        let entry = session.submit("Solve 2x+3=7").await.unwrap();

        assert_eq!(entry.content, "x=2");
        assert_eq!(entry.subject, Subject::Math);
        assert_eq!(entry.model_tag, Some(ModelTag::Mathstral));
        assert_eq!(session.history.entries()[0].subject, Subject::Math);
    }

    #[tokio::test]
    async fn unreachable_api_records_apology() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&dir, "http://127.0.0.1:9/api/ask".into());
        let entry = session.submit("Explain photosynthesis").await.unwrap();

        assert!(entry.content.starts_with("Sorry, I'm having trouble right now"));
        assert!(entry.model_tag.is_none());
        assert_eq!(session.history.len(), 2);
    }

    #[tokio::test]
    async fn follow_up_quotes_last_answer() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "answer": "Verbs are action words.", "model": "general", "provider": "primary"
            })))
            .mount(&server)
            .await;

        let mut session = session_for(&dir, server.uri());
        assert!(session.follow_up(FollowUp::Example).is_none());
        session.submit("What is a verb?").await.unwrap();
        assert_eq!(
            session.follow_up(FollowUp::Example).unwrap(),
            "Can you give me an example related to \"Verbs are action words.\"?"
        );
    }

    #[tokio::test]
    async fn failed_clear_keeps_session_usable() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("d");
        let history = ConversationHistory::load(parent.join("history.json")).unwrap();
        let mut session = ChatSession::new(history, ApiClient::new("http://127.0.0.1:9/api/ask", None));
        session.submit("hi").await.unwrap();

        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "not a directory").unwrap();

        assert!(matches!(session.clear(), Err(EduBotError::History { .. })));
        assert_eq!(session.history.len(), 2);
        assert!(session.follow_up(FollowUp::Hint).is_some());
    }

    #[test]
    fn render_keeps_line_breaks_and_label() {
        colored::control::set_override(false);
        let entry = ConversationEntry {
            id: 1,
            role: Role::Bot,
            content: "Step 1: subtract 3\nStep 2: divide by 2".into(),
            subject: Subject::Math,
            model_tag: Some(ModelTag::Mathstral),
        };
        assert_eq!(
            render_entry(&entry),
            "🧮 Mathstral\nStep 1: subtract 3\nStep 2: divide by 2"
        );
    }
}
