// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `edubot ask` command: route one question in-process and print the answer.

use colored::Colorize;
use edubot_config::EduBotConfig;
use edubot_core::{Answer, EduBotError, ProviderUsed, Question, Subject};
use edubot_gateway::TutorBackend;

/// Route `text` through both providers without starting the server.
pub async fn run_ask(config: EduBotConfig, text: String, subject: Subject) -> Result<(), EduBotError> {
    let router = match TutorBackend::from_config(&config)? {
        TutorBackend::Ready(router) => router,
        TutorBackend::Unconfigured { missing } => {
            return Err(EduBotError::MissingCredential {
                variable: missing.join(", "),
            });
        }
    };

    let answer = router.route(&Question::new(text, subject)).await?;
    println!("{}", format_answer(&answer));
    Ok(())
}

fn format_answer(answer: &Answer) -> String {
    let mut header = answer.model.label().to_string();
    if answer.provider_used == ProviderUsed::Fallback {
        header.push_str(" (fallback)");
    }
    format!("{}\n{}", header.dimmed(), answer.text)
}
