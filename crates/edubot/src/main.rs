// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! EduBot - a dual-model homework tutor for children aged 8-14.
//!
//! This is the binary entry point: the HTTP server, a one-shot `ask`, the
//! terminal chat client and a config viewer.

mod ask;
mod chat;
mod client;
mod serve;
mod show_config;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edubot_config::EduBotConfig;
use edubot_core::Subject;

/// EduBot - a dual-model homework tutor.
#[derive(Parser, Debug)]
#[command(name = "edubot", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(short = 'c', long = "config-file", global = true, value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP endpoint (POST /api/ask).
    Serve,
    /// Ask one question using the configured providers directly.
    Ask {
        /// The question text.
        question: String,
        /// general, math, science, history or language.
        #[arg(short, long, default_value = "general")]
        subject: Subject,
    },
    /// Chat with a running EduBot server from the terminal.
    Chat,
    /// Show the effective configuration.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> EduBotConfig {
    let loaded = match path {
        Some(path) => edubot_config::load_and_validate_path(path),
        None => edubot_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            edubot_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config_file.as_ref());

    let result = match cli.command {
        Some(Commands::Serve) => {
            serve::init_tracing(&config.logging.level);
            serve::run_serve(config).await
        }
        Some(Commands::Ask { question, subject }) => {
            serve::init_tracing(&config.logging.level);
            ask::run_ask(config, question, subject).await
        }
        Some(Commands::Chat) => {
            serve::init_tracing("warn");
            chat::run_chat(config).await
        }
        Some(Commands::Config) => show_config::run_config(&config),
        None => {
            println!("edubot: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("edubot: {e}");
        std::process::exit(1);
    }
}
