// SPDX-License-Identifier: MIT

//! `rlci` — the command-line client for the RLCI engine daemon.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rlci_core::{Event, EventSink, NoopSink};
use rlci_daemon::config::DEFAULT_SOCKET_PATH;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "rlci", about = "Trigger RLCI pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Trigger a pipeline by name
    Trigger {
        /// The pipeline to trigger
        name: Option<String>,
    },
}

fn cli_command() -> clap::Command {
    Cli::command()
}

/// Emit the process's `Exit` event, then actually exit. The one non-local
/// exit point in this binary, so every exit code this CLI ever produces is
/// observable through the same event the rest of the system uses.
fn exit(sink: &Arc<dyn EventSink>, code: i32) -> ! {
    sink.emit(Event::Exit(code));
    std::process::exit(code);
}

#[tokio::main]
async fn main() {
    let sink: Arc<dyn EventSink> = Arc::new(NoopSink);
    let socket_path = std::env::var("RLCI_SOCKET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOCKET_PATH));

    // Unlike `get_matches`, this never lets clap exit with its own usage
    // text and code 2: any unparseable invocation (unknown subcommand,
    // stray args) collapses to the same "exit 1 with a usage line"
    // contract every non-`trigger` invocation gets.
    let cli = match cli_command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(_) => {
            println!("Usage: rlci trigger");
            exit(&sink, 1);
        }
    };

    match cli.command {
        Some(Command::Trigger { name: Some(name) }) => {
            let success = rlci_daemon::trigger(&socket_path, &name)
                .await
                .unwrap_or(false);
            exit(&sink, if success { 0 } else { 1 });
        }
        Some(Command::Trigger { name: None }) => {
            println!("Usage: rlci trigger <pipeline>");
            exit(&sink, 1);
        }
        None => {
            println!("Usage: rlci trigger");
            exit(&sink, 1);
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
