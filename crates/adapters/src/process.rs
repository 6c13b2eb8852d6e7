// SPDX-License-Identifier: MIT

//! The process runner contract: spawn an external command, stream its
//! merged stdout+stderr line-by-line, and return its exit code.

use async_trait::async_trait;
use rlci_core::{Event, EventSink};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Exit code reported when a child process could not be spawned at all.
/// Callers already treat any non-zero code as failure, so this is never
/// surfaced as a Rust `Err`.
pub const SPAWN_ERROR_EXIT_CODE: i32 = -1;

/// Contract every process runner must satisfy.
///
/// `run` blocks until the child exits and all of its output has been
/// consumed. `on_line` is invoked once per complete line, in the order
/// lines arrive; implementations merge stdout and stderr into that single
/// ordered stream.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &[String], on_line: &mut (dyn FnMut(String) + Send)) -> i32;
}

/// Spawns real child processes via `tokio::process::Command`.
///
/// The event sink is a constructor dependency (never a global): the one
/// `Event::Process` emission the contract requires happens here, before the
/// child is spawned.
pub struct TokioProcessRunner {
    sink: Arc<dyn EventSink>,
}

impl TokioProcessRunner {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &[String], on_line: &mut (dyn FnMut(String) + Send)) -> i32 {
        self.sink.emit(Event::Process(command.to_vec()));

        let Some((program, args)) = command.split_first() else {
            return SPAWN_ERROR_EXIT_CODE;
        };

        let mut child = match Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(_) => return SPAWN_ERROR_EXIT_CODE,
        };

        let stdout = child.stdout.take().map(|s| BufReader::new(s).lines());
        let stderr = child.stderr.take().map(|s| BufReader::new(s).lines());
        read_merged(stdout, stderr, on_line).await;

        match child.wait().await {
            Ok(status) => status.code().unwrap_or(SPAWN_ERROR_EXIT_CODE),
            Err(_) => SPAWN_ERROR_EXIT_CODE,
        }
    }
}

/// Reads two line streams concurrently, forwarding each line to `on_line`
/// as soon as it arrives. This is the "interleave two readers" strategy
/// the contract allows as an alternative to a stderr-to-stdout redirect at
/// spawn time; `tokio::io::Lines` already strips the trailing `\r\n`.
async fn read_merged(
    mut stdout: Option<tokio::io::Lines<BufReader<tokio::process::ChildStdout>>>,
    mut stderr: Option<tokio::io::Lines<BufReader<tokio::process::ChildStderr>>>,
    on_line: &mut (dyn FnMut(String) + Send),
) {
    loop {
        let next_out = async {
            match stdout.as_mut() {
                Some(lines) => lines.next_line().await,
                None => std::future::pending().await,
            }
        };
        let next_err = async {
            match stderr.as_mut() {
                Some(lines) => lines.next_line().await,
                None => std::future::pending().await,
            }
        };

        if stdout.is_none() && stderr.is_none() {
            break;
        }

        tokio::select! {
            line = next_out => match line {
                Ok(Some(line)) => on_line(line),
                _ => stdout = None,
            },
            line = next_err => match line {
                Ok(Some(line)) => on_line(line),
                _ => stderr = None,
            },
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
