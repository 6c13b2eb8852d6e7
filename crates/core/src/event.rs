// SPDX-License-Identifier: MIT

//! Observable side-effect intents.
//!
//! Every infrastructure boundary (process runner, workspace, report writer,
//! engine server) emits [`Event`]s describing the side effect it is about
//! to perform or has just performed. Production wiring discards them via
//! [`NoopSink`]; tests subscribe a [`RecordingSink`] to assert on intent
//! without needing to observe the real side effect.

use parking_lot::Mutex;
use std::path::PathBuf;

/// A side-effect intent emitted by a component.
///
/// Mirrors the `(kind, data)` pairs of the source system's `Observable`,
/// but as a closed tagged union instead of a duck-typed listener list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A command is about to be spawned, exactly as it will be passed to
    /// the process runner (including any workspace-wrapping shim).
    Process(Vec<String>),
    /// A line was printed to the terminal.
    Stdout(String),
    /// A file was (over)written at the given path.
    WriteFile(PathBuf),
    /// A request was sent to the engine server.
    ServerRequest { socket_path: PathBuf, payload: Vec<u8> },
    /// A response was produced by the engine server.
    ServerResponse(Vec<u8>),
    /// The process is about to exit with the given code.
    Exit(i32),
}

impl Event {
    /// Short tag used for filtering, matching the source's string kind tags.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Process(_) => "PROCESS",
            Event::Stdout(_) => "STDOUT",
            Event::WriteFile(_) => "WRITE_FILE",
            Event::ServerRequest { .. } => "SERVER_REQUEST",
            Event::ServerResponse(_) => "SERVER_RESPONSE",
            Event::Exit(_) => "EXIT",
        }
    }
}

/// Receiver for events emitted by engine components.
///
/// Must be safe to call concurrently: the DAG job controller dispatches
/// task batches in parallel, and every task in a batch may emit events
/// from its own execution context.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// Production sink: discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: Event) {}
}

/// Test sink: records every event in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in emission order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// All events whose kind tag matches.
    pub fn filter(&self, kind: &str) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| e.kind() == kind)
            .collect()
    }

    /// Whether any recorded event equals `event` exactly.
    pub fn has(&self, event: &Event) -> bool {
        self.events().iter().any(|e| e == event)
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: Event) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
