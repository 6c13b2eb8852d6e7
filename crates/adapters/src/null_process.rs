// SPDX-License-Identifier: MIT

//! Null/test variant of the process runner: configurable responses keyed
//! by command equality, spawning nothing.

use crate::process::ProcessRunner;
use async_trait::async_trait;
use parking_lot::Mutex;
use rlci_core::{Event, EventSink};
use std::sync::Arc;

/// One configured response for a [`NullProcessRunner`].
///
/// Defaults match the source's `{"returncode": 0, "output": []}` fallback
/// (`examples/original_source/rlci/infrastructure/__init__.py`).
#[derive(Debug, Clone, Default)]
pub struct ProcessResponse {
    pub command: Vec<String>,
    pub output: Vec<String>,
    pub returncode: i32,
}

impl ProcessResponse {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            output: Vec::new(),
            returncode: 0,
        }
    }

    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    pub fn with_returncode(mut self, returncode: i32) -> Self {
        self.returncode = returncode;
        self
    }
}

/// Records `Event::Process` like the real runner but spawns nothing.
///
/// The first configured response whose `command` equals the requested one
/// is consumed (removed), mirroring `dict(response, **responses.pop(i))`
/// only applying on a structural match; no match falls back to the
/// zero-value default (`{returncode: 0, output: []}`).
pub struct NullProcessRunner {
    sink: Arc<dyn EventSink>,
    responses: Mutex<Vec<ProcessResponse>>,
}

impl NullProcessRunner {
    pub fn new(sink: Arc<dyn EventSink>, responses: Vec<ProcessResponse>) -> Self {
        Self {
            sink,
            responses: Mutex::new(responses),
        }
    }

    pub fn empty(sink: Arc<dyn EventSink>) -> Self {
        Self::new(sink, Vec::new())
    }
}

#[async_trait]
impl ProcessRunner for NullProcessRunner {
    async fn run(&self, command: &[String], on_line: &mut (dyn FnMut(String) + Send)) -> i32 {
        self.sink.emit(Event::Process(command.to_vec()));

        let response = {
            let mut responses = self.responses.lock();
            let position = responses.iter().position(|r| r.command == command);
            match position {
                Some(index) => responses.remove(index),
                None => ProcessResponse::default(),
            }
        };

        for line in response.output {
            on_line(line);
        }
        response.returncode
    }
}

#[cfg(test)]
#[path = "null_process_tests.rs"]
mod tests;
