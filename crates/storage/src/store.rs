// SPDX-License-Identifier: MIT

//! The Pipeline Store: process-local and in-memory. Persistence is
//! explicitly a later concern.

use parking_lot::Mutex;
use rlci_core::{Pipeline, StageCommand};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pipeline {name:?} not found")]
    NotFound { name: String },
}

struct Inner {
    pipelines: HashMap<String, Pipeline>,
    stage_commands: Vec<StageCommand>,
}

/// Keyed directory of pipeline definitions, plus the current run's
/// append-only `StageCommand` log.
///
/// Single writer per run; concurrent reads are safe. A
/// `parking_lot::Mutex`-guarded map, the same single-writer-multiple-reader
/// shape as `MaterializedState`.
pub struct PipelineStore {
    inner: Mutex<Inner>,
}

impl Default for PipelineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                pipelines: HashMap::new(),
                stage_commands: Vec::new(),
            }),
        }
    }

    /// Idempotent overwrite.
    pub fn save_pipeline(&self, pipeline: Pipeline) {
        let mut inner = self.inner.lock();
        inner.pipelines.insert(pipeline.name.clone(), pipeline);
    }

    pub fn get_pipeline(&self, name: &str) -> Result<Pipeline, StoreError> {
        let inner = self.inner.lock();
        inner
            .pipelines
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    /// Resets the current run's stage-command log.
    pub fn begin_run(&self) {
        let mut inner = self.inner.lock();
        inner.stage_commands.clear();
    }

    /// Appends a new, in-flight stage command. Exactly one of these must
    /// precede any output lines or returncode set for a given stage
    /// command.
    pub fn append_stage_command(&self, command: Vec<String>) {
        let mut inner = self.inner.lock();
        inner.stage_commands.push(StageCommand::new(command));
    }

    /// Appends one output line to the most recently appended stage command.
    pub fn append_stage_command_output_line(&self, line: String) {
        let mut inner = self.inner.lock();
        if let Some(last) = inner.stage_commands.last_mut() {
            last.output.push(line);
        }
    }

    /// Sets the returncode on the most recently appended stage command.
    /// Set exactly once, before the next `append_stage_command`.
    pub fn set_stage_command_returncode(&self, code: i32) {
        let mut inner = self.inner.lock();
        if let Some(last) = inner.stage_commands.last_mut() {
            last.returncode = Some(code);
        }
    }

    /// Snapshot of the current run's stage commands, in append order.
    pub fn get_stage_commands(&self) -> Vec<StageCommand> {
        self.inner.lock().stage_commands.clone()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
