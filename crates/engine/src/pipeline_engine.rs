// SPDX-License-Identifier: MIT

//! The Pipeline Engine: runs a named pipeline's steps inside a fresh
//! workspace, resolving variable tokens between steps, and produces a
//! pipeline-wide success/failure outcome.

use crate::error::ExecuteError;
use crate::report::ReportWriter;
use crate::workspace::{Workspace, WorkspaceExecutor};
use rlci_adapters::ProcessRunner;
use rlci_core::{Event, EventSink, Pipeline, RunRecord, Step, Token};
use rlci_storage::PipelineStore;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// Seed pipelines resolvable without a prior `save_pipeline` call.
///
/// Mirrors `Engine.__init__`'s `self.pipelines = {"RLCIPipeline": ...}` in
/// `examples/original_source/rlci/pipelines.py`: the tool's own smoke-test
/// pipeline is always available, in addition to whatever the Pipeline
/// Store holds. This is additive and never changes `NotFound` semantics
/// for any other name.
fn builtin_pipelines() -> HashMap<String, Pipeline> {
    let sh = |command: &str| {
        Step::new(vec![
            Token::literal("sh"),
            Token::literal("-c"),
            Token::literal(command),
        ])
    };
    let pipeline = Pipeline::new(
        "RLCIPipeline",
        vec![
            sh("git clone git@github.com:rickardlindberg/rlci.git ."),
            sh("git merge --no-ff -m \"Integrate.\" origin/BRANCH"),
            sh("./zero.py build"),
            sh("git push"),
        ],
    );
    HashMap::from([(pipeline.name.clone(), pipeline)])
}

/// Runs pipelines: the core piece of the system end to end.
pub struct Engine {
    store: Arc<PipelineStore>,
    process_runner: Arc<dyn ProcessRunner>,
    sink: Arc<dyn EventSink>,
    report_writer: Arc<dyn ReportWriter>,
    builtin: HashMap<String, Pipeline>,
}

impl Engine {
    pub fn new(
        store: Arc<PipelineStore>,
        process_runner: Arc<dyn ProcessRunner>,
        sink: Arc<dyn EventSink>,
        report_writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            store,
            process_runner,
            sink,
            report_writer,
            builtin: builtin_pipelines(),
        }
    }

    fn resolve_pipeline(&self, name: &str) -> Option<Pipeline> {
        match self.store.get_pipeline(name) {
            Ok(pipeline) => Some(pipeline),
            Err(_) => self.builtin.get(name).cloned(),
        }
    }

    /// Run the named pipeline to completion. Returns `true` iff no step
    /// failed and no setup error occurred.
    pub async fn trigger(&self, name: &str) -> bool {
        let Some(pipeline) = self.resolve_pipeline(name) else {
            return false;
        };

        self.sink
            .emit(Event::Stdout(format!("Triggered {}", pipeline.name)));
        self.store.begin_run();

        let started_at = SystemTime::now();
        let success = self.run_pipeline(&pipeline).await;
        let ended_at = SystemTime::now();

        if !success {
            self.sink.emit(Event::Stdout("FAIL".to_string()));
        }

        let record = RunRecord {
            pipeline_name: pipeline.name,
            started_at,
            ended_at,
            success,
            stage_commands: self.store.get_stage_commands(),
        };
        self.report_writer.write(&record).await;

        success
    }

    async fn run_pipeline(&self, pipeline: &Pipeline) -> bool {
        let workspace = match Workspace::acquire(Arc::clone(&self.process_runner)).await {
            Ok(workspace) => workspace,
            Err(_) => return false,
        };

        let executor = workspace.executor();
        let mut variables: HashMap<String, String> = HashMap::new();
        let mut success = true;

        for step in &pipeline.steps {
            if self.run_step(&executor, step, &mut variables).await.is_err() {
                success = false;
                break;
            }
        }

        workspace.release().await;
        success
    }

    async fn run_step(
        &self,
        executor: &WorkspaceExecutor,
        step: &Step,
        variables: &mut HashMap<String, String>,
    ) -> Result<(), ExecuteError> {
        let resolved = resolve_tokens(&step.command, variables)?;
        self.store.append_stage_command(executor.wrap(&resolved));

        let store = Arc::clone(&self.store);
        let mut captured = Vec::new();
        let mut on_line = |line: String| {
            store.append_stage_command_output_line(line.clone());
            captured.push(line);
        };
        let returncode = executor.run(&resolved, &mut on_line).await;
        self.store.set_stage_command_returncode(returncode);

        if returncode != 0 {
            return Err(ExecuteError::CommandFailure { returncode });
        }

        if let Some(variable) = &step.variable {
            variables.insert(variable.clone(), captured.join(""));
        }
        Ok(())
    }
}

/// Resolve a step's tokens against the variables bound so far. A
/// `{variable: n}` token with no binding is a fatal `UnresolvedVariable`.
fn resolve_tokens(
    tokens: &[Token],
    variables: &HashMap<String, String>,
) -> Result<Vec<String>, ExecuteError> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(value) => Ok(value.clone()),
            Token::Variable { variable } => variables.get(variable).cloned().ok_or_else(|| {
                ExecuteError::UnresolvedVariable {
                    name: variable.clone(),
                }
            }),
        })
        .collect()
}

#[cfg(test)]
#[path = "pipeline_engine_tests.rs"]
mod tests;
