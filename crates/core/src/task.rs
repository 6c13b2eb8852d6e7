// SPDX-License-Identifier: MIT

//! The DAG job model: [`TaskSpec`], [`TaskStatus`], and the `work` closure a
//! task runs to reach a [`TerminalStatus`].

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// The state a task occupies in the job controller's run.
///
/// Transitions are monotonic: a task never revisits a state once it has
/// left it, and a task in a terminal state is never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Waiting,
    Ready,
    Running,
    Ok,
    Failed,
    Skipped,
    Stopped,
}

impl TaskStatus {
    /// Terminal states: `ok, failed, skipped, stopped`.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Ok | TaskStatus::Failed | TaskStatus::Skipped | TaskStatus::Stopped
        )
    }
}

/// The outcome a task's `work` closure produces.
///
/// A narrower type than [`TaskStatus`]: work can only ever finish `ok` or
/// `failed` (skip and stop are administrative, decided by the controller,
/// never by the work itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Ok,
    Failed,
}

impl From<TerminalStatus> for TaskStatus {
    fn from(value: TerminalStatus) -> Self {
        match value {
            TerminalStatus::Ok => TaskStatus::Ok,
            TerminalStatus::Failed => TaskStatus::Failed,
        }
    }
}

/// A task's opaque action. Borrowed by the controller during execution only
/// — tasks never own their own scheduling.
#[async_trait]
pub trait TaskWork: Send + Sync {
    async fn run(&self) -> TerminalStatus;
}

/// A [`TaskWork`] built from an async closure, for tests and simple cases.
pub struct FnTaskWork<F>(F);

impl<F> FnTaskWork<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> TaskWork for FnTaskWork<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: std::future::Future<Output = TerminalStatus> + Send,
{
    async fn run(&self) -> TerminalStatus {
        (self.0)().await
    }
}

/// The construction-time definition of one DAG node.
///
/// Carries `name`, `waitFor`, `ignoreFail`, `ignoreSkip`, plus the
/// `stopped` administrative sentinel. Edges are carried as predecessor
/// *names* here; the controller resolves them to arena indices on
/// construction so that during the run nothing but the controller mutates
/// graph state — no mutual wait-for/dependants lists mutated by the tasks
/// themselves.
pub struct TaskSpec {
    pub name: String,
    pub wait_for: HashSet<String>,
    pub ignore_fail: HashSet<String>,
    pub ignore_skip: HashSet<String>,
    pub stopped: bool,
    pub work: Arc<dyn TaskWork>,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, work: Arc<dyn TaskWork>) -> Self {
        Self {
            name: name.into(),
            wait_for: HashSet::new(),
            ignore_fail: HashSet::new(),
            ignore_skip: HashSet::new(),
            stopped: false,
            work,
        }
    }

    pub fn wait_for(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.wait_for.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignore_fail(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignore_fail.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignore_skip(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignore_skip.extend(names.into_iter().map(Into::into));
        self
    }

    /// Mark this task `stopped` before the run starts: an administrative
    /// sentinel, terminal for propagation purposes but never a source of
    /// downstream skips.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
