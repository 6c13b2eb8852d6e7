// SPDX-License-Identifier: MIT

//! The DAG Job Controller: executes a set of tasks ordered by a wait-for
//! graph, dispatching ready batches concurrently and propagating skip/fail
//! outcomes to descendants.

use rlci_core::{TaskSpec, TaskStatus, TaskWork, TerminalStatus};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

/// One node in the arena: the graph lives as a `Vec<TaskNode>` with edges
/// as index pairs — no task ever mutates another task's state, only the
/// controller does.
struct TaskNode {
    name: String,
    wait_for: HashSet<String>,
    ignore_fail: HashSet<String>,
    ignore_skip: HashSet<String>,
    work: Arc<dyn TaskWork>,
    status: TaskStatus,
}

/// The outcome of one DAG job run: every task's final status, in the order
/// tasks were added.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub statuses: Vec<(String, TaskStatus)>,
}

impl JobOutcome {
    pub fn status_of(&self, name: &str) -> Option<TaskStatus> {
        self.statuses
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, status)| *status)
    }
}

/// Executes [`TaskSpec`]s respecting their `wait_for` edges.
pub struct JobController {
    tasks: Vec<TaskNode>,
}

impl JobController {
    pub fn new(specs: Vec<TaskSpec>) -> Self {
        let tasks = specs
            .into_iter()
            .map(|spec| TaskNode {
                name: spec.name,
                wait_for: spec.wait_for,
                ignore_fail: spec.ignore_fail,
                ignore_skip: spec.ignore_skip,
                work: spec.work,
                status: if spec.stopped {
                    TaskStatus::Stopped
                } else {
                    TaskStatus::Waiting
                },
            })
            .collect();
        Self { tasks }
    }

    fn status_of(&self, name: &str) -> Option<TaskStatus> {
        self.tasks.iter().find(|t| t.name == name).map(|t| t.status)
    }

    /// Promote eligible `waiting` tasks: skip first (so a skip cascades on
    /// the very next pass), then ready.
    fn promote(&mut self) {
        let snapshot: Vec<(usize, HashSet<String>, HashSet<String>, HashSet<String>)> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == TaskStatus::Waiting)
            .map(|(i, t)| {
                (
                    i,
                    t.wait_for.clone(),
                    t.ignore_fail.clone(),
                    t.ignore_skip.clone(),
                )
            })
            .collect();

        for (index, wait_for, ignore_fail, ignore_skip) in snapshot {
            let mut all_terminal = true;
            let mut should_skip = false;
            for predecessor in &wait_for {
                match self.status_of(predecessor) {
                    Some(status) if status.is_terminal() => {
                        if status == TaskStatus::Failed && !ignore_fail.contains(predecessor) {
                            should_skip = true;
                        }
                        if status == TaskStatus::Skipped && !ignore_skip.contains(predecessor) {
                            should_skip = true;
                        }
                    }
                    _ => all_terminal = false,
                }
            }

            if should_skip {
                self.tasks[index].status = TaskStatus::Skipped;
            } else if all_terminal {
                self.tasks[index].status = TaskStatus::Ready;
            }
        }
    }

    fn has_pending_work(&self) -> bool {
        self.tasks.iter().any(|t| {
            matches!(
                t.status,
                TaskStatus::Waiting | TaskStatus::Ready | TaskStatus::Running
            )
        })
    }

    /// Run the job to completion: promote, dispatch a batch of `ready`
    /// tasks concurrently, collect at least one finishing before promoting
    /// again. Terminates when nothing is waiting, ready, or running.
    pub async fn run(mut self) -> JobOutcome {
        loop {
            self.promote();
            if !self.has_pending_work() {
                break;
            }

            let ready: Vec<usize> = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.status == TaskStatus::Ready)
                .map(|(i, _)| i)
                .collect();

            if !ready.is_empty() {
                let mut joinset = JoinSet::new();
                let mut index_of: std::collections::HashMap<tokio::task::Id, usize> =
                    std::collections::HashMap::new();
                for index in &ready {
                    self.tasks[*index].status = TaskStatus::Running;
                    let work = Arc::clone(&self.tasks[*index].work);
                    let handle = joinset.spawn(async move { work.run().await });
                    index_of.insert(handle.id(), *index);
                }
                // join_next_with_id() resolves in completion order, not
                // spawn order, so results are routed back to their task via
                // the join handle id rather than zipped against `ready`
                // positionally. A panicking task's work is treated as
                // `failed`, never propagated.
                while let Some(result) = joinset.join_next_with_id().await {
                    let (id, terminal) = match result {
                        Ok((id, status)) => (id, status),
                        Err(join_error) => (join_error.id(), TerminalStatus::Failed),
                    };
                    if let Some(&index) = index_of.get(&id) {
                        self.tasks[index].status = terminal.into();
                    }
                }
            }
        }

        JobOutcome {
            statuses: self
                .tasks
                .into_iter()
                .map(|t| (t.name, t.status))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
