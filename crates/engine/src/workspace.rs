// SPDX-License-Identifier: MIT

//! Workspace acquisition: a fresh empty directory used as the CWD for
//! every step's child process, released on every exit path.

use crate::error::WorkspaceError;
use rlci_adapters::ProcessRunner;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// `sh` script used to wrap every step's command so it runs rooted at the
/// workspace. `$0` receives the workspace path (positional, not part of
/// `"$@"`); the remaining args are the real command, so `exec "$@"` runs
/// it unchanged — this whole argv appears verbatim in the `PROCESS` event
/// the wrapped run emits.
pub(crate) const CD_SHIM_SCRIPT: &str = "cd \"$0\" && exec \"$@\"";

/// Wrap `command` so it runs with `workspace` as its current directory.
fn wrap(workspace: &Path, command: &[String]) -> Vec<String> {
    let mut wrapped = vec![
        "sh".to_string(),
        "-c".to_string(),
        CD_SHIM_SCRIPT.to_string(),
        workspace.display().to_string(),
    ];
    wrapped.extend(command.iter().cloned());
    wrapped
}

/// Runs commands rooted at an acquired workspace's directory.
#[derive(Clone)]
pub struct WorkspaceExecutor {
    path: PathBuf,
    process_runner: Arc<dyn ProcessRunner>,
}

impl WorkspaceExecutor {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn run(&self, command: &[String], on_line: &mut (dyn FnMut(String) + Send)) -> i32 {
        let wrapped = wrap(&self.path, command);
        self.process_runner.run(&wrapped, on_line).await
    }

    /// The literal argv that `run` would emit as its `PROCESS` event, for
    /// callers (the engine) that need to log the resolved command before
    /// running it.
    pub fn wrap(&self, command: &[String]) -> Vec<String> {
        wrap(&self.path, command)
    }
}

/// An acquired, scoped workspace: acquired with a guaranteed release on
/// every exit path.
///
/// `release` is the primary, observable cleanup path: it runs `rm -rf
/// <path>` through the same process runner, so the same `PROCESS` event
/// contract applies to teardown as to setup. The `Drop` impl is a
/// best-effort synchronous fallback — if `release` was never called
/// (a panic unwound past it), the directory is still removed, just without
/// going through the process runner or emitting an event.
pub struct Workspace {
    path: PathBuf,
    process_runner: Arc<dyn ProcessRunner>,
    released: AtomicBool,
}

impl Workspace {
    /// Create a fresh empty directory by running `mktemp -d` through the
    /// process runner and capturing its stdout as the workspace path.
    pub async fn acquire(process_runner: Arc<dyn ProcessRunner>) -> Result<Self, WorkspaceError> {
        let mut output = Vec::new();
        let code = process_runner
            .run(
                &["mktemp".to_string(), "-d".to_string()],
                &mut |line| output.push(line),
            )
            .await;
        if code != 0 {
            return Err(WorkspaceError::CreateFailed { returncode: code });
        }
        let path = PathBuf::from(output.join(""));
        Ok(Self {
            path,
            process_runner,
            released: AtomicBool::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn executor(&self) -> WorkspaceExecutor {
        WorkspaceExecutor {
            path: self.path.clone(),
            process_runner: Arc::clone(&self.process_runner),
        }
    }

    /// Remove the workspace directory via `rm -rf`. Consumes `self` so it
    /// can only be called once; a failure is logged but does not override
    /// a prior success status.
    pub async fn release(self) {
        self.released.store(true, Ordering::SeqCst);
        let command = vec![
            "rm".to_string(),
            "-rf".to_string(),
            self.path.display().to_string(),
        ];
        let mut noop = |_: String| {};
        let returncode = self.process_runner.run(&command, &mut noop).await;
        if returncode != 0 {
            tracing::warn!(path = %self.path.display(), returncode, "workspace release failed");
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if !self.released.load(Ordering::SeqCst) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
