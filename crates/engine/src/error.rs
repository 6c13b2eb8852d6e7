// SPDX-License-Identifier: MIT

//! Error taxonomy for the engine: semantic kinds raised while running a
//! pipeline, always caught at the run boundary and translated into a
//! boolean outcome — nothing here escapes `Engine::trigger`.

use thiserror::Error;

/// Workspace acquisition failed. No `release` is attempted when this is
/// returned, since no workspace object exists yet.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("workspace creation failed with exit code {returncode}")]
    CreateFailed { returncode: i32 },
}

/// Raised while running one pipeline's steps; always caught inside
/// [`crate::pipeline_engine::Engine::trigger`] and turned into a failed run.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("workspace could not be acquired: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("step referenced unbound variable {name:?}")]
    UnresolvedVariable { name: String },

    #[error("step command exited with code {returncode}")]
    CommandFailure { returncode: i32 },
}
