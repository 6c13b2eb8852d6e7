// SPDX-License-Identifier: MIT

//! The pipeline engine and DAG job controller: the two subsystems that
//! actually run work, as opposed to the adapters and storage that merely
//! support them.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

mod controller;
mod error;
mod pipeline_engine;
mod report;
mod workspace;

pub use controller::{JobController, JobOutcome};
pub use error::{ExecuteError, WorkspaceError};
pub use pipeline_engine::Engine;
pub use report::{HtmlReportWriter, NullReportWriter, ReportWriter, DEFAULT_REPORT_PATH};
pub use workspace::{Workspace, WorkspaceExecutor};
