// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlci-core: data model and event types shared by the RLCI engine

pub mod event;
pub mod pipeline;
pub mod task;

pub use event::{Event, EventSink, NoopSink, RecordingSink};
pub use pipeline::{Pipeline, RunRecord, StageCommand, Step, Token};
pub use task::{FnTaskWork, TaskSpec, TaskStatus, TaskWork, TerminalStatus};
