// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlci-storage: the Pipeline Store — a keyed mapping from pipeline name
//! to definition, plus the per-run append-only `StageCommand` log.

mod store;

pub use store::{PipelineStore, StoreError};
