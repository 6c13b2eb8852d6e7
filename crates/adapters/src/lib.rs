// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlci-adapters: the external-process abstraction.
//!
//! Every infrastructure boundary the core requires lives here as an
//! explicit trait with a production implementation and a recording test
//! double — never a runtime "am I null" branch in production code.

pub mod process;

#[cfg(any(test, feature = "test-support"))]
pub mod null_process;

pub use process::{ProcessRunner, TokioProcessRunner};

#[cfg(any(test, feature = "test-support"))]
pub use null_process::{NullProcessRunner, ProcessResponse};
