// SPDX-License-Identifier: MIT

//! The RLCI engine daemon: a long-running process owning the pipeline
//! store and engine, reachable over a Unix socket.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

pub mod client;
pub mod config;
mod listener;
mod protocol;

pub use client::{trigger, ClientError};
pub use config::Config;
pub use listener::Listener;
pub use protocol::{ProtocolError, MAX_REQUEST_SIZE, RESPONSE_FAIL, RESPONSE_SUCCESS};
