// SPDX-License-Identifier: MIT

//! Daemon configuration, resolved from the environment.

use std::path::PathBuf;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/rlci-engine.socket";
pub const DEFAULT_REPORT_PATH: &str = rlci_engine::DEFAULT_REPORT_PATH;

/// Resolved daemon configuration.
pub struct Config {
    pub socket_path: PathBuf,
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment, falling back to the
    /// defaults the original tool hardcoded (`RLCI_SOCKET_PATH`,
    /// `RLCI_REPORT_PATH`).
    pub fn load() -> Self {
        let socket_path = std::env::var("RLCI_SOCKET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOCKET_PATH));
        let report_path = std::env::var("RLCI_REPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH));
        Self {
            socket_path,
            report_path,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
