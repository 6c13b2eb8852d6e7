//! Test helpers for black-box specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::{Duration, Instant};

/// `rlci` and `rlci-engine` are dev-dependencies of this package purely so
/// `cargo` sets `CARGO_BIN_EXE_rlci`/`CARGO_BIN_EXE_rlci-engine`, which
/// `assert_cmd::cargo::cargo_bin` reads — no manual `target/debug`
/// path-walking.
///
/// One-shot `rlci` invocations use [`assert_cmd::Command`] for its
/// `.assert()` API; the long-lived daemon below needs `spawn`/`kill`, so it
/// stays on plain [`std::process::Command`].
pub fn rlci_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("rlci").expect("rlci binary should be built")
}

fn rlci_engine_binary() -> PathBuf {
    assert_cmd::cargo::cargo_bin("rlci-engine")
}

/// A running `rlci-engine` daemon bound to a throwaway socket path, killed
/// on drop.
pub struct Daemon {
    child: Child,
    socket_path: PathBuf,
}

impl Daemon {
    /// Start the daemon with a fresh socket under a temp directory, and
    /// block until the socket file appears (or panic after a short
    /// timeout).
    pub fn start(dir: &tempfile::TempDir) -> Self {
        let socket_path = dir.path().join("rlci-engine.socket");
        let report_path = dir.path().join("report.html");
        let child = Command::new(rlci_engine_binary())
            .env("RLCI_SOCKET_PATH", &socket_path)
            .env("RLCI_REPORT_PATH", &report_path)
            .env("RUST_LOG", "error")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .expect("rlci-engine should start");

        let deadline = Instant::now() + Duration::from_secs(2);
        while !socket_path.exists() {
            if Instant::now() > deadline {
                panic!("daemon did not create its socket in time");
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        Self { child, socket_path }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Run `rlci trigger <name>` against this daemon.
    pub fn trigger(&self, name: &str) -> std::process::Output {
        rlci_cmd()
            .args(["trigger", name])
            .env("RLCI_SOCKET_PATH", &self.socket_path)
            .output()
            .expect("rlci trigger should run")
    }
}

impl Drop for Daemon {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
