//! `rlci` argument-handling specs that don't require a running daemon.

use crate::prelude::rlci_cmd;

#[test]
fn trigger_with_no_pipeline_name_shows_usage_and_exits_1() {
    rlci_cmd()
        .args(["trigger"])
        .assert()
        .code(1)
        .stdout("Usage: rlci trigger <pipeline>\n");
}

#[test]
fn no_arguments_shows_usage_and_exits_1() {
    rlci_cmd().assert().code(1).stdout("Usage: rlci trigger\n");
}

#[test]
fn unrecognized_subcommand_shows_usage_and_exits_1() {
    rlci_cmd()
        .args(["bogus"])
        .assert()
        .code(1)
        .stdout("Usage: rlci trigger\n");
}

#[test]
fn unreachable_daemon_exits_1() {
    let output = rlci_cmd()
        .args(["trigger", "demo"])
        .env(
            "RLCI_SOCKET_PATH",
            "/tmp/definitely-not-a-running-rlci-engine.socket",
        )
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
