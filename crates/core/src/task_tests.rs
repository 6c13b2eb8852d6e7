use super::*;

fn ok_work() -> Arc<dyn TaskWork> {
    Arc::new(FnTaskWork::new(|| async { TerminalStatus::Ok }))
}

#[test]
fn terminal_states_are_terminal() {
    assert!(TaskStatus::Ok.is_terminal());
    assert!(TaskStatus::Failed.is_terminal());
    assert!(TaskStatus::Skipped.is_terminal());
    assert!(TaskStatus::Stopped.is_terminal());
}

#[test]
fn non_terminal_states_are_not_terminal() {
    assert!(!TaskStatus::Waiting.is_terminal());
    assert!(!TaskStatus::Ready.is_terminal());
    assert!(!TaskStatus::Running.is_terminal());
}

#[test]
fn terminal_status_converts_to_task_status() {
    assert_eq!(TaskStatus::from(TerminalStatus::Ok), TaskStatus::Ok);
    assert_eq!(TaskStatus::from(TerminalStatus::Failed), TaskStatus::Failed);
}

#[test]
fn builder_accumulates_edges() {
    let spec = TaskSpec::new("t4", ok_work())
        .wait_for(["t2", "t3"])
        .ignore_fail(["t2"])
        .ignore_skip(["t3"]);

    assert_eq!(spec.name, "t4");
    assert!(spec.wait_for.contains("t2"));
    assert!(spec.wait_for.contains("t3"));
    assert!(spec.ignore_fail.contains("t2"));
    assert!(spec.ignore_skip.contains("t3"));
    assert!(!spec.stopped);
}

#[test]
fn stop_marks_administrative_sentinel() {
    let spec = TaskSpec::new("t1", ok_work()).stop();
    assert!(spec.stopped);
}

#[tokio::test]
async fn fn_task_work_runs_the_closure() {
    let work = FnTaskWork::new(|| async { TerminalStatus::Failed });
    assert_eq!(work.run().await, TerminalStatus::Failed);
}
