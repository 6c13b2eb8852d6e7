use super::*;
use rlci_adapters::{NullProcessRunner, ProcessResponse};
use rlci_core::{EventSink, NoopSink, RecordingSink};

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn acquire_runs_mktemp_and_captures_the_path() {
    let sink: Arc<dyn EventSink> = Arc::new(NoopSink);
    let runner = Arc::new(NullProcessRunner::new(
        Arc::clone(&sink),
        vec![ProcessResponse::new(strings(&["mktemp", "-d"]))
            .with_output(vec!["/tmp/fake-workspace".to_string()])],
    ));

    let workspace = Workspace::acquire(runner).await.unwrap();
    assert_eq!(workspace.path(), Path::new("/tmp/fake-workspace"));
}

#[tokio::test]
async fn acquire_fails_when_mktemp_exits_nonzero() {
    let sink: Arc<dyn EventSink> = Arc::new(NoopSink);
    let runner = Arc::new(NullProcessRunner::new(
        Arc::clone(&sink),
        vec![ProcessResponse::new(strings(&["mktemp", "-d"])).with_returncode(99)],
    ));

    let result = Workspace::acquire(runner).await;
    assert!(matches!(
        result,
        Err(WorkspaceError::CreateFailed { returncode: 99 })
    ));
}

#[tokio::test]
async fn executor_wraps_commands_with_the_cd_shim() {
    let sink = Arc::new(RecordingSink::new());
    let runner = Arc::new(NullProcessRunner::new(
        Arc::clone(&sink) as Arc<dyn EventSink>,
        vec![ProcessResponse::new(strings(&["mktemp", "-d"]))
            .with_output(vec!["/tmp/ws".to_string()])],
    ));

    let workspace = Workspace::acquire(Arc::clone(&runner) as Arc<dyn rlci_adapters::ProcessRunner>)
        .await
        .unwrap();
    let executor = workspace.executor();
    let mut noop = |_: String| {};
    executor.run(&strings(&["echo", "hi"]), &mut noop).await;

    let processes = sink.filter("PROCESS");
    assert_eq!(
        processes[1],
        rlci_core::Event::Process(vec![
            "sh".to_string(),
            "-c".to_string(),
            CD_SHIM_SCRIPT.to_string(),
            "/tmp/ws".to_string(),
            "echo".to_string(),
            "hi".to_string(),
        ])
    );
}

#[tokio::test]
async fn release_runs_rm_rf_on_the_acquired_path() {
    let sink = Arc::new(RecordingSink::new());
    let runner = Arc::new(NullProcessRunner::new(
        Arc::clone(&sink) as Arc<dyn EventSink>,
        vec![ProcessResponse::new(strings(&["mktemp", "-d"]))
            .with_output(vec!["/tmp/ws".to_string()])],
    ));

    let workspace = Workspace::acquire(runner).await.unwrap();
    workspace.release().await;

    assert_eq!(
        sink.filter("PROCESS").last().unwrap(),
        &rlci_core::Event::Process(strings(&["rm", "-rf", "/tmp/ws"]))
    );
}

#[tokio::test]
async fn drop_without_release_removes_the_real_directory() {
    let sink: Arc<dyn EventSink> = Arc::new(NoopSink);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaked-workspace");
    std::fs::create_dir(&path).unwrap();

    let runner = Arc::new(NullProcessRunner::new(
        Arc::clone(&sink),
        vec![ProcessResponse::new(strings(&["mktemp", "-d"]))
            .with_output(vec![path.display().to_string()])],
    ));
    {
        let _workspace = Workspace::acquire(runner).await.unwrap();
        // dropped without calling release()
    }

    assert!(!path.exists());
}
