use super::*;
use rlci_core::RecordingSink;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn spawns_nothing_and_returns_zero_by_default() {
    let sink = Arc::new(RecordingSink::new());
    let runner = NullProcessRunner::empty(sink);
    let mut lines = Vec::new();
    let code = runner
        .run(&strings(&["echo", "hi"]), &mut |l| lines.push(l))
        .await;
    assert_eq!(code, 0);
    assert!(lines.is_empty());
}

#[tokio::test]
async fn emits_the_process_event_even_without_a_match() {
    let sink = Arc::new(RecordingSink::new());
    let runner = NullProcessRunner::empty(Arc::clone(&sink) as Arc<dyn EventSink>);
    let mut noop = |_: String| {};
    runner.run(&strings(&["echo", "hi"]), &mut noop).await;

    assert_eq!(
        sink.events(),
        vec![Event::Process(vec!["echo".to_string(), "hi".to_string()])]
    );
}

#[tokio::test]
async fn returns_configured_response_for_a_matching_command() {
    let sink = Arc::new(RecordingSink::new());
    let runner = NullProcessRunner::new(
        sink,
        vec![ProcessResponse::new(strings(&["./a_program"]))
            .with_output(vec!["fake_one".to_string()])
            .with_returncode(1)],
    );
    let mut lines = Vec::new();
    let code = runner
        .run(&strings(&["./a_program"]), &mut |l| lines.push(l))
        .await;
    assert_eq!(code, 1);
    assert_eq!(lines, vec!["fake_one"]);
}

#[tokio::test]
async fn first_match_is_consumed_so_repeated_calls_pop_in_order() {
    let sink = Arc::new(RecordingSink::new());
    let runner = NullProcessRunner::new(
        sink,
        vec![
            ProcessResponse::new(strings(&["./a_program"]))
                .with_output(vec!["fake_one".to_string()])
                .with_returncode(1),
            ProcessResponse::new(strings(&["./a_program"]))
                .with_output(vec!["fake_two".to_string()])
                .with_returncode(2),
        ],
    );

    let mut first = Vec::new();
    let first_code = runner
        .run(&strings(&["./a_program"]), &mut |l| first.push(l))
        .await;
    assert_eq!(first_code, 1);
    assert_eq!(first, vec!["fake_one"]);

    let mut second = Vec::new();
    let second_code = runner
        .run(&strings(&["./a_program"]), &mut |l| second.push(l))
        .await;
    assert_eq!(second_code, 2);
    assert_eq!(second, vec!["fake_two"]);
}

#[tokio::test]
async fn non_matching_command_falls_back_to_default_and_leaves_responses_intact() {
    let sink = Arc::new(RecordingSink::new());
    let runner = NullProcessRunner::new(
        sink,
        vec![ProcessResponse::new(strings(&["./a_program"])).with_returncode(9)],
    );
    let mut noop = |_: String| {};
    let code = runner.run(&strings(&["other"]), &mut noop).await;
    assert_eq!(code, 0);

    let code = runner.run(&strings(&["./a_program"]), &mut noop).await;
    assert_eq!(code, 9);
}
