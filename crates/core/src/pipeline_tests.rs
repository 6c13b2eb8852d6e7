use super::*;

#[test]
fn literal_token_round_trips_through_json() {
    let token = Token::literal("echo");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, "\"echo\"");
    let back: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(back, token);
}

#[test]
fn variable_token_round_trips_through_json() {
    let token = Token::variable("p");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"variable":"p"}"#);
    let back: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(back, token);
}

#[test]
fn step_without_variable_skips_the_field_on_serialize() {
    let step = Step::new(vec![Token::literal("echo"), Token::literal("hi")]);
    let json = serde_json::to_string(&step).unwrap();
    assert!(!json.contains("variable"));
}

#[test]
fn step_capturing_sets_the_variable_field() {
    let step = Step::new(vec![Token::literal("cat"), Token::literal("path.txt")])
        .capturing("p");
    assert_eq!(step.variable.as_deref(), Some("p"));
}

#[test]
fn pipeline_round_trips_structural_equality() {
    let pipeline = Pipeline::new(
        "X",
        vec![
            Step::new(vec![Token::literal("echo"), Token::literal("hi")]),
            Step::new(vec![Token::literal("echo"), Token::literal("bye")]),
        ],
    );
    let json = serde_json::to_string(&pipeline).unwrap();
    let back: Pipeline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pipeline);
}

#[test]
fn stage_command_starts_without_a_returncode() {
    let cmd = StageCommand::new(vec!["echo".to_string(), "hi".to_string()]);
    assert_eq!(cmd.returncode, None);
    assert!(cmd.output.is_empty());
}
