use std::io::Write;
use std::process::{Command, Output, Stdio};

fn mindcare(args: &[&str], stdin: Option<&str>) -> Output {
    let config_dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_mindcare"))
        .args(args)
        .arg("--config")
        .arg(config_dir.path().join("config.json"))
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(input) = stdin {
        child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    }
    drop(child.stdin.take());
    child.wait_with_output().unwrap()
}

#[test]
fn score_prints_severity_and_guidance() {
    let out = mindcare(&["score", "phq9", "3", "3", "2", "2", "1", "1", "1", "1", "1"], None);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("PHQ-9: 15 out of 27"));
    assert!(stdout.contains("Moderately Severe"));
    assert!(stdout.contains("significant symptoms"));
}

#[test]
fn score_json_with_unanswered_preview() {
    let out = mindcare(&["score", "gad7", "--json", "2", "2", "-1", "-1", "-1", "-1", "-1"], None);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["severity"], "Minimal");
    assert_eq!(value["bucket"], "low");
}

#[test]
fn strict_score_rejects_unanswered() {
    let out = mindcare(&["score", "gad7", "--strict", "2", "2", "-1", "0", "0", "0", "0"], None);
    assert!(!out.status.success());
}

#[test]
fn score_rejects_wrong_length() {
    let out = mindcare(&["score", "phq9", "1", "2"], None);
    assert!(!out.status.success());
}

#[test]
fn render_from_stdin_as_json() {
    let out = mindcare(&["render", "--json"], Some("- one\n- two\n\nSome **text**"));
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value[0]["type"], "bullet_list");
    assert_eq!(value[1]["type"], "paragraph");
    assert_eq!(value[1]["runs"][1]["text"], "text");
    assert_eq!(value[1]["runs"][1]["bold"], true);
}

#[test]
fn render_plain_text_when_piped() {
    let out = mindcare(&["render"], Some("1. first\n2) second"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1. first\n2. second\n");
}

#[test]
fn config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_mindcare"))
            .args(args)
            .args(["--config", path])
            .env("RUST_LOG", "off")
            .env_remove("MINDCARE_API_BASE_URL")
            .output()
            .unwrap()
    };

    assert!(run(&["config", "set-base-url", "http://127.0.0.1:9/"]).status.success());
    let out = run(&["config", "show"]);
    assert!(String::from_utf8(out.stdout).unwrap().contains("base_url: http://127.0.0.1:9"));
}

#[test]
fn session_file_sits_beside_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    std::fs::write(&session, r#"{"auth_token":"abc","user_id":"u1"}"#).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_mindcare"))
        .arg("logout")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(out.status.success());

    let remaining: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&session).unwrap()).unwrap();
    assert_eq!(remaining, serde_json::json!({}));
}
