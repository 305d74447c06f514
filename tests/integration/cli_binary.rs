//! Tests that drive the compiled `reminisce` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn reminisce(workspace: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reminisce"))
        .arg("--workspace")
        .arg(workspace.path())
        .args(args)
        .env("HOME", workspace.path())
        .env("XDG_CONFIG_HOME", workspace.path().join(".config"))
        .env_remove("REMINISCE_ENV")
        .env_remove("REMINISCE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    if let Some(body) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(body.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_questions_from_stdin_keeps_stdout_clean() {
    let workspace = TempDir::new().unwrap();
    let output = reminisce(
        &workspace,
        &["questions", "--input", "-"],
        Some(r#"{"labels": [{"description": "Wedding", "score": 0.97}], "faces": [{}, {}, {}]}"#),
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let questions = value["questions"].as_array().unwrap();
    assert!(questions.len() >= 5 && questions.len() <= 10);
    assert_eq!(questions[1]["question"], "이 결혼식을(를) 계획하게 된 계기가 있었나요?");
}

#[test]
fn test_malformed_input_exits_non_zero() {
    let workspace = TempDir::new().unwrap();
    let output = reminisce(&workspace, &["--quiet", "questions", "-i", "-"], Some("{"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse analysis result"));
    assert!(stderr.contains("`labels` and `faces`"));
}

#[test]
fn test_translate_and_config_show() {
    let workspace = TempDir::new().unwrap();

    let output = reminisce(&workspace, &["--quiet", "translate", "Rainy"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "비오는");

    let output = reminisce(&workspace, &["--quiet", "config", "show"], None);
    assert!(output.status.success());
    let shown: toml::Value = toml::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(shown["translation"]["target_language"].as_str(), Some("ko"));
}

#[test]
fn test_unknown_output_format_is_rejected() {
    let workspace = TempDir::new().unwrap();
    let output = reminisce(
        &workspace,
        &["--quiet", "questions", "-i", "-", "--format", "yaml"],
        Some(r#"{"labels": [], "faces": []}"#),
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
