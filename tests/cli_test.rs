//! Integration tests for the `address-server` binary

use std::process::Command;

/// Test that the server binary documents its options
#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_address-server"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Customer address API server"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
    assert!(stdout.contains("--seed"));
}

/// Test that an unreadable seed file stops startup with a clear message
#[test]
fn test_missing_seed_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_address-server"))
        .args(["--seed", "/nonexistent/seed.json", "--port", "65000"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read seed file"),
        "unexpected output: {stderr}"
    );
}

/// Test that an invalid log level in the environment is rejected
#[test]
fn test_invalid_log_level_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_address-server"))
        .env("ADDRESS_LOGGING__LEVEL", "loud")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level"), "unexpected output: {stderr}");
}

/// Test that JSON logs go to stderr, like the pretty ones
#[test]
fn test_json_logs_go_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_address-server"))
        .args(["--seed", "/nonexistent/seed.json", "--port", "65000"])
        .env("ADDRESS_LOGGING__FORMAT", "json")
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.is_empty(), "unexpected stdout: {stdout}");
    assert!(
        stderr.contains(r#""level":"INFO""#) && stderr.contains("Customer address service"),
        "unexpected output: {stderr}"
    );
}
