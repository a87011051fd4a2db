//! CLI smoke tests for the employee-server binary
//!
//! These cover help and version output, configuration validation through
//! the `check` subcommand, and a short-lived `run`.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Helper to run the employee-server binary with given arguments
fn run_employee_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_employee-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute employee-server")
}

/// Helper to run the employee-server binary with timeout; the child is killed on timeout
async fn run_employee_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_employee-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

const VALID_CONFIG: &str = r#"
server:
  host: "127.0.0.1"
  port: 0

logging:
  default:
    console_level: info
    file: "logs/employee-server.log"
    file_level: debug
    max_backups: 3
    max_size_mb: 10

modules:
  employees:
    seed_demo_data: true
  api_ingress:
    cors_enabled: false
    request_timeout_sec: 5
"#;

#[test]
fn test_cli_help_command() {
    let output = run_employee_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("employee-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--print-config"), "Should mention print-config");
}

#[test]
fn test_cli_version_command() {
    let output = run_employee_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("employee-server"), "Should contain binary name");
    assert!(stdout.contains("0.1.0"), "Should contain version number");
}

#[test]
fn test_cli_invalid_command() {
    let output = run_employee_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_employee_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file not found"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let output = run_employee_server(&["-c", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config file");
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_employee_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("yaml") || stderr.contains("figment"),
        "Should mention YAML parsing issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "valid.yaml", VALID_CONFIG);

    let output = run_employee_server(&["--config", &config_path, "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration check passed"),
        "Should report successful validation: {}",
        stdout
    );

    // Relative log path resolves next to the config file
    assert!(temp_dir.path().join("logs").exists());
}

#[test]
fn test_cli_check_rejects_unknown_module_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "unknown.yaml",
        "server:\n  host: \"127.0.0.1\"\n  port: 0\nmodules:\n  employees:\n    seed: true\n",
    );

    let output = run_employee_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Unknown module key should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("employees"),
        "Should name the offending module: {}",
        stderr
    );
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "print.yaml", VALID_CONFIG);

    let output =
        run_employee_server(&["--config", &config_path, "--port", "9911", "--print-config"]);

    assert!(output.status.success(), "Print config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9911"), "Should show overridden port: {}", stdout);
    assert!(stdout.contains("seed_demo_data: true"));
}

#[tokio::test]
async fn test_cli_run_command_starts_server() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "run.yaml", VALID_CONFIG);

    let result = run_employee_server_with_timeout(
        &["--config", &config_path, "run"],
        Duration::from_secs(5),
    )
    .await;

    // The server runs until signalled, so a timeout means it started
    match result {
        Err(err) => assert!(
            err.to_string().contains("elapsed"),
            "Server failed to start: {}",
            err
        ),
        Ok(output) => {
            eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
            panic!("Server exited early with {:?}", output.status);
        }
    }
}

#[test]
fn test_cli_run_rejects_unresolvable_host() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "badhost.yaml",
        "server:\n  host: \"not a host name\"\n  port: 0\n",
    );

    let output = run_employee_server(&["--config", &config_path, "run"]);

    assert!(!output.status.success(), "Should fail with invalid bind address");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("address") || stderr.contains("resolved"),
        "Should mention address issue: {}",
        stderr
    );
}

#[test]
fn test_cli_verbose_flag() {
    let output = run_employee_server(&["-vv", "--help"]);

    assert!(output.status.success(), "Verbose help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should still contain usage information");
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_employee_server(&["run", "--help"]);
    assert!(output.status.success(), "Run subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Start the server"));

    let output = run_employee_server(&["check", "--help"]);
    assert!(output.status.success(), "Check subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Check configuration"));
}
