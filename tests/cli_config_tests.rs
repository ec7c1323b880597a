//! End-to-end tests for `chart-themes config` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_default() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = run_ok(&["config", "show"], temp_dir.path());

    assert!(stdout.contains("Configuration"));
    assert!(stdout.contains("50ms"));
}

#[test]
fn test_config_show_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = run_json(&["config", "show", "--json"], temp_dir.path());

    assert_eq!(config["rerender_delay_ms"], 50);
    assert_eq!(config["log_level"], "info");
    let state_file = config["state_file"].as_str().unwrap();
    assert!(state_file.ends_with("state.toml"));
}

#[test]
fn test_config_set_persists() {
    let temp_dir = TempDir::new().unwrap();
    run_ok(
        &["config", "set", "--rerender-delay-ms", "120", "--log-level", "WARN"],
        temp_dir.path(),
    );

    assert!(temp_dir.path().join("config.toml").exists());
    let config = run_json(&["config", "show", "--json"], temp_dir.path());
    assert_eq!(config["rerender_delay_ms"], 120);
    assert_eq!(config["log_level"], "warn");
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&["config", "set"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_out_of_range_delay() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&["config", "set", "--rerender-delay-ms", "5000"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_unknown_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&["config", "set", "--log-level", "loud"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "[broadcast]\nrerender_delay_ms = 9999\n",
    )
    .unwrap();

    let output = run(&["config", "show"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
}

#[test]
fn test_custom_state_file_location() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("elsewhere").join("presentation.toml");
    std::fs::write(
        temp_dir.path().join("config.toml"),
        format!(
            "[storage]\nstate_file = {:?}\n",
            state_path.to_string_lossy()
        ),
    )
    .unwrap();

    run_ok(&["state", "set-theme", "retro"], temp_dir.path());
    assert!(state_path.exists());
    assert!(!temp_dir.path().join("state.toml").exists());
}
