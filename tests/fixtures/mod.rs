//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chart_themes::presentation::{MemoryStore, PresentationState, RootAttributes};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Duration;
use tempfile::TempDir;

/// In-memory state used by library-level tests.
pub type TestState = PresentationState<MemoryStore, RootAttributes>;

/// Path to the chart-themes binary.
pub fn chart_themes_bin() -> &'static str {
    env!("CARGO_BIN_EXE_chart-themes")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to every command of a test so they share state.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(chart_themes_bin());
    cmd.env("CHART_THEMES_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated config directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command and asserts it succeeded, returning stdout.
pub fn run_ok(args: &[&str], config_dir: &Path) -> String {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {:?} should succeed. stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs a command and parses its stdout as JSON.
pub fn run_json(args: &[&str], config_dir: &Path) -> Value {
    let stdout = run_ok(args, config_dir);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

/// Fresh in-memory presentation state with the default delay.
pub fn memory_state() -> TestState {
    PresentationState::load(
        MemoryStore::new(),
        RootAttributes::new(),
        Duration::from_millis(50),
    )
}

/// Line chart without a color encoding.
pub fn line_chart() -> Value {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": {"values": [{"month": "Jan", "revenue": 12}, {"month": "Feb", "revenue": 18}]},
        "mark": "line",
        "encoding": {
            "x": {"field": "month", "type": "ordinal"},
            "y": {"field": "revenue", "type": "quantitative"}
        }
    })
}

/// Bar chart with a nominal color encoding and no scale.
pub fn nominal_bar_chart() -> Value {
    json!({
        "data": {"values": [{"region": "North", "sales": 4}, {"region": "South", "sales": 7}]},
        "mark": {"type": "bar", "cornerRadius": 2},
        "encoding": {
            "x": {"field": "region", "type": "nominal"},
            "y": {"field": "sales", "type": "quantitative"},
            "color": {"field": "region", "type": "nominal"}
        }
    })
}

/// Writes a chart spec into a temp directory and returns its path.
pub fn write_spec(dir: &TempDir, name: &str, spec: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, spec).expect("Failed to write chart spec");
    path
}
