//! Integration test: CLI flags -> sampler -> JSON dump
//!
//! Runs the built binary and checks the numbers it prints.

use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

fn log_dir() -> PathBuf {
    std::env::temp_dir().join(format!("effect_tui_cli_{}", std::process::id()))
}

fn run(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_effect_tui"))
        .arg("--log-dir")
        .arg(log_dir())
        .args(args)
        .output()
        .expect("failed to run effect_tui");

    assert!(
        output.status.success(),
        "effect_tui failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// ndarray serializes as {"v": 1, "dim": [...], "data": [...]}
fn data(array: &Value) -> Vec<f64> {
    array["data"]
        .as_array()
        .expect("array data")
        .iter()
        .map(|v| v.as_f64().expect("number"))
        .collect()
}

#[test]
fn test_dump_line_caps_at_certainty() {
    let sweep = run(&["dump", "line", "--base-effect", "1.0", "--enemy-res", "0"]);

    let hit_rates = data(&sweep["hit_rates"]);
    let probabilities = data(&sweep["probabilities"]);
    assert_eq!(hit_rates.len(), 50);
    assert_eq!(probabilities.len(), 50);
    assert_eq!(hit_rates[49], 1.5);
    assert_eq!(probabilities[49], 1.0);
}

#[test]
fn test_dump_surface_shape() {
    let grid = run(&["dump", "surface", "--base-effect", "0.3", "--max-res", "0.4"]);

    assert_eq!(grid["probabilities"]["dim"], serde_json::json!([50, 50]));
    let probabilities = data(&grid["probabilities"]);
    // row 49, column 0: hit rate 0, resistance 0.4
    assert!((probabilities[49 * 50] - 0.18).abs() < 1e-12);
}

#[test]
fn test_bad_config_fails() {
    let dir = log_dir();
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("bad.toml");
    std::fs::write(&config, "[line]\nsamples = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_effect_tui"))
        .arg("--log-dir")
        .arg(&dir)
        .arg("--config")
        .arg(&config)
        .args(["dump", "line"])
        .output()
        .expect("failed to run effect_tui");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("samples"));
}
