//! CLI subprocess integration tests.
//!
//! These tests invoke the `marquee` binary as a subprocess and verify
//! exit codes, stdout content, and JSON output stability.

use std::process::Command;

fn marquee_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
    cmd.env_remove("MARQUEE_LOG");
    cmd
}

fn write_deck(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("marquee.toml");
    std::fs::write(&path, body).unwrap();
    path
}

const TWO_SLIDES: &str = r#"
deck_version = 1

[carousel]
interval_ms = 1000

[[slides]]
title = "Alpha"
description = "First"
icon = "shield"

[[slides]]
title = "Beta"
description = "Second"
action = { label = "Read", target = "beta-docs" }
"#;

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}"))
}

#[test]
fn cli_version_exits_zero() {
    let output = marquee_bin().arg("--version").output().unwrap();
    assert!(output.status.success(), "marquee --version must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("marquee"),
        "version output must contain 'marquee': {stdout}"
    );
}

#[test]
fn cli_help_lists_commands() {
    let output = marquee_bin().arg("--help").output().unwrap();
    assert!(output.status.success(), "marquee --help must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["play", "run", "simulate", "validate", "inspect", "presets", "new"] {
        assert!(stdout.contains(cmd), "help must mention '{cmd}': {stdout}");
    }
}

#[test]
fn cli_validate_accepts_deck_file() {
    let dir = tempfile::tempdir().unwrap();
    let deck = write_deck(dir.path(), TWO_SLIDES);

    let output = marquee_bin()
        .args(["--json", "validate"])
        .arg(&deck)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["status"], "valid");
    assert_eq!(json["slides"], 2);
    assert_eq!(json["interval_ms"], 1000);
    assert_eq!(json["autoplay"], true);
}

#[test]
fn cli_validate_defaults_to_marquee_toml() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), TWO_SLIDES);

    let output = marquee_bin()
        .arg("validate")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 slide(s)"), "{stdout}");
}

#[test]
fn cli_zero_interval_is_deck_error() {
    let dir = tempfile::tempdir().unwrap();
    let deck = write_deck(
        dir.path(),
        "deck_version = 1\n[carousel]\ninterval_ms = 0\n",
    );

    let output = marquee_bin().arg("validate").arg(&deck).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("deck error:"), "{stderr}");
}

#[test]
fn cli_missing_deck_is_deck_error() {
    let output = marquee_bin()
        .args(["validate", "/tmp/nonexistent_marquee_deck_12345.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_unknown_preset_fails() {
    let output = marquee_bin()
        .args(["validate", "--preset", "nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset 'nope'"), "{stderr}");
}

#[test]
fn cli_presets_json_output_stable() {
    let output = marquee_bin().args(["--json", "presets"]).output().unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    let presets = json.as_array().unwrap();
    let banking = presets
        .iter()
        .find(|p| p["name"] == "banking")
        .expect("banking preset listed");
    assert_eq!(banking["slides"], 4);
}

#[test]
fn cli_inspect_lists_default_action_label() {
    let output = marquee_bin()
        .args(["inspect", "--preset", "banking"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Secure Banking Solutions"), "{stdout}");
    assert!(stdout.contains("Learn More"), "{stdout}");
}

#[test]
fn cli_simulate_json_transcript() {
    let output = marquee_bin()
        .args([
            "--json",
            "simulate",
            "--preset",
            "banking",
            "--script",
            "wait:5000,prev,goto:3,pause,wait:60000",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 6);

    let indices: Vec<u64> = entries
        .iter()
        .map(|e| e["state"]["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, [0, 1, 0, 2, 2, 2]);
    assert_eq!(entries[2]["state"]["direction"], "backward");
    assert_eq!(entries[3]["state"]["direction"], "forward");
    assert_eq!(entries[5]["state"]["playing"], false);
    assert_eq!(entries[5]["at_ms"], 65_000);
}

#[test]
fn cli_simulate_goto_out_of_range_fails() {
    let output = marquee_bin()
        .args(["simulate", "--preset", "banking", "--script", "goto:7"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "{stderr}");
}

#[test]
fn cli_simulate_interval_override() {
    let output = marquee_bin()
        .args([
            "--json",
            "simulate",
            "--preset",
            "banking",
            "--interval-ms",
            "100",
            "--script",
            "wait:250",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json[1]["advances"], 2);
    assert_eq!(json[1]["state"]["index"], 2);
}

#[test]
fn cli_run_stops_after_ticks() {
    let output = marquee_bin()
        .args([
            "--json",
            "run",
            "--preset",
            "banking",
            "--interval-ms",
            "20",
            "--ticks",
            "1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert!(json["advances"].as_u64().unwrap() >= 1);
    assert!(json["final"]["index"].as_u64().unwrap() >= 1);
}

#[test]
fn cli_run_rejects_no_autoplay() {
    let output = marquee_bin()
        .args(["run", "--preset", "banking", "--no-autoplay", "--ticks", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-autoplay"), "{stderr}");
}

#[test]
fn cli_run_rejects_empty_deck() {
    let dir = tempfile::tempdir().unwrap();
    let deck = write_deck(dir.path(), "deck_version = 1\n");

    let output = marquee_bin()
        .args(["run", "--ticks", "1"])
        .arg(&deck)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_new_writes_preset_deck() {
    let dir = tempfile::tempdir().unwrap();

    let output = marquee_bin()
        .args(["new", "--preset", "announcements"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("marquee.toml").exists());

    let again = marquee_bin()
        .args(["new", "--preset", "announcements"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!again.status.success(), "must refuse to overwrite");

    let forced = marquee_bin()
        .args(["new", "--preset", "minimal", "--force"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(forced.status.success());

    let check = marquee_bin()
        .args(["--json", "validate"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(check.status.success());
    assert_eq!(stdout_json(&check)["autoplay"], false);
}

#[test]
fn cli_completions_bash() {
    let output = marquee_bin().args(["completions", "bash"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("marquee"));
}

#[test]
fn cli_man_pages_written() {
    let dir = tempfile::tempdir().unwrap();
    let output = marquee_bin()
        .arg("man-pages")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("marquee.1").exists());
}
