//! Integration tests for the hashfront-maps binary.
//!
//! Runs the compiled CLI and checks what it prints on stdout.

use std::process::{Command, Output, Stdio};

use hashfront_maps::board::MapDefinition;
use hashfront_maps::maps;

/// Runs the binary with `args`, with logging silenced.
fn run_cli(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_hashfront-maps");
    Command::new(exe)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("HASHFRONT_CONTRACT")
        .env_remove("HASHFRONT_RPC_URL")
        .stdin(Stdio::null())
        .output()
        .expect("failed to start hashfront-maps")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn list_prints_catalog_in_order() {
    let output = run_cli(&["list"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["ridgeline", "archipelago", "ambush", "cliffside", "no_mans_land"]
    );
}

#[test]
fn calldata_for_authored_map() {
    let output = run_cli(&["calldata", "ridgeline"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("0,0x72696467656c696e65,9,20,20,72,4,"));
    assert_eq!(lines[0].split(',').count(), 96);
}

#[test]
fn calldata_json_output() {
    let output = run_cli(&["calldata", "ambush", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "ambush");
    let tokens = value["tokens"].as_array().unwrap();
    assert_eq!(tokens[0], "0");
    assert_eq!(tokens[2], "6");
    assert_eq!(tokens.len(), 128);
}

#[test]
fn unknown_map_fails() {
    let output = run_cli(&["calldata", "atlantis"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown map 'atlantis'"), "stderr: {stderr}");
}

#[test]
fn export_then_encode_from_file() {
    let output = run_cli(&["export", "cliffside"]);
    assert!(output.status.success());
    let map: MapDefinition = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(map, maps::find("cliffside").unwrap().build().unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cliffside.json");
    std::fs::write(&path, &output.stdout).unwrap();

    let from_file = run_cli(&["calldata", "--map-file", path.to_str().unwrap()]);
    let by_name = run_cli(&["calldata", "cliffside"]);
    assert!(from_file.status.success());
    assert_eq!(from_file.stdout, by_name.stdout);
}

#[test]
fn invalid_map_file_is_rejected() {
    let mut map = maps::find("ridgeline").unwrap().build().unwrap();
    map.units.truncate(13);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, serde_json::to_vec(&map).unwrap()).unwrap();

    let output = run_cli(&["calldata", "--map-file", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("player 2 has 6 units"), "stderr: {stderr}");
}

#[test]
fn preview_shows_headquarters_and_units() {
    let output = run_cli(&["preview", "no_mans_land"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "  no_mans_land"));
    // Row 0: player one's headquarters between two of its infantry.
    let row0 = lines.iter().find(|l| l.starts_with(" 0 ")).unwrap();
    let cells: Vec<&str> = row0[3..].split(' ').collect();
    assert_eq!(&cells[9..12], &["I", "1", "I"]);
    assert!(lines.iter().any(|l| l == "  Non-grass tiles: 79, Units: 14"));
}

#[test]
fn register_dry_run_submits_nothing() {
    let output = run_cli(&["register", "--dry-run", "ridgeline", "ambush"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l == "  ridgeline"));
    assert!(lines.iter().any(|l| l == "  ambush"));
    assert!(!lines.iter().any(|l| l == "  cliffside"));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("[dry-run] No maps registered. Remove --dry-run to submit.")
    );
}

#[test]
fn register_fails_when_controller_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submit.json");
    std::fs::write(
        &path,
        r#"{ "controller": "hashfront-no-such-controller-binary" }"#,
    )
    .unwrap();

    let output = run_cli(&["register", "ridgeline", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to register"), "stderr: {stderr}");
}
