//! Integration tests for CLI
//!
//! These tests run the built binary in a scratch directory, so no local
//! `citybus.toml` or environment override leaks in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_citybus-cli"));
    command
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CITYBUS_CONFIG")
        .env_remove("CITYBUS_MAPS__API_KEY");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run citybus-cli")
}

fn run(args: &[&str]) -> (TempDir, Output) {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), args, &[]);
    (dir, output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn stops_lists_builtin_network() {
    let (_dir, output) = run(&["stops"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 5);
    assert!(text.contains("Railway Station"));
    assert!(text.contains("MA005"));
}

#[test]
fn suggest_matches_partial_names() {
    let (_dir, output) = run(&["suggest", "rail"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "RWS002  Railway Station");
}

#[test]
fn suggest_blank_query_is_empty() {
    let (_dir, output) = run(&["suggest", "   "]);
    assert!(output.status.success());
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn plan_between_known_stops() {
    let (_dir, output) = run(&[
        "plan",
        "--from",
        "city bus stand",
        "--to",
        "Railway Station",
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("101 City Circle"));
}

#[test]
fn plan_with_unknown_stop_offers_suggestions() {
    let (_dir, output) = run(&["plan", "--from", "Market", "--to", "Railway Station"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("did you mean Market Area?"));
}

#[test]
fn routes_at_late_evening() {
    let (_dir, output) = run(&["routes", "--at", "22:30"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let city_circle = text.lines().find(|l| l.contains("City Circle")).unwrap();
    assert!(city_circle.ends_with("Inactive"));
    let connector = text.lines().find(|l| l.contains("Station Connector")).unwrap();
    assert!(connector.ends_with("Active"));
    assert!(!connector.ends_with("Inactive"));
}

#[test]
fn routes_rejects_bad_time() {
    let (_dir, output) = run(&["routes", "--at", "noon"]);
    assert!(!output.status.success());
}

#[test]
fn buses_show_live_status() {
    let (_dir, output) = run(&["buses"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("Arriving in 3 minutes"));
}

#[test]
fn nearby_without_location_shows_notice() {
    let (_dir, output) = run(&["nearby"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("search manually"));
}

#[test]
fn nearby_with_coordinates() {
    let (_dir, output) = run(&["nearby", "--lat", "23.2599", "--lon", "77.4126"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().next().unwrap().starts_with("City Bus Stand · 0 m"));
}

#[test]
fn map_without_key_reports_failure() {
    let (_dir, output) = run(&["map"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load map: missing API key"));
}

#[test]
fn map_with_key_prints_geojson() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["map", "--no-routes"],
        &[("CITYBUS_MAPS__API_KEY", "pk.test")],
    );
    assert!(output.status.success());

    let geojson: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(geojson["type"], "FeatureCollection");
    assert_eq!(geojson["features"].as_array().unwrap().len(), 9);
}

#[test]
fn config_file_selects_fixture() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tiny.json"),
        r##"{
            "stops": [
                {"id": "A", "name": "Alpha", "code": "A01", "location": {"latitude": 10.0, "longitude": 10.0}},
                {"id": "B", "name": "Beta", "code": "B01", "location": {"latitude": 10.01, "longitude": 10.0}}
            ],
            "routes": [],
            "buses": []
        }"##,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("citybus.toml"),
        "[data]\nfixture_path = \"tiny.json\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["stops"], &[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("A01  Alpha"));
}

#[test]
fn missing_config_file_fails() {
    let (_dir, output) = run(&["--config", "absent.toml", "stops"]);
    assert!(!output.status.success());
}
