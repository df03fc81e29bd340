//! End-to-end runs of the `shipcost` binary against a temporary data directory

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

/// Run the binary with its config directory redirected into `home`
fn shipcost(home: &Path, data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shipcost"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .output()
        .unwrap()
}

fn workspace() -> (TempDir, TempDir) {
    (tempdir().unwrap(), tempdir().unwrap())
}

#[test]
fn test_best_json_over_samples() {
    let (home, data) = workspace();
    let output = shipcost(home.path(), data.path(), &["best", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["priced"], 3);
    let best: Vec<_> = json["shipments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["outcome"]["vehicle_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(best, ["Van", "Bike", "Truck"]);
}

#[test]
fn test_best_on_one_route() {
    let (home, data) = workspace();
    let output = shipcost(home.path(), data.path(), &["best", "--route", "R003"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Shipment S3 route R003"));
    assert!(!stdout.contains("Shipment S1"));
    assert!(stdout.contains("1 shipments: 1 priced"));
}

#[test]
fn test_bad_number_in_shipments_fails() {
    let (home, data) = workspace();
    assert!(shipcost(home.path(), data.path(), &["init"]).status.success());
    fs::write(
        data.path().join("shipments.csv"),
        "shipmentId,actualKg,lengthCm,widthCm,heightCm,routeId\n\
         S1,heavy,60,40,30,R001\n",
    )
    .unwrap();

    let output = shipcost(home.path(), data.path(), &["best"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("Invalid number"));
    assert!(stderr.contains("actualKg"));
    assert!(stderr.contains("\"heavy\""));
}

#[test]
fn test_quote_capacity_error_exits_nonzero() {
    let (home, data) = workspace();
    let output = shipcost(
        home.path(),
        data.path(),
        &[
            "quote", "--vehicle", "Bike", "--route", "R001", "--weight", "31", "--length", "1",
            "--width", "1", "--height", "1",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Bike cannot carry 31.0 kg (capacity 30.0 kg)."));
}

#[test]
fn test_config_round_trip_through_binary() {
    let (home, data) = workspace();
    let output = shipcost(home.path(), data.path(), &["config", "--set-currency", "$"]);
    assert!(output.status.success());

    let output = shipcost(home.path(), data.path(), &["config", "--show"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Currency:       $"));

    let output = shipcost(
        home.path(),
        data.path(),
        &[
            "quote", "--vehicle", "1", "--route", "R001", "--weight", "14", "--length", "10",
            "--width", "10", "--height", "10",
        ],
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("TOTAL: $5,438.85"));
}
