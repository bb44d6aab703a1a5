//! End-to-end tests for the `impulse` binary: stdout carries the view,
//! stderr carries plain-text logs from both the library and the binary.

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CATALOG: &str = "\
Site,Type,Model organism,Cell type,Assay format
Oslo,HTS,Human,HeLa,Biochem
";

fn run(dir: &Path, args: &[&str]) -> Output {
    let catalog = dir.join("catalog.csv");
    fs::write(&catalog, CATALOG).unwrap();
    Command::new(env!("CARGO_BIN_EXE_impulse"))
        .arg("--catalog")
        .arg(&catalog)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_binary_logs_are_shown() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["sites"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("screening catalogue loaded"), "{stderr}");
    assert!(stderr.contains("dashboard ready"), "{stderr}");

    let sites: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sites, vec!["Oslo"]);
}

#[test]
fn test_unknown_site_warns() {
    let dir = TempDir::new().unwrap();
    for args in [
        &["overview", "--site", "Nowhere"][..],
        &["graph", "--site", "Nowhere"][..],
    ] {
        let output = run(dir.path(), args);
        assert!(output.status.success(), "{args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("site not present in catalogue"), "{args:?}: {stderr}");
    }
}

#[test]
fn test_redirected_logs_have_no_color_codes() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["sites"]);
    assert!(!output.stderr.contains(&0x1b));
}
