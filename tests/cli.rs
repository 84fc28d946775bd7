//! Runs the `folio-showcase` binary against the fixture content.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio-showcase"))
        .args(args)
        .output()
        .expect("failed to run folio-showcase")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn check_lists_fixture_projects() {
    let source = fixtures();
    let output = run(&["--source", source.to_str().unwrap(), "check"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("001 ChurchMS (Web Application, 2025)"));
    assert!(text.contains("002 Faculty Scheduling System"));
    assert!(text.contains("Desktop Application: 1"));
    assert!(text.contains("auto-advance every 8000 ms"));
}

#[test]
fn check_fails_without_catalog() {
    let empty = TempDir::new().unwrap();
    let output = run(&["--source", empty.path().to_str().unwrap(), "check"]);
    assert!(!output.status.success());
}

#[test]
fn render_writes_page_and_state() {
    let source = fixtures();
    let out = TempDir::new().unwrap();
    let output = run(&[
        "--source",
        source.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "render",
        "--featured",
        "2",
        "--filter",
        "Desktop Application",
        "--open",
        "1",
        "--lightbox",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("→ 003/003 TenantHub"));
    assert!(text.contains("Grid [Desktop Application]: 1 projects"));
    assert!(text.contains("Detail: ChurchMS"));

    let page = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(page.contains("Selected Work"));
    assert!(page.contains(r#"<div class="lightbox""#));

    let state = fs::read_to_string(out.path().join("state.json")).unwrap();
    assert!(state.contains(r#""type_filter": "Desktop Application""#));
    assert!(state.contains(r#""selected_project": 1"#));
}

#[test]
fn render_rejects_unknown_filter() {
    let source = fixtures();
    let out = TempDir::new().unwrap();
    let output = run(&[
        "--source",
        source.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "render",
        "--filter",
        "Games",
    ]);
    assert!(!output.status.success());
}

#[test]
fn render_rejects_featured_past_catalog_end() {
    let source = fixtures();
    let out = TempDir::new().unwrap();
    let output = run(&[
        "--source",
        source.to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
        "render",
        "--featured",
        "3",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn play_advances_and_exits() {
    let source = fixtures();
    let output = run(&[
        "--source",
        source.to_str().unwrap(),
        "play",
        "--ticks",
        "2",
        "--interval-ms",
        "5",
    ]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "→ 001/003 ChurchMS",
            "→ 002/003 Faculty Scheduling System",
            "→ 003/003 TenantHub",
        ]
    );
}

#[test]
fn gen_config_prints_stock_config() {
    let output = run(&["gen-config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[carousel]"));
    assert!(text.contains("auto_advance_ms = 10000"));
}
