//! End-to-end build tests: compile the site into a temp dir through the
//! library API, then smoke-test the binary.

use std::fs;
use std::process::Command;

use chrono::NaiveDate;

use folio::config::SiteConfig;
use folio::content::content;
use folio::sections::SECTION_IDS;
use folio::theme::Theme;
use folio::warn::WarningSink;
use folio::{build, plan};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn build_produces_the_site_tree() {
    let dir = tempfile::tempdir().unwrap();
    let mut warnings = WarningSink::new();

    let report = build(
        content(),
        &SiteConfig::default(),
        Theme::Light,
        dir.path(),
        today(),
        &mut warnings,
    )
    .unwrap();

    assert_eq!(report.written.len(), 3);
    assert!(dir.path().join("dist/index.html").is_file());
    assert!(dir.path().join("dist/assets/site.js").is_file());
    assert!(dir.path().join("dist/assets/styles.css").is_file());
    assert!(warnings.is_empty(), "{:?}", warnings.into_vec());
}

#[test]
fn build_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut warnings = WarningSink::new();
    let config = SiteConfig::default();

    build(content(), &config, Theme::Light, dir.path(), today(), &mut warnings).unwrap();
    let second = build(content(), &config, Theme::Light, dir.path(), today(), &mut warnings).unwrap();

    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 3);
}

#[test]
fn page_carries_every_section_anchor_exactly_once() {
    let mut warnings = WarningSink::new();
    let artifacts = plan(
        content(),
        &SiteConfig::default(),
        Theme::Light,
        today(),
        &mut warnings,
    );
    let markup = &artifacts[0].content;

    for id in SECTION_IDS {
        let needle = format!("<section id=\"{id}\"");
        assert_eq!(markup.matches(&needle).count(), 1, "section {id}");
    }
}

#[test]
fn navigation_anchors_resolve_in_the_markup() {
    let mut warnings = WarningSink::new();
    let artifacts = plan(
        content(),
        &SiteConfig::default(),
        Theme::Light,
        today(),
        &mut warnings,
    );
    let markup = &artifacts[0].content;

    for item in &content().navigation {
        assert!(
            markup.contains(&format!("id=\"{}\"", item.section)),
            "navigation item '{}' must find its section",
            item.id
        );
    }
}

#[test]
fn configured_endpoint_reaches_page_and_script() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        form: folio::config::FormConfig {
            endpoint: "/api/contact".to_string(),
        },
        ..Default::default()
    };
    let mut warnings = WarningSink::new();

    build(content(), &config, Theme::Light, dir.path(), today(), &mut warnings).unwrap();

    let markup = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    let script = fs::read_to_string(dir.path().join("dist/assets/site.js")).unwrap();
    assert!(markup.contains("data-form-endpoint=\"/api/contact\""));
    assert!(script.contains("var ENDPOINT = '/api/contact';"));
}

#[test]
fn binary_builds_into_a_custom_root() {
    let dir = tempfile::tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_folio");

    let output = Command::new(bin)
        .args(["--json", "--root"])
        .arg(dir.path())
        .arg("build")
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.lines().any(|l| l.contains("\"event\":\"build\"")),
        "expected a build event line; got:\n{stdout}"
    );
    assert!(dir.path().join("dist/index.html").is_file());
}

#[test]
fn binary_check_passes_on_store_content() {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(["--json", "check"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"success\":true"), "{stdout}");
}

#[test]
fn binary_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["build", "check", "diff", "watch", "theme"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}
