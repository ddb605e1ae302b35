//! Build pipeline - compose, emit, write
//!
//! `plan` renders every artifact in memory; `build` writes them under the
//! output directory, skipping files whose on-disk content already matches
//! so repeated builds are idempotent and report honestly.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::model::Content;
use crate::error::FolioResult;
use crate::page;
use crate::script;
use crate::sections::SectionState;
use crate::style;
use crate::theme::Theme;
use crate::warn::WarningSink;

/// One output file: path relative to the output directory, plus content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// What happened to each artifact
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// Render every artifact without touching the filesystem
pub fn plan(
    content: &Content,
    config: &SiteConfig,
    theme: Theme,
    today: NaiveDate,
    warnings: &mut WarningSink,
) -> Vec<Artifact> {
    let endpoint = &config.form.endpoint;
    let document = page::compose(
        content,
        &SectionState::default(),
        theme,
        endpoint,
        today,
        warnings,
    );

    if content.personal.resume.as_deref().unwrap_or("").is_empty() {
        warnings.warn("resume", "no resume locator configured, buttons will warn");
    }

    vec![
        Artifact {
            path: PathBuf::from("index.html"),
            content: page::render_document(&document),
        },
        Artifact {
            path: PathBuf::from(page::SCRIPT_PATH),
            content: script::emit(content, endpoint),
        },
        Artifact {
            path: PathBuf::from(page::STYLESHEET_PATH),
            content: style::emit().to_string(),
        },
    ]
}

/// Build the site into `<root>/<output.dir>`
pub fn build(
    content: &Content,
    config: &SiteConfig,
    theme: Theme,
    root: &Path,
    today: NaiveDate,
    warnings: &mut WarningSink,
) -> FolioResult<BuildReport> {
    let artifacts = plan(content, config, theme, today, warnings);
    let out_root = root.join(&config.output.dir);

    let mut report = BuildReport::default();
    for artifact in artifacts {
        let target = out_root.join(&artifact.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let existing = fs::read_to_string(&target).ok();
        if existing.as_deref() == Some(artifact.content.as_str()) {
            report.unchanged.push(artifact.path);
            continue;
        }
        fs::write(&target, &artifact.content)?;
        report.written.push(artifact.path);
    }
    Ok(report)
}

/// Status of one on-disk artifact relative to a fresh render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    New,
    Modified,
    Unchanged,
}

/// Compare a fresh render against what is on disk, writing nothing
pub fn diff(
    content: &Content,
    config: &SiteConfig,
    theme: Theme,
    root: &Path,
    today: NaiveDate,
    warnings: &mut WarningSink,
) -> Vec<(PathBuf, DiffStatus)> {
    let out_root = root.join(&config.output.dir);
    plan(content, config, theme, today, warnings)
        .into_iter()
        .map(|artifact| {
            let target = out_root.join(&artifact.path);
            let status = match fs::read_to_string(&target) {
                Err(_) => DiffStatus::New,
                Ok(existing) if existing == artifact.content => DiffStatus::Unchanged,
                Ok(_) => DiffStatus::Modified,
            };
            (artifact.path, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::content;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn plan_produces_the_three_artifacts() {
        let mut warnings = WarningSink::new();
        let artifacts = plan(
            content(),
            &SiteConfig::default(),
            Theme::Light,
            today(),
            &mut warnings,
        );
        let paths: Vec<_> = artifacts.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("assets/site.js"),
                PathBuf::from("assets/styles.css"),
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn build_writes_then_reports_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::default();
        let mut warnings = WarningSink::new();

        let first = build(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(first.written.len(), 3);
        assert!(first.unchanged.is_empty());

        let second = build(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        )
        .unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 3);
    }

    #[test]
    fn diff_tracks_new_modified_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::default();
        let mut warnings = WarningSink::new();

        let statuses = diff(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        );
        assert!(statuses.iter().all(|(_, s)| *s == DiffStatus::New));

        build(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        )
        .unwrap();
        let statuses = diff(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        );
        assert!(statuses.iter().all(|(_, s)| *s == DiffStatus::Unchanged));

        fs::write(dir.path().join("dist/index.html"), "tampered").unwrap();
        let statuses = diff(
            content(),
            &config,
            Theme::Light,
            dir.path(),
            today(),
            &mut warnings,
        );
        assert_eq!(statuses[0].1, DiffStatus::Modified);
    }

    #[test]
    fn theme_reaches_the_written_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut warnings = WarningSink::new();
        build(
            content(),
            &SiteConfig::default(),
            Theme::Dark,
            dir.path(),
            today(),
            &mut warnings,
        )
        .unwrap();
        let markup = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(markup.contains("data-theme=\"dark\""));
    }
}
