//! Folio CLI - command definitions and dispatch
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   build   Compile the site into the output directory
//!   check   Validate content without writing
//!   diff    Compare a fresh render against the output directory
//!   watch   Rebuild when folio.toml changes
//!   theme   Show or toggle the persisted theme preference

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::check::{self, CheckStatus};
use crate::config::{ConfigWarning, SiteConfig};
use crate::content::store::content;
use crate::site::{self, DiffStatus};
use crate::theme::{FilePreferenceStore, Theme, ThemeController, THEME_KEY};
use crate::ui::{ColoredText, OutputContext};
use crate::warn::WarningSink;
use crate::watcher::{self, WatchEvent};

/// Folio - portfolio site compiler
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NDJSON event output for CI
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Project root containing folio.toml
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the site into the output directory
    Build,

    /// Validate content invariants without writing
    Check,

    /// Compare a fresh render against what is on disk
    Diff,

    /// Rebuild when folio.toml changes
    Watch,

    /// Show or toggle the persisted theme preference
    Theme {
        /// Flip the persisted theme
        #[arg(long)]
        toggle: bool,
    },
}

/// Parse arguments and run the selected command
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let (config, config_warnings) = SiteConfig::load_or_default(&cli.root)?;
    let out = OutputContext::detect(config.ui.color, cli.no_color);

    print_config_warnings(&config_warnings, &out, cli.json);

    match cli.command {
        Commands::Build => cmd_build(&cli, &config, &out),
        Commands::Check => Ok(cmd_check(&cli, &out)),
        Commands::Diff => cmd_diff(&cli, &config, &out),
        Commands::Watch => cmd_watch(&cli, &config),
        Commands::Theme { toggle } => cmd_theme(&cli, &config, &out, toggle),
    }
}

/// Persisted preference when the store is reachable, configured default
/// otherwise - mirroring the page script's storage-denied fallback
fn initial_theme(config: &SiteConfig) -> Theme {
    match FilePreferenceStore::open_default() {
        Ok(store) => ThemeController::init(store, config.theme.default).current(),
        Err(_) => config.theme.default,
    }
}

fn print_config_warnings(warnings: &[ConfigWarning], out: &OutputContext, json: bool) {
    for warning in warnings {
        if json {
            let line = serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
            });
            println!("{line}");
        } else {
            println!(
                "{} unknown config key '{}' in {}",
                ColoredText::warning(out.warning_glyph()).render(out.color),
                warning.key,
                warning.file.display()
            );
        }
    }
}

fn print_render_warnings(warnings: &WarningSink, out: &OutputContext, json: bool) {
    for warning in warnings.iter() {
        if json {
            let line = serde_json::json!({
                "event": "warning",
                "context": warning.context,
                "message": warning.message,
            });
            println!("{line}");
        } else {
            println!(
                "{} {}: {}",
                ColoredText::warning(out.warning_glyph()).render(out.color),
                warning.context,
                warning.message
            );
        }
    }
}

fn cmd_build(cli: &Cli, config: &SiteConfig, out: &OutputContext) -> Result<i32> {
    let theme = initial_theme(config);
    let mut warnings = WarningSink::new();
    let today = Local::now().date_naive();

    let report = site::build(content(), config, theme, &cli.root, today, &mut warnings)?;

    if cli.json {
        let line = serde_json::json!({
            "event": "build",
            "written": report.written.len(),
            "unchanged": report.unchanged.len(),
            "warnings": warnings.len(),
        });
        println!("{line}");
    } else {
        println!(
            "{}",
            ColoredText::info("Folio Build").bold().render(out.color)
        );
        for path in &report.written {
            println!(
                "  {} {}",
                ColoredText::success(out.success_glyph()).render(out.color),
                path.display()
            );
        }
        for path in &report.unchanged {
            println!(
                "  {} {} (unchanged)",
                ColoredText::dim("-").render(out.color),
                path.display()
            );
        }
        println!(
            "\n{} written, {} unchanged",
            report.written.len(),
            report.unchanged.len()
        );
    }
    print_render_warnings(&warnings, out, cli.json);
    Ok(0)
}

fn cmd_check(cli: &Cli, out: &OutputContext) -> i32 {
    let report = check::run(content());

    if cli.json {
        let line = serde_json::json!({
            "event": "check",
            "passes": report.passes(),
            "warnings": report.warnings(),
            "errors": report.errors(),
            "success": report.is_success(),
        });
        println!("{line}");
    } else {
        println!(
            "{}",
            ColoredText::info("Folio Check").bold().render(out.color)
        );
        let mut current_area = "";
        for item in &report.items {
            if item.area != current_area {
                println!("\n{}", ColoredText::dim(item.area).render(out.color));
                current_area = item.area;
            }
            let glyph = match item.status {
                CheckStatus::Pass => ColoredText::success(out.success_glyph()),
                CheckStatus::Warning => ColoredText::warning(out.warning_glyph()),
                CheckStatus::Error => ColoredText::error(out.error_glyph()),
            };
            println!("  {} {}", glyph.render(out.color), item.message);
        }
        println!(
            "\nSummary: {} passed, {} warnings, {} errors",
            report.passes(),
            report.warnings(),
            report.errors()
        );
    }

    if report.is_success() {
        0
    } else {
        1
    }
}

fn cmd_diff(cli: &Cli, config: &SiteConfig, out: &OutputContext) -> Result<i32> {
    let theme = initial_theme(config);
    let mut warnings = WarningSink::new();
    let today = Local::now().date_naive();

    let statuses = site::diff(content(), config, theme, &cli.root, today, &mut warnings);
    let count = |status: DiffStatus| statuses.iter().filter(|(_, s)| *s == status).count();

    if cli.json {
        let line = serde_json::json!({
            "event": "diff",
            "new": count(DiffStatus::New),
            "modified": count(DiffStatus::Modified),
            "unchanged": count(DiffStatus::Unchanged),
        });
        println!("{line}");
    } else {
        println!("{}", ColoredText::info("Folio Diff").bold().render(out.color));
        for (path, status) in &statuses {
            let marker = match status {
                DiffStatus::New => ColoredText::success("+"),
                DiffStatus::Modified => ColoredText::warning("~"),
                DiffStatus::Unchanged => ColoredText::dim("="),
            };
            println!("  {} {}", marker.render(out.color), path.display());
        }
        println!(
            "\nSummary: {} new, {} modified, {} unchanged",
            count(DiffStatus::New),
            count(DiffStatus::Modified),
            count(DiffStatus::Unchanged)
        );
    }
    Ok(0)
}

fn cmd_watch(cli: &Cli, config: &SiteConfig) -> Result<i32> {
    let theme = initial_theme(config);
    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = running.clone();
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })?;

    let json = cli.json;
    if !json {
        println!("Folio Watch - press Ctrl+C to stop");
    }

    watcher::watch(&cli.root, theme, running, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            match event {
                WatchEvent::WatchStarted { root } => println!("watching {root}"),
                WatchEvent::ConfigChanged { path } => println!("changed: {path}"),
                WatchEvent::BuildComplete {
                    written,
                    unchanged,
                    warnings,
                } => {
                    if warnings > 0 {
                        println!("built: {written} written, {unchanged} unchanged, {warnings} warnings");
                    } else {
                        println!("built: {written} written, {unchanged} unchanged");
                    }
                }
                WatchEvent::Error { message } => eprintln!("error: {message}"),
                WatchEvent::Shutdown => println!("shutting down"),
            }
        }
    })?;
    Ok(0)
}

fn cmd_theme(cli: &Cli, config: &SiteConfig, out: &OutputContext, toggle: bool) -> Result<i32> {
    let store = FilePreferenceStore::open_default()?;
    let mut controller = ThemeController::init(store, config.theme.default);

    let theme = if toggle {
        controller.toggle()?
    } else {
        controller.current()
    };

    if cli.json {
        let line = serde_json::json!({
            "event": "theme",
            "key": THEME_KEY,
            "theme": theme.as_str(),
            "toggled": toggle,
        });
        println!("{line}");
    } else if toggle {
        println!(
            "{} theme is now {theme}",
            ColoredText::success(out.success_glyph()).render(out.color)
        );
    } else {
        println!("theme: {theme}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_build() {
        let cli = Cli::try_parse_from(["folio", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build));
    }

    #[test]
    fn cli_parses_check_with_json() {
        let cli = Cli::try_parse_from(["folio", "--json", "check"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn cli_parses_root_override() {
        let cli = Cli::try_parse_from(["folio", "--root", "site", "diff"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("site"));
    }

    #[test]
    fn cli_parses_theme_toggle() {
        let cli = Cli::try_parse_from(["folio", "theme", "--toggle"]).unwrap();
        if let Commands::Theme { toggle } = cli.command {
            assert!(toggle);
        } else {
            panic!("expected Theme command");
        }
    }

    #[test]
    fn cli_parses_watch() {
        let cli = Cli::try_parse_from(["folio", "watch"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch));
    }

    #[test]
    fn cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["folio", "deploy"]).is_err());
    }
}
