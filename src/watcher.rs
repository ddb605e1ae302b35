//! Rebuild-on-change loop for the `watch` command
//!
//! Watches the project root for `folio.toml` changes, debounces, rebuilds,
//! and reports through a callback so the CLI can print either human lines
//! or NDJSON. Ctrl+C flips the shared running flag.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::{SiteConfig, CONFIG_FILE};
use crate::content::store::content;
use crate::error::{FolioError, FolioResult};
use crate::site;
use crate::theme::Theme;
use crate::warn::WarningSink;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch events for human or NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        root: String,
    },
    ConfigChanged {
        path: String,
    },
    BuildComplete {
        written: usize,
        unchanged: usize,
        warnings: usize,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Debounce state
struct WatcherState {
    pending: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    fn new() -> Self {
        Self {
            pending: HashSet::new(),
            last_change: None,
        }
    }

    fn add(&mut self, path: PathBuf) {
        self.pending.insert(path);
        self.last_change = Some(Instant::now());
    }

    fn should_build(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        self.pending.drain().collect()
    }
}

/// Watch the project root and rebuild on config changes
pub fn watch(
    root: &Path,
    theme: Theme,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> FolioResult<()> {
    event_callback(WatchEvent::WatchStarted {
        root: root.display().to_string(),
    });

    // Initial build
    rebuild(root, theme, &event_callback);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for path in event.paths {
                    let _ = tx.send(path);
                }
            }
        },
        NotifyConfig::default(),
    )
    .map_err(|e| FolioError::Io(std::io::Error::other(e.to_string())))?;

    watcher
        .watch(root, RecursiveMode::NonRecursive)
        .map_err(|e| FolioError::Io(std::io::Error::other(e.to_string())))?;

    let mut state = WatcherState::new();
    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
            let is_config = path
                .file_name()
                .map(|n| n == CONFIG_FILE)
                .unwrap_or(false);
            if is_config {
                state.add(path);
            }
        }

        if state.should_build() {
            for path in state.take() {
                event_callback(WatchEvent::ConfigChanged {
                    path: path.display().to_string(),
                });
            }
            rebuild(root, theme, &event_callback);
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

fn rebuild(root: &Path, theme: Theme, event_callback: &impl Fn(WatchEvent)) {
    let config = match SiteConfig::load_or_default(root) {
        Ok((config, _)) => config,
        Err(e) => {
            event_callback(WatchEvent::Error {
                message: e.to_string(),
            });
            return;
        }
    };

    let mut warnings = WarningSink::new();
    let today = Local::now().date_naive();
    match site::build(content(), &config, theme, root, today, &mut warnings) {
        Ok(report) => event_callback(WatchEvent::BuildComplete {
            written: report.written.len(),
            unchanged: report.unchanged.len(),
            warnings: warnings.len(),
        }),
        Err(e) => event_callback(WatchEvent::Error {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_waits_for_quiet_period() {
        let mut state = WatcherState::new();
        assert!(!state.should_build());

        state.add(PathBuf::from(CONFIG_FILE));
        assert!(!state.should_build(), "no build inside the debounce window");

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS + 20));
        assert!(state.should_build());

        state.take();
        assert!(!state.should_build());
    }

    #[test]
    fn events_serialize_as_ndjson_lines() {
        let event = WatchEvent::BuildComplete {
            written: 3,
            unchanged: 0,
            warnings: 1,
        };
        assert_eq!(
            event.to_json(),
            "{\"event\":\"build_complete\",\"written\":3,\"unchanged\":0,\"warnings\":1}"
        );
    }
}
