//! Site configuration
//!
//! `folio.toml` at the project root configures the build; every key has a
//! default and the file itself is optional. Unknown keys are collected as
//! non-fatal warnings and surfaced by the CLI instead of being silently
//! dropped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::theme::Theme;

/// Default config file name, looked up in the project root
pub const CONFIG_FILE: &str = "folio.toml";

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// POST target for contact submissions
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "/".to_string()
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Initial theme when no preference is persisted
    #[serde(default)]
    pub default: Theme,
}

/// Terminal color behavior for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// CLI output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// The whole site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl SiteConfig {
    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);
        let config: SiteConfig = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| FolioError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load `folio.toml` from the project root, or defaults when absent
    pub fn load_or_default(root: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load_with_warnings(&path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }
}
