use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::Style;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory generated images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Palette size reported by analysis
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Style used when a request does not name one
    #[serde(default = "default_style")]
    pub default_style: String,

    /// Write artifacts to a temporary file and rename into place
    #[serde(default)]
    pub atomic_writes: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("static/generated")
}

fn default_max_colors() -> usize {
    5
}

fn default_style() -> String {
    "Aesthetic".to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing path, unreadable file or invalid YAML falls back to the
    /// defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        output_dir = %config.output_dir.display(),
                        max_colors = config.max_colors,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn default_style(&self) -> Style {
        Style::parse(&self.default_style)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_colors: default_max_colors(),
            default_style: default_style(),
            atomic_writes: false,
        }
    }
}
