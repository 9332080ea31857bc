use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::bootstrap::DependencyPolicy;

/// Settings for the vidforge application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Whether a missing tool aborts startup or only warns
    #[serde(default)]
    pub dependency_policy: DependencyPolicy,
    /// Offer to download tools that publish standalone release binaries
    #[serde(default = "default_true")]
    pub auto_download: bool,
    /// Directory for downloaded tools instead of `~/.vidforge/bin`
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,
    /// Use ASCII indicators instead of emoji (for terminal compatibility)
    #[serde(default)]
    pub use_ascii_indicators: bool,
    /// Log level written to the log file, unless RUST_LOG is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default function for serde to use true as default
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dependency_policy: DependencyPolicy::default(),
            auto_download: true,
            bin_dir: None,
            use_ascii_indicators: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        let mut config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.push("vidforge");
        config_dir.push("settings.json");
        config_dir
    }

    /// Load settings from disk, creating default settings if none exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(settings_path: &Path) -> Result<Self> {
        if !settings_path.exists() {
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let file = File::open(settings_path)
            .with_context(|| format!("Failed to open settings file: {:?}", settings_path))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse settings file: {:?}", settings_path))
    }

    /// Save settings using atomic write (write to temp file, then rename).
    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        if let Some(dir) = settings_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create settings directory: {:?}", dir))?;
        }
        let temp_path = settings_path.with_extension("json.tmp");

        let settings_json = serde_json::to_string_pretty(self)?;

        fs::write(&temp_path, &settings_json)
            .with_context(|| format!("Failed to write temp settings file: {:?}", temp_path))?;

        fs::rename(&temp_path, settings_path)
            .with_context(|| format!("Failed to rename temp settings to: {:?}", settings_path))
    }
}
