//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use trk_core::{CivilZone, DEFAULT_TIMEZONE, Timesheet};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the start/stop log.
    pub log_path: PathBuf,
    /// IANA timezone that periods are computed in.
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_path: data_dir.join("log"),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TRK_*)
        figment = figment.merge(Env::prefixed("TRK_"));

        figment.extract()
    }

    /// Builds the timesheet this configuration describes.
    pub fn timesheet(&self) -> Result<Timesheet, trk_core::Error> {
        let zone = CivilZone::new(&self.timezone)?;
        Ok(Timesheet::new(&self.log_path, zone))
    }
}

/// Returns the platform-specific config directory for trk.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("trk"))
}

/// Returns the directory holding the log.
///
/// `~/notes/_data/timetracker`, shared with the scripts that append to it.
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join("notes").join("_data").join("timetracker"))
}
