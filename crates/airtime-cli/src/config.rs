//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the timetable JSON file.
    pub timetable_path: PathBuf,

    /// Live display refresh interval in milliseconds.
    pub tick_ms: u64,

    /// Additive clock offset in milliseconds, applied to every `now` before
    /// it reaches the schedule engine. For rehearsing the live view.
    pub clock_offset_ms: i64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("timetable_path", &self.timetable_path)
            .field("tick_ms", &self.tick_ms)
            .field("clock_offset_ms", &self.clock_offset_ms)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            timetable_path: data_dir.join("timetable.json"),
            tick_ms: 1000,
            clock_offset_ms: 0,
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

        // Load from environment variables (AIRTIME_*)
        figment = figment.merge(Env::prefixed("AIRTIME_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for airtime.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("airtime"))
}

/// Returns the platform-specific data directory for airtime.
///
/// On Linux: `~/.local/share/airtime`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("airtime"))
}
