//! Configuration for the feed viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by main)
//! 2. Environment variables
//! 3. Config file (~/.config/feed/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod identity;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use identity::{FileIdentity, Identity};
pub use logging::{normalize_level, FileLogging, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "Ignite Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Ignite Dark", "Ignite Light", "Terminal ANSI"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Feed file to load posts from (None = built-in sample feed)
    pub feed_path: Option<PathBuf>,

    /// Show the system logs panel at startup
    pub show_logs: bool,

    /// Who authors comments typed in this session
    pub identity: Identity,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            feed_path: None,
            show_logs: false,
            identity: Identity::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub feed_path: Option<String>,
    pub show_logs: Option<bool>,

    /// Optional [identity] section
    pub identity: Option<FileIdentity>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/feed/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("feed").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be parsed.
    /// A broken config should fail fast rather than silently fall back.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `feed config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let theme = env("FEED_THEME").or(file.theme).unwrap_or(defaults.theme);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        let feed_path = env("FEED_PATH").or(file.feed_path).map(PathBuf::from);

        let show_logs = env("FEED_SHOW_LOGS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(file.show_logs)
            .unwrap_or(defaults.show_logs);

        let identity = Identity::from_file(file.identity);

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("FEED_LOG_LEVEL") {
            logging.level = normalize_level(&level).unwrap_or(logging.level);
        }

        Self {
            theme,
            use_theme_background,
            feed_path,
            show_logs,
            identity,
            logging,
        }
    }
}
