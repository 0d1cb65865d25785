//! `[logging]` section: filter level and optional JSON log files

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::rolling::Rotation;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single file, appended forever
    Never,
}

impl LogRotation {
    /// Rotation understood by the rolling appender
    pub fn rotation(self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown log rotation '{other}'")),
        }
    }
}

impl fmt::Display for LogRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        })
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON lines to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix ("feed" -> "feed.2026-10-18")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: default_log_dir(),
            file_rotation: LogRotation::Daily,
            file_prefix: "feed".to_string(),
        }
    }
}

/// ~/.local/share/feed/logs, or ./logs when there is no data dir
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("feed").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Lowercased level if it is one tracing knows, else None
pub fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.contains(&level.as_str()).then_some(level)
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill unset or unusable values from defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file
                .level
                .as_deref()
                .and_then(normalize_level)
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.file_rotation),
            file_prefix: file
                .file_prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }

    /// EnvFilter directive used when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("feed={}", self.level)
    }
}
