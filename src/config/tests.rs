//! Configuration tests

use super::logging::LogRotation;
use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into the file layer.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "Ignite Light".to_string();
    config.feed_path = Some(PathBuf::from("/tmp/posts.toml"));
    config.show_logs = true;
    config.identity.name = "Ana \"Dev\" Souza".to_string();
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let restored = Config::resolve(file, no_env);

    assert_eq!(restored.theme, "Ignite Light");
    assert_eq!(restored.feed_path, Some(PathBuf::from("/tmp/posts.toml")));
    assert!(restored.show_logs);
    assert_eq!(restored.identity.name, "Ana \"Dev\" Souza");
    assert_eq!(restored.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Terminal ANSI"
feed_path = "file.toml"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("FEED_THEME", "Ignite Light"),
        ("FEED_LOG_LEVEL", "debug"),
        ("FEED_SHOW_LOGS", "1"),
    ]
    .into_iter()
    .collect();

    let config = Config::resolve(file, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.theme, "Ignite Light");
    assert_eq!(config.feed_path, Some(PathBuf::from("file.toml")));
    assert_eq!(config.logging.level, "debug");
    assert!(config.show_logs);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    let defaults = Config::default();

    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.feed_path, None);
    assert_eq!(config.identity, Identity::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_blank_identity_name_falls_back() {
    let file: FileConfig = toml::from_str("[identity]\nname = \"  \"\n").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.identity.name, Identity::default().name);
}

#[test]
fn test_rotation_parsing() {
    assert_eq!("HOURLY".parse::<LogRotation>(), Ok(LogRotation::Hourly));
    assert!("weekly".parse::<LogRotation>().is_err());
    assert_eq!(LogRotation::Never.to_string(), "never");
}

#[test]
fn test_unusable_logging_values_fall_back() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "LOUD"
file_rotation = "weekly"
file_prefix = " "
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.logging.file_prefix, "feed");
    assert_eq!(config.logging.filter_directive(), "feed=info");
}

#[test]
fn test_env_log_level_is_normalized() {
    let config = Config::resolve(FileConfig::default(), |k| {
        (k == "FEED_LOG_LEVEL").then(|| "WARN".to_string())
    });
    assert_eq!(config.logging.level, "warn");

    let config = Config::resolve(FileConfig::default(), |k| {
        (k == "FEED_LOG_LEVEL").then(|| "nonsense".to_string())
    });
    assert_eq!(config.logging.level, "info");
}
