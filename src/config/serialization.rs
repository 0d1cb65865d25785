//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config file, documenting every option
    pub fn to_toml(&self) -> String {
        let feed_path = match &self.feed_path {
            Some(path) => format!("feed_path = {:?}\n", path.display().to_string()),
            None => "# feed_path = \"~/posts.toml\"\n".to_string(),
        };

        format!(
            r#"# feed configuration

# Theme: Ignite Dark, Ignite Light, Terminal ANSI
# Custom themes: ~/.config/feed/themes/<Name>.toml
theme = {theme:?}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Feed file with [[posts]] entries (built-in sample feed when unset)
{feed_path}
# Show the system logs panel at startup (toggle with 'l')
show_logs = {show_logs}

# Author of comments typed in this session
[identity]
name = {identity_name:?}
avatar_url = {identity_avatar:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level:?}
# File logging (in addition to the TUI log buffer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            feed_path = feed_path,
            show_logs = self.show_logs,
            identity_name = self.identity.name,
            identity_avatar = self.identity.avatar_url,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation,
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
