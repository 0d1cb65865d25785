// Theme system for the TUI
//
// - TomlTheme: native format with explicit semantic color definitions
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/feed/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::tui::scroll::FocusablePanel;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Feed Colors ─────────────────────────────────────────
    pub accent: Color,
    pub link: Color,
    pub danger: Color,
    pub warning: Color,
    pub applause: Color,

    // ─── Panel Identity Colors ───────────────────────────────
    pub panel_feed: Color,
    pub panel_logs: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!("Theme '{}' not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        if let Some(themes_dir) = Self::themes_dir() {
            for candidate in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", candidate));
                let Ok(contents) = std::fs::read_to_string(&path) else {
                    continue;
                };
                match TomlTheme::from_str(&contents) {
                    Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid theme {}: {}", path.display(), e);
                    }
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("feed").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let name = toml.meta.name.clone();
        let parse = |value: &str| {
            TomlTheme::parse_color(value).unwrap_or_else(|| {
                tracing::warn!(theme = %name, color = value, "Invalid theme color, using terminal default");
                Color::Reset
            })
        };

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: name.clone(),

            status_bar: parse(&toml.ui.status_bar),
            title: parse(&toml.ui.title),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),

            accent: parse(&toml.feed.accent),
            link: parse(&toml.feed.link),
            danger: parse(&toml.feed.danger),
            warning: parse(&toml.feed.warning),
            applause: parse(&toml.feed.applause),

            panel_feed: parse(&toml.panels.feed),
            panel_logs: parse(&toml.panels.logs),

            background,
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),

            muted: toml
                .ui
                .muted
                .as_ref()
                .map(|m| parse(m))
                .unwrap_or_else(|| parse(&toml.ui.border)),

            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(18, 18, 20)
        } else {
            Color::Reset
        };

        Self {
            name: "Ignite Dark (Fallback)".to_string(),

            status_bar: Color::Rgb(141, 141, 153),
            title: Color::Rgb(225, 225, 230),
            border: Color::Rgb(50, 50, 56),
            highlight: Color::Rgb(0, 179, 126),

            accent: Color::Rgb(0, 179, 126),
            link: Color::Rgb(0, 179, 126),
            danger: Color::Rgb(247, 90, 104),
            warning: Color::Rgb(251, 169, 76),
            applause: Color::Rgb(0, 135, 95),

            panel_feed: Color::Rgb(0, 179, 126),
            panel_logs: Color::Rgb(129, 216, 247),

            background,
            foreground: Color::Rgb(196, 196, 204),
            selection: Color::Rgb(41, 41, 46),
            selection_fg: Color::Rgb(225, 225, 230),

            muted: Color::Rgb(141, 141, 153),
            border_type: BorderType::Plain,
        }
    }

    /// Get border color for a panel based on focus state
    pub fn panel_border(&self, panel: FocusablePanel, focused: bool) -> Color {
        if !focused {
            return self.border;
        }
        match panel {
            FocusablePanel::Feed => self.panel_feed,
            FocusablePanel::Logs => self.panel_logs,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes().collect();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Never overwrite user modifications
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_resolves_by_display_name() {
        let theme = Theme::by_name("Ignite Light");
        assert_eq!(theme.name, "Ignite Light");
    }

    #[test]
    fn unknown_theme_falls_back() {
        let theme = Theme::by_name("Does Not Exist");
        assert!(theme.name.contains("Fallback"));
    }

    #[test]
    fn terminal_background_when_disabled() {
        let theme = Theme::by_name_with_config(
            "Ignite Dark",
            &ThemeConfig {
                use_theme_background: false,
            },
        );
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn bundled_themes_are_listed() {
        let themes = Theme::list_available();
        for name in ["Ignite Dark", "Ignite Light", "Terminal ANSI"] {
            assert!(themes.iter().any(|t| t == name), "missing {}", name);
        }
    }

    #[test]
    fn unfocused_panels_use_border_color() {
        let theme = Theme::by_name("Ignite Dark");
        assert_eq!(theme.panel_border(FocusablePanel::Logs, false), theme.border);
        assert_eq!(theme.panel_border(FocusablePanel::Logs, true), theme.panel_logs);
    }
}
