// TOML theme format parser
//
// Native theme format. Each theme explicitly defines its semantic colors.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub feed: FeedColors,
    pub panels: PanelColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to border)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Colors for posts and comments
#[derive(Debug, Clone, Deserialize)]
pub struct FeedColors {
    /// Brand color: publish button, avatar borders
    pub accent: String,
    pub link: String,
    /// Delete trigger and validation messages
    pub danger: String,
    pub warning: String,
    pub applause: String,
}

/// Panel identity colors (focused border)
#[derive(Debug, Clone, Deserialize)]
pub struct PanelColors {
    pub feed: String,
    pub logs: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a theme color
    ///
    /// Accepts `#RRGGBB`, `#RGB`, and terminal palette colors as
    /// `ansi:0`..`ansi:15` or `ansi:fg` / `ansi:bg` (terminal default).
    pub fn parse_color(value: &str) -> Option<Color> {
        const ANSI: [Color; 16] = [
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
            Color::DarkGray,
            Color::LightRed,
            Color::LightGreen,
            Color::LightYellow,
            Color::LightBlue,
            Color::LightMagenta,
            Color::LightCyan,
            Color::Gray,
        ];

        let value = value.trim();
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "fg" | "bg" => Some(Color::Reset),
                index => index
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| ANSI.get(i).copied()),
            };
        }

        let hex = value.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc == #aabbcc
            3 => {
                let mut rgb = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Color::Rgb(rgb.next()??, rgb.next()??, rgb.next()??))
            }
            _ => None,
        }
    }
}
