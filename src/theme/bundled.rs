//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/feed/themes/ on first run.
//! Users can then modify them freely.

/// A theme shipped inside the binary
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Ignite_Dark.toml",
        content: IGNITE_DARK,
    },
    BundledTheme {
        filename: "Ignite_Light.toml",
        content: IGNITE_LIGHT,
    },
    BundledTheme {
        filename: "Terminal_ANSI.toml",
        content: TERMINAL_ANSI,
    },
];

/// Display names of all bundled themes
pub fn list_bundled_themes() -> impl Iterator<Item = String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
}

/// Dark grays with the green brand accent
pub const IGNITE_DARK: &str = r##"# Ignite Dark theme for feed

[meta]
name = "Ignite Dark"
version = 1

[ui]
background = "#121214"
foreground = "#c4c4cc"
border = "#323238"
border_focused = "#00b37e"
title = "#e1e1e6"
status_bar = "#8d8d99"
selection_bg = "#29292e"
selection_fg = "#e1e1e6"
muted = "#8d8d99"
border_type = "rounded"

[feed]
accent = "#00b37e"
link = "#00b37e"
danger = "#f75a68"
warning = "#fba94c"
applause = "#00875f"

[panels]
feed = "#00b37e"
logs = "#81d8f7"
"##;

pub const IGNITE_LIGHT: &str = r##"# Ignite Light theme for feed

[meta]
name = "Ignite Light"
version = 1

[ui]
background = "#f4f4f5"
foreground = "#29292e"
border = "#a8a8b3"
border_focused = "#00875f"
title = "#121214"
status_bar = "#505059"
selection_bg = "#d9d9de"
selection_fg = "#121214"
muted = "#737380"
border_type = "rounded"

[feed]
accent = "#00875f"
link = "#00875f"
danger = "#cc2937"
warning = "#b35f00"
applause = "#015f43"

[panels]
feed = "#00875f"
logs = "#1d6fa5"
"##;

/// Inherits the terminal's own palette
pub const TERMINAL_ANSI: &str = r##"# Terminal ANSI theme for feed

[meta]
name = "Terminal ANSI"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:2"
title = "ansi:15"
status_bar = "ansi:7"
selection_bg = "ansi:8"
selection_fg = "ansi:15"
muted = "ansi:8"

[feed]
accent = "ansi:2"
link = "ansi:10"
danger = "ansi:1"
warning = "ansi:3"
applause = "ansi:2"

[panels]
feed = "ansi:2"
logs = "ansi:6"
"##;
