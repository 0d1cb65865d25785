// Components module - reusable UI building blocks
//
// Shell components are rendered in every frame:
// - Title bar: app name and commenting identity
// - Status bar: uptime, post/comment/applause totals, key hints
// - Logs panel: system log entries (toggleable)
//
// Feed components build the main panel:
// - Post view, composer and comment item render one piece each
// - Feed panel stitches them together and owns the cursor

pub mod avatar;
pub mod comment_item;
pub mod composer;
pub mod feed_panel;
pub mod formatters;
pub mod logs_panel;
pub mod post_view;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use crate::tui::scroll::FocusablePanel;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel using the component owned by App
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let focused = app.is_focused(FocusablePanel::Logs);

    app.logs_panel.sync_entries(&entries, height);
    app.logs_panel
        .render_with_entries(f, area, &entries, &app.theme, focused);
}
