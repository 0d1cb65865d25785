// Views module - screen-level rendering logic
//
// Shell layout, top to bottom:
// - Title bar
// - Feed (content slot, with an optional profile sidebar on wide terminals)
// - Logs panel (toggleable)
// - Status bar
//
// Modals and toasts render on top of everything.

mod feed;
mod modal;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when visible
const LOGS_HEIGHT: u16 = 10;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(8)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    components::render_title(f, chunks[0], app);
    feed::render(f, chunks[1], app);
    if app.show_logs {
        components::render_logs_panel(f, chunks[2], app);
    }
    components::render_status(f, chunks[chunks.len() - 1], app);

    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        if modal::render(f, &modal_state, app) {
            app.modal = Some(modal_state);
        }
    }

    // Toast on top of modal too
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
