//! Logs panel component
//!
//! Displays system log entries captured by `TuiLogLayer`, with color-coded
//! severity, auto-follow, and selection for copy.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::{FocusablePanel, ScrollMove, ScrollState};
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, Scrollable, ScrollableInteractive,
    Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Logs panel component
pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    selected: Option<usize>,

    /// Cached entry count (for bounds checking)
    entry_count: usize,

    /// Formatted selected entry, refreshed on sync
    selected_text: Option<String>,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entry_count: 0,
            selected_text: None,
        }
    }

    /// Sync with current log entries (call each frame and before copy)
    ///
    /// The LogBuffer is shared with the logging system, so the panel only
    /// keeps counts and the selected line.
    pub fn sync_entries(&mut self, entries: &[LogEntry], viewport_height: usize) {
        self.entry_count = entries.len();
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.selected_text = self
            .selected
            .and_then(|idx| entries.get(idx))
            .map(copied_log_entry);
    }

    pub fn render_with_entries(
        &self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        theme: &Theme,
        focused: bool,
    ) {
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(idx, entry)| {
                let style = if focused && self.selected == Some(idx) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(&entry.level, theme)
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(
                    Style::default().fg(theme.panel_border(FocusablePanel::Logs, focused)),
                )
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, theme);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.entry_count.saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.entry_count
    }

    /// Selection starts from the most recent entry and drags the view along
    fn step(&mut self, delta: isize) {
        let Some(last) = self.entry_count.checked_sub(1) else {
            return;
        };
        let Some(current) = self.selected else {
            self.selected = Some(last);
            return;
        };

        let target = current.saturating_add_signed(delta).min(last);
        if target != current {
            self.selected = Some(target);
            self.scroll.apply(if target < current {
                ScrollMove::LineUp
            } else {
                ScrollMove::LineDown
            });
        }
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_text.clone()
    }

    fn copy_description(&self) -> String {
        "entrada de log".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(-1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(1);
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll(ScrollMove::Top);
                self.select_first();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll(ScrollMove::Bottom);
                self.select_last();
                Handled::Yes
            }
            KeyCode::Esc => {
                // Clear selection if any, return to auto-follow
                if self.selected.is_some() {
                    self.selected = None;
                    self.selected_text = None;
                    self.scroll.auto_follow = true;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => self.handle_scroll_keys(key),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:selecionar  y:copiar  Esc:limpar")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Copied text also names the module that logged the entry
fn copied_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.danger)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                target: "feed".to_string(),
                message: format!("entry {}", i),
            })
            .collect()
    }

    #[test]
    fn first_selection_starts_at_most_recent() {
        let logs = entries(5);
        let mut panel = LogsPanel::new();
        panel.sync_entries(&logs, 3);

        panel.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        panel.sync_entries(&logs, 3);

        assert_eq!(panel.selected_index(), Some(4));
        assert!(panel.copy_text().unwrap().ends_with("feed: entry 4"));
    }

    #[test]
    fn esc_clears_selection_then_bubbles() {
        let logs = entries(2);
        let mut panel = LogsPanel::new();
        panel.sync_entries(&logs, 5);
        panel.select(0);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(panel.handle_key(esc), Handled::Yes);
        assert_eq!(panel.handle_key(esc), Handled::No);
        assert!(panel.copy_text().is_none());
    }
}
