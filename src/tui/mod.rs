// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, timer ticks)
// - Routing keys to the modal, the composer, or the focused panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::feed::{CommentMsg, Feed, PostMsg};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Handled;

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(feed: Feed, log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(feed, log_buffer, &config);
    tracing::info!(
        posts = app.feed.posts().len(),
        theme = %app.theme.name,
        "Feed ready"
    );

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a redraw tick with `tokio::select!`. Each
/// input event is handled to completion before the next frame is drawn.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Redraw tick keeps relative times and toasts fresh
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Compose → Global → Feed actions → Focused panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Compose mode captures typing
    if handle_compose_input(app, &key_event) {
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }

            // Layer 4: Feed actions on the cursor target
            if app.is_focused(scroll::FocusablePanel::Feed) && handle_feed_action(app, key) {
                return;
            }

            // Layer 5: Navigation in the focused panel
            app.dispatch_to_focused(key_event);
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Keys that act on the composer or comment under the cursor
fn handle_feed_action(app: &mut App, key: KeyCode) -> bool {
    use components::feed_panel::FeedTarget;

    match (app.feed_panel.selected(), key) {
        (Some(FeedTarget::Composer { .. }), KeyCode::Enter | KeyCode::Char('i')) => {
            app.begin_compose();
            true
        }
        (Some(FeedTarget::Comment { .. }), KeyCode::Char('a') | KeyCode::Char(' ')) => {
            app.applaud_selected();
            true
        }
        (Some(FeedTarget::Comment { .. }), KeyCode::Char('d') | KeyCode::Delete) => {
            app.delete_selected();
            true
        }
        (Some(FeedTarget::Comment { .. }), KeyCode::Enter) => {
            app.open_selected_detail();
            true
        }
        _ => false,
    }
}

/// Handle typing while a composer is in edit mode - returns true if absorbed
///
/// Characters skip the InputHandler: its debounce would drop repeated
/// letters ("ll" in "Excelente").
fn handle_compose_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.feed_panel.is_editing() {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter if key_event.kind == KeyEventKind::Press => {
            if app.handle_key_press(KeyCode::Enter) {
                app.submit_draft();
            }
        }
        KeyCode::Esc => app.stop_compose(),
        KeyCode::Tab => app.focus_next(),
        _ => {}
    }

    true
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() || app.feed_panel.is_editing() {
        return;
    }

    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    // Synthesize arrow key for trait dispatch
    app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let action = modal.handle_input(key_event.code);
    let target = modal.comment();

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Applaud => {
            if let Some((post, id)) = target {
                app.dispatch(
                    post,
                    PostMsg::Comment {
                        id,
                        msg: CommentMsg::Applaud,
                    },
                );
            }
        }
        ModalAction::Delete => {
            if let Some((post, id)) = target {
                app.modal = None;
                app.dispatch(
                    post,
                    PostMsg::Comment {
                        id,
                        msg: CommentMsg::DeleteRequested,
                    },
                );
            }
        }
        ModalAction::CopyReadable => {
            let text = app.copy_current_readable();
            app.copy_with_toast(text, "Comentário");
        }
        ModalAction::CopyJson => {
            let json = app.copy_current_json();
            app.copy_with_toast(json, "JSON");
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Commands go through the InputHandler so a held key fires once
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::help());
            }
            true
        }
        KeyCode::Char('l') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        // Esc with nothing to clear in the focused panel is a no-op
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                let handled: Handled = app.dispatch_to_focused(*key_event);
                if !handled.was_handled() {
                    tracing::trace!("Esc with nothing to clear");
                }
            }
            true
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                let what = app.copy_description();
                let text = app.copy_current_readable();
                app.copy_with_toast(text, &what);
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                let json = app.copy_current_json();
                app.copy_with_toast(json, "JSON");
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::sample_feed;
    use chrono::Utc;

    fn app() -> App {
        App::new(
            sample_feed(Utc::now()),
            LogBuffer::new(),
            &Config::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        // Terminals without release events get one synthesized here so the
        // debounce never swallows the next press in a test
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release),
        );
    }

    #[test]
    fn typed_q_goes_to_draft_while_composing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.feed_panel.is_editing());

        for c in "qualquer".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_quit);
        assert_eq!(app.feed.posts()[0].draft().text(), "qualquer");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.feed.posts()[0].comment_texts(), vec!["", "qualquer"]);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn repeated_letters_are_not_debounced() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        for c in "Excelente!!".chars() {
            handle_key_event(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.feed.posts()[0].draft().text(), "Excelente!!");
    }

    #[test]
    fn comment_keys_applaud_and_delete() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.feed.posts()[0].comments()[0].likes(), 2);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.feed.posts()[0].comments().is_empty());
    }

    #[test]
    fn modal_absorbs_keys_and_acts_on_its_comment() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_some());

        // 'q' closes the modal instead of quitting
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.feed.posts()[0].comments()[0].likes(), 1);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Delete);
        assert!(app.modal.is_none());
        assert!(app.feed.posts()[0].comments().is_empty());
    }
}
