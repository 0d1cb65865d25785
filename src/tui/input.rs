// Key press gating
//
// Terminals report a held key as a stream of presses. Commands like applaud
// or delete must fire once per physical press, while cursor keys should
// auto-repeat after a short delay.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Re-fire window for one-shot keys on terminals that never send Release
const MISSING_RELEASE_WINDOW: Duration = Duration::from_millis(150);

/// How a key reacts while held down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fires once per press
    Once,
    /// Fires on press, then every `every` once `delay` has passed
    Repeat { delay: Duration, every: Duration },
}

impl KeyBehavior {
    /// Moving the cursor one target at a time
    pub const STEP: Self = Self::Repeat {
        delay: Duration::from_millis(500),
        every: Duration::from_millis(50),
    };

    /// Paging and jumping
    pub const PAGE: Self = Self::Repeat {
        delay: Duration::from_millis(300),
        every: Duration::from_millis(30),
    };
}

/// Feed key bindings. Anything not listed behaves as `Once`.
///
/// Typed characters in compose mode never reach the gate.
const BINDINGS: &[(KeyCode, KeyBehavior)] = &[
    (KeyCode::Up, KeyBehavior::STEP),
    (KeyCode::Down, KeyBehavior::STEP),
    (KeyCode::Char('j'), KeyBehavior::STEP),
    (KeyCode::Char('k'), KeyBehavior::STEP),
    (KeyCode::PageUp, KeyBehavior::PAGE),
    (KeyCode::PageDown, KeyBehavior::PAGE),
    (KeyCode::Home, KeyBehavior::PAGE),
    (KeyCode::End, KeyBehavior::PAGE),
];

/// A key currently held down
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    fired: Instant,
}

/// Decides whether each press of a key should trigger its action
pub struct InputHandler {
    behaviors: HashMap<KeyCode, KeyBehavior>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    /// Gate with no bindings: every key is `Once`
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            held: HashMap::new(),
        }
    }

    /// Gate with the feed's bindings
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        for (key, behavior) in BINDINGS {
            handler.bind(*key, *behavior);
        }
        handler
    }

    pub fn bind(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.behaviors.insert(key, behavior);
    }

    fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once)
    }

    /// Record a press. Returns true if the action should fire.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    /// Forget a held key so its next press fires immediately
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self.behavior(key);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Once => now.duration_since(held.fired) >= MISSING_RELEASE_WINDOW,
            KeyBehavior::Repeat { delay, every } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.fired) >= every
            }
        };

        if fire {
            held.fired = now;
        }
        fire
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn once_fires_per_press() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, t0));
        assert!(!handler.press_at(KeyCode::Enter, t0 + ms(20)));
        assert!(!handler.press_at(KeyCode::Enter, t0 + ms(40)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.press_at(KeyCode::Enter, t0 + ms(60)));
    }

    #[test]
    fn once_refires_without_release_after_window() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('a'), t0));
        assert!(!handler.press_at(KeyCode::Char('a'), t0 + ms(100)));
        assert!(handler.press_at(KeyCode::Char('a'), t0 + ms(200)));
    }

    #[test]
    fn step_keys_repeat_after_delay() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(100)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(510)));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(530)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(570)));
    }

    #[test]
    fn page_keys_repeat_faster_than_step_keys() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::PageDown, t0));
        assert!(handler.press_at(KeyCode::PageDown, t0 + ms(310)));

        assert!(handler.press_at(KeyCode::Char('j'), t0));
        assert!(!handler.press_at(KeyCode::Char('j'), t0 + ms(310)));
    }

    #[test]
    fn applaud_key_triggers_once_per_press() {
        let mut handler = InputHandler::default();

        assert!(handler.handle_key_press(KeyCode::Char('a')));
        assert!(!handler.handle_key_press(KeyCode::Char('a')));

        handler.handle_key_release(KeyCode::Char('a'));
        assert!(handler.handle_key_press(KeyCode::Char('a')));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('a'), t0));
        assert!(handler.press_at(KeyCode::Char('d'), t0 + ms(10)));
        assert!(!handler.press_at(KeyCode::Char('a'), t0 + ms(20)));
    }
}
