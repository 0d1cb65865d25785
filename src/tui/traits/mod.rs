//! Component trait system for TUI architecture
//!
//! Instead of App knowing how to scroll/select/copy for every panel,
//! components declare their own capabilities through traits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │  (orchestrator: routes keys, applies feed effects)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                     ┌────────┴────────┐
//!                     ▼                 ▼
//!               ┌──────────┐      ┌──────────┐
//!               │   Feed   │      │   Logs   │
//!               │  Panel   │      │  Panel   │
//!               └──────────┘      └──────────┘
//! ```
//!
//! - [`Component`] - Base trait: identity
//! - [`Scrollable`] / [`Selectable`] - Scroll state and cursor movement
//! - [`Copyable`] - Clipboard content for the selected item
//! - [`Interactive`] - Keyboard input for the focused panel

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::{Scrollable, Selectable};
