//! Core component trait - the foundation of the UI system

/// Unique identifier for a component
///
/// Used for focus tracking, copy descriptions and log targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Posts with their composers and comments
    Feed,
    /// System logs panel
    Logs,
}

impl ComponentId {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentId::Feed => "feed",
            ComponentId::Logs => "logs",
        }
    }
}

/// Base trait for all focusable UI components
///
/// Components render through their own `render_*` methods because each
/// needs different borrowed data (the feed, the log entries). This trait
/// only carries identity; capabilities come from the other traits.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;
}
