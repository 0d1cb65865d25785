//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// - **Text** (`y`): Human-readable format for pasting into chat or docs
/// - **Data** (`Y`): Machine-readable JSON for scripting
///
/// Components that need outside data to build the clipboard payload (the
/// feed panel only stores a cursor) are synced first by App, the same way
/// the logs panel is synced with the log buffer every frame.
pub trait Copyable: Component {
    /// Human-readable text, `None` if nothing is selected
    fn copy_text(&self) -> Option<String>;

    /// Machine-readable data. Default: no structured form.
    fn copy_data(&self) -> Option<String> {
        None
    }

    /// What will be copied (for toast messages)
    fn copy_description(&self) -> String {
        self.id().label().to_string()
    }
}
