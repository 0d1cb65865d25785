//! Avatar badge
//!
//! Terminals can't show the avatar image, so authors get an initials badge.
//! Post authors get the bordered variant in the accent color; commenters get
//! the borderless one.

use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// An initials badge for one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    initials: String,
    has_border: bool,
}

impl Avatar {
    /// Bordered avatar (post authors)
    pub fn new(name: &str) -> Self {
        Self {
            initials: initials(name),
            has_border: true,
        }
    }

    /// Borderless avatar (commenters)
    pub fn borderless(name: &str) -> Self {
        Self {
            has_border: false,
            ..Self::new(name)
        }
    }

    #[cfg(test)]
    pub fn has_border(&self) -> bool {
        self.has_border
    }

    #[cfg(test)]
    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Fixed-width label so text after it lines up: "[AB]" or " AB "
    pub fn label(&self) -> String {
        if self.has_border {
            format!("[{:<2}]", self.initials)
        } else {
            format!(" {:<2} ", self.initials)
        }
    }

    pub fn span(&self, theme: &Theme) -> Span<'static> {
        let style = if self.has_border {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.title)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(self.label(), style)
    }
}

/// Up to two uppercase initials: first and last word of the name
fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    let initials: String = first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_first_and_last_name() {
        assert_eq!(Avatar::new("Marina Alves").initials(), "MA");
        assert_eq!(Avatar::new("ana maria de souza").initials(), "AS");
        assert_eq!(Avatar::new("Caio").initials(), "C");
        assert_eq!(Avatar::new("   ").initials(), "?");
    }

    #[test]
    fn border_variants() {
        assert!(Avatar::new("Marina Alves").has_border());
        assert!(!Avatar::borderless("Marina Alves").has_border());
        assert_eq!(Avatar::new("Marina Alves").label(), "[MA]");
        assert_eq!(Avatar::borderless("Caio").label(), " C  ");
    }
}
