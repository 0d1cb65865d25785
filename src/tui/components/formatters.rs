// Text formatters
//
// Shared formatting utilities for displaying feed content in the TUI.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number compactly with K/M suffixes
///
/// # Examples
/// ```ignore
/// assert_eq!(format_compact_number(954356), "954K");
/// assert_eq!(format_compact_number(1_500_000), "1.5M");
/// assert_eq!(format_compact_number(42), "42");
/// ```
pub fn format_compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are split by character. Empty input yields one
/// empty line so callers always have something to render.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

/// Cut `text` to at most `width` display columns, adding "…" when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact_number(42), "42");
        assert_eq!(format_compact_number(954_356), "954K");
        assert_eq!(format_compact_number(1_500_000), "1.5M");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Fala galera, acabei de subir mais um projeto", 16);
        assert_eq!(
            lines,
            vec!["Fala galera,", "acabei de subir", "mais um projeto"]
        );
    }

    #[test]
    fn splits_words_longer_than_width() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn keeps_explicit_line_breaks() {
        assert_eq!(wrap_text("um\ndois", 10), vec!["um", "dois"]);
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("Comentário", 20), "Comentário");
        assert_eq!(truncate_to_width("Comentário", 5), "Come…");
    }
}
