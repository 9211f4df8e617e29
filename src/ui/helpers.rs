//! Shared rendering utilities.
//!
//! Components write into a frame buffer (`&mut String`) instead of stdout so
//! a whole frame can be inspected in tests and printed in one go. All widths
//! and highlight ranges are in characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
///
/// ```
/// use autocomplete::ui::helpers::position_cursor;
///
/// let mut out = String::new();
/// position_cursor(&mut out, 5, 1);
/// assert_eq!(out, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
///
/// ```
/// use autocomplete::ui::helpers::truncate;
///
/// assert_eq!(truncate("Massachusetts", 6), "Massa…");
/// assert_eq!(truncate("Ohio", 6), "Ohio");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Splits `text` into lines of at most `width` characters, breaking at
/// spaces. A word longer than `width` is cut with [`truncate`].
///
/// ```
/// use autocomplete::ui::helpers::wrap_words;
///
/// assert_eq!(wrap_words("is not available.", 10), vec!["is not", "available."]);
/// ```
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
        if line.chars().count() > width {
            lines.push(truncate(&line, width));
            line.clear();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Spaces needed to pad `text` out to `width` characters.
#[must_use]
pub fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

/// Writes `text` with the given character ranges in match highlight colors.
///
/// When `is_selected` is set the row already carries selection colors and
/// highlighting is skipped. Ranges past the end of `text` are clipped, so a
/// label may be truncated after its ranges were computed.
///
/// `base` is re-applied after each highlighted section.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}
