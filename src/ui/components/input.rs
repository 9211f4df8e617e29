//! Title line and bordered input box of one search column.

use crate::ui::helpers::{padding, position_cursor, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxView;

/// Renders the box title in header colors, bold when the box is focused.
pub fn render_title(out: &mut String, rect: Rect, view: &SearchBoxView, theme: &Theme) {
    let title = truncate(&view.title, rect.width);

    position_cursor(out, rect.row, rect.col);
    if view.is_focused {
        out.push_str(Theme::bold());
    }
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&title);
    out.push_str(&padding(&title, rect.width));
    out.push_str(Theme::reset());
}

/// Renders the three-row input box.
///
/// ```text
/// ┌──────────────────────┐
/// │ query or placeholder │
/// └──────────────────────┘
/// ```
///
/// The border uses `focus_border` for the focused box. An empty query shows
/// the placeholder in dim italics.
pub fn render_input(out: &mut String, rect: Rect, view: &SearchBoxView, theme: &Theme) {
    let inner_width = rect.width.saturating_sub(2);
    let border = if view.is_focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.border
    };

    position_cursor(out, rect.row, rect.col);
    out.push_str(&Theme::fg(border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    // one space of left padding inside the border
    let text_width = inner_width.saturating_sub(1);
    let (text, style) = if view.query.is_empty() {
        (
            truncate(&view.placeholder, text_width),
            format!("{}{}", Theme::italic(), Theme::fg(&theme.colors.text_dim)),
        )
    } else {
        (
            truncate(&view.query, text_width),
            Theme::fg(&theme.colors.text_normal),
        )
    };

    position_cursor(out, rect.row + 1, rect.col);
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(Theme::reset());
    out.push_str(&style);
    out.push(' ');
    out.push_str(&text);
    out.push_str(&padding(&text, text_width));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, rect.row + 2, rect.col);
    out.push_str(&Theme::fg(border));
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::PanelView;

    fn view(query: &str, is_focused: bool) -> SearchBoxView {
        SearchBoxView {
            title: "Auto Search using Dummy Data".to_string(),
            query: query.to_string(),
            placeholder: "Search US states here ...".to_string(),
            is_focused,
            panel: PanelView::Hidden,
        }
    }

    const RECT: Rect = Rect { row: 6, col: 42, height: 3, width: 39 };

    #[test]
    fn placeholder_shown_for_empty_query() {
        let mut out = String::new();
        render_input(&mut out, RECT, &view("", false), &Theme::default());
        assert!(out.contains("Search US states here ..."));
        assert!(out.contains("\u{1b}[6;42H"));
        assert!(out.contains("\u{1b}[8;42H"));
    }

    #[test]
    fn query_replaces_placeholder() {
        let mut out = String::new();
        render_input(&mut out, RECT, &view("Ala", false), &Theme::default());
        assert!(out.contains(" Ala"));
        assert!(!out.contains("Search US states"));
    }

    #[test]
    fn focused_box_uses_focus_border() {
        let theme = Theme::default();
        let mut focused = String::new();
        render_input(&mut focused, RECT, &view("", true), &theme);
        assert!(focused.contains(&Theme::fg(&theme.colors.focus_border)));

        let mut unfocused = String::new();
        render_input(&mut unfocused, RECT, &view("", false), &theme);
        assert!(!unfocused.contains(&Theme::fg(&theme.colors.focus_border)));
    }

    #[test]
    fn long_query_is_cut_to_box() {
        let mut out = String::new();
        let narrow = Rect { width: 8, ..RECT };
        render_input(&mut out, narrow, &view("Massachusetts", false), &Theme::default());
        assert!(out.contains("Mass…"));
    }
}
