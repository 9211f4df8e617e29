//! Options panel below an input.
//!
//! The view model already holds only the rows that fit, so this component
//! draws them top-down from the panel's first row.

use crate::ui::helpers::{self, padding, position_cursor, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OptionItem, PanelView};

/// Renders the panel content into `rect`. Hidden panels draw nothing.
pub fn render_panel(out: &mut String, rect: Rect, panel: &PanelView, theme: &Theme) {
    match panel {
        PanelView::Hidden => {}
        PanelView::Notice(message) => render_notice(out, rect, message, theme),
        PanelView::Options(items) => {
            for (offset, item) in items.iter().take(rect.height).enumerate() {
                render_option(out, rect.row + offset, rect, item, theme);
            }
        }
    }
}

/// The notice, wrapped over as many panel rows as it needs. When the panel
/// is too short the last row carries the rest, cut with `…`.
fn render_notice(out: &mut String, rect: Rect, message: &str, theme: &Theme) {
    let width = rect.width.saturating_sub(1);
    let mut lines = helpers::wrap_words(message, width);
    if lines.len() > rect.height {
        let rest = lines.split_off(rect.height.saturating_sub(1)).join(" ");
        if rect.height > 0 {
            lines.push(truncate(&rest, width));
        }
    }

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(out, rect.row + offset, rect.col);
        out.push_str(Theme::italic());
        out.push_str(&Theme::fg(&theme.colors.notice_fg));
        out.push(' ');
        out.push_str(line);
        out.push_str(Theme::reset());
    }
}

/// One option row, padded to the panel width so the selection background
/// covers the full row.
fn render_option(out: &mut String, row: usize, rect: Rect, item: &OptionItem, theme: &Theme) {
    let label = truncate(&item.label, rect.width.saturating_sub(2));

    let base = if item.is_active {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, rect.col);
    out.push_str(&base);
    out.push(' ');
    helpers::render_highlighted_text(out, &label, &item.highlight_ranges, theme, &base, item.is_active);
    out.push_str(&padding(&label, rect.width.saturating_sub(1)));
    out.push_str(Theme::reset());
}
