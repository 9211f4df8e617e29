//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`input`]: Box title and bordered input
//! - [`panel`]: Options list or no-match notice
//!
//! [`render_frame`] places them according to [`ScreenLayout`]:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [blank line]
//! [Remote title]      [Local title]
//! [Remote input x3]   [Local input x3]
//! [Remote panel]      [Local panel]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod header;
mod input;
mod panel;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{BoxLayout, ScreenLayout, Viewport};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBoxView, UIViewModel};

use footer::render_footer;
use header::render_header;
use input::{render_input, render_title};
use panel::render_panel;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

fn render_column(out: &mut String, layout: BoxLayout, view: &SearchBoxView, theme: &Theme) {
    render_title(out, layout.title, view, theme);
    render_input(out, layout.input, view, theme);
    render_panel(out, layout.panel, &view.panel, theme);
}

/// Renders a full frame for a pane of `rows` x `cols` into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = ScreenLayout::compute(Viewport { rows, cols });

    render_header(out, layout.header_row, &vm.header, theme, cols);
    render_border(out, layout.header_border_row, &theme.colors.border, cols);

    render_column(out, layout.remote, &vm.remote, theme);
    render_column(out, layout.local, &vm.local, theme);

    render_border(out, layout.footer_border_row, &theme.colors.border, cols);
    render_footer(out, layout.footer_row, &vm.footer, theme, cols);
}
