//! Screen geometry shared by rendering and pointer hit-testing.
//!
//! Both the renderer and the event handler derive positions from
//! [`ScreenLayout::compute`], so a pointer press is always resolved against
//! exactly what was drawn. Rows and columns are 1-indexed, matching the ANSI
//! cursor positioning used by the components.
//!
//! ```text
//! row 2      header
//! row 3      ─────────────────────────────────────────
//! row 5      Remote title            Local title
//! rows 6-8   ┌ remote input ┐        ┌ local input ┐
//! rows 9..   remote options          local options
//! rows-2     ─────────────────────────────────────────
//! rows-1     footer
//! ```

use std::ops::Range;

const HEADER_ROW: usize = 2;
const TITLE_ROW: usize = 5;
const INPUT_ROW: usize = 6;
const INPUT_HEIGHT: usize = 3;
const PANEL_ROW: usize = INPUT_ROW + INPUT_HEIGHT;
const COLUMN_GAP: usize = 2;

/// Terminal dimensions of the plugin pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

/// A rectangular block of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }
}

/// Geometry of one search box column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    /// Title line above the input.
    pub title: Rect,
    /// Bordered input, three rows tall.
    pub input: Rect,
    /// Area available for the options panel.
    pub panel: Rect,
}

/// Geometry of the whole plugin pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header_row: usize,
    pub header_border_row: usize,
    pub remote: BoxLayout,
    pub local: BoxLayout,
    pub footer_border_row: usize,
    pub footer_row: usize,
    pub cols: usize,
}

impl ScreenLayout {
    /// Splits the pane into two side-by-side columns, remote on the left.
    #[must_use]
    pub fn compute(viewport: Viewport) -> Self {
        let footer_row = viewport.rows.saturating_sub(1);
        let footer_border_row = footer_row.saturating_sub(1);
        let panel_height = footer_border_row.saturating_sub(PANEL_ROW);

        let left_width = viewport.cols.saturating_sub(COLUMN_GAP) / 2;
        let right_col = left_width + COLUMN_GAP + 1;
        let right_width = viewport.cols.saturating_sub(left_width + COLUMN_GAP);

        Self {
            header_row: HEADER_ROW,
            header_border_row: HEADER_ROW + 1,
            remote: Self::column(1, left_width, panel_height),
            local: Self::column(right_col, right_width, panel_height),
            footer_border_row,
            footer_row,
            cols: viewport.cols,
        }
    }

    const fn column(col: usize, width: usize, panel_height: usize) -> BoxLayout {
        BoxLayout {
            title: Rect { row: TITLE_ROW, col, height: 1, width },
            input: Rect { row: INPUT_ROW, col, height: INPUT_HEIGHT, width },
            panel: Rect { row: PANEL_ROW, col, height: panel_height, width },
        }
    }
}

/// Range of option indices that fit in a panel of `capacity` rows, centered
/// on `cursor`, then pulled back so the last rows stay filled near the end of
/// the list.
///
/// ```
/// use autocomplete::ui::layout::visible_window;
///
/// assert_eq!(visible_window(10, 0, 3), 0..3);
/// assert_eq!(visible_window(10, 5, 3), 4..7);
/// assert_eq!(visible_window(10, 9, 3), 7..10);
/// ```
#[must_use]
pub fn visible_window(len: usize, cursor: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || len == 0 {
        return 0..0;
    }

    let mut start = cursor.saturating_sub(capacity / 2);
    let end = (start + capacity).min(len);
    if end - start < capacity && len >= capacity {
        start = end - capacity;
    }
    start..end
}

/// Range of option indices that fit in a panel of `capacity` rows when the
/// first `offset` options are scrolled past. The offset is clamped so the
/// panel stays filled at the end of the list.
///
/// ```
/// use autocomplete::ui::layout::scrolled_window;
///
/// assert_eq!(scrolled_window(10, 2, 3), 2..5);
/// assert_eq!(scrolled_window(10, 9, 3), 7..10);
/// assert_eq!(scrolled_window(2, 1, 3), 0..2);
/// ```
#[must_use]
pub fn scrolled_window(len: usize, offset: usize, capacity: usize) -> Range<usize> {
    let start = offset.min(len.saturating_sub(capacity));
    start..(start + capacity).min(len)
}
