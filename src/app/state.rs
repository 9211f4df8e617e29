//! Application state and view model computation.
//!
//! [`AppState`] owns both search boxes, the keyboard focus, and the
//! outside-interaction registry the remote box is mounted against. It also
//! remembers the viewport of the last render so pointer presses can be
//! resolved against exactly what was drawn.
//!
//! # Example
//!
//! ```rust
//! use autocomplete::app::AppState;
//! use autocomplete::ui::theme::Theme;
//!
//! let states = vec!["Alabama".to_string(), "Alaska".to_string()];
//! let mut state = AppState::new("https://listing.test/users", states, Theme::default());
//! state.local.set_query("ka");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.local.query, "ka");
//! ```

use super::actions::Action;
use super::modes::Focus;
use crate::domain::filter::match_range;
use crate::search::{ComponentId, FetchState, LocalSearchBox, OutsideInteractions, RemoteSearchBox};
use crate::ui::helpers::wrap_words;
use crate::ui::layout::{scrolled_window, visible_window, Rect, ScreenLayout, Viewport};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FooterInfo, HeaderInfo, OptionItem, PanelView, SearchBoxView, UIViewModel,
};
use std::ops::Range;

const REMOTE_TITLE: &str = "Auto Search using API";
const LOCAL_TITLE: &str = "Auto Search using Dummy Data";
const REMOTE_PLACEHOLDER: &str = "Search people here ...";
const LOCAL_PLACEHOLDER: &str = "Search US states here ...";

/// Shown in the local panel when the query matches nothing.
pub const NO_MATCH_NOTICE: &str = "The State you're trying to find is not available.";

/// Where a pointer press landed, relative to the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The bordered input of a box.
    Input(ComponentId),
    /// A rendered option row, by index into that box's filtered set.
    Option(ComponentId, usize),
    /// Inside a component but not on anything clickable (its title or the
    /// notice rows).
    Inside(ComponentId),
    /// Outside every component.
    Nothing,
}

impl Hit {
    /// The component the press landed in, if any.
    #[must_use]
    pub const fn component(self) -> Option<ComponentId> {
        match self {
            Self::Input(id) | Self::Option(id, _) | Self::Inside(id) => Some(id),
            Self::Nothing => None,
        }
    }
}

/// Content of a panel area for a given number of available rows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PanelSlice {
    Hidden,
    Notice,
    Options(Range<usize>),
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Box receiving keystrokes.
    pub focus: Focus,
    /// Box fed by the remote listing. Replaced wholesale on remount.
    pub remote: RemoteSearchBox,
    /// Box over the configured list.
    pub local: LocalSearchBox,
    pub theme: Theme,
    /// Registry the remote box listens on for presses outside itself.
    pub outside: OutsideInteractions,
    /// Pane size at the last render. `None` until the first frame.
    pub viewport: Option<Viewport>,
    /// Whether the host granted web access.
    pub web_access: bool,
    endpoint: String,
    next_request_id: u64,
}

impl AppState {
    /// Creates the state with both boxes mounted and focus on the local box.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, states: Vec<String>, theme: Theme) -> Self {
        let endpoint = endpoint.into();
        let outside = OutsideInteractions::default();
        let remote = RemoteSearchBox::mount(endpoint.clone(), &outside);

        Self {
            focus: Focus::Local,
            remote,
            local: LocalSearchBox::new(states),
            theme,
            outside,
            viewport: None,
            web_access: false,
            endpoint,
            next_request_id: 1,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Records the pane size of the frame about to be drawn.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Some(Viewport { rows, cols });
    }

    /// Issues the current remote mount's fetch, if web access is granted and
    /// the mount has not fetched yet.
    pub fn start_remote_fetch(&mut self) -> Option<Action> {
        if !self.web_access {
            tracing::debug!("web access not granted, remote fetch deferred");
            return None;
        }

        let request = self.remote.begin_fetch(self.next_request_id)?;
        self.next_request_id += 1;
        Some(Action::FetchCandidates {
            url: request.url,
            request_id: request.request_id,
        })
    }

    /// Replaces the remote box with a fresh mount and starts its fetch.
    ///
    /// The old instance is dropped, which releases its outside-interaction
    /// registration and orphans its pending request id.
    pub fn remount_remote(&mut self) -> Option<Action> {
        tracing::debug!(previous = ?self.remote.fetch_state(), "remounting remote search box");
        self.remote = RemoteSearchBox::mount(self.endpoint.clone(), &self.outside);
        self.start_remote_fetch()
    }

    /// Resolves a 1-indexed pointer position against the last rendered frame.
    ///
    /// Only option rows that were actually drawn count as options.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Hit {
        let Some(viewport) = self.viewport else {
            return Hit::Nothing;
        };
        let layout = ScreenLayout::compute(viewport);

        let columns = [
            (ComponentId::Remote, layout.remote, self.remote_slice(layout.remote.panel.height)),
            (ComponentId::Local, layout.local, self.local_slice(layout.local.panel.height)),
        ];

        for (id, column, slice) in columns {
            if column.input.contains(row, col) {
                return Hit::Input(id);
            }
            if column.title.contains(row, col) {
                return Hit::Inside(id);
            }
            if !column.panel.contains(row, col) {
                continue;
            }

            let offset = row - column.panel.row;
            match slice {
                PanelSlice::Notice if offset < notice_rows(column.panel) => return Hit::Inside(id),
                PanelSlice::Options(window) if offset < window.len() => {
                    return Hit::Option(id, window.start + offset);
                }
                _ => {}
            }
        }

        Hit::Nothing
    }

    fn remote_slice(&self, capacity: usize) -> PanelSlice {
        if !self.remote.is_visible() {
            return PanelSlice::Hidden;
        }
        PanelSlice::Options(scrolled_window(
            self.remote.filtered().len(),
            self.remote.scroll_offset(),
            capacity,
        ))
    }

    /// How far the remote panel can scroll: the number of filtered options
    /// that do not fit below the input of the last rendered frame.
    #[must_use]
    pub fn remote_scroll_limit(&self) -> usize {
        self.viewport.map_or(0, |viewport| {
            let capacity = ScreenLayout::compute(viewport).remote.panel.height;
            self.remote.filtered().len().saturating_sub(capacity)
        })
    }

    fn local_slice(&self, capacity: usize) -> PanelSlice {
        let local = self.local.state();
        if !local.shows_panel() {
            PanelSlice::Hidden
        } else if local.filtered.is_empty() {
            PanelSlice::Notice
        } else {
            PanelSlice::Options(visible_window(local.filtered.len(), local.cursor, capacity))
        }
    }

    /// Computes a renderable UI view model for a pane of `rows` x `cols`.
    ///
    /// Option lists are already cut to the rows available below each input,
    /// using the same windows as [`Self::hit_test`].
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = ScreenLayout::compute(Viewport { rows, cols });

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            remote: self.compute_remote_view(layout.remote.panel.height),
            local: self.compute_local_view(layout.local.panel.height),
        }
    }

    fn compute_remote_view(&self, capacity: usize) -> SearchBoxView {
        let query = self.remote.query();
        let panel = match self.remote_slice(capacity) {
            PanelSlice::Options(window) => {
                let filtered = self.remote.filtered();
                PanelView::Options(
                    filtered[window]
                        .iter()
                        .map(|name| option_item(name, query, false))
                        .collect(),
                )
            }
            PanelSlice::Hidden | PanelSlice::Notice => PanelView::Hidden,
        };

        SearchBoxView {
            title: REMOTE_TITLE.to_string(),
            query: query.to_string(),
            placeholder: REMOTE_PLACEHOLDER.to_string(),
            is_focused: self.focus == Focus::Remote,
            panel,
        }
    }

    fn compute_local_view(&self, capacity: usize) -> SearchBoxView {
        let local = self.local.state();
        let panel = match self.local_slice(capacity) {
            PanelSlice::Hidden => PanelView::Hidden,
            PanelSlice::Notice => PanelView::Notice(NO_MATCH_NOTICE.to_string()),
            PanelSlice::Options(window) => PanelView::Options(
                window
                    .map(|i| option_item(&local.filtered[i], &local.query, i == local.cursor))
                    .collect(),
            ),
        };

        SearchBoxView {
            title: LOCAL_TITLE.to_string(),
            query: local.query.clone(),
            placeholder: LOCAL_PLACEHOLDER.to_string(),
            is_focused: self.focus == Focus::Local,
            panel,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let status = match self.remote.fetch_state() {
            FetchState::Idle => "waiting for web access".to_string(),
            FetchState::Pending(_) => "loading people".to_string(),
            FetchState::Settled => {
                let named = self
                    .remote
                    .candidates()
                    .iter()
                    .filter(|candidate| candidate.name().is_some())
                    .count();
                format!("{named} people loaded")
            }
        };
        HeaderInfo {
            title: format!(" Autocomplete · {status} "),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Remote => "Tab: switch box  ↑/↓: open/scroll  Click: select  Ctrl+r: reload  Esc: close",
            Focus::Local => "Tab: switch box  ↑/↓: navigate  Enter: select  Click: select  Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Rows the wrapped no-match notice occupies in `panel`.
fn notice_rows(panel: Rect) -> usize {
    wrap_words(NO_MATCH_NOTICE, panel.width.saturating_sub(1))
        .len()
        .min(panel.height)
}

fn option_item(label: &str, query: &str, is_active: bool) -> OptionItem {
    OptionItem {
        label: label.to_string(),
        is_active,
        highlight_ranges: match_range(label, query).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<String> {
        ["Alabama", "Alaska", "Arizona", "Arkansas"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn app() -> AppState {
        AppState::new("http://listing.test/users", states(), Theme::default())
    }

    fn option_labels(panel: &PanelView) -> Vec<&str> {
        match panel {
            PanelView::Options(items) => items.iter().map(|item| item.label.as_str()).collect(),
            _ => vec![],
        }
    }

    #[test]
    fn starts_with_local_focus_and_one_listener() {
        let state = app();
        assert_eq!(state.focus, Focus::Local);
        assert_eq!(state.outside.len(), 1);
        assert!(state.viewport.is_none());
    }

    #[test]
    fn no_fetch_without_web_access() {
        let mut state = app();
        assert_eq!(state.start_remote_fetch(), None);
        assert_eq!(state.remote.fetch_state(), FetchState::Idle);
    }

    #[test]
    fn each_mount_gets_a_fresh_request_id() {
        let mut state = app();
        state.web_access = true;
        assert_eq!(
            state.start_remote_fetch(),
            Some(Action::FetchCandidates {
                url: "http://listing.test/users".to_string(),
                request_id: 1,
            })
        );
        assert_eq!(state.start_remote_fetch(), None);

        let action = state.remount_remote();
        assert!(matches!(action, Some(Action::FetchCandidates { request_id: 2, .. })));
        assert_eq!(state.outside.len(), 1);
    }

    #[test]
    fn hit_test_needs_a_rendered_frame() {
        let state = app();
        assert_eq!(state.hit_test(7, 5), Hit::Nothing);
    }

    #[test]
    fn hit_test_resolves_inputs_and_options() {
        let mut state = app();
        state.set_viewport(24, 80);
        state.local.set_query("A");

        assert_eq!(state.hit_test(7, 5), Hit::Input(ComponentId::Remote));
        assert_eq!(state.hit_test(6, 42), Hit::Input(ComponentId::Local));
        assert_eq!(state.hit_test(9, 45), Hit::Option(ComponentId::Local, 0));
        assert_eq!(state.hit_test(12, 45), Hit::Option(ComponentId::Local, 3));
        assert_eq!(state.hit_test(13, 45), Hit::Nothing);
        assert_eq!(state.hit_test(9, 5), Hit::Nothing);
        assert_eq!(state.hit_test(2, 5), Hit::Nothing);
    }

    #[test]
    fn notice_row_counts_as_inside() {
        let mut state = app();
        state.set_viewport(24, 80);
        state.local.set_query("zz");
        // the notice wraps onto two rows at this width
        assert_eq!(state.hit_test(9, 45), Hit::Inside(ComponentId::Local));
        assert_eq!(state.hit_test(10, 45), Hit::Inside(ComponentId::Local));
        assert_eq!(state.hit_test(11, 45), Hit::Nothing);
    }

    #[test]
    fn titles_belong_to_their_box() {
        let mut state = app();
        state.set_viewport(24, 80);
        assert_eq!(state.hit_test(5, 5), Hit::Inside(ComponentId::Remote));
        assert_eq!(state.hit_test(5, 45), Hit::Inside(ComponentId::Local));
        assert_eq!(state.hit_test(5, 40), Hit::Nothing);
        assert_eq!(state.hit_test(4, 5), Hit::Nothing);
    }

    #[test]
    fn remote_panel_scrolls_past_rows_that_do_not_fit() {
        let mut state = app();
        state.web_access = true;
        state.start_remote_fetch();
        state.remote.on_fetch_result(
            1,
            200,
            br#"[{"name": "Ann"}, {"name": "Bea"}, {"name": "Cal"}, {"name": "Dan"}]"#,
        );
        // rows 13: panel rows 9 and 10
        state.set_viewport(13, 80);
        state.remote.toggle_panel();
        assert_eq!(state.remote_scroll_limit(), 2);

        assert!(state.remote.scroll_down(state.remote_scroll_limit()));
        assert!(state.remote.scroll_down(state.remote_scroll_limit()));
        assert!(!state.remote.scroll_down(state.remote_scroll_limit()));

        let viewmodel = state.compute_viewmodel(13, 80);
        assert_eq!(option_labels(&viewmodel.remote.panel), vec!["Cal", "Dan"]);
        assert_eq!(state.hit_test(10, 5), Hit::Option(ComponentId::Remote, 3));
    }

    #[test]
    fn local_view_marks_active_option_and_highlights_match() {
        let mut state = app();
        state.local.set_query("A");
        state.local.move_cursor(crate::search::CursorMove::Down);

        let viewmodel = state.compute_viewmodel(24, 80);
        let PanelView::Options(items) = &viewmodel.local.panel else {
            panic!("expected options, got {:?}", viewmodel.local.panel);
        };
        assert_eq!(items.len(), 4);
        assert!(items[1].is_active);
        assert!(!items[0].is_active);
        assert_eq!(items[1].label, "Alaska");
        assert_eq!(items[1].highlight_ranges, vec![(0, 1)]);
        assert!(viewmodel.local.is_focused);
        assert!(!viewmodel.remote.is_focused);
    }

    #[test]
    fn local_view_shows_notice_or_nothing() {
        let mut state = app();
        assert_eq!(state.compute_viewmodel(24, 80).local.panel, PanelView::Hidden);

        state.local.set_query("zz");
        assert_eq!(
            state.compute_viewmodel(24, 80).local.panel,
            PanelView::Notice(NO_MATCH_NOTICE.to_string())
        );
    }

    #[test]
    fn remote_view_lists_candidates_only_when_open() {
        let mut state = app();
        state.web_access = true;
        state.start_remote_fetch();
        state
            .remote
            .on_fetch_result(1, 200, br#"[{"name": "Leanne Graham"}, {"name": "Ervin Howell"}]"#);

        assert_eq!(state.compute_viewmodel(24, 80).remote.panel, PanelView::Hidden);

        state.remote.toggle_panel();
        let viewmodel = state.compute_viewmodel(24, 80);
        assert_eq!(option_labels(&viewmodel.remote.panel), vec!["Leanne Graham", "Ervin Howell"]);
        assert_eq!(viewmodel.header.title, " Autocomplete · 2 people loaded ");
    }

    #[test]
    fn small_panel_windows_around_cursor() {
        let mut state = app();
        state.local.set_query("A");
        for _ in 0..3 {
            state.local.move_cursor(crate::search::CursorMove::Down);
        }

        // rows 13: footer 12, border 11, panel rows 9 and 10
        let viewmodel = state.compute_viewmodel(13, 80);
        assert_eq!(option_labels(&viewmodel.local.panel), vec!["Arizona", "Arkansas"]);
    }

    #[test]
    fn footer_follows_focus() {
        let mut state = app();
        assert!(state.compute_viewmodel(24, 80).footer.keybindings.contains("Enter"));
        state.focus = Focus::Remote;
        assert!(state.compute_viewmodel(24, 80).footer.keybindings.contains("Ctrl+r"));
    }
}
