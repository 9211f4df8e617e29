//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no behavior, only display-ready data.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    /// The box backed by the remote listing (left column).
    pub remote: SearchBoxView,
    /// The box backed by the configured list (right column).
    pub local: SearchBoxView,
}

/// Display information for one search box.
#[derive(Debug, Clone)]
pub struct SearchBoxView {
    /// Line above the input.
    pub title: String,
    /// Current input text.
    pub query: String,
    /// Dim hint drawn while `query` is empty.
    pub placeholder: String,
    /// Whether keystrokes go to this box.
    pub is_focused: bool,
    pub panel: PanelView,
}

/// What is drawn below an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Nothing.
    Hidden,
    /// A window of options, already cut to the panel height.
    Options(Vec<OptionItem>),
    /// A single-line message in place of the option list.
    Notice(String),
}

/// One rendered option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub label: String,
    /// Drawn with the selection colors ("active" option).
    pub is_active: bool,
    /// Character ranges of the query match, `(start, end)` exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
