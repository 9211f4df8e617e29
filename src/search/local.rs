//! Search box over a fixed, configured candidate list.
//!
//! All interaction logic lives in [`LocalSearchState`] as pure transitions
//! that take the current state and return the next one. [`LocalSearchBox`]
//! pairs that state with its candidate list and applies the transitions in
//! place for the event handler.

use crate::domain::filter::filter_names;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
}

/// Complete interaction state of the local search box.
///
/// `cursor` always stays within `[0, max(0, filtered.len() - 1)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSearchState {
    /// Current input text.
    pub query: String,
    /// Candidates matching `query`, in candidate order.
    pub filtered: Vec<String>,
    /// Index of the active option within `filtered`.
    pub cursor: usize,
    /// Whether the options panel is open.
    pub visible: bool,
}

impl LocalSearchState {
    /// Applies a new input value.
    ///
    /// Recomputes the filtered set from scratch, resets the cursor to the
    /// first option and opens the panel.
    ///
    /// ```
    /// use autocomplete::search::LocalSearchState;
    ///
    /// let states = vec!["Alabama".to_string(), "Ohio".to_string()];
    /// let next = LocalSearchState::default().on_query("al", &states);
    /// assert_eq!(next.filtered, vec!["Alabama"]);
    /// assert!(next.visible);
    /// ```
    #[must_use]
    pub fn on_query(&self, query: &str, candidates: &[String]) -> Self {
        Self {
            query: query.to_string(),
            filtered: filter_names(candidates.iter().map(String::as_str), query),
            cursor: 0,
            visible: true,
        }
    }

    /// Moves the cursor one step, clamped to the filtered set.
    ///
    /// Up stops at the first option. Down stops once `cursor + 1` equals the
    /// number of options, and does nothing when there are none.
    #[must_use]
    pub fn on_cursor_move(&self, movement: CursorMove) -> Self {
        let cursor = match movement {
            CursorMove::Up => self.cursor.saturating_sub(1),
            CursorMove::Down if self.cursor + 1 < self.filtered.len() => self.cursor + 1,
            CursorMove::Down => self.cursor,
        };
        Self {
            cursor,
            ..self.clone()
        }
    }

    /// Commits the option under the cursor into the input and closes the panel.
    ///
    /// With no options there is nothing to commit and the state is returned
    /// unchanged.
    #[must_use]
    pub fn on_commit(&self) -> Self {
        let Some(chosen) = self.active() else {
            return self.clone();
        };
        Self {
            query: chosen.to_string(),
            filtered: self.filtered.clone(),
            cursor: 0,
            visible: false,
        }
    }

    /// Commits the option at `index` (a pointer click), whatever the cursor.
    ///
    /// Clears the filtered set. An index past the end is ignored.
    #[must_use]
    pub fn on_select(&self, index: usize) -> Self {
        let Some(chosen) = self.filtered.get(index) else {
            return self.clone();
        };
        Self {
            query: chosen.clone(),
            filtered: vec![],
            cursor: 0,
            visible: false,
        }
    }

    /// Hides the panel without touching the query.
    #[must_use]
    pub fn on_dismiss(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }

    /// The option under the cursor.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.filtered.get(self.cursor).map(String::as_str)
    }

    /// Whether anything (options or the no-results notice) is drawn below the
    /// input. An empty query shows nothing.
    #[must_use]
    pub fn shows_panel(&self) -> bool {
        self.visible && !self.query.is_empty()
    }
}

/// Search box over a configured candidate list.
#[derive(Debug, Clone)]
pub struct LocalSearchBox {
    candidates: Vec<String>,
    state: LocalSearchState,
}

impl LocalSearchBox {
    #[must_use]
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            state: LocalSearchState::default(),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &LocalSearchState {
        &self.state
    }

    /// Replaces the input value, as if the user had edited it.
    pub fn set_query(&mut self, query: &str) {
        self.state = self.state.on_query(query, &self.candidates);
        tracing::trace!(
            query = %self.state.query,
            filtered = self.state.filtered.len(),
            "local query updated"
        );
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.state.query.clone();
        query.push(c);
        self.set_query(&query);
    }

    /// Backspace. An already empty input is left alone.
    pub fn pop_char(&mut self) {
        let mut query = self.state.query.clone();
        if query.pop().is_none() {
            return;
        }
        self.set_query(&query);
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.state = self.state.on_cursor_move(movement);
    }

    /// Enter key. Returns `false` when there was nothing to commit.
    ///
    /// Only an option that is drawn can be committed, so a closed panel or an
    /// empty input ignores Enter.
    pub fn commit(&mut self) -> bool {
        if !self.state.shows_panel() || self.state.active().is_none() {
            tracing::debug!(query = %self.state.query, "enter with no options, ignoring");
            return false;
        }
        self.state = self.state.on_commit();
        tracing::debug!(value = %self.state.query, "local option committed");
        true
    }

    /// Pointer click on the option at `index`.
    pub fn select(&mut self, index: usize) -> bool {
        let next = self.state.on_select(index);
        let changed = next != self.state;
        self.state = next;
        if changed {
            tracing::debug!(value = %self.state.query, "local option clicked");
        }
        changed
    }

    /// Closes an open panel. Returns `false` if nothing was shown.
    pub fn dismiss(&mut self) -> bool {
        if !self.state.shows_panel() {
            return false;
        }
        self.state = self.state.on_dismiss();
        true
    }
}
