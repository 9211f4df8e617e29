//! Search box fed by a one-shot remote listing fetch.
//!
//! # Lifecycle
//!
//! 1. **Mount**: [`RemoteSearchBox::mount`] registers an outside-interaction
//!    listener and starts in [`FetchState::Idle`].
//! 2. **Fetch**: [`RemoteSearchBox::begin_fetch`] hands out one
//!    [`FetchRequest`] per mount; the plugin shim performs it.
//! 3. **Response**: [`RemoteSearchBox::on_fetch_result`] accepts only the
//!    response tagged with this mount's request id. Responses addressed to an
//!    earlier, dropped instance are discarded.
//! 4. **Unmount**: dropping the box releases its listener; its pending
//!    request id dies with it.

use super::listing::parse_listing;
use super::outside::{OutsideInteractionGuard, OutsideInteractions};
use super::ComponentId;
use crate::domain::filter::matches;
use crate::domain::Candidate;

/// Progress of the mount's single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// No request issued yet.
    Idle,
    /// Waiting for the response tagged with this id.
    Pending(u64),
    /// A response arrived (successful or not). No further fetches.
    Settled,
}

/// A listing request to be performed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub request_id: u64,
}

/// Search box over candidates fetched from a listing endpoint.
#[derive(Debug)]
pub struct RemoteSearchBox {
    endpoint: String,
    candidates: Vec<Candidate>,
    query: String,
    visible: bool,
    /// First filtered option drawn in the panel.
    scroll: usize,
    fetch: FetchState,
    _outside: OutsideInteractionGuard,
}

impl RemoteSearchBox {
    /// Mounts a new box, registering it for outside-interaction notifications.
    #[must_use]
    pub fn mount(endpoint: impl Into<String>, outside: &OutsideInteractions) -> Self {
        Self {
            endpoint: endpoint.into(),
            candidates: vec![],
            query: String::new(),
            visible: false,
            scroll: 0,
            fetch: FetchState::Idle,
            _outside: outside.register(ComponentId::Remote),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub const fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Starts this mount's fetch.
    ///
    /// Returns the request the first time only; every later call yields
    /// `None`, so one mount never issues more than one request.
    pub fn begin_fetch(&mut self, request_id: u64) -> Option<FetchRequest> {
        if self.fetch != FetchState::Idle {
            tracing::debug!(fetch = ?self.fetch, "remote fetch already issued for this mount");
            return None;
        }
        self.fetch = FetchState::Pending(request_id);
        tracing::debug!(url = %self.endpoint, request_id, "remote fetch issued");
        Some(FetchRequest {
            url: self.endpoint.clone(),
            request_id,
        })
    }

    /// Applies a listing response.
    ///
    /// Returns `true` if the response belonged to this mount. Parse or status
    /// failures are logged and leave the candidate list as it was.
    pub fn on_fetch_result(&mut self, request_id: u64, status: u16, body: &[u8]) -> bool {
        if self.fetch != FetchState::Pending(request_id) {
            tracing::debug!(request_id, fetch = ?self.fetch, "discarding stale listing response");
            return false;
        }
        self.fetch = FetchState::Settled;

        match parse_listing(status, body) {
            Ok(candidates) => {
                tracing::debug!(count = candidates.len(), "remote candidates loaded");
                self.candidates = candidates;
                self.scroll = 0;
            }
            Err(e) => {
                tracing::debug!(error = %e, "remote listing unusable, keeping current candidates");
            }
        }
        true
    }

    /// Named candidates matching the current query. The empty query shows
    /// every named candidate.
    #[must_use]
    pub fn filtered(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter_map(Candidate::name)
            .filter(|name| matches(name, &self.query))
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.scroll = 0;
        tracing::trace!(query = %self.query, "remote query updated");
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.scroll = 0;
        tracing::trace!(query = %self.query, "remote query updated");
    }

    /// Pointer press on the input.
    pub fn toggle_panel(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    /// Keyboard request to open the panel. Returns `false` if already open.
    pub fn open_panel(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.scroll = 0;
        true
    }

    /// Scrolls an open panel one option down, up to `limit` (the number of
    /// options that do not fit). Returns `false` if nothing moved.
    pub fn scroll_down(&mut self, limit: usize) -> bool {
        if !self.visible || self.scroll >= limit {
            return false;
        }
        self.scroll += 1;
        true
    }

    /// Scrolls an open panel one option up. Returns `false` at the top.
    pub fn scroll_up(&mut self) -> bool {
        if !self.visible || self.scroll == 0 {
            return false;
        }
        self.scroll -= 1;
        true
    }

    /// Hides the panel. Returns `false` if it was already hidden.
    pub fn hide_panel(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Pointer press somewhere outside this component.
    pub fn on_outside_interaction(&mut self) -> bool {
        let changed = self.hide_panel();
        if changed {
            tracing::debug!("remote panel closed by outside interaction");
        }
        changed
    }

    /// Pointer click on the rendered option at `index` of [`Self::filtered`].
    ///
    /// Copies the option's name into the input and hides the panel. An index
    /// past the end is ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(name) = self.filtered().get(index).map(|name| (*name).to_string()) else {
            return false;
        };
        tracing::debug!(value = %name, "remote option selected");
        self.query = name;
        self.visible = false;
        self.scroll = 0;
        true
    }
}
