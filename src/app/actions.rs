//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; nothing in this crate outside the shim
//! talks to the Zellij host.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when Esc is pressed with no options panel open.
    CloseFocus,

    /// Issues an HTTP GET for the remote listing.
    ///
    /// The response must be fed back as `Event::CandidatesFetched` carrying
    /// the same `request_id`.
    FetchCandidates {
        /// Listing endpoint.
        url: String,
        /// Tag identifying the mount that asked for it.
        request_id: u64,
    },
}
