//! The two search components and the pieces they share.
//!
//! - [`remote`]: search box fed by a one-shot listing fetch
//! - [`local`]: search box over a configured list, with keyboard cursor
//! - [`listing`]: parsing of the listing response
//! - [`outside`]: scoped registration for pointer presses outside a component

pub mod listing;
pub mod local;
pub mod outside;
pub mod remote;

pub use local::{CursorMove, LocalSearchBox, LocalSearchState};
pub use outside::{OutsideInteractionGuard, OutsideInteractions};
pub use remote::{FetchRequest, FetchState, RemoteSearchBox};

/// Identifies one of the mounted search components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentId {
    /// The box backed by the remote listing.
    Remote,
    /// The box backed by the configured list.
    Local,
}
