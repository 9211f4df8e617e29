//! Keyboard focus between the two search boxes.
//!
//! Exactly one box receives typed characters, Backspace, arrows, Enter and
//! Esc. `Tab` and clicks on an input move focus.

use crate::search::ComponentId;

/// Which search box receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The box backed by the remote listing.
    Remote,
    /// The box backed by the configured list. Initial focus.
    Local,
}

impl Focus {
    /// The other box.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Remote => Self::Local,
            Self::Local => Self::Remote,
        }
    }

    #[must_use]
    pub const fn component(self) -> ComponentId {
        match self {
            Self::Remote => ComponentId::Remote,
            Self::Local => ComponentId::Local,
        }
    }
}

impl From<ComponentId> for Focus {
    fn from(id: ComponentId) -> Self {
        match id {
            ComponentId::Remote => Self::Remote,
            ComponentId::Local => Self::Local,
        }
    }
}
