//! Candidate domain model.

use serde::{Deserialize, Serialize};

/// One selectable item offered by a search box.
///
/// Remote listings may contain records without a usable `name`; those are
/// kept as `name: None` so the list mirrors the response, but they never
/// match a query and are never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: Option<String>,
}

impl Candidate {
    /// Creates a candidate with a display name.
    ///
    /// ```
    /// use autocomplete::Candidate;
    ///
    /// let c = Candidate::named("Leanne Graham");
    /// assert_eq!(c.name(), Some("Leanne Graham"));
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Creates a candidate for a record that carried no name.
    #[must_use]
    pub const fn nameless() -> Self {
        Self { name: None }
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
