//! Autocomplete: a Zellij plugin with two type-ahead search boxes.
//!
//! - The **remote** box (left) fetches a listing of people once per mount
//!   and filters their names as you type. Its options panel is opened by
//!   clicking the input and closes on a click anywhere else.
//! - The **local** box (right) filters a configured list of US states, with
//!   a keyboard cursor, Enter to commit and a notice when nothing matches.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events, focus,
//! │  - Event handling and pointer hit-testing           │    actions
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌──────────────────────────┐   ┌──────────────────────┐
//! │ Search Components        │   │ UI Layer (ui/)       │
//! │ (search/)                │   │ - Layout             │
//! │ - Remote box + listing   │   │ - Components         │
//! │ - Local box transitions  │   │ - Theming            │
//! │ - Outside interactions   │   │                      │
//! └──────────────────────────┘   └──────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Candidate, filter rule, errors (domain/)         │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/autocomplete.wasm" {
//!         endpoint "https://jsonplaceholder.typicode.com/users?q=0"
//!         states "Ohio,Oregon,Texas"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! Everything except the shim is plain Rust and can be driven directly:
//!
//! ```rust
//! use autocomplete::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! state.set_viewport(24, 80);
//!
//! for c in "new".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::Commit)?;
//! assert_eq!(state.local.state().query, "New Hampshire");
//! # Ok::<(), autocomplete::AutocompleteError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use domain::{AutocompleteError, Candidate, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Listing fetched by the remote box when no `endpoint` is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users?q=0";

/// Candidates of the local box when no `states` are configured.
pub const DEFAULT_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "American Samoa",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District Of Columbia",
    "Federated States Of Micronesia",
    "Florida",
    "Georgia",
    "Guam",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Marshall Islands",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Northern Mariana Islands",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Palau",
    "Pennsylvania",
    "Puerto Rico",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virgin Islands",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/autocomplete.wasm" {
///     endpoint "https://example.test/people"
///     states "Ohio, Oregon"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/autocomplete/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listing URL for the remote box.
    pub endpoint: String,

    /// Candidates for the local box, in display order.
    pub states: Vec<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` meaning the sandbox `/host`.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            states: default_states(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

fn default_states() -> Vec<String> {
    DEFAULT_STATES.iter().map(ToString::to_string).collect()
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: used as-is unless blank
    /// - `states`: comma-separated, entries trimmed, empty entries dropped;
    ///   falls back to [`DEFAULT_STATES`] if nothing is left
    /// - `theme`, `theme_file`: used as-is
    /// - `trace_level`: used as-is, default `"info"`
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use autocomplete::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("states".to_string(), "Ohio, Oregon,,".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.states, vec!["Ohio", "Oregon"]);
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let states = config
            .get("states")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|state| !state.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|states| !states.is_empty())
            .unwrap_or_else(default_states);

        Self {
            endpoint: non_blank("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            states,
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Both boxes are mounted; the remote fetch starts once the host grants web
/// access (see `Event::PermissionsResult`).
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        states = config.states.len(),
        "initializing autocomplete plugin"
    );

    AppState::new(config.endpoint.clone(), config.states.clone(), config.resolve_theme())
}
