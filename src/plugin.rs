//! Zellij plugin wrapper.
//!
//! Thin integration layer between the library and the Zellij host: it
//! translates host events into library events, and library actions into host
//! calls. No state lives here beyond the library's `AppState`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the remote fetch starts once granted
//! 3. **Update**: Map `Key`, `Mouse`, `WebRequestResult`, and permission events
//! 4. **Render**: Record the viewport, then draw
//!
//! # Keybindings
//!
//! - Printable characters: type into the focused box
//! - `Backspace`: delete the last character
//! - `Up`/`Down`: move the local cursor, or open and scroll the remote list
//! - `Enter`: commit the active local option
//! - `Tab`: switch boxes
//! - `Esc`: hide the open list, or close the plugin
//! - `Ctrl+r`: remount the remote box and fetch again

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use autocomplete::app::AppState;
use autocomplete::{handle_event, Action, Config, Event};

/// Context key carrying the request id through `web_request`.
const REQUEST_ID_KEY: &str = "request_id";

/// Plugin state wrapper.
pub struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: autocomplete::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        autocomplete::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, theme = ?config.theme_name, "parsed configuration");
        self.app = autocomplete::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let Some(our_event) = Self::map_event(event) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        autocomplete::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Translates a host event into a library event.
    fn map_event(event: zellij_tile::prelude::Event) -> Option<Event> {
        match event {
            zellij_tile::prelude::Event::Key(key) => Self::map_key_event(&key),
            zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                tracing::debug!(granted, "permission request result");
                Some(Event::PermissionsResult { granted })
            }
            _ => None,
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('r') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::RemountRemote);
        }

        Some(match key.bare_key {
            BareKey::Up => Event::CursorUp,
            BareKey::Down => Event::CursorDown,
            BareKey::Enter => Event::Commit,
            BareKey::Esc => Event::Dismiss,
            BareKey::Tab => Event::FocusNext,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c)
                if !key.has_modifiers(&[KeyModifier::Ctrl]) && !key.has_modifiers(&[KeyModifier::Alt]) =>
            {
                Event::Char(c)
            }
            _ => return None,
        })
    }

    /// Host mouse positions are 0-indexed, the layout is 1-indexed.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::PointerDown { row, col: col + 1 })
            }
            _ => None,
        }
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(request_id) = context
            .get(REQUEST_ID_KEY)
            .and_then(|id| id.parse::<u64>().ok())
        else {
            tracing::debug!(?context, "web result without request id, ignoring");
            return None;
        };

        tracing::debug!(status, request_id, body_len = body.len(), "listing response received");
        Some(Event::CandidatesFetched {
            request_id,
            status,
            body,
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                hide_self();
            }
            Action::FetchCandidates { url, request_id } => {
                let context = BTreeMap::from([(REQUEST_ID_KEY.to_string(), request_id.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
