//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (keys, pointer, host results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the search boxes and `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use autocomplete::app::{handle_event, AppState, Event};
//! use autocomplete::ui::theme::Theme;
//!
//! let mut state = AppState::new("https://listing.test", vec!["Ohio".into()], Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('o'))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::Focus;
use super::state::Hit;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::{ComponentId, CursorMove};

/// Events triggered by user input or host responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the focused box's query.
    Char(char),
    /// Removes the last character from the focused box's query.
    Backspace,
    /// Moves the local cursor up, or scrolls the remote panel up.
    CursorUp,
    /// Moves the local cursor down, or opens the remote panel and then
    /// scrolls it down.
    CursorDown,
    /// Enter: commits the local option under the cursor.
    Commit,
    /// Esc: hides the focused panel, or closes the plugin if none is open.
    Dismiss,
    /// Tab: moves keyboard focus to the other box.
    FocusNext,
    /// Left pointer press at a 1-indexed cell.
    PointerDown { row: usize, col: usize },
    /// Outcome of the web access permission request.
    PermissionsResult { granted: bool },
    /// Response to a `FetchCandidates` action.
    CandidatesFetched {
        request_id: u64,
        status: u16,
        body: Vec<u8>,
    },
    /// Drops the remote box and mounts a fresh one, which fetches again.
    RemountRemote,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned `bool` tells the shim whether a re-render is needed.
///
/// # Errors
///
/// Reserved for transitions that can fail; the current ones log and recover.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    match event {
        Event::Char(c) => {
            match state.focus {
                Focus::Remote => state.remote.push_char(*c),
                Focus::Local => state.local.push_char(*c),
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            match state.focus {
                Focus::Remote => state.remote.pop_char(),
                Focus::Local => state.local.pop_char(),
            }
            Ok((true, vec![]))
        }
        Event::CursorUp => match state.focus {
            Focus::Remote => Ok((state.remote.scroll_up(), vec![])),
            Focus::Local => Ok((move_local_cursor(state, CursorMove::Up), vec![])),
        },
        Event::CursorDown => match state.focus {
            Focus::Remote if !state.remote.is_visible() => Ok((state.remote.open_panel(), vec![])),
            Focus::Remote => {
                let limit = state.remote_scroll_limit();
                Ok((state.remote.scroll_down(limit), vec![]))
            }
            Focus::Local => Ok((move_local_cursor(state, CursorMove::Down), vec![])),
        },
        Event::Commit => match state.focus {
            Focus::Remote => Ok((false, vec![])),
            Focus::Local => Ok((state.local.commit(), vec![])),
        },
        Event::Dismiss => {
            let hidden = match state.focus {
                Focus::Remote => state.remote.hide_panel(),
                Focus::Local => state.local.dismiss(),
            };
            if hidden {
                Ok((true, vec![]))
            } else {
                tracing::debug!("nothing open, closing plugin");
                Ok((false, vec![Action::CloseFocus]))
            }
        }
        Event::FocusNext => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::PointerDown { row, col } => Ok((handle_pointer(state, *row, *col), vec![])),
        Event::PermissionsResult { granted } => {
            state.web_access = *granted;
            if !granted {
                tracing::warn!("web access denied, remote listing stays empty");
                return Ok((true, vec![]));
            }
            Ok((true, state.start_remote_fetch().into_iter().collect()))
        }
        Event::CandidatesFetched {
            request_id,
            status,
            body,
        } => Ok((state.remote.on_fetch_result(*request_id, *status, body), vec![])),
        Event::RemountRemote => Ok((true, state.remount_remote().into_iter().collect())),
    }
}

fn move_local_cursor(state: &mut AppState, movement: CursorMove) -> bool {
    let before = state.local.state().cursor;
    state.local.move_cursor(movement);
    state.local.state().cursor != before
}

/// Notifies outside listeners, then delivers the press to whatever it hit.
fn handle_pointer(state: &mut AppState, row: usize, col: usize) -> bool {
    if state.viewport.is_none() {
        tracing::debug!(row, col, "pointer press before first render, ignoring");
        return false;
    }

    let hit = state.hit_test(row, col);
    tracing::debug!(row, col, ?hit, "pointer press");

    let mut changed = false;
    for listener in state.outside.listeners_outside(hit.component()) {
        changed |= match listener {
            ComponentId::Remote => state.remote.on_outside_interaction(),
            // never registered
            ComponentId::Local => false,
        };
    }

    match hit {
        Hit::Input(ComponentId::Remote) => {
            state.focus = Focus::Remote;
            state.remote.toggle_panel();
            changed = true;
        }
        Hit::Input(ComponentId::Local) => {
            changed |= state.focus != Focus::Local;
            state.focus = Focus::Local;
        }
        Hit::Option(ComponentId::Remote, index) => {
            state.focus = Focus::Remote;
            changed |= state.remote.select(index);
        }
        Hit::Option(ComponentId::Local, index) => {
            state.focus = Focus::Local;
            changed |= state.local.select(index);
        }
        Hit::Inside(_) | Hit::Nothing => {}
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FetchState;
    use crate::ui::theme::Theme;

    const USERS: &[u8] = br#"[{"id": 1, "name": "Leanne Graham"}, {"id": 2, "name": "Ervin Howell"}]"#;

    fn states() -> Vec<String> {
        ["Alabama", "Alaska", "Arizona", "Arkansas"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Rendered once at 24x80: remote input at rows 6-8 cols 1-39, local
    /// input at cols 42-80, panels from row 9.
    fn rendered() -> AppState {
        let mut state = AppState::new("http://listing.test/users", states(), Theme::default());
        state.set_viewport(24, 80);
        state
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    fn loaded() -> AppState {
        let mut state = rendered();
        let (_, actions) = send(&mut state, Event::PermissionsResult { granted: true });
        assert_eq!(
            actions,
            vec![Action::FetchCandidates {
                url: "http://listing.test/users".to_string(),
                request_id: 1,
            }]
        );
        let (render, _) = send(
            &mut state,
            Event::CandidatesFetched {
                request_id: 1,
                status: 200,
                body: USERS.to_vec(),
            },
        );
        assert!(render);
        state
    }

    #[test]
    fn remote_search_and_click_select() {
        let mut state = loaded();

        send(&mut state, Event::PointerDown { row: 7, col: 5 });
        assert_eq!(state.focus, Focus::Remote);
        assert!(state.remote.is_visible());

        type_text(&mut state, "Leanne");
        assert_eq!(state.remote.filtered(), vec!["Leanne Graham"]);

        let (render, _) = send(&mut state, Event::PointerDown { row: 9, col: 5 });
        assert!(render);
        assert_eq!(state.remote.query(), "Leanne Graham");
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn clicking_remote_input_twice_toggles_panel() {
        let mut state = loaded();
        send(&mut state, Event::PointerDown { row: 6, col: 1 });
        assert!(state.remote.is_visible());
        send(&mut state, Event::PointerDown { row: 8, col: 39 });
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn press_outside_hides_remote_panel() {
        let mut state = loaded();
        send(&mut state, Event::PointerDown { row: 7, col: 5 });

        let (render, _) = send(&mut state, Event::PointerDown { row: 2, col: 10 });
        assert!(render);
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn press_on_remote_title_keeps_panel_open() {
        let mut state = loaded();
        send(&mut state, Event::PointerDown { row: 7, col: 5 });
        assert!(state.remote.is_visible());

        let (render, _) = send(&mut state, Event::PointerDown { row: 5, col: 5 });
        assert!(!render);
        assert!(state.remote.is_visible());
    }

    #[test]
    fn press_on_local_title_hides_remote_panel() {
        let mut state = loaded();
        send(&mut state, Event::PointerDown { row: 7, col: 5 });
        send(&mut state, Event::PointerDown { row: 5, col: 45 });
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn arrows_scroll_remote_panel_in_short_pane() {
        let mut state = loaded();
        // panel rows 9 only
        state.set_viewport(12, 80);
        send(&mut state, Event::FocusNext);
        send(&mut state, Event::CursorDown);

        assert!(send(&mut state, Event::CursorDown).0);
        assert_eq!(state.hit_test(9, 5), Hit::Option(ComponentId::Remote, 1));
        assert!(!send(&mut state, Event::CursorDown).0);

        send(&mut state, Event::PointerDown { row: 9, col: 5 });
        assert_eq!(state.remote.query(), "Ervin Howell");
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn backspace_on_empty_local_input_then_enter_does_nothing() {
        let mut state = rendered();
        send(&mut state, Event::Backspace);
        let (render, actions) = send(&mut state, Event::Commit);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.local.state().query, "");
    }

    #[test]
    fn focusing_local_input_hides_remote_panel() {
        let mut state = loaded();
        send(&mut state, Event::PointerDown { row: 7, col: 5 });
        send(&mut state, Event::PointerDown { row: 7, col: 50 });
        assert_eq!(state.focus, Focus::Local);
        assert!(!state.remote.is_visible());
    }

    #[test]
    fn keyboard_down_opens_remote_panel() {
        let mut state = loaded();
        send(&mut state, Event::FocusNext);
        assert_eq!(state.focus, Focus::Remote);

        assert!(send(&mut state, Event::CursorDown).0);
        assert!(state.remote.is_visible());
        assert!(!send(&mut state, Event::CursorDown).0);
    }

    #[test]
    fn local_enter_commits_first_match() {
        let mut state = rendered();
        type_text(&mut state, "A");
        assert_eq!(state.local.state().filtered.len(), 4);

        assert!(send(&mut state, Event::Commit).0);
        assert_eq!(state.local.state().query, "Alabama");
        assert!(!state.local.state().visible);
    }

    #[test]
    fn local_arrows_move_active_option() {
        let mut state = rendered();
        type_text(&mut state, "A");
        send(&mut state, Event::CursorDown);
        send(&mut state, Event::CursorDown);
        assert_eq!(state.local.state().active(), Some("Arizona"));

        send(&mut state, Event::CursorUp);
        assert_eq!(state.local.state().active(), Some("Alaska"));

        send(&mut state, Event::CursorUp);
        let (render, _) = send(&mut state, Event::CursorUp);
        assert!(!render);
        assert_eq!(state.local.state().cursor, 0);
    }

    #[test]
    fn local_click_selects_option() {
        let mut state = rendered();
        type_text(&mut state, "A");
        send(&mut state, Event::CursorDown);

        let (render, _) = send(&mut state, Event::PointerDown { row: 9, col: 45 });
        assert!(render);
        assert_eq!(state.local.state().query, "Alabama");
        assert!(state.local.state().filtered.is_empty());
        assert!(!state.local.state().visible);
    }

    #[test]
    fn local_click_follows_scrolled_window() {
        let mut state = AppState::new("http://listing.test", states(), Theme::default());
        // one panel row: rows 12 -> footer 11, border 10, panel row 9 only
        state.set_viewport(12, 80);
        type_text(&mut state, "A");
        send(&mut state, Event::CursorDown);
        send(&mut state, Event::CursorDown);

        send(&mut state, Event::PointerDown { row: 9, col: 45 });
        assert_eq!(state.local.state().query, "Arizona");
    }

    #[test]
    fn enter_without_matches_does_nothing() {
        let mut state = rendered();
        type_text(&mut state, "zz");
        let (render, actions) = send(&mut state, Event::Commit);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.local.state().query, "zz");
    }

    #[test]
    fn escape_hides_panel_then_closes_plugin() {
        let mut state = rendered();
        type_text(&mut state, "A");

        assert_eq!(send(&mut state, Event::Dismiss), (true, vec![]));
        assert!(!state.local.state().shows_panel());
        assert_eq!(send(&mut state, Event::Dismiss), (false, vec![Action::CloseFocus]));
    }

    #[test]
    fn typing_goes_to_focused_box_only() {
        let mut state = rendered();
        type_text(&mut state, "al");
        send(&mut state, Event::FocusNext);
        type_text(&mut state, "xy");
        send(&mut state, Event::Backspace);

        assert_eq!(state.local.state().query, "al");
        assert_eq!(state.remote.query(), "x");
    }

    #[test]
    fn pointer_before_first_render_is_ignored() {
        let mut state = AppState::new("http://listing.test", states(), Theme::default());
        let (render, actions) = send(&mut state, Event::PointerDown { row: 7, col: 5 });
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.focus, Focus::Local);
    }

    #[test]
    fn denied_permission_never_fetches() {
        let mut state = rendered();
        let (_, actions) = send(&mut state, Event::PermissionsResult { granted: false });
        assert!(actions.is_empty());

        let (_, actions) = send(&mut state, Event::RemountRemote);
        assert!(actions.is_empty());
        assert_eq!(state.remote.fetch_state(), FetchState::Idle);
    }

    #[test]
    fn response_for_dropped_mount_is_discarded() {
        let mut state = rendered();
        send(&mut state, Event::PermissionsResult { granted: true });

        let (_, actions) = send(&mut state, Event::RemountRemote);
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchCandidates { request_id: 2, .. }]
        ));
        assert_eq!(state.outside.len(), 1);

        let stale = Event::CandidatesFetched {
            request_id: 1,
            status: 200,
            body: USERS.to_vec(),
        };
        assert_eq!(send(&mut state, stale), (false, vec![]));
        assert!(state.remote.candidates().is_empty());

        let current = Event::CandidatesFetched {
            request_id: 2,
            status: 200,
            body: USERS.to_vec(),
        };
        assert!(send(&mut state, current).0);
        assert_eq!(state.remote.candidates().len(), 2);
    }

    #[test]
    fn failed_fetch_leaves_remote_empty() {
        let mut state = rendered();
        send(&mut state, Event::PermissionsResult { granted: true });
        send(
            &mut state,
            Event::CandidatesFetched {
                request_id: 1,
                status: 503,
                body: b"unavailable".to_vec(),
            },
        );
        assert!(state.remote.candidates().is_empty());
        assert_eq!(state.remote.fetch_state(), FetchState::Settled);
    }
}
