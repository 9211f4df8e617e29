//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the components, which write into a
//!    frame buffer that is printed at once

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", frame(state, rows, cols));
}

/// Builds the ANSI output for one frame without printing it.
#[must_use]
pub fn frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut out = String::new();
    components::render_frame(&mut out, &viewmodel, &state.theme, rows, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn app() -> AppState {
        let states = ["Alabama", "Alaska", "Arizona", "Arkansas"]
            .iter()
            .map(ToString::to_string)
            .collect();
        AppState::new("http://listing.test/users", states, Theme::default())
    }

    #[test]
    fn idle_frame_shows_both_boxes() {
        let out = frame(&app(), 24, 80);
        assert!(out.contains("Auto Search using API"));
        assert!(out.contains("Auto Search using Dummy Data"));
        assert!(out.contains("Search people here ..."));
        assert!(out.contains("Search US states here ..."));
        assert!(out.contains("Tab: switch box"));
    }

    #[test]
    fn typed_query_lists_matches_under_local_input() {
        let mut state = app();
        state.local.set_query("ar");
        let out = frame(&state, 24, 80);

        assert!(out.contains("\u{1b}[9;42H"));
        assert!(out.contains("Ar"));
        assert!(out.contains("izona"));
        assert!(out.contains("kansas"));
        assert!(!out.contains("Alabama"));
    }

    /// Drops `ESC [ ... <letter>` sequences, leaving the drawn text.
    fn plain_text(frame: &str) -> String {
        let mut text = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for end in chars.by_ref() {
                    if end.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                text.push(c);
            }
        }
        text
    }

    #[test]
    fn no_match_shows_notice() {
        let mut state = app();
        state.local.set_query("Texas");
        let out = frame(&state, 24, 80);

        assert!(out.contains("\u{1b}[9;42H"));
        assert!(out.contains("\u{1b}[10;42H"));
        let text = plain_text(&out).split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(text.contains("The State you're trying to find is not available."));
        assert!(!text.contains('…'));
    }

    #[test]
    fn tiny_pane_does_not_panic() {
        let mut state = app();
        state.local.set_query("a");
        for (rows, cols) in [(0, 0), (1, 1), (5, 3), (9, 10)] {
            let _ = frame(&state, rows, cols);
        }
    }
}
