//! Mouse click handling
//!
//! Routes a left click to the popup, the input, or the results pane using the
//! regions recorded by the last render.

use std::time::Instant;

use ratatui::layout::Position;

use super::app_state::App;

pub fn handle_click(app: &mut App, column: u16, row: u16, now: Instant) {
    let position = Position::new(column, row);

    if let Some(popup) = app.layout.popup {
        if popup.area.contains(position) {
            if let Some(index) = popup.index_at(column, row) {
                let outcome = app.controller.click(index);
                app.apply_outcome(outcome);
            }
            return;
        }
    }

    if app.layout.input.contains(position) {
        app.focus_input();
    } else if app.layout.results.contains(position) {
        app.blur_input(now);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
