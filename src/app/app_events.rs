use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::controller::{ControlKey, KeyOutcome};

fn control_key(key: &KeyEvent) -> Option<ControlKey> {
    match key.code {
        KeyCode::Up => Some(ControlKey::Up),
        KeyCode::Down => Some(ControlKey::Down),
        KeyCode::Enter => Some(ControlKey::Enter),
        KeyCode::Esc => Some(ControlKey::Escape),
        _ => None,
    }
}

/// Ctrl+M / Ctrl+J would make the single-line input multi-line
fn inserts_newline(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
}

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    /// Fire the delayed blur once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.toggle_focus(now);
            return;
        }

        match self.focus {
            Focus::SearchInput => self.handle_input_key(key),
            Focus::ResultsPane => self.handle_results_key(key),
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            mouse_click::handle_click(self, mouse.column, mouse.row, now);
        }
    }

    /// Give the search input focus
    pub fn focus_input(&mut self) {
        self.focus = Focus::SearchInput;
        self.controller.focus(&self.refs);
    }

    /// Move focus to the results pane; the popup lingers for the blur delay
    pub fn blur_input(&mut self, now: Instant) {
        if self.focus == Focus::SearchInput {
            self.focus = Focus::ResultsPane;
            self.controller.blur(now);
        }
    }

    fn toggle_focus(&mut self, now: Instant) {
        match self.focus {
            Focus::SearchInput => self.blur_input(now),
            Focus::ResultsPane => self.focus_input(),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if let Some(control) = control_key(&key) {
            let outcome = self.controller.handle_key(control, &mut self.search_log);
            self.apply_outcome(outcome);
            return;
        }

        if inserts_newline(&key) {
            return;
        }

        if self.input.input(key) {
            let text = self.input_text().to_string();
            self.controller.change(&text, &self.refs);
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('i') => self.focus_input(),
            _ => {}
        }
    }

    /// Bring the widget and app state in line with what the controller did
    pub(super) fn apply_outcome(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::QueryReplaced => {
                let query = self.controller.query().to_string();
                self.replace_input_text(&query);
                self.focus = Focus::SearchInput;
            }
            KeyOutcome::Submitted => {
                if let Some(latest) = self.search_log.latest() {
                    let query = latest.query.clone();
                    self.refs.record_recent_query(&query);
                }
            }
            KeyOutcome::Dismissed => {
                self.focus = Focus::ResultsPane;
            }
            KeyOutcome::Navigated | KeyOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
