use std::time::{Duration, Instant};

use super::blur_timer::BlurTimer;
use super::selection::apply_suggestion;
use crate::config::SuggestionsConfig;
use crate::search_sink::SearchSink;
use crate::suggestions::{ReferenceData, Suggestion, generate_suggestions_with_limit};

/// Keys the controller reacts to; everything else edits the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// What a key or click did, so the host knows what to sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed (ArrowDown on an empty list)
    Ignored,
    /// Selection index moved; query untouched
    Navigated,
    /// A suggestion was merged into the query; the host must refresh its text
    QueryReplaced,
    /// The query was handed to the search sink
    Submitted,
    /// Popup dismissed and input blurred
    Dismissed,
}

/// Coarse state for rendering and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Blurred,
    FocusedNoSuggestions,
    FocusedWithSuggestions { selected: Option<usize> },
}

/// State behind the search input: query text, popup list, selection and focus
///
/// The list is always rebuilt wholesale and every rebuild clears the
/// selection, so `selected` is either `None` or a valid index.
#[derive(Debug, Clone)]
pub struct InputController {
    query: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    focused: bool,
    blur_timer: BlurTimer,
    max_suggestions: usize,
}

impl InputController {
    pub fn new(config: &SuggestionsConfig) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            selected: None,
            focused: false,
            blur_timer: BlurTimer::new(Duration::from_millis(config.blur_delay_ms)),
            max_suggestions: config.max_suggestions,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_blur_pending(&self) -> bool {
        self.blur_timer.is_pending()
    }

    pub fn phase(&self) -> ControllerPhase {
        if !self.focused {
            ControllerPhase::Blurred
        } else if self.suggestions.is_empty() {
            ControllerPhase::FocusedNoSuggestions
        } else {
            ControllerPhase::FocusedWithSuggestions {
                selected: self.selected,
            }
        }
    }

    /// Input gained focus
    ///
    /// Cancels a pending blur. An empty query gets the recent-search defaults;
    /// otherwise the last computed list is left alone.
    pub fn focus(&mut self, refs: &ReferenceData) {
        if self.blur_timer.cancel() {
            log::debug!("Pending blur cancelled by refocus");
        }
        self.focused = true;

        if self.query.is_empty() {
            self.recompute(refs);
        }
    }

    /// Input lost focus; the popup is cleared once the blur delay elapses
    pub fn blur(&mut self, now: Instant) {
        self.blur_timer.schedule(now);
    }

    /// Apply the delayed blur if its deadline has passed
    ///
    /// Returns true when the blur fired on this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.blur_timer.fire_if_due(now) {
            return false;
        }

        log::debug!("Blur delay elapsed, clearing suggestions");
        self.focused = false;
        self.clear_suggestions();
        true
    }

    /// Query text changed by typing
    pub fn change(&mut self, text: &str, refs: &ReferenceData) {
        self.query.clear();
        self.query.push_str(text);
        self.recompute(refs);
    }

    pub fn handle_key(&mut self, key: ControlKey, sink: &mut dyn SearchSink) -> KeyOutcome {
        match key {
            ControlKey::Down => self.select_next(),
            ControlKey::Up => self.select_previous(),
            ControlKey::Enter => match self.selected {
                Some(idx) => self.choose(idx),
                None => self.submit(sink),
            },
            ControlKey::Escape => self.dismiss(),
        }
    }

    /// Pointer click on popup row `index`, independent of the keyboard selection
    pub fn click(&mut self, index: usize) -> KeyOutcome {
        if index >= self.suggestions.len() {
            return KeyOutcome::Ignored;
        }
        self.choose(index)
    }

    fn select_next(&mut self) -> KeyOutcome {
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return KeyOutcome::Ignored;
        };

        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        });
        KeyOutcome::Navigated
    }

    fn select_previous(&mut self) -> KeyOutcome {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(idx) => Some(idx - 1),
        };
        KeyOutcome::Navigated
    }

    fn choose(&mut self, index: usize) -> KeyOutcome {
        let Some(suggestion) = self.suggestions.get(index) else {
            return KeyOutcome::Ignored;
        };

        log::debug!(
            "Selected {} suggestion {:?}",
            suggestion.kind,
            suggestion.label
        );
        self.query = apply_suggestion(&self.query, suggestion);
        self.clear_suggestions();

        // focus returns to the input
        self.blur_timer.cancel();
        self.focused = true;
        KeyOutcome::QueryReplaced
    }

    fn submit(&mut self, sink: &mut dyn SearchSink) -> KeyOutcome {
        sink.submit(&self.query);
        self.clear_suggestions();
        KeyOutcome::Submitted
    }

    fn dismiss(&mut self) -> KeyOutcome {
        self.clear_suggestions();
        self.blur_timer.cancel();
        self.focused = false;
        KeyOutcome::Dismissed
    }

    fn recompute(&mut self, refs: &ReferenceData) {
        self.suggestions = generate_suggestions_with_limit(&self.query, refs, self.max_suggestions);
        self.selected = None;
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.selected = None;
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(&SuggestionsConfig::default())
    }
}

#[cfg(test)]
#[path = "controller_state_tests.rs"]
mod controller_state_tests;
