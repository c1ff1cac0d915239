//! Tests for InputController

use super::*;
use crate::suggestions::{MAX_SUGGESTIONS, SuggestionKind};
use proptest::prelude::*;

fn refs() -> ReferenceData {
    ReferenceData::default()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Sink that records submissions so tests can inspect them
#[derive(Default)]
struct Recorder {
    submitted: Vec<String>,
}

impl SearchSink for Recorder {
    fn submit(&mut self, query: &str) {
        self.submitted.push(query.to_string());
    }
}

fn focused_controller() -> InputController {
    let mut controller = InputController::default();
    controller.focus(&refs());
    controller
}

fn press(controller: &mut InputController, key: ControlKey) -> KeyOutcome {
    controller.handle_key(key, &mut Recorder::default())
}

mod focus_tests {
    use super::*;

    #[test]
    fn test_starts_blurred_and_empty() {
        let controller = InputController::default();
        assert_eq!(controller.phase(), ControllerPhase::Blurred);
        assert!(controller.suggestions().is_empty());
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn test_focus_on_empty_query_shows_recent_searches() {
        let controller = focused_controller();

        assert!(controller.is_focused());
        assert_eq!(controller.suggestions().len(), refs().recent_queries.len());
        assert!(
            controller
                .suggestions()
                .iter()
                .all(|s| s.kind == SuggestionKind::RecentQuery)
        );
    }

    #[test]
    fn test_focus_with_query_keeps_last_list() {
        let mut controller = focused_controller();
        controller.change("road", &refs());
        controller.handle_key(ControlKey::Escape, &mut Recorder::default());
        assert!(controller.suggestions().is_empty());

        controller.focus(&refs());

        assert!(controller.is_focused());
        assert!(controller.suggestions().is_empty());
        assert_eq!(controller.phase(), ControllerPhase::FocusedNoSuggestions);
    }

    #[test]
    fn test_blur_clears_only_after_delay() {
        let mut controller = focused_controller();
        let start = Instant::now();
        controller.blur(start);

        assert!(!controller.tick(start + ms(199)));
        assert!(controller.is_focused());
        assert!(!controller.suggestions().is_empty());

        assert!(controller.tick(start + ms(200)));
        assert_eq!(controller.phase(), ControllerPhase::Blurred);
        assert!(controller.suggestions().is_empty());
    }

    #[test]
    fn test_refocus_cancels_pending_blur() {
        let mut controller = focused_controller();
        let start = Instant::now();
        controller.blur(start);
        assert!(controller.is_blur_pending());

        controller.focus(&refs());

        assert!(!controller.is_blur_pending());
        assert!(!controller.tick(start + ms(1000)));
        assert!(controller.is_focused());
    }

    #[test]
    fn test_click_after_blur_wins_over_delayed_clear() {
        let mut controller = focused_controller();
        let start = Instant::now();
        controller.blur(start);

        let outcome = controller.click(1);

        assert_eq!(outcome, KeyOutcome::QueryReplaced);
        assert_eq!(controller.query(), refs().recent_queries[1]);
        assert!(!controller.tick(start + ms(500)));
        assert!(controller.is_focused());
    }

    #[test]
    fn test_configured_blur_delay() {
        let config = SuggestionsConfig {
            blur_delay_ms: 50,
            ..SuggestionsConfig::default()
        };
        let mut controller = InputController::new(&config);
        controller.focus(&refs());
        let start = Instant::now();
        controller.blur(start);

        assert!(controller.tick(start + ms(50)));
    }
}

mod typing_tests {
    use super::*;

    #[test]
    fn test_change_recomputes_and_resets_selection() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);
        press(&mut controller, ControlKey::Down);
        assert_eq!(controller.selected_index(), Some(1));

        controller.change("ty", &refs());

        assert_eq!(controller.query(), "ty");
        assert_eq!(controller.selected_index(), None);
        assert_eq!(controller.suggestions()[0].label, "type:");
    }

    #[test]
    fn test_change_respects_configured_cap() {
        let config = SuggestionsConfig {
            max_suggestions: 3,
            ..SuggestionsConfig::default()
        };
        let mut controller = InputController::new(&config);
        controller.focus(&refs());
        controller.change("a", &refs());

        assert_eq!(controller.suggestions().len(), 3);
    }

    #[test]
    fn test_change_to_unmatched_query_empties_list() {
        let mut controller = focused_controller();
        controller.change("zzzzzz", &refs());

        assert!(controller.suggestions().is_empty());
        assert_eq!(controller.phase(), ControllerPhase::FocusedNoSuggestions);
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_down_selects_first_then_advances() {
        let mut controller = focused_controller();

        assert_eq!(press(&mut controller, ControlKey::Down), KeyOutcome::Navigated);
        assert_eq!(controller.selected_index(), Some(0));

        press(&mut controller, ControlKey::Down);
        assert_eq!(controller.selected_index(), Some(1));
    }

    #[test]
    fn test_down_clamps_at_last_index() {
        let mut controller = focused_controller();
        let last = controller.suggestions().len() - 1;

        for _ in 0..20 {
            press(&mut controller, ControlKey::Down);
        }

        assert_eq!(controller.selected_index(), Some(last));
    }

    #[test]
    fn test_down_on_empty_list_is_ignored() {
        let mut controller = focused_controller();
        controller.change("zzzzzz", &refs());

        assert_eq!(press(&mut controller, ControlKey::Down), KeyOutcome::Ignored);
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn test_up_from_first_clears_selection() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);

        press(&mut controller, ControlKey::Up);
        assert_eq!(controller.selected_index(), None);

        press(&mut controller, ControlKey::Up);
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn test_up_moves_back_one() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);
        press(&mut controller, ControlKey::Down);
        press(&mut controller, ControlKey::Down);

        press(&mut controller, ControlKey::Up);
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.phase(), ControllerPhase::FocusedWithSuggestions {
            selected: Some(1)
        });
    }
}

mod enter_tests {
    use super::*;

    #[test]
    fn test_enter_with_filter_token_replaces_trailing_word() {
        let mut controller = focused_controller();
        controller.change("find ty", &refs());
        press(&mut controller, ControlKey::Down);

        let outcome = press(&mut controller, ControlKey::Enter);

        assert_eq!(outcome, KeyOutcome::QueryReplaced);
        assert_eq!(controller.query(), "find type:");
        assert!(controller.suggestions().is_empty());
        assert_eq!(controller.selected_index(), None);
        assert!(controller.is_focused());
    }

    #[test]
    fn test_enter_with_person_replaces_whole_query() {
        let mut controller = focused_controller();
        controller.change("find bob", &refs());
        press(&mut controller, ControlKey::Down);

        press(&mut controller, ControlKey::Enter);

        assert_eq!(controller.query(), "mentions:Bob Smith");
    }

    #[test]
    fn test_enter_without_selection_submits_verbatim() {
        let mut controller = focused_controller();
        controller.change(" type:pdf ", &refs());
        let mut recorder = Recorder::default();

        let outcome = controller.handle_key(ControlKey::Enter, &mut recorder);

        assert_eq!(outcome, KeyOutcome::Submitted);
        assert_eq!(recorder.submitted, vec![" type:pdf "]);
        assert_eq!(controller.query(), " type:pdf ");
        assert!(controller.suggestions().is_empty());
        assert!(controller.is_focused());
    }

    #[test]
    fn test_enter_with_selection_does_not_submit() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);
        let mut recorder = Recorder::default();

        controller.handle_key(ControlKey::Enter, &mut recorder);

        assert!(recorder.submitted.is_empty());
        assert_eq!(controller.query(), refs().recent_queries[0]);
    }

    #[test]
    fn test_click_ignores_keyboard_selection() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);

        controller.click(2);

        assert_eq!(controller.query(), refs().recent_queries[2]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut controller = focused_controller();
        assert_eq!(controller.click(99), KeyOutcome::Ignored);
        assert_eq!(controller.query(), "");
    }
}

mod escape_tests {
    use super::*;

    #[test]
    fn test_escape_clears_and_blurs() {
        let mut controller = focused_controller();
        press(&mut controller, ControlKey::Down);

        assert_eq!(press(&mut controller, ControlKey::Escape), KeyOutcome::Dismissed);
        assert!(controller.suggestions().is_empty());
        assert_eq!(controller.selected_index(), None);
        assert_eq!(controller.phase(), ControllerPhase::Blurred);
    }

    #[test]
    fn test_escape_keeps_query_text() {
        let mut controller = focused_controller();
        controller.change("report", &refs());
        press(&mut controller, ControlKey::Escape);
        assert_eq!(controller.query(), "report");
    }

    #[test]
    fn test_escape_cancels_pending_blur() {
        let mut controller = focused_controller();
        controller.blur(Instant::now());
        press(&mut controller, ControlKey::Escape);
        assert!(!controller.is_blur_pending());
    }
}

mod property_tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Action {
        Key(ControlKey),
        Type(String),
        Click(usize),
        Focus,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Key(ControlKey::Up)),
            Just(Action::Key(ControlKey::Down)),
            Just(Action::Key(ControlKey::Enter)),
            Just(Action::Key(ControlKey::Escape)),
            "[a-z: ]{0,6}".prop_map(Action::Type),
            (0usize..10).prop_map(Action::Click),
            Just(Action::Focus),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_selection_always_in_range(actions in prop::collection::vec(action(), 0..30)) {
            let refs = refs();
            let mut controller = InputController::default();
            let mut recorder = Recorder::default();

            for action in actions {
                match action {
                    Action::Key(key) => {
                        controller.handle_key(key, &mut recorder);
                    }
                    Action::Type(text) => controller.change(&text, &refs),
                    Action::Click(idx) => {
                        controller.click(idx);
                    }
                    Action::Focus => controller.focus(&refs),
                }

                prop_assert!(controller.suggestions().len() <= MAX_SUGGESTIONS);
                if let Some(idx) = controller.selected_index() {
                    prop_assert!(idx < controller.suggestions().len());
                }
            }
        }

        #[test]
        fn prop_escape_always_clears(
            actions in prop::collection::vec(action(), 0..20)
        ) {
            let refs = refs();
            let mut controller = InputController::default();
            let mut recorder = Recorder::default();

            for action in actions {
                match action {
                    Action::Key(key) => {
                        controller.handle_key(key, &mut recorder);
                    }
                    Action::Type(text) => controller.change(&text, &refs),
                    Action::Click(idx) => {
                        controller.click(idx);
                    }
                    Action::Focus => controller.focus(&refs),
                }
            }

            controller.handle_key(ControlKey::Escape, &mut recorder);
            prop_assert!(controller.suggestions().is_empty());
            prop_assert_eq!(controller.selected_index(), None);
        }
    }
}
