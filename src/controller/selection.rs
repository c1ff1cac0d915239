//! Merging a chosen suggestion into the query text

use crate::suggestions::Suggestion;

/// Query text after choosing `suggestion`
///
/// Filter tokens replace only the trailing word; the earlier words are kept
/// and rejoined with single spaces. Every other kind replaces the whole query.
pub fn apply_suggestion(query: &str, suggestion: &Suggestion) -> String {
    if suggestion.kind.replaces_trailing_word() {
        replace_trailing_word(query, &suggestion.label)
    } else {
        suggestion.label.clone()
    }
}

/// Replace the last whitespace-separated word with `replacement`
///
/// An empty query, or one ending in whitespace, has no trailing word, so
/// `replacement` is appended as a new word instead.
pub fn replace_trailing_word(query: &str, replacement: &str) -> String {
    let mut words: Vec<&str> = query.split_whitespace().collect();
    let ends_in_word = query.chars().last().is_some_and(|ch| !ch.is_whitespace());

    if ends_in_word {
        words.pop();
    }
    words.push(replacement);
    words.join(" ")
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
