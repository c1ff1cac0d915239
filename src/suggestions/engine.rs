//! Suggestion generation
//!
//! Builds the popup list from the query text and the reference lists. The
//! list is rebuilt from scratch on every call; nothing is cached between
//! keystrokes.

use super::reference::ReferenceData;
use super::suggestion::{Suggestion, SuggestionKind};

/// Default cap on the number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 8;

/// Queries at most this many characters long still show recent searches;
/// longer ones start matching recent files instead
const SHORT_QUERY_LEN: usize = 2;

const MENTIONS_PREFIX: &str = "mentions:";

/// Segment after the final whitespace character
///
/// The whole query when it contains no whitespace, and empty when the query
/// is empty or ends in whitespace.
pub fn last_word(query: &str) -> &str {
    query.rsplit(char::is_whitespace).next().unwrap_or("")
}

/// Generate suggestions capped at [`MAX_SUGGESTIONS`]
pub fn generate_suggestions(query: &str, refs: &ReferenceData) -> Vec<Suggestion> {
    generate_suggestions_with_limit(query, refs, MAX_SUGGESTIONS)
}

/// Generate suggestions for `query`, keeping at most `limit` entries
///
/// Categories are appended in a fixed order (filter tokens, recent queries,
/// people, recent files) and are never re-ranked or de-duplicated against each
/// other. Filter tokens and people match the trailing word; recent files match
/// the whole query.
pub fn generate_suggestions_with_limit(
    query: &str,
    refs: &ReferenceData,
    limit: usize,
) -> Vec<Suggestion> {
    let word = last_word(query);
    let query_len = query.chars().count();

    let mut suggestions = Vec::new();

    if !word.is_empty() {
        suggestions.extend(filter_token_suggestions(word, &refs.filter_tokens));
    }

    if query_len <= SHORT_QUERY_LEN {
        suggestions.extend(recent_query_suggestions(&refs.recent_queries));
    }

    if !word.is_empty() {
        suggestions.extend(person_suggestions(word, &refs.people));
    }

    if query_len > SHORT_QUERY_LEN {
        suggestions.extend(recent_file_suggestions(query, &refs.recent_files));
    }

    suggestions.truncate(limit);
    suggestions
}

fn filter_token_suggestions<'a>(
    word: &'a str,
    tokens: &'a [String],
) -> impl Iterator<Item = Suggestion> + 'a {
    tokens
        .iter()
        .filter(move |token| token.starts_with(word))
        .map(|token| {
            let field = token.strip_suffix(':').unwrap_or(token);
            Suggestion::new(token.as_str(), SuggestionKind::FilterToken)
                .with_description(format!("Filter by {}", field))
        })
}

fn recent_query_suggestions(queries: &[String]) -> impl Iterator<Item = Suggestion> + '_ {
    queries.iter().map(|recent| {
        Suggestion::new(recent.as_str(), SuggestionKind::RecentQuery)
            .with_description("Recent search")
    })
}

fn person_suggestions<'a>(
    word: &str,
    people: &'a [String],
) -> impl Iterator<Item = Suggestion> + 'a {
    let needle = word.to_lowercase();
    people
        .iter()
        .filter(move |name| name.to_lowercase().contains(&needle))
        .map(|name| {
            Suggestion::new(
                format!("{}{}", MENTIONS_PREFIX, name),
                SuggestionKind::Person,
            )
            .with_description(format!("Find mentions of {}", name))
        })
}

fn recent_file_suggestions<'a>(
    query: &str,
    files: &'a [String],
) -> impl Iterator<Item = Suggestion> + 'a {
    let needle = query.to_lowercase();
    files
        .iter()
        .filter(move |file| file.to_lowercase().contains(&needle))
        .map(|file| {
            Suggestion::new(file.as_str(), SuggestionKind::RecentFile)
                .with_description("Recent file")
        })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
