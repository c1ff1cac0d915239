use std::fmt;

use serde::Serialize;

/// Category of a suggestion shown in the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    FilterToken,
    RecentQuery,
    Person,
    RecentFile,
}

impl SuggestionKind {
    /// Filter tokens complete the trailing word; every other kind replaces the query
    pub fn replaces_trailing_word(self) -> bool {
        matches!(self, SuggestionKind::FilterToken)
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::FilterToken => write!(f, "filter"),
            SuggestionKind::RecentQuery => write!(f, "recent"),
            SuggestionKind::Person => write!(f, "person"),
            SuggestionKind::RecentFile => write!(f, "file"),
        }
    }
}

/// A single candidate completion offered while typing a query
///
/// Identity is `(kind, label)`; the description is display-only and does not
/// take part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    /// Text inserted into the query when the suggestion is chosen
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            kind,
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.label == other.label
    }
}

impl Eq for Suggestion {}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
