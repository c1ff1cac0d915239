//! Receiver for submitted queries
//!
//! The controller never runs a search itself; it hands the query text to a
//! [`SearchSink`] and moves on. What the sink does with it (and whether that
//! fails) is the host's business.

use chrono::{DateTime, Local};

pub trait SearchSink {
    /// Called with the query exactly as typed, untrimmed
    fn submit(&mut self, query: &str);
}

impl<F> SearchSink for F
where
    F: FnMut(&str),
{
    fn submit(&mut self, query: &str) {
        self(query)
    }
}

/// A search the user submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedSearch {
    pub query: String,
    pub submitted_at: DateTime<Local>,
}

/// Sink that keeps every submitted query, oldest first
#[derive(Debug, Default)]
pub struct SearchLog {
    entries: Vec<SubmittedSearch>,
}

impl SearchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SubmittedSearch] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&SubmittedSearch> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SearchSink for SearchLog {
    fn submit(&mut self, query: &str) {
        log::debug!("Search submitted: {:?}", query);
        self.entries.push(SubmittedSearch {
            query: query.to_string(),
            submitted_at: Local::now(),
        });
    }
}

#[cfg(test)]
#[path = "search_sink_tests.rs"]
mod search_sink_tests;
