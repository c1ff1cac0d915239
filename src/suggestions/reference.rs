//! Lookup lists the suggestion engine matches against
//!
//! The host application owns these lists. The engine only reads them, so a
//! single computation always sees one consistent snapshot.

use crate::config::ReferenceConfig;

/// Most recent searches kept when the host records a submitted query
pub const MAX_RECENT_QUERIES: usize = 20;

const DEFAULT_FILTER_TOKENS: &[&str] = &[
    "type:", "source:", "owner:", "mentions:", "before:", "after:", "shared:",
];

const DEFAULT_RECENT_QUERIES: &[&str] = &[
    "quarterly report",
    "design system",
    "budget 2024",
    "meeting notes",
];

const DEFAULT_PEOPLE: &[&str] = &[
    "Alice Johnson",
    "Bob Smith",
    "Carol Williams",
    "David Brown",
    "Emma Davis",
];

const DEFAULT_RECENT_FILES: &[&str] = &[
    "Q4 Financial Report.xlsx",
    "Product Roadmap.pptx",
    "Team Meeting Notes.docx",
    "Design System Guidelines.pdf",
    "Budget Planning 2024.xlsx",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub filter_tokens: Vec<String>,
    pub recent_queries: Vec<String>,
    pub people: Vec<String>,
    pub recent_files: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            filter_tokens: owned(DEFAULT_FILTER_TOKENS),
            recent_queries: owned(DEFAULT_RECENT_QUERIES),
            people: owned(DEFAULT_PEOPLE),
            recent_files: owned(DEFAULT_RECENT_FILES),
        }
    }
}

impl ReferenceData {
    /// All four lists empty; nothing will ever match
    pub fn empty() -> Self {
        Self {
            filter_tokens: Vec::new(),
            recent_queries: Vec::new(),
            people: Vec::new(),
            recent_files: Vec::new(),
        }
    }

    /// Build from the `[reference]` config section
    ///
    /// Each list left out of the config falls back to the built-in sample data
    /// on its own, so overriding `people` keeps the default filter tokens.
    pub fn from_config(config: &ReferenceConfig) -> Self {
        let defaults = Self::default();
        Self {
            filter_tokens: config
                .filter_tokens
                .clone()
                .unwrap_or(defaults.filter_tokens),
            recent_queries: config
                .recent_queries
                .clone()
                .unwrap_or(defaults.recent_queries),
            people: config.people.clone().unwrap_or(defaults.people),
            recent_files: config
                .recent_files
                .clone()
                .unwrap_or(defaults.recent_files),
        }
    }

    /// Move a submitted query to the front of `recent_queries`
    ///
    /// Blank queries are ignored. An existing identical entry is removed first
    /// and the list is trimmed to [`MAX_RECENT_QUERIES`].
    pub fn record_recent_query(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.recent_queries.retain(|existing| existing != query);
        self.recent_queries.insert(0, query.to_string());
        self.recent_queries.truncate(MAX_RECENT_QUERIES);
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod reference_tests;
