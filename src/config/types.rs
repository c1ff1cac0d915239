// Configuration type definitions

use serde::Deserialize;

use crate::controller::DEFAULT_BLUR_DELAY_MS;
use crate::suggestions::MAX_SUGGESTIONS;

fn default_max_suggestions() -> usize {
    MAX_SUGGESTIONS
}

fn default_blur_delay_ms() -> u64 {
    DEFAULT_BLUR_DELAY_MS
}

/// Popup behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionsConfig {
    /// Longest list the popup shows
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// How long a blur waits before clearing the popup
    #[serde(default = "default_blur_delay_ms")]
    pub blur_delay_ms: u64,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            max_suggestions: default_max_suggestions(),
            blur_delay_ms: default_blur_delay_ms(),
        }
    }
}

/// Reference lists; `None` means "use the built-in list"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ReferenceConfig {
    #[serde(default)]
    pub filter_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub recent_queries: Option<Vec<String>>,
    #[serde(default)]
    pub people: Option<Vec<String>>,
    #[serde(default)]
    pub recent_files: Option<Vec<String>>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}
