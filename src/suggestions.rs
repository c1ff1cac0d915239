mod engine;
mod reference;
mod suggestion;
pub mod suggestion_render;

pub use engine::{MAX_SUGGESTIONS, generate_suggestions, generate_suggestions_with_limit, last_word};
pub use reference::{MAX_RECENT_QUERIES, ReferenceData};
pub use suggestion::{Suggestion, SuggestionKind};
