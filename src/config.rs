mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path};
pub use types::{Config, ReferenceConfig, SuggestionsConfig};
