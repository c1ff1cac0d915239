use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::UnisearchError;
use crate::suggestions::{ReferenceData, generate_suggestions_with_limit};

/// Unified search bar with filter-token autocomplete
#[derive(Debug, Parser)]
#[command(name = "unisearch", version, about)]
pub struct Cli {
    /// Config file (defaults to ~/.config/unisearch/config.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the suggestions for QUERY and exit
    Suggest {
        /// Partial query text, may be empty
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Emit a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
}

/// Write the suggestions for `query` to `out`
///
/// Plain output is one `kind<TAB>label<TAB>description` line per suggestion.
pub fn write_suggestions(
    query: &str,
    config: &Config,
    json: bool,
    out: &mut impl Write,
) -> Result<(), UnisearchError> {
    let refs = ReferenceData::from_config(&config.reference);
    let suggestions =
        generate_suggestions_with_limit(query, &refs, config.suggestions.max_suggestions);

    if json {
        serde_json::to_writer_pretty(&mut *out, &suggestions)?;
        writeln!(out)?;
        return Ok(());
    }

    for suggestion in &suggestions {
        writeln!(
            out,
            "{}\t{}\t{}",
            suggestion.kind,
            suggestion.label,
            suggestion.description()
        )?;
    }
    Ok(())
}
