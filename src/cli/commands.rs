//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Provider;

/// Drafter - draft a document together with an AI model, then save it
#[derive(Parser, Debug)]
#[command(name = "drafter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (prints token usage when the session ends)
    #[arg(short, long)]
    pub verbose: bool,

    /// Model provider, overrides the config file
    #[arg(short, long, value_enum)]
    pub provider: Option<Provider>,

    /// Model name, overrides the config file
    #[arg(short, long)]
    pub model: Option<String>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
