//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  ollamasearch gemma                          Models matching \"gemma\"
  ollamasearch \"has:tools has:vision gemma\"   Only models with tools and vision
  ollamasearch has:embedding                  Every embedding model
  ollamasearch --json has:thinking            One JSON object per result
  ollamasearch --completions bash             Generate bash completions

ENVIRONMENT:
  OLLAMA_BASE_URL      Search host (default: https://ollama.com)
  OLLAMASEARCHDEBUG    Any non-empty value logs each request to stderr
  RUST_LOG             Full log filter, overrides -v/-q
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Search the Ollama model library from the terminal",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Search terms; `has:<capability>` tokens filter by capability
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Print one JSON object per result instead of a table
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion script and exit
    #[arg(long, value_name = "SHELL", value_parser = clap::value_parser!(Shell))]
    pub completions: Option<Shell>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Default env_logger filter. Debug mode turns on debug records for this crate only.
    pub fn log_filter(&self, debug: bool) -> String {
        let level = self.log_level();
        if debug {
            format!("{},{}=debug", level, crate::core::app::NAME)
        } else {
            level.to_string()
        }
    }
}
