//! Application run modes: logger init, completions, and the search pipeline.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Args, generate};
use crate::core::app;
use crate::core::config::Config;
use crate::core::error::SearchError;
use crate::core::extract::ResultDocument;
use crate::core::query::Query;
use crate::core::render;
use crate::core::search::SearchClient;

/// Initialize env_logger on stderr. `RUST_LOG` wins over the flag/config derived filter.
pub fn init_logger(args: &Args, config: &Config) {
    let filter = args.log_filter(config.debug);
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}

/// Print a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}

/// Build the query, fetch one page of results, and print them to stdout.
/// Returns the number of results printed.
pub async fn run_search(args: &Args, config: &Config) -> Result<usize, SearchError> {
    if args.query.is_empty() {
        return Err(SearchError::Usage);
    }

    let query = Query::from_cli(&args.query);
    log::info!(
        "Searching for {:?} with capabilities {:?}",
        query.free_text,
        query.capabilities
    );

    let client = SearchClient::new(config)?;
    let body = client.search(&query).await?;
    let document = ResultDocument::parse(&body)?;

    let stdout = io::stdout().lock();
    let rows = if args.json {
        render::write_json_lines(stdout, document.entries())?
    } else {
        render::write_table(stdout, document.entries())?
    };
    log::debug!("Rendered {} results", rows);
    Ok(rows)
}
