//! Error type shared by every stage of a search.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Usage block printed when no query is given.
pub const USAGE: &str = "\
Usage: ollamasearch <query>

Use \"has:\" to filter by capability. For example:

\tollamasearch \"has:tools has:vision gemma\"

The query may be one quoted argument or spread across several arguments;
\"has:\" tokens are recognized either way.
";

/// Errors from building, sending, parsing, or printing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{}", USAGE)]
    Usage,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    HttpStatus(StatusCode),
    #[error("failed to parse response body: {0}")]
    Parse(#[from] std::str::Utf8Error),
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
