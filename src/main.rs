//! # ollamasearch
//!
//! Search the Ollama model library from the terminal and print the matches as a
//! compact table: name, capabilities, and a short description.
//!
//! ```text
//! ollamasearch "has:tools has:vision gemma"
//! ```

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use crate::core::error::SearchError;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();

    if let Some(shell) = args.completions {
        run::print_completions(shell);
        return;
    }

    let config = core::config::load();
    run::init_logger(&args, &config);

    if let Err(e) = run::run_search(&args, &config).await {
        match e {
            SearchError::Usage => eprint!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
