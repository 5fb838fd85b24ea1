//! helpsearch HTTP service & CLI (Rust)
//!
//! Dual-mode application:
//! - Server Mode (default): JSON-over-HTTP search API for the help-center
//!   platform (`/search/articles`, `/search/categories`, `/search/global`)
//! - CLI Mode: one-shot searches against a corpus file, printing the same
//!   JSON payloads to stdout

mod api;
mod cli;
mod config;
mod corpus;
mod error;
mod search;

use anyhow::Result;
use api::AppState;
use clap::Parser;
use cli::{Cli, Commands, QueryArgs, ServeArgs};
use config::SearchConfig;
use corpus::CorpusStore;
use search::{SearchCoordinator, SearchQuery};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, HTTP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        run_cli_mode().await
    } else {
        run_server_mode(ServeArgs::from_env()).await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Some(Commands::Serve(args)) => {
            return serve(args).await;
        }
        Some(Commands::Articles(args)) => execute_articles_cli(args),
        Some(Commands::Categories(args)) => execute_categories_cli(args),
        Some(Commands::Global(args)) => execute_global_cli(args),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute the articles search command in CLI mode
fn execute_articles_cli(args: QueryArgs) -> Result<String> {
    let store = CorpusStore::load(&args.corpus)?;
    let coordinator = SearchCoordinator::new(SearchConfig::from_env());
    let request = SearchQuery {
        query: args.query,
        limit: args.limit,
    };

    let response = coordinator
        .search_articles(&store.published_articles(), &request)
        .map_err(|e| anyhow::anyhow!(e.message()))?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Execute the categories search command in CLI mode
fn execute_categories_cli(args: QueryArgs) -> Result<String> {
    let store = CorpusStore::load(&args.corpus)?;
    let coordinator = SearchCoordinator::new(SearchConfig::from_env());
    let request = SearchQuery {
        query: args.query,
        limit: args.limit,
    };

    let response = coordinator
        .search_categories(&store.active_categories(), &request)
        .map_err(|e| anyhow::anyhow!(e.message()))?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Execute the global search command in CLI mode
fn execute_global_cli(args: QueryArgs) -> Result<String> {
    let store = CorpusStore::load(&args.corpus)?;
    let coordinator = SearchCoordinator::new(SearchConfig::from_env());
    let request = SearchQuery {
        query: args.query,
        limit: args.limit,
    };

    let response = coordinator
        .search_global(
            &store.published_articles(),
            &store.active_categories(),
            &request,
        )
        .map_err(|e| anyhow::anyhow!(e.message()))?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Map an error to a process exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("validation") || err_str.contains("usage") {
        1 // Invalid arguments or usage error
    } else if err_str.contains("corpus") {
        2 // Corpus file error
    } else {
        5 // Other application errors
    }
}

/// Run in HTTP server mode
async fn run_server_mode(args: ServeArgs) -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    serve(args).await
}

/// Load the corpus and serve the search API
async fn serve(args: ServeArgs) -> Result<()> {
    let store = CorpusStore::load(&args.corpus)?;
    info!(
        "Loaded corpus from {}: {} articles, {} categories",
        args.corpus.display(),
        store.article_count(),
        store.category_count()
    );

    let state = AppState::new(store, SearchCoordinator::new(SearchConfig::from_env()));
    api::serve(args.addr, state).await
}
