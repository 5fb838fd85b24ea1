//! CLI mode implementation
//!
//! Provides the command-line interface for the search service: a `serve`
//! command for the HTTP API and one-shot search commands that run the
//! engine against a corpus file and print the JSON payload.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:4000";
pub const DEFAULT_CORPUS: &str = "corpus.json";

/// helpsearch CLI
#[derive(Parser)]
#[command(name = "helpsearch")]
#[command(about = "Fuzzy search over help-center articles and categories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP search API
    Serve(ServeArgs),
    /// Search published articles in a corpus file
    Articles(QueryArgs),
    /// Search active categories in a corpus file
    Categories(QueryArgs),
    /// Search articles and categories together
    Global(QueryArgs),
}

/// Server arguments
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short = 'a', long, env = "HELPSEARCH_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Path to the corpus JSON file
    #[arg(short = 'c', long, env = "HELPSEARCH_CORPUS", default_value = DEFAULT_CORPUS)]
    pub corpus: PathBuf,
}

impl ServeArgs {
    /// Defaults for server mode when no arguments were given, still
    /// honoring the environment variables
    pub fn from_env() -> Self {
        let addr = std::env::var("HELPSEARCH_ADDR")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| DEFAULT_ADDR.parse().expect("default address is valid"));
        let corpus = std::env::var("HELPSEARCH_CORPUS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS));
        Self { addr, corpus }
    }
}

/// One-shot search arguments
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Path to the corpus JSON file
    #[arg(short = 'c', long, env = "HELPSEARCH_CORPUS", default_value = DEFAULT_CORPUS)]
    pub corpus: PathBuf,

    /// Search terms (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of results (1-20)
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args() {
        let args = QueryArgs {
            corpus: PathBuf::from("corpus.json"),
            query: "reset password".to_string(),
            limit: Some(10),
        };
        assert_eq!(args.query, "reset password");
        assert_eq!(args.limit, Some(10));
    }

    #[test]
    fn test_cli_parses_search_command() {
        let cli = Cli::parse_from([
            "helpsearch",
            "articles",
            "--corpus",
            "docs.json",
            "--query",
            "billing",
            "--limit",
            "3",
        ]);
        match cli.command {
            Some(Commands::Articles(args)) => {
                assert_eq!(args.corpus, PathBuf::from("docs.json"));
                assert_eq!(args.query, "billing");
                assert_eq!(args.limit, Some(3));
            }
            _ => panic!("Expected articles command"),
        }
    }

    #[test]
    fn test_default_addr_parses() {
        let addr: SocketAddr = DEFAULT_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 4000);
    }
}
