mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod paginate;
mod path;
mod responses;
mod types;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use client::GitHubClient;
use config::Config;
use error::{GhQueryError, Result};
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");
    init_logging(verbose);

    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "gh_query=debug,reqwest=warn,hyper=warn"
    } else {
        "info,reqwest=warn,hyper=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

async fn run() -> Result<()> {
    // The token is checked before arguments so a missing one always wins.
    let token = config::token_from_env()?;
    let config = Config::load()?;

    let cli = Cli::parse();
    let page_size = config.resolve_page_size(cli.page_size);
    let client = GitHubClient::new(config.endpoint()?, token);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Members { org } => {
            commands::members::list(&client, &org, page_size, &mut out).await?;
        }
        Commands::Prs { members: Some(path) } => {
            let file = File::open(&path).map_err(|e| GhQueryError::FileRead {
                path: path.display().to_string(),
                source: e,
            })?;
            commands::prs::list(&client, BufReader::new(file), page_size, &mut out).await?;
        }
        Commands::Prs { members: None } => {
            commands::prs::list(&client, io::stdin().lock(), page_size, &mut out).await?;
        }
    }

    Ok(())
}
