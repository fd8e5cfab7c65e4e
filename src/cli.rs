use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gh-query")]
#[command(about = "Export GitHub org members and their merged pull requests as ndjson", version)]
#[command(after_help = "EXAMPLES:
    gh-query members xebia > members.ndjson
    gh-query prs members.ndjson > prs.ndjson
    gh-query members xebia | gh-query prs

Requires a GitHub token in the GITHUB_PAT environment variable.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Records requested per page (default: 80, or page_size from config.toml)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: Option<u32>,

    /// Debug logging and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve the members of an org
    #[command(after_help = "EXAMPLES:
    gh-query members xebia")]
    Members {
        /// The organisation, e.g. xebia
        org: String,
    },
    /// Download the merged pull requests of each member
    #[command(after_help = "EXAMPLES:
    gh-query prs members.ndjson
    cat members.ndjson | gh-query prs")]
    Prs {
        /// Members in ndjson format (the output of the members subcommand); stdin if omitted
        members: Option<PathBuf>,
    },
}
