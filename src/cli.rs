// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lo")]
#[command(about = "Browse curated mod load orders per game version")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a loadorder.toml with the repository to read from
    Init {
        /// GitHub user owning the load order repository
        #[arg(long)]
        user: Option<String>,
        /// Repository name
        #[arg(long)]
        repo: Option<String>,
        /// Folder inside the repository holding the load order files
        #[arg(long)]
        path: Option<String>,
        /// Branch to read files from
        #[arg(long)]
        branch: Option<String>,
        /// Read load orders from a local directory instead of GitHub
        #[arg(long)]
        local_dir: Option<String>,
    },
    /// List available game versions
    Versions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the load order for a game version (defaults to the first one)
    Show {
        /// Raw version token, e.g. 154
        version: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Leave out mods that are no longer available
        #[arg(long)]
        hide_unavailable: bool,
    },
    /// Parse a local load order file
    Parse {
        /// Path to the text file
        file: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show which notation each line was recognized as
        #[arg(long)]
        explain: bool,
    },
}
