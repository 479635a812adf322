mod cli;
mod commands;
mod config;
mod constants;
mod loadorder;
mod sources;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use commands::init::InitOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let exit_code = match cli.command {
        Commands::Init {
            user,
            repo,
            path,
            branch,
            local_dir,
        } => {
            commands::init::init(InitOptions {
                user,
                repo,
                path,
                branch,
                local_dir,
            })?;
            0
        }
        Commands::Versions { json } => {
            commands::versions::versions(json).await?;
            0
        }
        Commands::Show {
            version,
            json,
            hide_unavailable,
        } => commands::show::show(version, json, hide_unavailable).await?,
        Commands::Parse {
            file,
            json,
            explain,
        } => {
            commands::parse::parse(file, json, explain)?;
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
