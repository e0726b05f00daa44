mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Doctor => {
            commands::doctor::doctor("mediq-server")?;
        }
        Commands::Serve(args) => {
            commands::serve::serve(args).await?;
        }
        Commands::Status => {
            commands::status::status(&cli.server).await?;
        }
    }

    Ok(())
}
