use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mediq")]
#[command(about = "MedIQ CLI — operate a MedIQ server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server base URL
    #[arg(
        short,
        long,
        global = true,
        env = "MEDIQ_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub server: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check environment variables and process dependencies
    Doctor,
    /// Spawn the MedIQ server as a subprocess
    Serve(ServeArgs),
    /// Check a running server's health
    Status,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Configuration file passed through to the server
    #[arg(long)]
    pub config: Option<String>,

    /// Server binary to spawn
    #[arg(long, default_value = "mediq-server")]
    pub binary: String,
}
