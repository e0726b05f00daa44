use anyhow::{Context, Result, bail};

use crate::cli::ServeArgs;
use crate::output::print_success;

/// Spawn the server binary as a subprocess and wait for it to exit.
pub async fn serve(args: &ServeArgs) -> Result<()> {
    let mut command = tokio::process::Command::new(&args.binary);
    if let Some(config) = &args.config {
        command.arg("--config").arg(config);
    }

    print_success(&format!("spawning {}", args.binary));
    let status = command
        .status()
        .await
        .with_context(|| format!("failed to spawn {}", args.binary))?;

    if !status.success() {
        bail!("server exited with {status}");
    }
    Ok(())
}
