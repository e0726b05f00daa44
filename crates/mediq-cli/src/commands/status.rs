use anyhow::{Context, Result};
use colored::Colorize;

/// Query a running server's health endpoint and report the outcome.
pub async fn status(server: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{server}/health"))
        .send()
        .await
        .with_context(|| format!("failed to reach {server}"))?;

    let code = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    if code == 200 {
        println!("{} {} is {}", "✓".green(), server.cyan(), "healthy".green());
        if !body.is_empty() {
            println!("  {body}");
        }
    } else {
        println!(
            "{} {} returned {} {}",
            "✗".red(),
            server.cyan(),
            code.to_string().red(),
            body
        );
    }
    Ok(())
}
