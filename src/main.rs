use active24_dns::{ChallengeProvider, DnsProvider};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

/// Manage ACME DNS-01 challenge records at Active24.
///
/// Credentials are read from ACTIVE24_API_KEY (or ACTIVE24_API_KEY_FILE),
/// the API base URL from ACTIVE24_API_URL.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the challenge TXT record
    Present(Challenge),
    /// Remove the challenge TXT record(s)
    Cleanup(Challenge),
}

#[derive(Args)]
struct Challenge {
    /// Domain the certificate is issued for
    domain: String,
    /// Challenge token
    token: String,
    /// Key authorization for the challenge
    key_auth: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let provider = DnsProvider::new().context("Failed to configure Active24 provider")?;

    match &cli.command {
        Command::Present(c) => provider
            .present(&c.domain, &c.token, &c.key_auth)
            .await
            .with_context(|| format!("Failed to present challenge for {}", c.domain)),
        Command::Cleanup(c) => provider
            .clean_up(&c.domain, &c.token, &c.key_auth)
            .await
            .with_context(|| format!("Failed to clean up challenge for {}", c.domain)),
    }
}
