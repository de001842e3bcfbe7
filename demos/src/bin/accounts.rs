//! Account balances
//!
//! Loads `keys.json` from the working directory, signs a token and prints
//! the `/v1/accounts` response body exactly as received, whatever the status.
//!
//! Run: cargo run --bin accounts

use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use upbit_rest::{UpbitRestClient, DEFAULT_KEY_FILE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Fails here, before any request, if the key file is missing or malformed
    let client = UpbitRestClient::from_key_file(DEFAULT_KEY_FILE)?;
    info!("Loaded credentials from {}", DEFAULT_KEY_FILE);

    let response = client.get_accounts_raw().await?;
    debug!("Account endpoint answered {}", response.status);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    writeln!(stdout)?;

    Ok(())
}
