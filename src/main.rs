use std::env;

use dnsimple_sync::{Changes, Config, DnsimpleProvider, Provider};
use log::{error, info};

/// Without arguments prints the current endpoints as JSON. With a path,
/// applies the JSON change set in that file and prints the report.
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let provider = DnsimpleProvider::new(config).await?;

    match env::args().nth(1) {
        Some(path) => {
            let changes: Changes = serde_json::from_str(&tokio::fs::read_to_string(&path).await?)?;
            info!("Applying {} changes from {path}", changes.len());
            let report = provider.apply_changes(&changes).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => {
            let endpoints = provider.list_endpoints().await?;
            println!("{}", serde_json::to_string_pretty(&endpoints)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
