use std::env;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keepcom_probe::{DEFAULT_BASE_URL, KeepcomClient, LoginOutcome, ProbeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keepcom_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match ProbeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: keepcom-probe [base_url]");
            eprintln!("  KEEPCOM_USERNAME / KEEPCOM_PASSWORD must be set");
            eprintln!("  base_url overrides KEEPCOM_BASE_URL (default: {DEFAULT_BASE_URL})");
            std::process::exit(1);
        }
    };

    // Optional positional override of the base URL
    if let Some(base_url) = env::args().nth(1) {
        config.set_base_url(&base_url);
    }

    let client = KeepcomClient::new(&config)?;

    println!("=== login ===");
    let run = client.run().await?;
    println!("login status: {}", run.login.status());
    println!("login response: {}", run.login.body_preview());

    if let LoginOutcome::Rejected { .. } = run.login {
        println!("login failed, cannot continue");
        return Ok(());
    }

    for (path, result) in &run.probes {
        println!("\n=== {path} ===");
        match result {
            Ok(report) => {
                println!("status: {}", report.status);
                println!("response: {}", report.body_preview);
            }
            Err(e) => println!("probe failed: {e:#}"),
        }
    }

    Ok(())
}
