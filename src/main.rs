//! Command-line entry point for datastore-seed.
//!
//! Writes ten `item_kind` records (`id1`..`id10`) and prints the resulting
//! count as `Count <n>`. Logs go to stderr; set `RUST_LOG=info` to see them.

use anyhow::Context;
use clap::Parser;
use datastore_seed::{run_seed, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = run_seed(&cli).await.with_context(|| {
        format!(
            "Failed to seed kind '{}' in namespace '{}'",
            cli.seed.kind, cli.seed.namespace
        )
    })?;

    println!("Count {}", report.count);
    Ok(())
}
