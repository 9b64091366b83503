//! Command-line interface for logship
//!
//! # Usage Examples
//!
//! ```bash
//! # Send 50 records to a local ingestion API, one every 2 seconds
//! logship
//!
//! # Faster run against a remote endpoint
//! logship \
//!   --base-url http://collector.internal:5000 \
//!   --path /api/logs \
//!   --count 200 \
//!   --interval 250ms
//!
//! # Deterministic record sequence for demos
//! logship --seed 42 --count 10 --interval 1s
//! ```

use clap::Parser;
use logship::config::{endpoint_url, parse_duration};
use logship::{DeliveryPipeline, LogSender};
use logship_generator::RecordGenerator;
use tracing::info;

#[derive(Parser)]
#[command(name = "logship")]
#[command(about = "Generate synthetic logs and ship them to an HTTP ingestion API")]
#[command(long_about = None)]
struct Cli {
    /// Base URL of the ingestion API
    #[arg(long, env = "LOGSHIP_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// Endpoint path appended to the base URL
    #[arg(long, default_value = "/api/logs")]
    path: String,

    /// Number of records to generate and send
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Pause between consecutive sends ("2s", "500ms", "1m"; bare numbers are seconds)
    #[arg(long, default_value = "2s")]
    interval: String,

    /// Random seed for deterministic record generation (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the progress stream on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let interval = parse_duration(&cli.interval)?;
    let endpoint = endpoint_url(&cli.base_url, &cli.path);

    println!("logship - synthetic log shipper");
    println!("Endpoint: {endpoint}");
    println!("Sending {} records, one every {interval:?}", cli.count);

    let generator = match cli.seed {
        Some(seed) => RecordGenerator::with_seed(seed),
        None => RecordGenerator::new(),
    };
    let sender = LogSender::new(&endpoint);
    let pipeline = DeliveryPipeline::new(generator, sender, cli.count, interval);

    let shutdown = setup_shutdown_handler();
    let summary = pipeline.run(shutdown).await;

    // The run counts as complete however many individual sends failed.
    if summary.interrupted {
        println!("Delivery interrupted: {summary}");
    } else {
        println!("Delivery complete: {summary}");
    }

    Ok(())
}

/// Sets up a shutdown signal handler
fn setup_shutdown_handler() -> tokio::sync::broadcast::Receiver<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        info!("Received interrupt signal (Ctrl+C)");
        let _ = shutdown_tx.send(());
    });

    shutdown_rx
}
