use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wc_finals_dashboard::aggregate::build_win_counts;
use wc_finals_dashboard::dataset::{validate_finals, world_cup_finals};
use wc_finals_dashboard::server::{AppState, build_router};

#[derive(Debug, Parser)]
#[command(about = "FIFA World Cup winners dashboard")]
struct Args {
    /// Port to serve the dashboard on.
    #[arg(long, default_value_t = 8051)]
    port: u16,
    /// Enable debug-level request logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let records = world_cup_finals();
    validate_finals(&records).context("world cup finals dataset failed validation")?;
    let win_counts = build_win_counts(&records);
    tracing::info!(
        finals = records.len(),
        winners = win_counts.len(),
        "dataset loaded"
    );

    let state = Arc::new(AppState {
        records,
        win_counts,
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("dashboard listening on http://{addr}");
    axum::serve(listener, build_router(state))
        .await
        .context("dashboard server exited")?;
    Ok(())
}
