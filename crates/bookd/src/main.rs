//! bookd - issues a seeded batch of concurrent lookups through the book cache

mod driver;
mod report;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bookcache::BookCache;
use bookstore::{BookStore, Instrumented};
use clap::Parser;
use tracing::{debug, info};

use crate::driver::{run_batch, sample_keys, Mode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of requests in the batch
    #[arg(short = 'n', long, default_value_t = 10)]
    requests: usize,

    /// Ids are drawn uniformly from 1..=MAX_KEY
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    max_key: u64,

    /// Seed for id sampling (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated backing-store latency in milliseconds
    #[arg(short, long, default_value_t = 100)]
    latency_ms: u64,

    /// Catalog file with one `id | title | author | year` record per line
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// How each request is issued
    #[arg(long, value_enum, default_value_t = Mode::Split)]
    mode: Mode,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);

    info!("Starting bookd v{}", env!("CARGO_PKG_VERSION"));
    info!("Requests: {} ({:?} mode)", args.requests, args.mode);
    info!("Key range: 1..={}", args.max_key);
    info!("Seed: {}", seed);

    let store = match &args.catalog {
        Some(path) => BookStore::open(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => BookStore::builtin(),
    }
    .with_latency(Duration::from_millis(args.latency_ms));
    info!("Backing store: {} books, {:?} per fetch", store.len(), store.latency());

    let cache = Arc::new(BookCache::new(Instrumented::new(store)));
    let keys = sample_keys(seed, args.requests, args.max_key);

    let started = Instant::now();
    let report = run_batch(Arc::clone(&cache), &keys, args.mode).await?;
    let elapsed = started.elapsed();

    print!("{}", report);

    for outcome in report.resolutions().filter(|o| o.lookup.is_none()) {
        debug!(seq = outcome.seq, id = outcome.id, "no book with this id");
    }

    info!(
        "{} tasks finished in {:?}",
        report.outcomes().len(),
        elapsed
    );
    info!(
        "Resolved {} from cache, {} from database, {} not found ({} probe hits)",
        report.from_cache(),
        report.from_backend(),
        report.not_found(),
        report.probe_hits()
    );
    info!(
        "Cached books: {}, backing store calls: {}, hit ratio: {:.2}",
        cache.len(),
        cache.backend().calls(),
        cache.stats().hit_ratio()
    );

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
