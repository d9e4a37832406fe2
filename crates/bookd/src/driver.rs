//! Fan-out driver: issues a batch of concurrent lookups and joins them

use std::sync::Arc;

use anyhow::{Context, Result};
use bookcache::{BookCache, Lookup, Origin};
use bookstore::{Backend, BookId};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinSet;
use tracing::debug;

use crate::report::{Outcome, Report, Task};

/// How each request in a batch is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One read-through resolve per request
    Resolve,
    /// A cache probe and a read-through resolve per request, launched together
    Split,
}

/// Draw `count` ids uniformly from `1..=max_key`
///
/// The same seed always yields the same sequence.
pub fn sample_keys(seed: u64, count: usize, max_key: BookId) -> Vec<BookId> {
    assert!(max_key > 0, "max_key must be greater than 0");

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(1..=max_key)).collect()
}

/// Run one task per request (two in split mode) and wait for all of them
///
/// Lookups block on the backend, so each runs on tokio's blocking pool.
/// Not-found ids are ordinary outcomes. A task that panics fails the batch.
pub async fn run_batch<B>(cache: Arc<BookCache<B>>, keys: &[BookId], mode: Mode) -> Result<Report>
where
    B: Backend + 'static,
{
    let mut tasks = JoinSet::new();

    for (seq, &id) in keys.iter().enumerate() {
        if mode == Mode::Split {
            let cache = Arc::clone(&cache);
            tasks.spawn_blocking(move || Outcome {
                seq,
                id,
                task: Task::Probe,
                lookup: cache.get(id).map(|book| Lookup {
                    book,
                    origin: Origin::Cache,
                }),
            });
        }

        let cache = Arc::clone(&cache);
        tasks.spawn_blocking(move || Outcome {
            seq,
            id,
            task: Task::Resolve,
            lookup: cache.lookup(id),
        });
    }

    debug!("Waiting on {} tasks", tasks.len());

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined.context("lookup task failed")?);
    }

    Ok(Report::new(outcomes))
}
