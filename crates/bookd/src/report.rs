//! Batch results and their human-readable rendering

use std::fmt;

use bookcache::{Lookup, Origin};
use bookstore::BookId;

/// Which kind of task produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    /// Cache-only probe, never reaches the backend
    Probe,
    /// Full read-through resolve
    Resolve,
}

/// Result of one task in a batch
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Position of the request in the batch
    pub seq: usize,
    /// Requested id
    pub id: BookId,
    /// Task kind
    pub task: Task,
    /// `None` for a probe miss or an unknown id
    pub lookup: Option<Lookup>,
}

/// All outcomes of a batch, ordered by request
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(mut outcomes: Vec<Outcome>) -> Self {
        outcomes.sort_by_key(|o| (o.seq, o.task));
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Outcomes of full resolves, skipping probes
    pub fn resolutions(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.task == Task::Resolve)
    }

    /// Resolves answered from memory
    pub fn from_cache(&self) -> usize {
        self.count_origin(Origin::Cache)
    }

    /// Resolves that went to the backend
    pub fn from_backend(&self) -> usize {
        self.count_origin(Origin::Backend)
    }

    /// Resolves for ids the backend does not know
    pub fn not_found(&self) -> usize {
        self.resolutions().filter(|o| o.lookup.is_none()).count()
    }

    /// Probes that found the id already cached
    pub fn probe_hits(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.task == Task::Probe && o.lookup.is_some())
            .count()
    }

    fn count_origin(&self, origin: Origin) -> usize {
        self.resolutions()
            .filter(|o| matches!(&o.lookup, Some(l) if l.origin == origin))
            .count()
    }
}

/// Prints the origin tag and the record for every found outcome.
/// Misses print nothing.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lookup in self.outcomes.iter().filter_map(|o| o.lookup.as_ref()) {
            writeln!(f, "{}", lookup.origin)?;
            writeln!(f, "{}", lookup.book)?;
        }
        Ok(())
    }
}
