//! The shared step recorder backing every generator family
//!
//! One `TraceBuilder` lives for exactly one generator invocation. It owns
//! step numbering (contiguous from zero), the cumulative work counters, and
//! the copy-on-record discipline: `record` takes an already-snapshotted
//! payload, stamps the current counters onto it, and appends. Counters only
//! ever increase, which is what makes the monotonic-stats property hold by
//! construction.

use crate::trace::step::{Action, Highlights, Stats, Step, Trace};
use crate::trace::Snapshot;

#[derive(Debug, Default)]
pub(crate) struct TraceBuilder {
    steps: Vec<Step>,
    stats: Stats,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one comparison
    pub fn compare(&mut self) {
        self.stats.comparisons += 1;
        self.stats.operations += 1;
    }

    /// Counts one exchange or element move
    pub fn swap(&mut self) {
        self.stats.swaps += 1;
        self.stats.operations += 1;
    }

    /// Counts one unit of work that is neither a comparison nor a swap
    /// (enqueue, relaxation write, placement, cell scan)
    pub fn work(&mut self) {
        self.stats.operations += 1;
    }

    /// Appends a step carrying the counters as of this instant
    pub fn record(
        &mut self,
        action: Action,
        description: impl Into<String>,
        data: Snapshot,
        highlights: Highlights,
    ) {
        self.steps.push(Step {
            id: self.steps.len(),
            description: description.into(),
            data,
            highlights,
            action,
            stats: self.stats,
        });
    }

    pub fn finish(self) -> Trace {
        Trace::from_steps(self.steps)
    }
}
