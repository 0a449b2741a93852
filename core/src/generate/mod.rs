//! Per-family trace generators
//!
//! One generator per shape family, each resolving its algorithm kind once
//! at entry and then matching exhaustively. The families share nothing but
//! the recorder: every invocation works on its own deep copy of the input,
//! so a defect in one family cannot leak into another and concurrent calls
//! are trivially safe.

pub mod graph;
pub mod matrix;
mod recorder;
pub mod sequence;
pub mod text;

pub(crate) use self::recorder::TraceBuilder;

use crate::input::TraceInput;
use crate::trace::step::{Action, Highlights};
use crate::trace::{Snapshot, Trace};

/// Minimal trace for shapes with no generator family: an initialization
/// marker and a completion marker, echoing the input unchanged.
pub(crate) fn fallback(slug: &str, input: &TraceInput) -> Trace {
    let mut rec = TraceBuilder::new();
    let state = input.snapshot();
    rec.record(
        Action::Mark,
        format!("Initializing {}", slug),
        state.clone(),
        empty_highlights(&state),
    );
    rec.work();
    rec.record(
        Action::Complete,
        "Run complete",
        state.clone(),
        empty_highlights(&state),
    );
    rec.finish()
}

/// Empty highlights of the kind matching the snapshot's family
fn empty_highlights(state: &Snapshot) -> Highlights {
    match state {
        Snapshot::Sequence(_) | Snapshot::Text(_) => Highlights::indices([]),
        Snapshot::Graph(_) => Highlights::nodes([]),
        Snapshot::Matrix(_) => Highlights::cells([]),
    }
}
