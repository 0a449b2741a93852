//! Step and trace contracts for the TRACELENS engine
//!
//! The types in this module are the data contract between the generators and
//! the external player: an ordered sequence of immutable [`Step`] records,
//! each carrying a deep snapshot of algorithm state, the elements currently
//! being touched, a semantic action tag, and cumulative statistics.

pub mod snapshot;
pub mod step;

pub use self::snapshot::{
    GraphSnapshot, MatrixSnapshot, SequenceSnapshot, Snapshot, TextSnapshot,
};
pub use self::step::{Action, Cell, EdgeRef, Highlights, NodeId, Stats, Step, Trace};
