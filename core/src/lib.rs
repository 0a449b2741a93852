//! TRACELENS core: an instrumented algorithm execution trace engine
//!
//! This crate runs a chosen algorithm against user-supplied input and
//! materializes the complete, ordered sequence of [`Step`](trace::Step)
//! records an external player replays: each step carries a deep snapshot of
//! the working state, the elements currently being touched, a semantic
//! action tag, and cumulative work counters. Generation is eager, purely
//! synchronous, and deterministic — [`build_trace`] is a pure function of
//! algorithm identity and input, so identical calls yield identical traces.
//!
//! # Architecture
//! - [`classify`] maps an algorithm identity to its presentation shapes and
//!   curated default samples.
//! - [`generate`] holds one trace generator per shape family (sequence,
//!   graph, matrix, text), each resolving its algorithm kind once and
//!   matching exhaustively.
//! - [`engine`] assembles the two: resolve the primary shape, dispatch the
//!   matching family, return the finished [`Trace`](trace::Trace).
//!
//! Generation never errors: malformed, empty, or mismatched input degrades
//! to the smallest valid trace for the resolved family. The only fallible
//! surface is JSON ingestion through [`TraceInput::from_json`].

pub mod classify;
pub mod engine;
pub mod generate;
pub mod input;
pub mod trace;

pub use self::classify::{
    default_sample, resolve_shapes, visualization_config, Shape, VisualizationConfig,
};
pub use self::engine::build_trace;
pub use self::input::{GraphEdge, GraphNode, InputError, TraceInput};
pub use self::trace::{
    Action, Cell, EdgeRef, GraphSnapshot, Highlights, MatrixSnapshot, NodeId, SequenceSnapshot,
    Snapshot, Stats, Step, TextSnapshot, Trace,
};
