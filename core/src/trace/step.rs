//! The atomic unit of a trace: one immutable instant of algorithm execution
//!
//! A [`Step`] captures what an algorithm just did (its [`Action`]), the full
//! working state at that instant (its [`Snapshot`]), which elements were
//! touched (its [`Highlights`]), and the cumulative work counters valid as of
//! that instant. Steps are only produced through the recorder, which numbers
//! them contiguously from zero and copies state on record, so a step is never
//! retroactively mutated by anything that happens later in the run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::trace::snapshot::Snapshot;

/// Identifier of a graph node, preserving the caller's own naming
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Directed reference to an edge, by endpoint identifiers
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct EdgeRef {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeRef {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// A single grid position in a matrix snapshot
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Semantic tag describing the operation a step represents
///
/// The closed set the player keys its animation and color choices on.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Compare,
    Swap,
    Insert,
    Delete,
    Visit,
    Mark,
    Update,
    Merge,
    Split,
    Complete,
}

/// Cumulative work counters, valid as of the step that carries them
///
/// All three counters are monotonically non-decreasing across a trace;
/// `operations` tracks overall recorded work, including bookkeeping that is
/// neither a comparison nor a swap.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub operations: u64,
}

/// The elements a step flags as currently relevant for rendering
///
/// Exactly one kind is used per shape family: positional indices for the
/// sequence and text families, node/edge identifiers for the graph family,
/// grid cells for the matrix family. A graph discovery step may carry both
/// the discovered node and the edge it was reached through.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlights {
    Indices(Vec<usize>),
    Graph {
        nodes: Vec<NodeId>,
        edges: Vec<EdgeRef>,
    },
    Cells(Vec<Cell>),
}

impl Highlights {
    pub fn indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Indices(indices.into_iter().collect())
    }

    pub fn nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self::Graph {
            nodes: nodes.into_iter().collect(),
            edges: Vec::new(),
        }
    }

    /// A discovered node together with the edge it was reached through
    pub fn node_via_edge(node: NodeId, from: NodeId, to: NodeId) -> Self {
        Self::Graph {
            nodes: vec![node],
            edges: vec![EdgeRef::new(from, to)],
        }
    }

    pub fn cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self::Cells(cells.into_iter().collect())
    }
}

/// One immutable instant of algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Position in the trace; contiguous from zero, defines replay order
    pub id: usize,
    /// Deterministic, human-readable account of what just happened
    pub description: String,
    /// Deep, independent copy of the working state at this instant
    pub data: Snapshot,
    /// Elements currently being touched
    pub highlights: Highlights,
    /// Semantic operation tag
    pub action: Action,
    /// Cumulative counters as of this step
    pub stats: Stats,
}

/// The full ordered output of one generator run
///
/// A trace is created fresh on every generation request and never mutated
/// after being returned; the step vector is therefore only reachable through
/// read-only accessors. Sequence and graph traces end in exactly one
/// [`Action::Complete`] step; the matrix family carries no terminal marker
/// and the text family emits one `Complete` milestone per match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
