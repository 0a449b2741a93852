//! Shape-specific state snapshots, one deep copy per recorded step
//!
//! Each generator family has its own snapshot payload. Constructors clone
//! the working state, and the `with_*` combinators attach the optional
//! context a particular step carries (search targets, probe bounds, visit
//! order, tentative distances). The cloning here is deliberate: it is what
//! keeps earlier steps untouched by everything the algorithm does later.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{GraphEdge, GraphNode};
use crate::trace::step::NodeId;

/// Deep, shape-specific copy of the working state at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snapshot {
    Sequence(SequenceSnapshot),
    Graph(GraphSnapshot),
    Matrix(MatrixSnapshot),
    Text(TextSnapshot),
}

/// State of a sequence-family run
///
/// The search algorithms attach `target`, probe bounds, and the outcome
/// fields; `found`/`found_index` are simply absent when the target was not
/// located (absence, not a -1 sentinel, signals "not found"). Heap sort
/// attaches `sorted`, the finished suffix the player shades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSnapshot {
    pub array: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorted: Vec<usize>,
}

impl SequenceSnapshot {
    pub fn of(array: &[i64]) -> Self {
        Self {
            array: array.to_vec(),
            target: None,
            found: None,
            found_index: None,
            left: None,
            right: None,
            mid: None,
            sorted: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_probe(mut self, left: usize, right: usize, mid: usize) -> Self {
        self.left = Some(left);
        self.right = Some(right);
        self.mid = Some(mid);
        self
    }

    pub fn with_found(mut self, index: usize) -> Self {
        self.found = Some(true);
        self.found_index = Some(index);
        self
    }

    pub fn with_sorted_suffix(mut self, suffix: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = suffix.into_iter().collect();
        self
    }
}

/// State of a graph-family run
///
/// `frontier` holds the explicit queue or stack contents; `distances` holds
/// tentative shortest-path estimates keyed by node id (`f64::INFINITY` means
/// unreached, and serializes as JSON `null`). A `BTreeMap` keeps the
/// serialized form deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visited: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frontier: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub distances: BTreeMap<NodeId, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<NodeId>,
}

impl GraphSnapshot {
    pub fn of(nodes: &[GraphNode], edges: &[GraphEdge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
            visited: Vec::new(),
            frontier: Vec::new(),
            distances: BTreeMap::new(),
            current: None,
        }
    }

    pub fn with_visited(mut self, visited: impl IntoIterator<Item = NodeId>) -> Self {
        self.visited = visited.into_iter().collect();
        self
    }

    pub fn with_frontier(mut self, frontier: impl IntoIterator<Item = NodeId>) -> Self {
        self.frontier = frontier.into_iter().collect();
        self
    }

    pub fn with_distances(mut self, distances: BTreeMap<NodeId, f64>) -> Self {
        self.distances = distances;
        self
    }

    pub fn with_current(mut self, current: NodeId) -> Self {
        self.current = Some(current);
        self
    }
}

/// State of a matrix-family run: the full grid as of this instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub grid: Vec<Vec<f64>>,
}

impl MatrixSnapshot {
    pub fn of(grid: &[Vec<f64>]) -> Self {
        Self {
            grid: grid.to_vec(),
        }
    }
}

/// State of a text-family run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSnapshot {
    pub text: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_at: Option<usize>,
}

impl TextSnapshot {
    pub fn of(text: &str, pattern: &str) -> Self {
        Self {
            text: text.to_owned(),
            pattern: pattern.to_owned(),
            text_index: None,
            pattern_index: None,
            match_at: None,
        }
    }

    pub fn with_probe(mut self, text_index: usize, pattern_index: usize) -> Self {
        self.text_index = Some(text_index);
        self.pattern_index = Some(pattern_index);
        self
    }

    pub fn with_match(mut self, offset: usize) -> Self {
        self.match_at = Some(offset);
        self
    }
}
