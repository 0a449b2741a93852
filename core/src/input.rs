//! Typed input payloads for trace generation
//!
//! [`TraceInput`] is the union of the four shape-family payloads the engine
//! consumes, mirroring the JSON the UI layer supplies. Ingestion through
//! [`TraceInput::from_json`] is the crate's only fallible surface: once an
//! input has parsed, generation itself never errors — malformed or
//! mismatched data degrades to the smallest valid trace instead.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::trace::snapshot::{
    GraphSnapshot, MatrixSnapshot, SequenceSnapshot, Snapshot, TextSnapshot,
};
use crate::trace::step::NodeId;

/// Errors raised while ingesting an input payload
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed input payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("input payload does not match any supported shape family")]
    UnrecognizedShape,
}

/// A node as supplied by the caller
///
/// Positions and labels are renderer pass-through; the engine only consumes
/// identifiers and, for tree-shaped data, the optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl GraphNode {
    /// The name descriptions refer to this node by
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

/// An edge as supplied by the caller; undirected unless flagged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub directed: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// User-supplied input, one variant per shape family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceInput {
    Graph {
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    },
    Matrix {
        #[serde(deserialize_with = "matrix_with_null_infinity")]
        matrix: Vec<Vec<f64>>,
    },
    Text {
        text: String,
        pattern: String,
    },
    Sequence {
        array: Vec<i64>,
    },
}

/// JSON has no infinity literal; `null` cells stand in for the no-edge
/// sentinel and deserialize to `f64::INFINITY`.
fn matrix_with_null_infinity<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<Option<f64>>> = Vec::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or(f64::INFINITY))
                .collect()
        })
        .collect())
}

impl TraceInput {
    /// Parses a JSON payload into the matching shape-family variant
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Converts an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputError> {
        serde_json::from_value(value).map_err(|_| InputError::UnrecognizedShape)
    }

    pub fn sequence(&self) -> Option<&[i64]> {
        match self {
            Self::Sequence { array } => Some(array),
            _ => None,
        }
    }

    pub fn graph(&self) -> Option<(&[GraphNode], &[GraphEdge])> {
        match self {
            Self::Graph { nodes, edges } => Some((nodes, edges)),
            _ => None,
        }
    }

    pub fn matrix(&self) -> Option<&[Vec<f64>]> {
        match self {
            Self::Matrix { matrix } => Some(matrix),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<(&str, &str)> {
        match self {
            Self::Text { text, pattern } => Some((text, pattern)),
            _ => None,
        }
    }

    /// Name of the shape family this payload belongs to, for diagnostics
    pub fn family_name(&self) -> &'static str {
        match self {
            Self::Sequence { .. } => "sequence",
            Self::Graph { .. } => "graph",
            Self::Matrix { .. } => "matrix",
            Self::Text { .. } => "text",
        }
    }

    /// Snapshot of the payload as-is, for fallback traces that only echo
    /// their input
    pub(crate) fn snapshot(&self) -> Snapshot {
        match self {
            Self::Sequence { array } => Snapshot::Sequence(SequenceSnapshot::of(array)),
            Self::Graph { nodes, edges } => Snapshot::Graph(GraphSnapshot::of(nodes, edges)),
            Self::Matrix { matrix } => Snapshot::Matrix(MatrixSnapshot::of(matrix)),
            Self::Text { text, pattern } => Snapshot::Text(TextSnapshot::of(text, pattern)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_family_payload() {
        let seq = TraceInput::from_json(r#"{"array": [3, 1, 2]}"#).expect("sequence");
        assert_eq!(seq.sequence(), Some(&[3, 1, 2][..]));

        let graph = TraceInput::from_json(
            r#"{"nodes": [{"id": "A"}, {"id": "B"}], "edges": [{"from": "A", "to": "B", "weight": 2}]}"#,
        )
        .expect("graph");
        let (nodes, edges) = graph.graph().expect("graph variant");
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges[0].weight, Some(2.0));
        assert!(!edges[0].directed);

        let text = TraceInput::from_json(r#"{"text": "ABAB", "pattern": "AB"}"#).expect("text");
        assert_eq!(text.text(), Some(("ABAB", "AB")));
    }

    #[test]
    fn null_matrix_cells_become_infinity() {
        let input =
            TraceInput::from_json(r#"{"matrix": [[0, 5], [null, 0]]}"#).expect("matrix");
        let matrix = input.matrix().expect("matrix variant");
        assert_eq!(matrix[0][1], 5.0);
        assert!(matrix[1][0].is_infinite());
    }

    #[test]
    fn unrecognized_payload_is_rejected() {
        let err = TraceInput::from_json(r#"{"points": [1, 2]}"#).expect_err("no family");
        assert!(matches!(err, InputError::UnrecognizedShape));

        let err = TraceInput::from_json("not json").expect_err("syntax");
        assert!(matches!(err, InputError::Parse(_)));
    }
}
