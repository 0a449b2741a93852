//! Visualization classifier: algorithm identity to presentation shapes
//!
//! Resolution is three-tier, first hit wins: an exact curated lookup on the
//! slug, an exact curated lookup on the normalized category, then ordered
//! keyword inference over the slug. The keyword order is a deliberate design
//! decision, not incidental — sort and search checks run before the generic
//! tree check so that a slug like `tree-sort` lands on the sequence family.
//! Resolution never fails; an unknown identity degrades to the documented
//! `[Sequence, Bars]` fallback with its ten-element sample.

use serde::{Deserialize, Serialize};

use crate::input::{GraphEdge, GraphNode, TraceInput};
use crate::trace::step::NodeId;

/// The closed vocabulary of presentation shapes
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Sequence,
    Bars,
    Matrix,
    Tree,
    BinaryTree,
    Graph,
    LinkedList,
    Stack,
    Queue,
    Heap,
    HashTable,
    Geometric,
    String,
    NetworkFlow,
    Trie,
    SegmentTree,
    FenwickTree,
    Grid,
    RecursionTree,
    StateMachine,
}

const SEQ_BARS: &[Shape] = &[Shape::Sequence, Shape::Bars];

/// Curated slug/category table, ported from the catalog the player ships
/// with. Keys are exact; categories are normalized before lookup.
fn curated_shapes(key: &str) -> Option<&'static [Shape]> {
    use Shape::*;
    let shapes: &'static [Shape] = match key {
        // Searching
        "searching" => &[Sequence, Bars, BinaryTree],
        "linear-search" | "jump-search" | "interpolation-search" | "exponential-search"
        | "fibonacci-search" | "ternary-search" => SEQ_BARS,
        "binary-search" => &[Sequence, Bars, BinaryTree],

        // Sorting
        "sorting" | "bubble-sort" | "selection-sort" | "insertion-sort" | "radix-sort"
        | "shell-sort" | "tim-sort" => SEQ_BARS,
        "merge-sort" | "quick-sort" => &[Sequence, Bars, RecursionTree],
        "heap-sort" => &[Sequence, Bars, Heap],
        "counting-sort" | "bucket-sort" => &[Sequence, Bars, HashTable],
        "tree-sort" => &[Sequence, BinaryTree],

        // Graph
        "graph" | "kruskal" => &[Graph],
        "bfs" => &[Graph, Queue],
        "dfs" | "topological-sort" => &[Graph, Stack],
        "dijkstra" | "prim" => &[Graph, Heap],
        "bellman-ford" => &[Graph, Matrix],
        "floyd-warshall" => &[Matrix, Graph],

        // Tree
        "tree" => &[BinaryTree, Tree],
        "bst" | "avl" | "red-black" => &[BinaryTree],
        "b-tree" => &[Tree],
        "segment-tree" => &[SegmentTree, Tree],
        "fenwick-tree" => &[FenwickTree, Sequence],
        "trie" => &[Trie],
        "binary-heap" => &[Heap, BinaryTree],

        // Dynamic programming
        "dynamic-programming" | "dp" | "coin-change" | "rod-cutting" => &[Matrix, Sequence],
        "knapsack" => &[Matrix],
        "lcs" | "edit-distance" => &[Matrix, String],
        "lis" => &[Sequence, Matrix],
        "fibonacci" => &[Sequence, RecursionTree],

        // String
        "string" | "z-algorithm" | "suffix-array" => &[String, Sequence],
        "kmp" => &[String, Sequence],
        "rabin-karp" => &[String, HashTable],
        "manacher" => &[String],

        // Linked list
        "linked-list" | "doubly-linked-list" | "circular-linked-list" => &[LinkedList],

        // Stack & queue
        "stack" => &[Stack, Sequence],
        "queue" => &[Queue, Sequence],
        "deque" => &[Queue],
        "priority-queue" => &[Heap],

        // Hashing
        "hashing" | "hash-table" => &[HashTable],

        // Geometry
        "geometric" | "convex-hull" | "closest-pair" | "line-intersection" => &[Geometric],

        // Network flow
        "network-flow" => &[NetworkFlow, Graph],
        "ford-fulkerson" | "max-flow" => &[NetworkFlow],

        // Backtracking
        "backtracking" => &[Grid, RecursionTree],
        "n-queens" | "sudoku" | "maze" => &[Grid],

        // Divide and conquer
        "divide-and-conquer" => &[RecursionTree, Sequence],
        "karatsuba" => &[RecursionTree],
        "strassen" => &[Matrix, RecursionTree],

        // Greedy
        "greedy" => &[Sequence, Graph],
        "activity-selection" | "fractional-knapsack" => SEQ_BARS,
        "huffman" => &[BinaryTree],

        _ => return None,
    };
    Some(shapes)
}

/// Keyword inference over the slug, evaluated in this fixed order
fn inferred_shapes(slug: &str) -> Option<&'static [Shape]> {
    use Shape::*;
    let s = slug.to_lowercase();
    if s.contains("sort") {
        return Some(SEQ_BARS);
    }
    if s.contains("search") {
        return Some(SEQ_BARS);
    }
    if s.contains("tree") {
        return Some(&[BinaryTree, Tree]);
    }
    if s.contains("graph") || s.contains("path") {
        return Some(&[Graph]);
    }
    if s.contains("matrix") {
        return Some(&[Matrix]);
    }
    if s.contains("string") || s.contains("pattern") {
        return Some(&[String]);
    }
    if s.contains("linked") || s.contains("list") {
        return Some(&[LinkedList]);
    }
    if s.contains("stack") {
        return Some(&[Stack]);
    }
    if s.contains("queue") {
        return Some(&[Queue]);
    }
    if s.contains("heap") {
        return Some(&[Heap]);
    }
    if s.contains("hash") {
        return Some(&[HashTable]);
    }
    if s.contains("dp") || s.contains("dynamic") {
        return Some(&[Matrix, Sequence]);
    }
    if s.contains("geometric") || s.contains("point") {
        return Some(&[Geometric]);
    }
    if s.contains("trie") {
        return Some(&[Trie]);
    }
    None
}

/// Categories arrive as display labels; lookups use lowercase with
/// whitespace runs collapsed to hyphens.
fn normalize_category(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolves the ordered, non-empty list of supported shapes for an
/// algorithm; the first entry is the primary shape.
pub fn resolve_shapes(slug: &str, category: &str) -> Vec<Shape> {
    if let Some(shapes) = curated_shapes(slug) {
        return shapes.to_vec();
    }
    if let Some(shapes) = curated_shapes(&normalize_category(category)) {
        return shapes.to_vec();
    }
    if let Some(shapes) = inferred_shapes(slug) {
        return shapes.to_vec();
    }
    SEQ_BARS.to_vec()
}

fn node(id: &str, label: &str, x: f64, y: f64) -> GraphNode {
    GraphNode {
        id: NodeId::from(id),
        label: Some(label.to_owned()),
        x,
        y,
        value: None,
    }
}

fn tree_node(id: &str, value: i64, x: f64, y: f64) -> GraphNode {
    GraphNode {
        id: NodeId::from(id),
        label: None,
        x,
        y,
        value: Some(value),
    }
}

fn edge(from: &str, to: &str, weight: Option<f64>) -> GraphEdge {
    GraphEdge {
        from: NodeId::from(from),
        to: NodeId::from(to),
        weight,
        directed: false,
    }
}

/// Hand-curated default sample input per shape
///
/// Every default is valid input for each generator family that can consume
/// its shape: the graph sample names no unknown endpoints, the matrix sample
/// is square, the text sample's pattern fits its text. Shapes with no
/// curated payload share a small generic array.
pub fn default_sample(shape: Shape) -> TraceInput {
    const INF: f64 = f64::INFINITY;
    match shape {
        Shape::Sequence | Shape::Bars => TraceInput::Sequence {
            array: vec![64, 34, 25, 12, 22, 11, 90, 45, 78, 33],
        },
        Shape::Heap => TraceInput::Sequence {
            array: vec![90, 80, 70, 50, 60, 40, 30, 20, 10],
        },
        Shape::Stack | Shape::Queue | Shape::LinkedList => TraceInput::Sequence {
            array: vec![10, 20, 30, 40, 50],
        },
        Shape::SegmentTree | Shape::FenwickTree => TraceInput::Sequence {
            array: vec![1, 3, 5, 7, 9, 11, 13, 15],
        },
        Shape::Matrix => TraceInput::Matrix {
            matrix: vec![
                vec![0.0, 5.0, INF, 10.0],
                vec![INF, 0.0, 3.0, INF],
                vec![INF, INF, 0.0, 1.0],
                vec![INF, INF, INF, 0.0],
            ],
        },
        Shape::Grid => TraceInput::Matrix {
            matrix: vec![vec![0.0; 8]; 8],
        },
        Shape::Graph => TraceInput::Graph {
            nodes: vec![
                node("0", "A", 100.0, 100.0),
                node("1", "B", 250.0, 50.0),
                node("2", "C", 400.0, 100.0),
                node("3", "D", 250.0, 200.0),
                node("4", "E", 100.0, 250.0),
                node("5", "F", 400.0, 250.0),
            ],
            edges: vec![
                edge("0", "1", Some(4.0)),
                edge("0", "3", Some(2.0)),
                edge("1", "2", Some(3.0)),
                edge("1", "3", Some(1.0)),
                edge("2", "5", Some(2.0)),
                edge("3", "4", Some(5.0)),
                edge("3", "5", Some(4.0)),
                edge("4", "5", Some(3.0)),
            ],
        },
        Shape::Tree | Shape::BinaryTree => TraceInput::Graph {
            nodes: vec![
                tree_node("50", 50, 200.0, 50.0),
                tree_node("30", 30, 100.0, 120.0),
                tree_node("70", 70, 300.0, 120.0),
                tree_node("20", 20, 50.0, 190.0),
                tree_node("40", 40, 150.0, 190.0),
                tree_node("60", 60, 250.0, 190.0),
                tree_node("80", 80, 350.0, 190.0),
            ],
            edges: vec![
                edge("50", "30", None),
                edge("50", "70", None),
                edge("30", "20", None),
                edge("30", "40", None),
                edge("70", "60", None),
                edge("70", "80", None),
            ],
        },
        Shape::NetworkFlow => TraceInput::Graph {
            nodes: vec![
                node("s", "Source", 50.0, 150.0),
                node("1", "1", 150.0, 80.0),
                node("2", "2", 150.0, 220.0),
                node("3", "3", 300.0, 80.0),
                node("4", "4", 300.0, 220.0),
                node("t", "Sink", 400.0, 150.0),
            ],
            edges: vec![
                edge("s", "1", Some(10.0)),
                edge("s", "2", Some(8.0)),
                edge("1", "3", Some(5.0)),
                edge("1", "2", Some(2.0)),
                edge("2", "4", Some(10.0)),
                edge("3", "t", Some(7.0)),
                edge("3", "4", Some(8.0)),
                edge("4", "t", Some(10.0)),
            ],
        },
        Shape::String => TraceInput::Text {
            text: "ABABDABACDABABCABAB".to_owned(),
            pattern: "ABABCABAB".to_owned(),
        },
        Shape::HashTable
        | Shape::Geometric
        | Shape::Trie
        | Shape::RecursionTree
        | Shape::StateMachine => TraceInput::Sequence {
            array: vec![64, 34, 25, 12, 22, 11, 90],
        },
    }
}

/// Resolved presentation metadata for an algorithm
///
/// Display toggles and the animation speed are pass-through configuration
/// for the player; the engine attaches no meaning to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    pub primary: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Shape>,
    pub supported: Vec<Shape>,
    pub default_data: TraceInput,
    pub animation_speed: f32,
    pub show_step_description: bool,
    pub show_pseudocode: bool,
    pub show_complexity_tracker: bool,
}

/// Assembles the resolved configuration for an algorithm identity
pub fn visualization_config(slug: &str, category: &str) -> VisualizationConfig {
    let supported = resolve_shapes(slug, category);
    let primary = supported[0];
    VisualizationConfig {
        primary,
        secondary: supported.get(1).copied(),
        default_data: default_sample(primary),
        supported,
        animation_speed: 1.0,
        show_step_description: true,
        show_pseudocode: true,
        show_complexity_tracker: true,
    }
}
