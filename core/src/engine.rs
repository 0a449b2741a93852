//! Trace assembly: the engine's sole entry point
//!
//! [`build_trace`] resolves the primary presentation shape through the
//! classifier, dispatches to the matching generator family, and returns the
//! finished trace. It is a pure function of its three inputs — no hidden
//! state, no randomness, no clock — so re-invocation with identical
//! arguments yields an identical trace, which is what makes caching and
//! reproducible fixtures possible.
//!
//! Input whose family does not match the resolved shape degrades to that
//! family's minimal trace rather than erroring: this engine serves an
//! educational player, and the smallest valid trace is always a better
//! answer than an exception.

use crate::classify::{self, Shape};
use crate::generate::{self, graph, matrix, sequence, text};
use crate::input::TraceInput;
use crate::trace::Trace;

/// The generator family serving a shape
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Family {
    Sequence,
    Graph,
    Matrix,
    Text,
    Generic,
}

fn family_of(shape: Shape) -> Family {
    match shape {
        Shape::Sequence | Shape::Bars => Family::Sequence,
        // Tree-shaped defaults are node/edge lists, so the graph family's
        // walk serves them.
        Shape::Graph | Shape::Tree | Shape::BinaryTree | Shape::NetworkFlow => Family::Graph,
        Shape::Matrix => Family::Matrix,
        Shape::String => Family::Text,
        Shape::LinkedList
        | Shape::Stack
        | Shape::Queue
        | Shape::Heap
        | Shape::HashTable
        | Shape::Geometric
        | Shape::Trie
        | Shape::SegmentTree
        | Shape::FenwickTree
        | Shape::Grid
        | Shape::RecursionTree
        | Shape::StateMachine => Family::Generic,
    }
}

/// Builds the full trace for an algorithm identity over the given input
pub fn build_trace(slug: &str, category: &str, input: &TraceInput) -> Trace {
    let shapes = classify::resolve_shapes(slug, category);
    let primary = shapes[0];
    let family = family_of(primary);
    log::debug!(
        "dispatching '{slug}' (category '{category}') as {primary:?} via the {family:?} family"
    );

    match family {
        Family::Sequence => {
            let array = input.sequence().unwrap_or_else(|| {
                mismatch(slug, "sequence", input);
                &[]
            });
            sequence::generate(sequence::SequenceAlgorithm::from_slug(slug), array)
        }
        Family::Graph => {
            let (nodes, edges) = input.graph().unwrap_or_else(|| {
                mismatch(slug, "graph", input);
                (&[], &[])
            });
            graph::generate(graph::GraphAlgorithm::from_slug(slug), nodes, edges)
        }
        Family::Matrix => {
            let grid = input.matrix().unwrap_or_else(|| {
                mismatch(slug, "matrix", input);
                &[]
            });
            matrix::generate(matrix::MatrixAlgorithm::from_slug(slug), grid)
        }
        Family::Text => {
            let (body, pattern) = input.text().unwrap_or_else(|| {
                mismatch(slug, "text", input);
                ("", "")
            });
            text::generate(body, pattern)
        }
        Family::Generic => generate::fallback(slug, input),
    }
}

fn mismatch(slug: &str, expected: &str, input: &TraceInput) {
    log::warn!(
        "'{slug}' resolved to the {expected} family but received {} input; \
         degrading to the minimal trace",
        input.family_name()
    );
}
