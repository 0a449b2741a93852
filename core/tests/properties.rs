//! Cross-family properties of generated traces
//!
//! Every trace, whatever produced it, must satisfy the structural contract
//! the player relies on: contiguous ids, monotone counters, highlights that
//! refer only to elements present in their own snapshot, and the per-family
//! termination rules. The proptest blocks pin determinism and sort
//! correctness over randomized small inputs; the named tests pin the
//! concrete scenarios the engine documents.

use proptest::prelude::*;

use tracelens_core::{
    build_trace, Action, Highlights, NodeId, Snapshot, Step, Trace, TraceInput,
};

fn sequence_input(array: Vec<i64>) -> TraceInput {
    TraceInput::Sequence { array }
}

/// Asserts the structural contract every family shares
fn assert_well_formed(trace: &Trace) {
    assert!(!trace.is_empty(), "traces are never empty");
    let mut previous: Option<&Step> = None;
    for (i, step) in trace.iter().enumerate() {
        assert_eq!(step.id, i, "ids are contiguous from zero");
        if let Some(prev) = previous {
            assert!(
                step.stats.comparisons >= prev.stats.comparisons
                    && step.stats.swaps >= prev.stats.swaps
                    && step.stats.operations >= prev.stats.operations,
                "counters never decrease (step {i})"
            );
        }
        assert_highlights_resolve(step);
        previous = Some(step);
    }
}

/// Every highlight must refer to an element present in its own snapshot
fn assert_highlights_resolve(step: &Step) {
    match (&step.highlights, &step.data) {
        (Highlights::Indices(indices), Snapshot::Sequence(s)) => {
            for &i in indices {
                assert!(i < s.array.len(), "index {i} outside the snapshot array");
            }
        }
        (Highlights::Indices(indices), Snapshot::Text(t)) => {
            let len = t.text.chars().count();
            for &i in indices {
                assert!(i < len, "index {i} outside the snapshot text");
            }
        }
        (Highlights::Graph { nodes, edges }, Snapshot::Graph(g)) => {
            let known = |id: &NodeId| g.nodes.iter().any(|n| n.id == *id);
            for id in nodes {
                assert!(known(id), "highlighted node {id} missing from snapshot");
            }
            for edge in edges {
                assert!(known(&edge.from) && known(&edge.to));
            }
        }
        (Highlights::Cells(cells), Snapshot::Matrix(m)) => {
            for cell in cells {
                assert!(cell.row < m.grid.len());
                assert!(cell.col < m.grid[cell.row].len());
            }
        }
        (highlights, data) => panic!(
            "highlight kind does not match the snapshot family: {highlights:?} on {data:?}"
        ),
    }
}

fn sorted_copy(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

fn final_sequence(trace: &Trace) -> Vec<i64> {
    match &trace.last().expect("non-empty").data {
        Snapshot::Sequence(s) => s.array.clone(),
        other => panic!("expected a sequence snapshot, got {other:?}"),
    }
}

const SORT_SLUGS: &[&str] = &[
    "bubble-sort",
    "selection-sort",
    "insertion-sort",
    "merge-sort",
    "quick-sort",
    "heap-sort",
];

proptest! {
    #[test]
    fn identical_calls_yield_identical_traces(
        array in proptest::collection::vec(-50i64..50, 0..12),
        slug_index in 0usize..6,
    ) {
        let slug = SORT_SLUGS[slug_index];
        let input = sequence_input(array);
        let first = build_trace(slug, "sorting", &input);
        let second = build_trace(slug, "sorting", &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_sort_ends_in_a_sorted_permutation(
        array in proptest::collection::vec(-50i64..50, 0..12),
        slug_index in 0usize..6,
    ) {
        let slug = SORT_SLUGS[slug_index];
        let input = sequence_input(array.clone());
        let trace = build_trace(slug, "sorting", &input);
        assert_well_formed(&trace);
        prop_assert_eq!(
            trace.last().expect("non-empty").action,
            Action::Complete
        );
        prop_assert_eq!(final_sequence(&trace), sorted_copy(array));
    }

    #[test]
    fn searches_locate_their_own_target(
        array in proptest::collection::vec(-50i64..50, 1..12),
        binary in proptest::bool::ANY,
    ) {
        let slug = if binary { "binary-search" } else { "linear-search" };
        let input = sequence_input(array);
        let trace = build_trace(slug, "searching", &input);
        assert_well_formed(&trace);
        let last = trace.last().expect("non-empty");
        prop_assert_eq!(last.action, Action::Complete);
        match &last.data {
            Snapshot::Sequence(s) => {
                // The target is drawn from the array itself, so it is
                // always found.
                prop_assert_eq!(s.found, Some(true));
                let index = s.found_index.expect("found index");
                prop_assert_eq!(Some(s.array[index]), s.target);
            }
            other => prop_assert!(false, "expected a sequence snapshot, got {:?}", other),
        }
    }

    #[test]
    fn early_snapshots_survive_later_mutation(
        array in proptest::collection::vec(-50i64..50, 2..10),
    ) {
        let input = sequence_input(array.clone());
        let trace = build_trace("bubble-sort", "sorting", &input);
        // The initialization snapshot still holds the original order even
        // though the working copy was sorted afterwards: each step owns an
        // independent copy.
        match &trace.first().expect("init").data {
            Snapshot::Sequence(s) => prop_assert_eq!(&s.array, &array),
            other => prop_assert!(false, "expected a sequence snapshot, got {:?}", other),
        }
        prop_assert_eq!(final_sequence(&trace), sorted_copy(array));
    }
}

#[test]
fn bubble_sort_concrete_scenario() {
    let trace = build_trace("bubble-sort", "sorting", &sequence_input(vec![3, 1, 2]));
    assert_well_formed(&trace);
    assert_eq!(final_sequence(&trace), vec![1, 2, 3]);
    let swaps = trace.iter().filter(|s| s.action == Action::Swap).count();
    assert!(swaps >= 2);
    assert_eq!(trace.last().expect("non-empty").action, Action::Complete);
}

#[test]
fn binary_search_concrete_scenario() {
    let trace = build_trace(
        "binary-search",
        "searching",
        &sequence_input(vec![5, 3, 9, 1]),
    );
    assert_well_formed(&trace);
    let last = trace.last().expect("non-empty");
    match &last.data {
        Snapshot::Sequence(s) => {
            assert_eq!(s.array, vec![1, 3, 5, 9], "probes run over the sorted copy");
            assert_eq!(s.found, Some(true));
            let index = s.found_index.expect("found index");
            assert_eq!(s.array[index], 5);
        }
        other => panic!("expected a sequence snapshot, got {other:?}"),
    }
}

#[test]
fn breadth_first_cycle_concrete_scenario() {
    let input = TraceInput::from_json(
        r#"{
            "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
            "edges": [
                {"from": "A", "to": "B"},
                {"from": "B", "to": "C"},
                {"from": "C", "to": "D"},
                {"from": "D", "to": "A"}
            ]
        }"#,
    )
    .expect("cycle graph");
    let trace = build_trace("bfs", "graph", &input);
    assert_well_formed(&trace);
    let visited: Vec<String> = trace
        .iter()
        .filter(|s| s.action == Action::Visit)
        .map(|s| match &s.data {
            Snapshot::Graph(g) => g.current.clone().expect("visit carries current").to_string(),
            other => panic!("expected a graph snapshot, got {other:?}"),
        })
        .collect();
    assert_eq!(visited.len(), 4, "all four nodes visited exactly once");
    assert_eq!(visited[0], "A");
    let mut unique = visited.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 4);
}

#[test]
fn string_match_concrete_scenario() {
    let input = TraceInput::Text {
        text: "ABAB".into(),
        pattern: "AB".into(),
    };
    let trace = build_trace("string-matching", "string", &input);
    assert_well_formed(&trace);
    let offsets: Vec<usize> = trace
        .iter()
        .filter(|s| s.action == Action::Complete)
        .map(|s| match &s.data {
            Snapshot::Text(t) => t.match_at.expect("milestone offset"),
            other => panic!("expected a text snapshot, got {other:?}"),
        })
        .collect();
    assert_eq!(offsets, vec![0, 2]);
}

#[test]
fn empty_sequence_concrete_scenario() {
    for slug in SORT_SLUGS.iter().chain(["linear-search", "binary-search"].iter()) {
        let trace = build_trace(slug, "sorting", &sequence_input(Vec::new()));
        assert_well_formed(&trace);
        assert_eq!(trace.len(), 2, "{slug}: init and complete only");
        let stats = trace.last().expect("non-empty").stats;
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
    }
}

#[test]
fn single_element_merge_concrete_scenario() {
    let trace = build_trace("merge-sort", "sorting", &sequence_input(vec![42]));
    assert_well_formed(&trace);
    assert_eq!(trace.len(), 2);
    assert!(trace
        .iter()
        .all(|s| s.action != Action::Split && s.action != Action::Merge));
}

#[test]
fn graph_trace_is_deterministic_and_well_formed() {
    let input = tracelens_core::default_sample(tracelens_core::Shape::Graph);
    for slug in ["bfs", "dfs", "dijkstra", "some-other-graph-walk"] {
        let first = build_trace(slug, "graph", &input);
        let second = build_trace(slug, "graph", &input);
        assert_eq!(first, second, "{slug}");
        assert_well_formed(&first);
        assert_eq!(first.last().expect("non-empty").action, Action::Complete);
    }
}

#[test]
fn matrix_trace_has_no_terminal_marker() {
    let input = tracelens_core::default_sample(tracelens_core::Shape::Matrix);
    let trace = build_trace("floyd-warshall", "dynamic-programming", &input);
    assert_well_formed(&trace);
    assert!(trace.iter().all(|s| s.action != Action::Complete));
}
