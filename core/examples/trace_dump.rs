//! Builds a handful of traces over the curated default samples and dumps
//! them as JSON, the same surface the player consumes.
//!
//! Run with `RUST_LOG=debug cargo run --example trace_dump` to watch the
//! dispatch decisions.

use tracelens_core::{build_trace, default_sample, resolve_shapes, visualization_config};

fn main() {
    env_logger::init();

    for (slug, category) in [
        ("bubble-sort", "sorting"),
        ("binary-search", "searching"),
        ("bfs", "graph"),
        ("dijkstra", "graph"),
        ("floyd-warshall", "dynamic-programming"),
        ("kmp", "string"),
    ] {
        let shapes = resolve_shapes(slug, category);
        let input = default_sample(shapes[0]);
        let trace = build_trace(slug, category, &input);
        println!(
            "{slug}: {} steps as {:?}",
            trace.len(),
            shapes[0]
        );
        if let Some(last) = trace.last() {
            println!("  final: {}", last.description);
        }
    }

    let config = visualization_config("heap-sort", "sorting");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("\nresolved config for heap-sort:\n{json}"),
        Err(err) => eprintln!("failed to serialize config: {err}"),
    }

    let trace = build_trace(
        "bubble-sort",
        "sorting",
        &default_sample(tracelens_core::Shape::Sequence),
    );
    match serde_json::to_string_pretty(&trace.steps().first()) {
        Ok(json) => println!("\nfirst bubble-sort step:\n{json}"),
        Err(err) => eprintln!("failed to serialize step: {err}"),
    }
}
