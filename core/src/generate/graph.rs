//! Graph-family trace generation: traversals and shortest paths
//!
//! All algorithms share one preprocessing pass that builds weighted
//! adjacency lists (undirected edges contribute both directions, weights
//! default to 1, edges naming unknown endpoints are skipped with a
//! warning). Traversals use explicit queue/stack structures rather than
//! host recursion, so behavior is independent of call-stack limits. Every
//! run starts at the first listed node, opens with an initialization
//! marker, and closes with a single `Complete` step highlighting the full
//! visit order. An empty node list yields the minimal init/complete pair.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use crate::generate::recorder::TraceBuilder;
use crate::input::{GraphEdge, GraphNode};
use crate::trace::step::{Action, Highlights, NodeId};
use crate::trace::{GraphSnapshot, Snapshot, Trace};

/// The graph-family algorithm kinds
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum GraphAlgorithm {
    BreadthFirst,
    DepthFirst,
    ShortestPath,
    /// Generic per-node visit for identifiers naming no known algorithm
    Walk,
}

impl GraphAlgorithm {
    pub fn from_slug(slug: &str) -> Self {
        let s = slug.to_lowercase();
        if s.contains("bfs") || s.contains("breadth") {
            Self::BreadthFirst
        } else if s.contains("dfs") || s.contains("depth") {
            Self::DepthFirst
        } else if s.contains("dijkstra") || s.contains("shortest") {
            Self::ShortestPath
        } else {
            Self::Walk
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first traversal",
            Self::DepthFirst => "depth-first traversal",
            Self::ShortestPath => "shortest-path relaxation",
            Self::Walk => "node walk",
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Adjacency = BTreeMap<NodeId, Vec<(NodeId, f64)>>;

/// Builds weighted adjacency lists once, in edge-list order
fn adjacency(nodes: &[GraphNode], edges: &[GraphEdge]) -> Adjacency {
    let mut adj: Adjacency = nodes
        .iter()
        .map(|n| (n.id.clone(), Vec::new()))
        .collect();
    for e in edges {
        let weight = e.weight.unwrap_or(1.0);
        if !adj.contains_key(&e.from) || !adj.contains_key(&e.to) {
            log::warn!("edge {} -> {} names an unknown node; skipped", e.from, e.to);
            continue;
        }
        if let Some(out) = adj.get_mut(&e.from) {
            out.push((e.to.clone(), weight));
        }
        if !e.directed {
            if let Some(back) = adj.get_mut(&e.to) {
                back.push((e.from.clone(), weight));
            }
        }
    }
    adj
}

/// Runs the resolved algorithm over the node/edge lists and returns the
/// trace
pub fn generate(algorithm: GraphAlgorithm, nodes: &[GraphNode], edges: &[GraphEdge]) -> Trace {
    let mut rec = TraceBuilder::new();
    let base = GraphSnapshot::of(nodes, edges);

    if nodes.is_empty() {
        rec.record(
            Action::Mark,
            format!("Initializing {} on an empty graph", algorithm),
            Snapshot::Graph(base.clone()),
            Highlights::nodes([]),
        );
        rec.work();
        rec.record(
            Action::Complete,
            "Traversal complete: no nodes to visit",
            Snapshot::Graph(base),
            Highlights::nodes([]),
        );
        return rec.finish();
    }

    let adj = adjacency(nodes, edges);
    let start = nodes[0].id.clone();
    let order = match algorithm {
        GraphAlgorithm::BreadthFirst => breadth_first(&mut rec, &base, &adj, &start),
        GraphAlgorithm::DepthFirst => depth_first(&mut rec, &base, &adj, &start),
        GraphAlgorithm::ShortestPath => shortest_path(&mut rec, &base, nodes, &adj, &start),
        GraphAlgorithm::Walk => walk(&mut rec, &base, nodes),
    };

    rec.record(
        Action::Complete,
        format!(
            "Completed {}: visited {} of {} nodes",
            algorithm,
            order.len(),
            nodes.len()
        ),
        Snapshot::Graph(base.with_visited(order.clone())),
        Highlights::nodes(order),
    );
    rec.finish()
}

fn neighbors<'a>(adj: &'a Adjacency, node: &NodeId) -> &'a [(NodeId, f64)] {
    adj.get(node).map(Vec::as_slice).unwrap_or(&[])
}

fn breadth_first(
    rec: &mut TraceBuilder,
    base: &GraphSnapshot,
    adj: &Adjacency,
    start: &NodeId,
) -> Vec<NodeId> {
    let mut queue: VecDeque<NodeId> = VecDeque::from([start.clone()]);
    let mut discovered: HashSet<NodeId> = HashSet::from([start.clone()]);
    let mut order: Vec<NodeId> = Vec::new();

    rec.work();
    rec.record(
        Action::Mark,
        format!("Starting breadth-first traversal: enqueued start node {}", start),
        Snapshot::Graph(base.clone().with_frontier(queue.iter().cloned())),
        Highlights::nodes([start.clone()]),
    );

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        rec.work();
        rec.record(
            Action::Visit,
            format!("Dequeued {}: visiting", current),
            Snapshot::Graph(
                base.clone()
                    .with_visited(order.iter().cloned())
                    .with_frontier(queue.iter().cloned())
                    .with_current(current.clone()),
            ),
            Highlights::nodes([current.clone()]),
        );
        for (neighbor, _) in neighbors(adj, &current) {
            if discovered.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
                rec.work();
                rec.record(
                    Action::Mark,
                    format!("Discovered {} via {}: enqueued", neighbor, current),
                    Snapshot::Graph(
                        base.clone()
                            .with_visited(order.iter().cloned())
                            .with_frontier(queue.iter().cloned())
                            .with_current(current.clone()),
                    ),
                    Highlights::node_via_edge(
                        neighbor.clone(),
                        current.clone(),
                        neighbor.clone(),
                    ),
                );
            }
        }
    }
    order
}

/// Explicit-stack depth-first traversal. Neighbors are pushed in reverse
/// adjacency order so pop order matches left-to-right visiting; a node
/// popped after already being visited is skipped without a step.
fn depth_first(
    rec: &mut TraceBuilder,
    base: &GraphSnapshot,
    adj: &Adjacency,
    start: &NodeId,
) -> Vec<NodeId> {
    let mut stack: Vec<NodeId> = vec![start.clone()];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();

    rec.work();
    rec.record(
        Action::Mark,
        format!("Starting depth-first traversal: pushed start node {}", start),
        Snapshot::Graph(base.clone().with_frontier(stack.iter().cloned())),
        Highlights::nodes([start.clone()]),
    );

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());
        rec.work();
        rec.record(
            Action::Visit,
            format!("Popped {}: visiting", current),
            Snapshot::Graph(
                base.clone()
                    .with_visited(order.iter().cloned())
                    .with_frontier(stack.iter().cloned())
                    .with_current(current.clone()),
            ),
            Highlights::nodes([current.clone()]),
        );
        for (neighbor, _) in neighbors(adj, &current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
                rec.work();
                rec.record(
                    Action::Mark,
                    format!("Pushed {} (reached via {})", neighbor, current),
                    Snapshot::Graph(
                        base.clone()
                            .with_visited(order.iter().cloned())
                            .with_frontier(stack.iter().cloned())
                            .with_current(current.clone()),
                    ),
                    Highlights::node_via_edge(
                        neighbor.clone(),
                        current.clone(),
                        neighbor.clone(),
                    ),
                );
            }
        }
    }
    order
}

/// Single-source shortest path by repeated minimum selection and
/// relaxation. Minimum selection scans nodes in input-list order, so ties
/// resolve to the earlier-listed node; the loop stops silently once only
/// unreachable nodes remain.
fn shortest_path(
    rec: &mut TraceBuilder,
    base: &GraphSnapshot,
    nodes: &[GraphNode],
    adj: &Adjacency,
    start: &NodeId,
) -> Vec<NodeId> {
    let mut dist: BTreeMap<NodeId, f64> = nodes
        .iter()
        .map(|n| {
            let d = if n.id == *start { 0.0 } else { f64::INFINITY };
            (n.id.clone(), d)
        })
        .collect();
    let mut unvisited: HashSet<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
    let mut order: Vec<NodeId> = Vec::new();

    rec.work();
    rec.record(
        Action::Mark,
        format!("Initialized tentative distances from source {}", start),
        Snapshot::Graph(
            base.clone()
                .with_distances(dist.clone())
                .with_current(start.clone()),
        ),
        Highlights::nodes([start.clone()]),
    );

    loop {
        let mut selected: Option<(NodeId, f64)> = None;
        for n in nodes {
            if !unvisited.contains(&n.id) {
                continue;
            }
            let d = dist.get(&n.id).copied().unwrap_or(f64::INFINITY);
            if d < selected.as_ref().map_or(f64::INFINITY, |(_, best)| *best) {
                selected = Some((n.id.clone(), d));
            }
        }
        // None also covers the all-infinite remainder: an unreachable node
        // never beats the infinite threshold.
        let Some((current, d)) = selected else {
            break;
        };
        unvisited.remove(&current);
        order.push(current.clone());
        rec.work();
        rec.record(
            Action::Visit,
            format!("Selected {} with tentative distance {}", current, d),
            Snapshot::Graph(
                base.clone()
                    .with_distances(dist.clone())
                    .with_visited(order.iter().cloned())
                    .with_current(current.clone()),
            ),
            Highlights::nodes([current.clone()]),
        );
        for (neighbor, weight) in neighbors(adj, &current) {
            if !unvisited.contains(neighbor) {
                continue;
            }
            rec.compare();
            let candidate = d + weight;
            if candidate < dist.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                dist.insert(neighbor.clone(), candidate);
                rec.work();
                rec.record(
                    Action::Update,
                    format!(
                        "Relaxed {}: distance improved to {} via {}",
                        neighbor, candidate, current
                    ),
                    Snapshot::Graph(
                        base.clone()
                            .with_distances(dist.clone())
                            .with_visited(order.iter().cloned())
                            .with_current(current.clone()),
                    ),
                    Highlights::node_via_edge(
                        neighbor.clone(),
                        current.clone(),
                        neighbor.clone(),
                    ),
                );
            }
        }
    }
    order
}

fn walk(rec: &mut TraceBuilder, base: &GraphSnapshot, nodes: &[GraphNode]) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = Vec::new();
    rec.record(
        Action::Mark,
        format!("Initializing node walk over {} nodes", nodes.len()),
        Snapshot::Graph(base.clone()),
        Highlights::nodes([]),
    );
    for n in nodes {
        order.push(n.id.clone());
        rec.work();
        rec.record(
            Action::Visit,
            format!("Visiting node {}", n.display_name()),
            Snapshot::Graph(
                base.clone()
                    .with_visited(order.iter().cloned())
                    .with_current(n.id.clone()),
            ),
            Highlights::nodes([n.id.clone()]),
        );
    }
    order
}
