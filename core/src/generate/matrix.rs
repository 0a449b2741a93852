//! Matrix-family trace generation: all-pairs relaxation and cell walks
//!
//! The all-pairs fill relaxes `grid[i][j]` through every intermediate `k`,
//! recording one `Update` step per strict improvement with the touched cell
//! triple highlighted; any other identifier falls back to a row-major
//! per-cell walk. Unlike the sequence and graph families, matrix traces
//! carry **no terminal `Complete` step** — callers must not assume its
//! presence. `f64::INFINITY` is the no-edge sentinel.

use std::fmt;

use crate::generate::recorder::TraceBuilder;
use crate::trace::step::{Action, Cell, Highlights};
use crate::trace::{MatrixSnapshot, Snapshot, Trace};

/// All-pairs fills past this dimension are accepted but logged; the
/// relaxation is cubic in the dimension.
const MATRIX_WARN_DIM: usize = 64;

/// The matrix-family algorithm kinds
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MatrixAlgorithm {
    AllPairs,
    /// Generic row-major cell walk for identifiers naming no known
    /// algorithm
    Walk,
}

impl MatrixAlgorithm {
    pub fn from_slug(slug: &str) -> Self {
        let s = slug.to_lowercase();
        if s.contains("floyd") || s.contains("warshall") || s.contains("all-pairs") {
            Self::AllPairs
        } else {
            Self::Walk
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AllPairs => "all-pairs relaxation",
            Self::Walk => "cell walk",
        }
    }
}

impl fmt::Display for MatrixAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn snap(grid: &[Vec<f64>]) -> Snapshot {
    Snapshot::Matrix(MatrixSnapshot::of(grid))
}

fn fmt_cell(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_owned()
    } else {
        value.to_string()
    }
}

/// Runs the resolved algorithm over a copy of `grid` and returns the trace
pub fn generate(algorithm: MatrixAlgorithm, grid: &[Vec<f64>]) -> Trace {
    let mut rec = TraceBuilder::new();
    let mut m: Vec<Vec<f64>> = grid.to_vec();

    rec.record(
        Action::Mark,
        format!(
            "Initializing {} on a {}x{} grid",
            algorithm,
            m.len(),
            m.first().map_or(0, Vec::len)
        ),
        snap(&m),
        Highlights::cells([]),
    );

    match algorithm {
        MatrixAlgorithm::AllPairs => all_pairs(&mut rec, &mut m),
        MatrixAlgorithm::Walk => walk(&mut rec, &m),
    }

    rec.finish()
}

fn all_pairs(rec: &mut TraceBuilder, m: &mut [Vec<f64>]) {
    let n = m
        .iter()
        .map(Vec::len)
        .min()
        .unwrap_or(0)
        .min(m.len());
    if m.iter().any(|row| row.len() != n) || m.len() != n {
        log::warn!(
            "grid is not square; relaxing best-effort over its {n}x{n} prefix"
        );
    }
    if n > MATRIX_WARN_DIM {
        log::warn!(
            "all-pairs relaxation over a {n}x{n} grid considers {} cell triples",
            n * n * n
        );
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if !m[i][k].is_finite() || !m[k][j].is_finite() {
                    continue;
                }
                rec.compare();
                let candidate = m[i][k] + m[k][j];
                if candidate < m[i][j] {
                    m[i][j] = candidate;
                    rec.work();
                    rec.record(
                        Action::Update,
                        format!(
                            "Shorter path {i} -> {j} through {k}: distance now {}",
                            fmt_cell(candidate)
                        ),
                        snap(m),
                        Highlights::cells([
                            Cell::new(i, j),
                            Cell::new(i, k),
                            Cell::new(k, j),
                        ]),
                    );
                }
            }
        }
    }
}

fn walk(rec: &mut TraceBuilder, m: &[Vec<f64>]) {
    for (i, row) in m.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            rec.work();
            rec.record(
                Action::Visit,
                format!("Scanning cell [{i}][{j}] = {}", fmt_cell(value)),
                snap(m),
                Highlights::cells([Cell::new(i, j)]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn sample() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 5.0, INF, 10.0],
            vec![INF, 0.0, 3.0, INF],
            vec![INF, INF, 0.0, 1.0],
            vec![INF, INF, INF, 0.0],
        ]
    }

    fn final_grid(trace: &Trace) -> Vec<Vec<f64>> {
        match &trace.last().expect("non-empty").data {
            Snapshot::Matrix(m) => m.grid.clone(),
            other => panic!("expected a matrix snapshot, got {other:?}"),
        }
    }

    #[test]
    fn all_pairs_improves_through_intermediates() {
        let trace = generate(MatrixAlgorithm::AllPairs, &sample());
        let grid = final_grid(&trace);
        assert_eq!(grid[0][2], 8.0);
        assert_eq!(grid[0][3], 9.0);
        assert_eq!(grid[1][3], 4.0);
        assert!(trace.iter().any(|s| s.action == Action::Update));
    }

    #[test]
    fn update_steps_highlight_the_cell_triple() {
        let trace = generate(MatrixAlgorithm::AllPairs, &sample());
        let update = trace
            .iter()
            .find(|s| s.action == Action::Update)
            .expect("at least one improvement");
        match &update.highlights {
            Highlights::Cells(cells) => assert_eq!(cells.len(), 3),
            other => panic!("expected cell highlights, got {other:?}"),
        }
    }

    #[test]
    fn matrix_family_has_no_terminal_complete() {
        let trace = generate(MatrixAlgorithm::AllPairs, &sample());
        assert!(trace.iter().all(|s| s.action != Action::Complete));
        let trace = generate(MatrixAlgorithm::Walk, &sample());
        assert!(trace.iter().all(|s| s.action != Action::Complete));
    }

    #[test]
    fn walk_scans_row_major() {
        let trace = generate(MatrixAlgorithm::Walk, &[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let cells: Vec<Cell> = trace
            .iter()
            .filter(|s| s.action == Action::Visit)
            .map(|s| match &s.highlights {
                Highlights::Cells(cells) => cells[0],
                other => panic!("expected cell highlights, got {other:?}"),
            })
            .collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn ragged_grid_gets_a_best_effort_prefix() {
        let ragged = vec![vec![0.0, 2.0, 9.0], vec![INF, 0.0]];
        let trace = generate(MatrixAlgorithm::AllPairs, &ragged);
        // 2x2 prefix only; nothing out of bounds, trace still opens with
        // the init marker.
        assert_eq!(trace.first().expect("init").action, Action::Mark);
    }

    #[test]
    fn empty_grid_still_traces_initialization() {
        let trace = generate(MatrixAlgorithm::Walk, &[]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.first().expect("init").action, Action::Mark);
    }
}
