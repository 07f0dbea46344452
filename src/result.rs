//! Shared result contract across the three search algorithms.
//!
//! Every algorithm returns its own concrete result type carrying a
//! [`SearchSummary`] plus algorithm-specific diagnostics and history.
//! [`AlgorithmResult`] tags the three concrete types into one union so
//! the comparator can operate over the shared fields generically.

use indexmap::IndexMap;

use crate::annealing::AnnealingResult;
use crate::bellman_ford::BellmanFordResult;
use crate::dijkstra::DijkstraResult;
use crate::graph::{Graph, NodeId};

/// Fields common to every search result.
///
/// `distance` is `f64::INFINITY` and `path` is `None` whenever the
/// target is unreachable (or, for the stochastic search, no valid path
/// was ever observed). `success` is true iff `path` is present and
/// valid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSummary {
    /// Node sequence from source to target, when one was found.
    pub path: Option<Vec<NodeId>>,
    /// Total weight of `path`, or `f64::INFINITY`.
    pub distance: f64,
    /// The algorithm's primary work unit: node extractions (Dijkstra),
    /// relaxation passes (Bellman-Ford), or steps executed (annealing).
    pub iterations: usize,
    /// Whether a valid path was found.
    pub success: bool,
    /// Human-readable status, including correctness warnings.
    pub message: String,
}

/// Tagged union over the three concrete results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmResult {
    Dijkstra(DijkstraResult),
    BellmanFord(BellmanFordResult),
    Annealing(AnnealingResult),
}

impl AlgorithmResult {
    /// Short algorithm name for reporting.
    pub fn algorithm(&self) -> &'static str {
        match self {
            AlgorithmResult::Dijkstra(_) => "dijkstra",
            AlgorithmResult::BellmanFord(_) => "bellman-ford",
            AlgorithmResult::Annealing(_) => "annealing",
        }
    }

    /// The shared result fields.
    pub fn summary(&self) -> &SearchSummary {
        match self {
            AlgorithmResult::Dijkstra(r) => &r.summary,
            AlgorithmResult::BellmanFord(r) => &r.summary,
            AlgorithmResult::Annealing(r) => &r.summary,
        }
    }
}

/// Total weight of a path, or `f64::INFINITY` if any consecutive pair
/// is not an edge of the graph (or the path has fewer than two nodes).
pub fn path_length(graph: &Graph, path: &[NodeId]) -> f64 {
    if path.len() < 2 {
        return f64::INFINITY;
    }
    let mut total = 0.0;
    for pair in path.windows(2) {
        match graph.weight(pair[0], pair[1]) {
            Some(w) => total += w,
            None => return f64::INFINITY,
        }
    }
    total
}

/// Whether `path` starts at `source`, ends at `target`, and every
/// consecutive pair is an edge of the graph.
pub fn is_valid_path(graph: &Graph, path: &[NodeId], source: NodeId, target: NodeId) -> bool {
    if path.len() < 2 {
        return false;
    }
    if path[0] != source || path[path.len() - 1] != target {
        return false;
    }
    path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// Walks the predecessor map back from `target` to `source`. Returns
/// `None` if the chain never reaches the source. The step cap guards
/// against malformed predecessor cycles.
pub(crate) fn reconstruct_path(
    predecessors: &IndexMap<NodeId, NodeId>,
    source: NodeId,
    target: NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;
    let max_steps = predecessors.len() + 1;

    for _ in 0..max_steps {
        if current == source {
            path.reverse();
            return Some(path);
        }
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn chain() -> Graph {
        let mut g = Graph::new(true);
        for n in 0..3 {
            g.add_node(n);
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 2.5).unwrap();
        g
    }

    #[test]
    fn test_path_length() {
        let g = chain();
        assert!((path_length(&g, &[0, 1, 2]) - 3.5).abs() < 1e-12);
        assert_eq!(path_length(&g, &[0, 2]), f64::INFINITY);
        assert_eq!(path_length(&g, &[0]), f64::INFINITY);
        assert_eq!(path_length(&g, &[]), f64::INFINITY);
    }

    #[test]
    fn test_is_valid_path() {
        let g = chain();
        assert!(is_valid_path(&g, &[0, 1, 2], 0, 2));
        assert!(!is_valid_path(&g, &[0, 1, 2], 0, 1)); // wrong target
        assert!(!is_valid_path(&g, &[1, 2], 0, 2)); // wrong source
        assert!(!is_valid_path(&g, &[0, 2], 0, 2)); // phantom edge
        assert!(!is_valid_path(&g, &[0], 0, 0)); // too short
    }

    #[test]
    fn test_reconstruct_path() {
        let mut pred = IndexMap::new();
        pred.insert(2, 1);
        pred.insert(1, 0);
        assert_eq!(reconstruct_path(&pred, 0, 2), Some(vec![0, 1, 2]));
        assert_eq!(reconstruct_path(&pred, 0, 0), Some(vec![0]));
        assert_eq!(reconstruct_path(&pred, 5, 2), None);
    }

    #[test]
    fn test_reconstruct_path_survives_cycle() {
        let mut pred = IndexMap::new();
        pred.insert(1, 2);
        pred.insert(2, 1);
        assert_eq!(reconstruct_path(&pred, 0, 1), None);
    }
}
