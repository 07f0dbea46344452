//! Dijkstra execution loop.

use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::{DijkstraResult, DijkstraSnapshot};
use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use crate::result::{reconstruct_path, SearchSummary};

/// Frontier entry ordered for a min-heap on distance, then on insertion
/// sequence so that of several nodes at the same tentative distance the
/// one discovered first is expanded first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    dist: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap. Distances in the frontier
        // are always finite, so partial_cmp cannot fail on NaN.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Executes Dijkstra's algorithm.
pub struct DijkstraRunner;

impl DijkstraRunner {
    /// Runs the search from `source` to `target`.
    ///
    /// Terminates the moment the target is extracted from the frontier.
    /// On a graph with negative weights the search still runs, but the
    /// result message carries a correctness warning.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEndpoint`] if either endpoint is not a node
    /// of the graph.
    pub fn run(graph: &Graph, source: NodeId, target: NodeId) -> Result<DijkstraResult, GraphError> {
        for endpoint in [source, target] {
            if !graph.contains_node(endpoint) {
                return Err(GraphError::InvalidEndpoint(endpoint));
            }
        }

        let has_negative = graph.has_negative_weights();

        let mut distances: IndexMap<NodeId, f64> =
            graph.nodes().map(|n| (n, f64::INFINITY)).collect();
        distances[&source] = 0.0;

        let mut predecessors: IndexMap<NodeId, NodeId> = IndexMap::new();
        let mut visited: IndexSet<NodeId> = IndexSet::new();
        let mut history: Vec<DijkstraSnapshot> = Vec::new();

        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        heap.push(FrontierEntry {
            dist: 0.0,
            seq,
            node: source,
        });

        let mut iterations = 0usize;

        while let Some(entry) = heap.pop() {
            let u = entry.node;
            if visited.contains(&u) {
                // Stale frontier entry superseded by a shorter one.
                continue;
            }
            visited.insert(u);
            iterations += 1;

            history.push(DijkstraSnapshot {
                iteration: iterations,
                expanded: u,
                distances: distances.clone(),
                visited: visited.iter().copied().collect(),
                predecessors: predecessors.clone(),
            });

            if u == target {
                let path = reconstruct_path(&predecessors, source, target);
                let mut message = String::from("path found");
                if has_negative {
                    message
                        .push_str(" (warning: graph has negative weights, result may be incorrect)");
                }
                return Ok(DijkstraResult {
                    summary: SearchSummary {
                        distance: distances[&u],
                        success: path.is_some(),
                        path,
                        iterations,
                        message,
                    },
                    history,
                });
            }

            for (v, w) in graph.neighbors(u) {
                if visited.contains(&v) {
                    continue;
                }
                let candidate = entry.dist + w;
                if candidate < distances[&v] {
                    distances[&v] = candidate;
                    predecessors.insert(v, u);
                    seq += 1;
                    heap.push(FrontierEntry {
                        dist: candidate,
                        seq,
                        node: v,
                    });
                }
            }
        }

        // Frontier exhausted without reaching the target.
        Ok(DijkstraResult {
            summary: SearchSummary {
                path: None,
                distance: f64::INFINITY,
                iterations,
                success: false,
                message: format!("no path exists from {source} to {target}"),
            },
            history,
        })
    }
}
