//! Bellman-Ford execution loop.

use indexmap::IndexMap;

use super::types::{BellmanFordResult, PassSnapshot};
use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use crate::result::{reconstruct_path, SearchSummary};

/// Executes the Bellman-Ford algorithm.
pub struct BellmanFordRunner;

impl BellmanFordRunner {
    /// Runs the search from `source` to `target`.
    ///
    /// Performs up to `node_count - 1` passes, each relaxing every
    /// stored directed edge once, stopping early as soon as a pass
    /// makes no relaxation. One extra verification pass afterwards
    /// detects negative cycles reachable from the source; a detected
    /// cycle invalidates any shortest path and the result reports
    /// failure with `has_negative_cycle` set.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEndpoint`] if either endpoint is not a node
    /// of the graph.
    pub fn run(
        graph: &Graph,
        source: NodeId,
        target: NodeId,
    ) -> Result<BellmanFordResult, GraphError> {
        for endpoint in [source, target] {
            if !graph.contains_node(endpoint) {
                return Err(GraphError::InvalidEndpoint(endpoint));
            }
        }

        let edges = graph.directed_edges();
        let n = graph.node_count();

        let mut distances: IndexMap<NodeId, f64> =
            graph.nodes().map(|id| (id, f64::INFINITY)).collect();
        distances[&source] = 0.0;

        let mut predecessors: IndexMap<NodeId, NodeId> = IndexMap::new();
        let mut history: Vec<PassSnapshot> = Vec::new();

        // At least one pass even for degenerate graphs, so iteration
        // counts and history are never empty.
        let max_passes = n.saturating_sub(1).max(1);

        for pass in 1..=max_passes {
            let mut relaxed_edges: Vec<(NodeId, NodeId, f64)> = Vec::new();

            for &(u, v, w) in &edges {
                let du = distances[&u];
                if du == f64::INFINITY {
                    continue;
                }
                let candidate = du + w;
                if candidate < distances[&v] {
                    distances[&v] = candidate;
                    predecessors.insert(v, u);
                    relaxed_edges.push((u, v, candidate));
                }
            }

            let relaxation_count = relaxed_edges.len();
            history.push(PassSnapshot {
                pass,
                distances: distances.clone(),
                relaxation_count,
                relaxed_edges,
            });

            // Converged: no later pass can change anything.
            if relaxation_count == 0 {
                break;
            }
        }

        let iterations = history.len();

        // Verification pass: any remaining relaxable edge means a
        // negative cycle is reachable from the source.
        let has_negative_cycle = edges.iter().any(|&(u, v, w)| {
            let du = distances[&u];
            du != f64::INFINITY && du + w < distances[&v]
        });

        if has_negative_cycle {
            return Ok(BellmanFordResult {
                summary: SearchSummary {
                    path: None,
                    distance: f64::INFINITY,
                    iterations,
                    success: false,
                    message: String::from(
                        "negative cycle detected, no valid shortest path exists",
                    ),
                },
                has_negative_cycle: true,
                history,
            });
        }

        if distances[&target] == f64::INFINITY {
            return Ok(BellmanFordResult {
                summary: SearchSummary {
                    path: None,
                    distance: f64::INFINITY,
                    iterations,
                    success: false,
                    message: format!("no path exists from {source} to {target}"),
                },
                has_negative_cycle: false,
                history,
            });
        }

        let path = reconstruct_path(&predecessors, source, target);
        Ok(BellmanFordResult {
            summary: SearchSummary {
                distance: distances[&target],
                success: path.is_some(),
                path,
                iterations,
                message: String::from("path found"),
            },
            has_negative_cycle: false,
            history,
        })
    }
}
