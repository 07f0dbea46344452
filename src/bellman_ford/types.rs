//! Result and history types for the Bellman-Ford search.

use indexmap::IndexMap;

use crate::graph::NodeId;
use crate::result::SearchSummary;

/// State captured after each relaxation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassSnapshot {
    /// 1-based pass index.
    pub pass: usize,
    /// Tentative distances after the pass.
    pub distances: IndexMap<NodeId, f64>,
    /// Number of relaxations performed during the pass.
    pub relaxation_count: usize,
    /// Edges relaxed this pass, as `(u, v, new_distance)`.
    pub relaxed_edges: Vec<(NodeId, NodeId, f64)>,
}

/// Result of a Bellman-Ford run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordResult {
    pub summary: SearchSummary,
    /// Whether the verification pass found a negative cycle reachable
    /// from the source. When true, no shortest path exists and the
    /// summary reports failure.
    pub has_negative_cycle: bool,
    /// One snapshot per executed pass.
    pub history: Vec<PassSnapshot>,
}
