//! Result and history types for the Dijkstra search.

use indexmap::IndexMap;

use crate::graph::NodeId;
use crate::result::SearchSummary;

/// State captured after each node extraction, for observability only —
/// the algorithm never reads its own history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraSnapshot {
    /// 1-based extraction count.
    pub iteration: usize,
    /// The node just expanded.
    pub expanded: NodeId,
    /// Tentative distances at the time of expansion.
    pub distances: IndexMap<NodeId, f64>,
    /// Visited nodes so far, in visit order.
    pub visited: Vec<NodeId>,
    /// Best-known predecessor of each reached node.
    pub predecessors: IndexMap<NodeId, NodeId>,
}

/// Result of a Dijkstra run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraResult {
    pub summary: SearchSummary,
    /// One snapshot per node extraction.
    pub history: Vec<DijkstraSnapshot>,
}
