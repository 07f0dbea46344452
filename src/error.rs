//! Error taxonomy for graph construction and search endpoints.
//!
//! Unreachable targets and negative cycles are *not* errors: they are
//! ordinary result states (`success = false`) reported through the
//! result types, not through this enum.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised during graph construction or when a search is invoked
/// with endpoints that are not part of the graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge endpoint was never added as a node.
    #[error("invalid edge ({u}, {v}): node {missing} does not exist")]
    InvalidEdge {
        u: NodeId,
        v: NodeId,
        /// Which endpoint is missing from the node set.
        missing: NodeId,
    },

    /// An edge weight was NaN or infinite.
    #[error("invalid weight {weight} on edge ({u}, {v}): must be finite")]
    InvalidWeight { u: NodeId, v: NodeId, weight: f64 },

    /// A search source or target is not a node of the graph.
    #[error("invalid endpoint: node {0} does not exist in the graph")]
    InvalidEndpoint(NodeId),
}
