//! Weighted adjacency model supporting directed and undirected graphs.
//!
//! Edge weights may be negative; whether a given search algorithm
//! tolerates that is the algorithm's concern, not the graph's. The
//! graph is built once and stays immutable for the duration of all
//! searches — every query below takes `&self`.
//!
//! Adjacency is stored in [`IndexMap`]s so that node and edge iteration
//! order is the insertion order. The search algorithms rely on this for
//! deterministic tie-breaking and reproducible history snapshots.

use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::fmt;

use crate::error::GraphError;

/// Node identifier.
pub type NodeId = usize;

/// A weighted graph with explicit node membership.
///
/// Undirected graphs store each inserted edge symmetrically as two
/// directed entries with identical weight; [`Graph::edges`] reports
/// such a pair as a single edge, while [`Graph::directed_edges`]
/// exposes both entries (the view relaxation-based algorithms consume).
///
/// # Examples
///
/// ```
/// use annealpath::graph::Graph;
///
/// let mut g = Graph::new(true);
/// g.add_node(0);
/// g.add_node(1);
/// g.add_edge(0, 1, 2.5).unwrap();
///
/// assert_eq!(g.weight(0, 1), Some(2.5));
/// assert_eq!(g.weight(1, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    nodes: IndexSet<NodeId>,
    adj: IndexMap<NodeId, IndexMap<NodeId, f64>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: IndexSet::new(),
            adj: IndexMap::new(),
        }
    }

    /// Whether edges are one-way.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Adds a node. Idempotent: re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    /// Adds an edge from `u` to `v` with the given weight. For
    /// undirected graphs the symmetric entry is stored as well.
    ///
    /// Both endpoints must already have been added via [`Graph::add_node`].
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<(), GraphError> {
        for endpoint in [u, v] {
            if !self.nodes.contains(&endpoint) {
                return Err(GraphError::InvalidEdge {
                    u,
                    v,
                    missing: endpoint,
                });
            }
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { u, v, weight });
        }

        self.adj.entry(u).or_default().insert(v, weight);
        if !self.directed {
            self.adj.entry(v).or_default().insert(u, weight);
        }
        Ok(())
    }

    /// Whether `id` is a node of the graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Outgoing `(neighbor, weight)` pairs of `u`, in insertion order.
    ///
    /// A node with no outgoing edges (or an id that is not a node at
    /// all) yields an empty iterator; the lookup never creates an
    /// adjacency entry.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adj
            .get(&u)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&v, &w)| (v, w)))
    }

    /// Weight of the edge `u -> v`, or `None` if no such edge exists.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adj.get(&u).and_then(|m| m.get(&v)).copied()
    }

    /// Whether the edge `u -> v` exists.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All edges as `(u, v, weight)` triples. Each undirected edge is
    /// reported once, in the direction it was first inserted.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut out = Vec::new();
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
        for (&u, nbrs) in &self.adj {
            for (&v, &w) in nbrs {
                if self.directed || !seen.contains(&(v, u)) {
                    out.push((u, v, w));
                    seen.insert((u, v));
                }
            }
        }
        out
    }

    /// Every stored directed entry as `(u, v, weight)`. For undirected
    /// graphs this contains both orientations of each edge.
    pub fn directed_edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        self.adj
            .iter()
            .flat_map(|(&u, nbrs)| nbrs.iter().map(move |(&v, &w)| (u, v, w)))
            .collect()
    }

    /// Number of edges (undirected edges counted once).
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Edge count divided by the maximum possible for this node count,
    /// in `[0, 1]`. Zero for graphs with fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n <= 1 {
            return 0.0;
        }
        let max_edges = if self.directed {
            n * (n - 1)
        } else {
            n * (n - 1) / 2
        };
        self.edge_count() as f64 / max_edges as f64
    }

    /// Whether any edge carries a negative weight.
    pub fn has_negative_weights(&self) -> bool {
        self.adj
            .values()
            .flat_map(|m| m.values())
            .any(|&w| w < 0.0)
    }

    /// Adjacency matrix over the node set in ascending id order; `None`
    /// marks a missing edge. Intended for external visualization.
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<Option<f64>>> {
        let mut ids: Vec<NodeId> = self.nodes().collect();
        ids.sort_unstable();
        let index: IndexMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let n = ids.len();
        let mut matrix = vec![vec![None; n]; n];
        for (u, v, w) in self.directed_edges() {
            matrix[index[&u]][index[&v]] = Some(w);
        }
        matrix
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed {
            "Directed"
        } else {
            "Undirected"
        };
        write!(
            f,
            "{kind}Graph(nodes={}, edges={})",
            self.node_count(),
            self.edge_count()
        )
    }
}
