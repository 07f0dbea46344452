//! Shortest-path search comparison library.
//!
//! Computes shortest paths between a source and target node of a
//! weighted graph with three structurally different strategies, and
//! records enough per-step state to reconstruct how each one converges:
//!
//! - **Dijkstra**: greedy label-setting sweep over a min-priority
//!   frontier. Deterministic; correct for non-negative weights and
//!   merely tolerant of negative ones.
//! - **Bellman-Ford**: iterative edge-relaxation passes. Deterministic;
//!   correct for negative weights and detects negative cycles.
//! - **Annealing**: stochastic energy minimization over path
//!   configurations with Metropolis acceptance and geometric cooling.
//!   Fully reproducible from a single injected seed.
//!
//! All three read the same immutable [`graph::Graph`], satisfy the same
//! result contract ([`result::SearchSummary`]), and append per-iteration
//! snapshots to a history the algorithms themselves never read back;
//! it exists only for external reporting and convergence plotting.
//!
//! # Examples
//!
//! ```
//! use annealpath::annealing::{AnnealingConfig, AnnealingRunner};
//! use annealpath::bellman_ford::BellmanFordRunner;
//! use annealpath::compare::compare;
//! use annealpath::dijkstra::DijkstraRunner;
//! use annealpath::graph::Graph;
//! use annealpath::result::AlgorithmResult;
//!
//! let mut graph = Graph::new(true);
//! for n in 0..3 {
//!     graph.add_node(n);
//! }
//! graph.add_edge(0, 1, 1.0).unwrap();
//! graph.add_edge(1, 2, 2.0).unwrap();
//! graph.add_edge(0, 2, 5.0).unwrap();
//!
//! let config = AnnealingConfig::default().with_seed(42);
//! let results = vec![
//!     AlgorithmResult::Dijkstra(DijkstraRunner::run(&graph, 0, 2).unwrap()),
//!     AlgorithmResult::BellmanFord(BellmanFordRunner::run(&graph, 0, 2).unwrap()),
//!     AlgorithmResult::Annealing(AnnealingRunner::run(&graph, 0, 2, &config).unwrap()),
//! ];
//!
//! let comparison = compare(&results);
//! assert_eq!(comparison.best_distance, 3.0);
//! ```

pub mod annealing;
pub mod bellman_ford;
pub mod compare;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod result;
