//! Dijkstra's label-setting shortest path search.
//!
//! Greedy and deterministic. Correctness is only guaranteed for graphs
//! without negative weights; such graphs are still searched, with a
//! warning attached to the result message rather than a refusal.

mod runner;
mod types;

pub use runner::DijkstraRunner;
pub use types::{DijkstraResult, DijkstraSnapshot};
