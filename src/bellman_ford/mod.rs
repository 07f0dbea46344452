//! Bellman-Ford relaxation-based shortest path search.
//!
//! Correct for negative edge weights and detects negative cycles
//! reachable from the source, at the cost of O(V * E) passes.

mod runner;
mod types;

pub use runner::BellmanFordRunner;
pub use types::{BellmanFordResult, PassSnapshot};
