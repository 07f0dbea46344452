//! Annealing-style stochastic energy search for shortest paths.
//!
//! Formulates shortest path as energy minimization over path
//! configurations: a candidate path's energy is its real-edge weight
//! sum plus a large penalty per constraint violation, so valid paths
//! always dominate invalid ones while the search is still free to move
//! *through* invalid intermediate configurations. Moves are accepted by
//! the Metropolis criterion under a geometrically cooling temperature.
//!
//! All randomness flows through a single seeded ChaCha stream: fixing
//! the seed makes the entire run, history included, reproducible bit
//! for bit.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealingConfig;
pub use runner::AnnealingRunner;
pub use types::{AnnealingResult, StepSnapshot};
