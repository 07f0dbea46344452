//! Result and history types for the annealing search.

use crate::graph::NodeId;
use crate::result::SearchSummary;

/// State captured at each step, for observability only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    /// 1-based step index.
    pub iteration: usize,
    /// The proposed candidate path.
    pub candidate: Vec<NodeId>,
    /// Energy of the candidate.
    pub energy: f64,
    /// Temperature at which the acceptance decision was made.
    pub temperature: f64,
    /// Whether the candidate was accepted as the new current path.
    pub accepted: bool,
    /// Whether the candidate was a structurally valid path, independent
    /// of acceptance.
    pub path_valid: bool,
}

/// Result of an annealing run.
///
/// The summary reports the best-energy *valid* path ever seen, not the
/// final current path. If no valid path was ever produced the summary
/// reports failure and `energy` holds the best penalized energy
/// observed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    pub summary: SearchSummary,
    /// Best energy observed, penalties included.
    pub energy: f64,
    /// Step at which the best configuration was last improved (0 if the
    /// initial path was never improved upon).
    pub convergence_iteration: usize,
    /// Consecutive non-improving steps at termination.
    pub stability_runs: usize,
    /// One snapshot per executed step, rejected proposals included.
    pub history: Vec<StepSnapshot>,
}
