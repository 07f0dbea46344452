//! Annealing execution loop.

use indexmap::IndexSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::AnnealingConfig;
use super::types::{AnnealingResult, StepSnapshot};
use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use crate::result::{is_valid_path, path_length, SearchSummary};

/// Move types applied to the intermediate nodes of the current path.
/// Endpoints are never altered.
#[derive(Debug, Clone, Copy)]
enum MoveKind {
    Swap,
    Insert,
    Remove,
    Replace,
}

impl MoveKind {
    fn pick<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => MoveKind::Swap,
            1 => MoveKind::Insert,
            2 => MoveKind::Remove,
            _ => MoveKind::Replace,
        }
    }
}

/// Executes the stochastic energy search.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs the search from `source` to `target`.
    ///
    /// Starts from a seeded random walk, then repeatedly proposes a
    /// perturbed candidate path, accepts it by the Metropolis criterion,
    /// and cools the temperature geometrically. Terminates when the
    /// step budget is exhausted or the best configuration has not
    /// improved for `stability_threshold` consecutive steps while a
    /// valid best path is in hand.
    ///
    /// Failing to find a valid path within the budget is a terminal but
    /// non-fatal outcome reported through the summary, not an error.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEndpoint`] if either endpoint is not a node
    /// of the graph.
    pub fn run(
        graph: &Graph,
        source: NodeId,
        target: NodeId,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult, GraphError> {
        config.validate().expect("invalid AnnealingConfig");
        for endpoint in [source, target] {
            if !graph.contains_node(endpoint) {
                return Err(GraphError::InvalidEndpoint(endpoint));
            }
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let nodes: Vec<NodeId> = graph.nodes().collect();
        let penalty = config.constraint_penalty;

        let mut current = initial_path(graph, &nodes, source, target, &mut rng);
        let mut current_energy = energy(graph, &current, source, target, penalty);

        let mut best = current.clone();
        let mut best_energy = current_energy;
        let mut best_valid = is_valid_path(graph, &current, source, target);

        let mut temperature = config.initial_temperature;
        let mut stable = 0usize;
        let mut convergence_iteration = 0usize;
        let mut history: Vec<StepSnapshot> = Vec::new();

        for iteration in 1..=config.max_iterations {
            let candidate = propose(&current, &nodes, source, target, &mut rng);
            let candidate_energy = energy(graph, &candidate, source, target, penalty);
            let candidate_valid = is_valid_path(graph, &candidate, source, target);

            // Metropolis acceptance: improvements always, worsening
            // moves with probability exp(-dE/T). Near-zero temperature
            // accepts nothing uphill.
            let delta = candidate_energy - current_energy;
            let accepted = if delta <= 0.0 {
                true
            } else if temperature > 0.01 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accepted {
                current = candidate.clone();
                current_energy = candidate_energy;

                // A valid path dethrones an invalid best even at equal
                // or higher energy.
                if current_energy < best_energy || (candidate_valid && !best_valid) {
                    best = current.clone();
                    best_energy = current_energy;
                    best_valid = candidate_valid;
                    convergence_iteration = iteration;
                    stable = 0;
                } else {
                    stable += 1;
                }
            } else {
                stable += 1;
            }

            history.push(StepSnapshot {
                iteration,
                candidate,
                energy: candidate_energy,
                temperature,
                accepted,
                path_valid: candidate_valid,
            });

            temperature *= config.cooling_rate;

            if stable >= config.stability_threshold && best_valid {
                break;
            }
        }

        let iterations = history.len();
        let summary = if best_valid {
            let distance = path_length(graph, &best);
            SearchSummary {
                path: Some(best),
                distance,
                iterations,
                success: true,
                message: String::from("valid path found via energy minimization"),
            }
        } else {
            SearchSummary {
                path: None,
                distance: f64::INFINITY,
                iterations,
                success: false,
                message: String::from(
                    "no valid path found within the iteration budget",
                ),
            }
        };

        Ok(AnnealingResult {
            summary,
            energy: best_energy,
            convergence_iteration,
            stability_runs: stable,
            history,
        })
    }
}

/// Energy of a path configuration: the weight sum over consecutive
/// pairs that are real edges, plus `penalty` per violation. Violations:
/// one each for a wrong start or end node, two per phantom transition
/// (a consecutive pair that is not an edge contributes nothing to the
/// weight sum). An empty configuration is maximally penalized.
fn energy(graph: &Graph, path: &[NodeId], source: NodeId, target: NodeId, penalty: f64) -> f64 {
    if path.is_empty() {
        return penalty * 10.0;
    }

    let mut total = 0.0;
    let mut violations = 0u32;

    if path[0] != source {
        violations += 1;
    }
    if path[path.len() - 1] != target {
        violations += 1;
    }

    for pair in path.windows(2) {
        match graph.weight(pair[0], pair[1]) {
            Some(w) => total += w,
            None => violations += 2,
        }
    }

    total + penalty * f64::from(violations)
}

/// Seeds the search with a walk from the source toward the target:
/// greedy by node-id distance with probability 0.7, a random unvisited
/// neighbor otherwise, jumping to a random unvisited node at dead ends.
/// The target is appended if the walk never reached it, so the initial
/// configuration may be invalid; the energy penalty handles that.
///
/// Known limitation: a poor initial walk can lock in as the final
/// answer when early exploration never dislodges it.
fn initial_path<R: Rng>(
    graph: &Graph,
    nodes: &[NodeId],
    source: NodeId,
    target: NodeId,
    rng: &mut R,
) -> Vec<NodeId> {
    let mut path = vec![source];
    let mut visited: IndexSet<NodeId> = IndexSet::new();
    visited.insert(source);
    let mut current = source;
    let max_steps = graph.node_count() * 2;

    for _ in 0..max_steps {
        if current == target {
            break;
        }

        let neighbors: Vec<NodeId> = graph
            .neighbors(current)
            .map(|(v, _)| v)
            .filter(|v| !visited.contains(v))
            .collect();

        if neighbors.is_empty() {
            // Dead end: jump to a random unvisited node.
            let unvisited: Vec<NodeId> = nodes
                .iter()
                .copied()
                .filter(|n| !visited.contains(n) && *n != source)
                .collect();
            if unvisited.is_empty() {
                break;
            }
            current = unvisited[rng.random_range(0..unvisited.len())];
        } else if rng.random_range(0.0..1.0) < 0.7 {
            // Greedy: the neighbor whose id is closest to the target's.
            current = neighbors
                .iter()
                .copied()
                .min_by_key(|n| n.abs_diff(target))
                .unwrap_or(neighbors[0]);
        } else {
            current = neighbors[rng.random_range(0..neighbors.len())];
        }

        path.push(current);
        visited.insert(current);
    }

    if path[path.len() - 1] != target && !path.contains(&target) {
        path.push(target);
    }
    path
}

/// Produces a candidate by perturbing the intermediate nodes of the
/// current path with one uniformly chosen move. Moves that do not apply
/// to the current configuration (e.g. removing from a two-node path)
/// return the path unchanged; the endpoints are re-pinned afterwards.
fn propose<R: Rng>(
    path: &[NodeId],
    nodes: &[NodeId],
    source: NodeId,
    target: NodeId,
    rng: &mut R,
) -> Vec<NodeId> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut candidate = path.to_vec();
    match MoveKind::pick(rng) {
        MoveKind::Swap => {
            if candidate.len() > 3 {
                let i = rng.random_range(1..candidate.len() - 1);
                let j = rng.random_range(1..candidate.len() - 1);
                if i != j {
                    candidate.swap(i, j);
                }
            }
        }
        MoveKind::Insert => {
            let available: Vec<NodeId> = nodes
                .iter()
                .copied()
                .filter(|n| !candidate.contains(n))
                .collect();
            if !available.is_empty() {
                let node = available[rng.random_range(0..available.len())];
                let pos = rng.random_range(1..candidate.len());
                candidate.insert(pos, node);
            }
        }
        MoveKind::Remove => {
            let pos = rng.random_range(1..candidate.len() - 1);
            candidate.remove(pos);
        }
        MoveKind::Replace => {
            let available: Vec<NodeId> = nodes
                .iter()
                .copied()
                .filter(|n| !candidate.contains(n))
                .collect();
            if !available.is_empty() {
                let pos = rng.random_range(1..candidate.len() - 1);
                candidate[pos] = available[rng.random_range(0..available.len())];
            }
        }
    }

    // Endpoints are pinned regardless of what the move did.
    if candidate[0] != source {
        candidate[0] = source;
    }
    if let Some(last) = candidate.last_mut() {
        if *last != target {
            *last = target;
        }
    }
    candidate
}
