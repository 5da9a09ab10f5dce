//! SA execution loop.

use rand::Rng;
use tracing::debug;

use super::config::{CoolingSchedule, SaConfig};
use super::problem::AnnealingProblem;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of moves evaluated.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    pub improving_moves: usize,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `problem`, drawing every random decision from `rng`.
    ///
    /// `config` is expected to have passed [`SaConfig::validate`]; the
    /// `seed` field is ignored here since the generator is supplied.
    pub fn run<P, R>(problem: &P, config: &SaConfig, rng: &mut R) -> SaResult<P::Solution>
    where
        P: AnnealingProblem,
        R: Rng,
    {
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let linear_steps = config.linear_steps();
        let budget_spent =
            |n: usize| config.max_iterations > 0 && n >= config.max_iterations;

        let mut step = 0usize;

        while temperature > config.min_temperature && !budget_spent(total_iterations) {
            for _ in 0..config.iterations_per_temperature {
                if budget_spent(total_iterations) {
                    break;
                }

                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            temperature = cool(temperature, config, step, linear_steps);
            step += 1;
        }

        debug!(
            iterations = total_iterations,
            accepted = accepted_moves,
            improving = improving_moves,
            final_temperature = temperature,
            best_cost,
            "annealing finished"
        );

        SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}

/// Apply the cooling schedule to compute the next temperature.
fn cool(temperature: f64, config: &SaConfig, step: usize, linear_steps: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let t = config.initial_temperature
                - (step + 1) as f64 * (config.initial_temperature - config.min_temperature)
                    / linear_steps as f64;
            t.max(config.min_temperature)
        }
    }
}
