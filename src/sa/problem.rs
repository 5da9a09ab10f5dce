//! Problem definition for the annealing runner.

use rand::Rng;

/// A minimization problem searchable by [`SaRunner`](super::SaRunner).
///
/// Implementors supply a starting point, a cost and a random perturbation.
/// The runner owns temperature, acceptance and cooling.
///
/// The neighbourhood must be connected: any solution has to be reachable
/// from any other through a sequence of [`neighbor`](Self::neighbor) moves.
pub trait AnnealingProblem {
    type Solution: Clone;

    /// Starting solution. Constructive heuristics may ignore `rng`.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// A small random perturbation of `solution`.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
