//! Closed-tour search over an eligibility graph.
//!
//! A round assigns every participant exactly one recipient, which is a
//! directed Hamiltonian cycle over the remaining pairings. Finding one of
//! minimum weight is an asymmetric TSP; [`AnnealingTourSolver`] settles for
//! a low-cost feasible cycle using a [`greedy_tour`] seed refined by
//! simulated annealing.
//!
//! The decomposer only sees the [`TourSolver`] trait, so tests can
//! substitute a solver that replays fixed tours.

mod annealing;
mod greedy;
mod types;

pub use annealing::AnnealingTourSolver;
pub use greedy::greedy_tour;
pub use types::{CostMatrix, TourSolver};
