//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic. Worsening moves are accepted
//! with probability `exp(-delta / T)`, where the temperature `T` decreases
//! according to a [`CoolingSchedule`], letting the search escape local
//! optima early and settle late.
//!
//! The runner does not own a random generator: callers pass one in, so a
//! seeded generator owned by a single run makes the result reproducible.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod problem;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use problem::AnnealingProblem;
pub use runner::{SaResult, SaRunner};
