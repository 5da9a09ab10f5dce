//! Constraint-aware gift assignment.
//!
//! Assigns each participant an exact number of gift recipients such that
//! nobody gifts themself, relationship-based rules are respected, and no
//! pairing repeats across rounds:
//!
//! - **Model**: participants with relationship tags, and constraints that
//!   compare those tags pairwise to forbid (`exclude`) or de-prioritize
//!   (`low-probability`, `medium-probability`) a directed pairing.
//! - **Eligibility graph**: weighted "may X gift Y" edges built from the
//!   roster; lower weight is more preferred, a missing edge is forbidden.
//! - **Decomposition**: one approximate minimum-weight Hamiltonian cycle
//!   per round, with consumed pairings removed before the next round.
//! - **Verification**: every participant gives and receives exactly
//!   `n_recipients` gifts.
//!
//! # Example
//!
//! ```
//! use secret_santa_pp::model::{Comparator, Constraint, Limit, Participant, Roster};
//! use secret_santa_pp::sa::SaConfig;
//! use secret_santa_pp::solution::Solution;
//! use secret_santa_pp::tour::AnnealingTourSolver;
//!
//! let people = ["ann", "bob", "cat", "dan", "eve"]
//!     .iter()
//!     .map(|n| Participant::new(*n, format!("{n}@example.com")))
//!     .collect::<Vec<_>>();
//! let mut roster = Roster::new(
//!     people,
//!     vec![Constraint::new("spouse", Comparator::TwoWayContains, Limit::Exclude)],
//! );
//!
//! let config = SaConfig::default().with_max_iterations(10_000).with_seed(42);
//! let mut solver = AnnealingTourSolver::new(config)?;
//! let solution = Solution::generate(&roster, None, 2, &mut solver)?;
//! solution.persist(&mut roster, "2024");
//!
//! assert_eq!(Solution::load(&roster, "2024")?.n_recipients(), 2);
//! # Ok::<(), secret_santa_pp::SantaError>(())
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod sa;
pub mod solution;
pub mod tour;

pub use error::{Result, SantaError, TourError};
