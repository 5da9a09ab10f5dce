//! Gift assignment solutions.
//!
//! [`Solution::generate`] runs the whole pipeline:
//!
//! 1. [`build_eligibility_graph`] from the roster (optionally a subset)
//! 2. [`decompose`] into `n_recipients` edge-disjoint closed tours
//! 3. [`verify`] that everyone gives and receives exactly `n_recipients`
//!
//! A solution is persisted by writing each gifter's recipients back into
//! the [`Roster`] under a relationship key, and loaded from there again
//! without rebuilding the eligibility graph.

mod decomposer;
mod verifier;

pub use decomposer::{decompose, Decomposition};
pub use verifier::verify;

use std::fmt;

use tracing::info;

use crate::error::{Result, SantaError};
use crate::graph::{build_eligibility_graph, SolutionGraph, Weight};
use crate::model::Roster;
use crate::tour::TourSolver;

/// A set of assignments: gifter -> recipients.
#[derive(Debug, Clone)]
pub struct Solution {
    graph: SolutionGraph,
    n_recipients: usize,
    rounds: Vec<Vec<String>>,
}

impl Solution {
    /// Generates a new solution for `roster`.
    ///
    /// `participants` restricts the run to those names; everyone else is
    /// left out of the graph entirely.
    pub fn generate<S>(
        roster: &Roster,
        participants: Option<&[String]>,
        n_recipients: usize,
        solver: &mut S,
    ) -> Result<Self>
    where
        S: TourSolver + ?Sized,
    {
        let eligibility = build_eligibility_graph(&roster.people, &roster.constraints, participants);
        info!(
            participants = eligibility.node_count(),
            pairings = eligibility.edge_count(),
            n_recipients,
            "generating solution"
        );

        let Decomposition { graph, rounds } = decompose(&eligibility, n_recipients, solver)?;
        let solution = Self {
            graph,
            n_recipients,
            rounds,
        };

        info!(total_weight = solution.total_weight(), "solution generated");
        Ok(solution)
    }

    /// Loads the solution stored under `key`.
    ///
    /// The round count is read from the out-degree of the first node and is
    /// not checked against the other nodes; call [`Solution::verify`] for
    /// that.
    pub fn load(roster: &Roster, key: &str) -> Result<Self> {
        let graph = roster.load_graph(key);
        if graph.edge_count() == 0 {
            return Err(SantaError::KeyNotFound(key.to_string()));
        }

        let n_recipients = graph.nodes().next().map_or(0, |n| graph.out_degree(n));
        Ok(Self {
            graph,
            n_recipients,
            rounds: Vec::new(),
        })
    }

    /// Stores every gifter's recipients in `roster` under `key`.
    pub fn persist(&self, roster: &mut Roster, key: &str) {
        roster.update_from_graph(&self.graph, key);
    }

    /// Re-checks the exact-degree invariant.
    pub fn verify(&self) -> Result<()> {
        verify(&self.graph, self.n_recipients)
    }

    pub fn graph(&self) -> &SolutionGraph {
        &self.graph
    }

    pub fn n_recipients(&self) -> usize {
        self.n_recipients
    }

    /// Closed tour of each generated round. Empty for loaded solutions.
    pub fn rounds(&self) -> &[Vec<String>] {
        &self.rounds
    }

    /// Recipients of `gifter`, in assignment order.
    pub fn recipients(&self, gifter: &str) -> Vec<&str> {
        self.graph.successors(gifter).map(|(name, _)| name).collect()
    }

    /// Sum of tracked pairing weights.
    pub fn total_weight(&self) -> Weight {
        self.graph.edges().filter_map(|(_, _, w)| *w).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gifter in self.graph.nodes() {
            writeln!(f, "{gifter}: {}", self.recipients(gifter).join(", "))?;
        }
        Ok(())
    }
}
