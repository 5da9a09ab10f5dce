//! Round-by-round extraction of disjoint closed tours.

use tracing::debug;

use crate::error::{Result, SantaError, TourError};
use crate::graph::{EligibilityGraph, SolutionGraph, Weight};
use crate::tour::TourSolver;

use super::verifier::verify;

/// Output of [`decompose`]: the verified assignment graph plus the tour of
/// each round.
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub graph: SolutionGraph,
    pub rounds: Vec<Vec<String>>,
}

/// Extracts `n_recipients` edge-disjoint closed tours from `eligibility`.
///
/// Each round asks `solver` for a tour over a working copy of the graph,
/// records every leg with its weight from `eligibility`, and removes the
/// leg from the working copy so no pairing repeats. Any solver failure, an
/// open tour, or a leg the working copy no longer has aborts the whole
/// run. The accumulated graph has the same node set as `eligibility` and
/// is verified before it is returned.
pub fn decompose<S>(
    eligibility: &EligibilityGraph,
    n_recipients: usize,
    solver: &mut S,
) -> Result<Decomposition>
where
    S: TourSolver + ?Sized,
{
    if n_recipients == 0 {
        return Err(SantaError::InvalidConfig(
            "at least one recipient per participant is required".into(),
        ));
    }

    let mut working = eligibility.clone();
    let mut graph = SolutionGraph::new();
    for name in eligibility.nodes() {
        graph.add_node(name);
    }
    let mut rounds = Vec::with_capacity(n_recipients);

    if eligibility.node_count() > 0 {
        for round in 1..=n_recipients {
            let infeasible = |source| SantaError::Infeasible { round, source };

            let tour = solver.solve(&working).map_err(infeasible)?;
            if tour.len() < 2 || tour.first() != tour.last() {
                return Err(infeasible(TourError::NotClosed));
            }

            let mut cost: Weight = 0;
            for leg in tour.windows(2) {
                let (src, dst) = (leg[0].as_str(), leg[1].as_str());
                let weight = working
                    .remove_edge(src, dst)
                    .and_then(|_| eligibility.edge(src, dst).copied())
                    .ok_or_else(|| {
                        infeasible(TourError::MissingEdge {
                            src: src.to_string(),
                            dst: dst.to_string(),
                        })
                    })?;
                graph.add_edge(src, dst, Some(weight));
                cost += weight;
            }

            debug!(round, cost, remaining = working.edge_count(), "round assigned");
            rounds.push(tour);
        }
    }

    verify(&graph, n_recipients)?;
    Ok(Decomposition { graph, rounds })
}
