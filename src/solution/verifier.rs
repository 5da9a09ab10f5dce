//! Exact-degree check on a finished solution.

use crate::error::{Result, SantaError};
use crate::graph::DiGraph;

/// Requires every node to give and receive exactly `n_recipients` gifts.
///
/// Fails with [`SantaError::EmptySolution`] for a graph without nodes,
/// whatever `n_recipients` is, and with [`SantaError::InvalidSolution`]
/// listing every edge on the first mismatch.
pub fn verify<W>(graph: &DiGraph<W>, n_recipients: usize) -> Result<()> {
    if graph.node_count() == 0 {
        return Err(SantaError::EmptySolution);
    }

    let mismatch = graph
        .nodes()
        .any(|n| graph.in_degree(n) != n_recipients || graph.out_degree(n) != n_recipients);
    if mismatch {
        return Err(SantaError::InvalidSolution {
            edges: graph.edge_list(),
        });
    }
    Ok(())
}
