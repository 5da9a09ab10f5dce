//! Error types for assignment generation.

use thiserror::Error;

/// Main error type for generating, verifying and loading solutions.
#[derive(Debug, Error)]
pub enum SantaError {
    /// A comparator/limit literal or an annealing parameter is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No closed tour could be extracted from the remaining graph.
    #[error("No feasible assignment in round {round}: {source}")]
    Infeasible {
        /// 1-based round index.
        round: usize,
        #[source]
        source: TourError,
    },

    /// The solution graph has no nodes.
    #[error("Invalid solution: empty graph")]
    EmptySolution,

    /// Some node does not have the required in/out-degree.
    #[error("Invalid solution: [{}]", format_edges(.edges))]
    InvalidSolution {
        /// Every edge of the rejected graph, as `(src, dst)`.
        edges: Vec<(String, String)>,
    },

    /// No participant stores any recipient under this key.
    #[error("Solution key not found: {0}")]
    KeyNotFound(String),
}

/// Failure of a single tour search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("a closed tour needs at least two participants, got {0}")]
    TooFewNodes(usize),

    #[error("participant '{name}' has no remaining outgoing or incoming pairing")]
    Isolated { name: String },

    #[error("no Hamiltonian cycle found in the remaining pairings")]
    NoHamiltonianCycle,

    #[error("tour does not return to its starting participant")]
    NotClosed,

    #[error("pairing {src} -> {dst} is not available")]
    MissingEdge { src: String, dst: String },
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, SantaError>;

fn format_edges(edges: &[(String, String)]) -> String {
    edges
        .iter()
        .map(|(src, dst)| format!("{src} -> {dst}"))
        .collect::<Vec<_>>()
        .join(", ")
}
