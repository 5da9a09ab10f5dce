//! Directed graphs over participant names.
//!
//! - [`DiGraph`]: owned, index-based adjacency with insertion-ordered
//!   successors. Cloning produces an independent working copy.
//! - [`build_eligibility_graph`]: turns a roster into weighted
//!   "may X gift Y" edges, where a lower weight is more preferred and a
//!   missing edge is forbidden.

mod digraph;
mod eligibility;

pub use digraph::DiGraph;
pub use eligibility::{build_eligibility_graph, edge_weight};

/// Relative cost of a directed pairing. Lower is more preferred.
pub type Weight = u32;

/// Allowed pairings weighted by undesirability.
pub type EligibilityGraph = DiGraph<Weight>;

/// Actual assignments. Edge weights are tracked for generated solutions and
/// absent for solutions loaded from storage.
pub type SolutionGraph = DiGraph<Option<Weight>>;
