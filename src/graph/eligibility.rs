//! Eligibility graph construction.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{EligibilityGraph, Weight};
use crate::model::{Constraint, Participant};

/// Weight of every pairing before constraints are applied.
pub const BASE_WEIGHT: Weight = 1;

/// Computes the weight of the pairing `src -> dst`.
///
/// Returns `None` as soon as an [`Exclude`](crate::model::Limit::Exclude)
/// constraint fires, ignoring any penalty accumulated so far. A `src` with
/// no relationship tags at all always gets [`BASE_WEIGHT`].
pub fn edge_weight(
    constraints: &[Constraint],
    src: &Participant,
    dst: &Participant,
) -> Option<Weight> {
    let mut weight = BASE_WEIGHT;

    if src.relationships.is_empty() {
        return Some(weight);
    }

    for constraint in constraints.iter().filter(|c| c.meets(src, dst)) {
        weight += constraint.limit.penalty()?;
    }

    Some(weight)
}

/// Builds the eligibility graph for `participants`, optionally restricted to
/// the names in `subset`.
///
/// Every selected participant becomes a node, even when all of its pairings
/// are excluded. Both directions of every pair are evaluated independently.
/// Subset names that match no participant are ignored.
pub fn build_eligibility_graph(
    participants: &[Participant],
    constraints: &[Constraint],
    subset: Option<&[String]>,
) -> EligibilityGraph {
    let selected: Vec<&Participant> = match subset {
        Some(names) => {
            let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
            let known: HashSet<&str> = participants.iter().map(|p| p.name.as_str()).collect();
            for missing in wanted.difference(&known) {
                warn!(name = %missing, "participant subset names an unknown participant");
            }
            participants
                .iter()
                .filter(|p| wanted.contains(p.name.as_str()))
                .collect()
        }
        None => participants.iter().collect(),
    };

    let mut graph = EligibilityGraph::new();
    for p in &selected {
        graph.add_node(&p.name);
    }

    for (i, p1) in selected.iter().enumerate() {
        for p2 in &selected[i + 1..] {
            if let Some(w) = edge_weight(constraints, p1, p2) {
                graph.add_edge(&p1.name, &p2.name, w);
            }
            if let Some(w) = edge_weight(constraints, p2, p1) {
                graph.add_edge(&p2.name, &p1.name, w);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built eligibility graph"
    );
    graph
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::{Comparator, Limit};
    use proptest::prelude::*;

    fn limit() -> impl Strategy<Value = Limit> {
        prop::sample::select(vec![Limit::Exclude, Limit::LowProbability, Limit::MediumProbability])
    }

    proptest! {
        /// Property: any firing exclude yields no edge
        #[test]
        fn test_exclude_short_circuits(limits in prop::collection::vec(limit(), 1..6)) {
            let a = Participant::new("a", "a@example.com").with_relationship("k", ["b"]);
            let b = Participant::new("b", "b@example.com");
            let constraints: Vec<_> = limits
                .iter()
                .map(|l| Constraint::new("k", Comparator::OneWayContains, *l))
                .collect();

            let weight = edge_weight(&constraints, &a, &b);
            if limits.contains(&Limit::Exclude) {
                prop_assert_eq!(weight, None);
            } else {
                let expected = 1 + limits.iter().filter_map(Limit::penalty).sum::<u32>();
                prop_assert_eq!(weight, Some(expected));
            }
        }

        /// Property: a participant without tags always pairs at weight 1
        #[test]
        fn test_untagged_source_weight_one(limits in prop::collection::vec(limit(), 0..6)) {
            let a = Participant::new("a", "a@example.com");
            let b = Participant::new("b", "b@example.com").with_relationship("k", ["a"]);
            let constraints: Vec<_> = limits
                .iter()
                .map(|l| Constraint::new("k", Comparator::EitherContains, *l))
                .collect();

            prop_assert_eq!(edge_weight(&constraints, &a, &b), Some(1));
        }
    }
}
