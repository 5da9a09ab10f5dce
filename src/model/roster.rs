//! Roster of participants and constraints, and the solution storage adapter.

use super::{Constraint, Participant};
use crate::graph::SolutionGraph;

/// Participants plus the constraints applied to every ordered pair.
///
/// Solutions are stored inside the roster itself: a solution key is just
/// another relationship tag holding each gifter's ordered recipients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub people: Vec<Participant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<Constraint>,
}

impl Roster {
    pub fn new(people: Vec<Participant>, constraints: Vec<Constraint>) -> Self {
        Self {
            people,
            constraints,
        }
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.people.iter().find(|p| p.name == name)
    }

    /// Rebuilds the graph stored under `key`: one edge per stored recipient.
    ///
    /// Nodes only appear through edges; weights are not stored.
    pub fn load_graph(&self, key: &str) -> SolutionGraph {
        let mut graph = SolutionGraph::new();
        for person in &self.people {
            for recipient in person.related(key) {
                graph.add_edge(&person.name, recipient, None);
            }
        }
        graph
    }

    /// Stores each graph node's successors under `key`.
    ///
    /// Participants absent from the graph keep whatever they had.
    pub fn update_from_graph(&mut self, graph: &SolutionGraph, key: &str) {
        for person in &mut self.people {
            if graph.contains_node(&person.name) {
                let recipients = graph
                    .successors(&person.name)
                    .map(|(name, _)| name.to_string())
                    .collect();
                person.relationships.insert(key.to_string(), recipients);
            }
        }
    }
}
