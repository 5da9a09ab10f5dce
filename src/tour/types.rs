//! Tour solver seam and dense cost lookup.

use crate::error::TourError;
use crate::graph::{EligibilityGraph, Weight};

/// Finds a closed tour through every node of a graph.
///
/// The returned sequence starts and ends with the same name and lists every
/// other node exactly once in between. Solvers take `&mut self` so a
/// seeded generator can live across the rounds of one run.
pub trait TourSolver {
    fn solve(&mut self, graph: &EligibilityGraph) -> Result<Vec<String>, TourError>;
}

/// Dense `n x n` view of an eligibility graph indexed by node position.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    n: usize,
    weights: Vec<Option<Weight>>,
}

impl CostMatrix {
    pub fn from_graph(graph: &EligibilityGraph) -> Self {
        let n = graph.node_count();
        let mut weights = vec![None; n * n];
        for (src, dst, w) in graph.edges() {
            if let (Some(s), Some(d)) = (graph.index_of(src), graph.index_of(dst)) {
                weights[s * n + d] = Some(*w);
            }
        }
        Self { n, weights }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, src: usize, dst: usize) -> Option<Weight> {
        self.weights[src * self.n + dst]
    }

    pub fn max_weight(&self) -> Weight {
        self.weights.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn out_degree(&self, src: usize) -> usize {
        (0..self.n).filter(|&d| self.get(src, d).is_some()).count()
    }

    pub fn in_degree(&self, dst: usize) -> usize {
        (0..self.n).filter(|&s| self.get(s, dst).is_some()).count()
    }
}
