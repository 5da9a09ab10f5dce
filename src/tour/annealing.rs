//! Simulated-annealing tour solver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{greedy_tour, CostMatrix, TourSolver};
use crate::error::{Result, TourError};
use crate::graph::EligibilityGraph;
use crate::sa::{AnnealingProblem, SaConfig, SaRunner};

/// Approximate minimum-weight directed Hamiltonian cycle via SA.
///
/// The search runs over permutations with the first node pinned, seeded
/// by [`greedy_tour`]. Missing pairings are priced above any feasible tour,
/// so the search is free to pass through infeasible tours but a penalised
/// best tour means no cycle was found.
///
/// The solver owns its generator: two solvers built from the same seeded
/// config return the same tours for the same sequence of graphs.
#[derive(Debug, Clone)]
pub struct AnnealingTourSolver {
    config: SaConfig,
    rng: StdRng,
}

impl AnnealingTourSolver {
    /// Creates a solver after validating `config`.
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl Default for AnnealingTourSolver {
    fn default() -> Self {
        Self {
            config: SaConfig::default(),
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }
}

impl TourSolver for AnnealingTourSolver {
    fn solve(&mut self, graph: &EligibilityGraph) -> std::result::Result<Vec<String>, TourError> {
        let n = graph.node_count();
        if n < 2 {
            return Err(TourError::TooFewNodes(n));
        }

        let costs = CostMatrix::from_graph(graph);
        if let Some(i) = (0..n).find(|&i| costs.out_degree(i) == 0 || costs.in_degree(i) == 0) {
            return Err(TourError::Isolated {
                name: graph.name(i).to_string(),
            });
        }

        let problem = TourProblem::new(&costs);
        let result = SaRunner::run(&problem, &self.config, &mut self.rng);

        if !problem.is_feasible(&result.best) {
            return Err(TourError::NoHamiltonianCycle);
        }
        debug!(nodes = n, cost = result.best_cost, "closed tour found");

        let mut tour: Vec<String> = result
            .best
            .iter()
            .map(|&i| graph.name(i).to_string())
            .collect();
        tour.push(graph.name(result.best[0]).to_string());
        Ok(tour)
    }
}

/// Closed tours over a cost matrix, encoded as permutations starting at 0.
struct TourProblem<'a> {
    costs: &'a CostMatrix,
    penalty: f64,
}

impl<'a> TourProblem<'a> {
    fn new(costs: &'a CostMatrix) -> Self {
        let bound = u64::from(costs.max_weight()) * costs.len() as u64;
        Self {
            costs,
            penalty: (bound + 1) as f64,
        }
    }

    fn legs<'t>(tour: &'t [usize]) -> impl Iterator<Item = (usize, usize)> + 't {
        let n = tour.len();
        (0..n).map(move |i| (tour[i], tour[(i + 1) % n]))
    }

    fn is_feasible(&self, tour: &[usize]) -> bool {
        Self::legs(tour).all(|(s, d)| self.costs.get(s, d).is_some())
    }
}

impl AnnealingProblem for TourProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        greedy_tour(self.costs)
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        Self::legs(tour)
            .map(|(s, d)| self.costs.get(s, d).map_or(self.penalty, f64::from))
            .sum()
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let n = tour.len();
        let mut next = tour.clone();
        if n < 3 {
            return next;
        }

        // Two distinct positions, never the pinned start.
        let i = rng.random_range(1..n);
        let mut j = rng.random_range(1..n - 1);
        if j >= i {
            j += 1;
        }

        match rng.random_range(0..3) {
            0 => next.swap(i, j),
            1 => {
                let node = next.remove(i);
                next.insert(j, node);
            }
            _ => next[i.min(j)..=i.max(j)].reverse(),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> EligibilityGraph {
        let mut g = EligibilityGraph::new();
        for s in 0..n {
            for d in 0..n {
                if s != d {
                    g.add_edge(&s.to_string(), &d.to_string(), 1);
                }
            }
        }
        g
    }

    fn quick() -> SaConfig {
        SaConfig::default()
            .with_iterations_per_temperature(200)
            .with_max_iterations(20_000)
            .with_seed(42)
    }

    fn assert_closed_tour(graph: &EligibilityGraph, tour: &[String]) {
        assert_eq!(tour.len(), graph.node_count() + 1);
        assert_eq!(tour.first(), tour.last());
        let mut seen: Vec<&str> = tour[..tour.len() - 1].iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), graph.node_count());
        for leg in tour.windows(2) {
            assert!(graph.has_edge(&leg[0], &leg[1]), "missing {} -> {}", leg[0], leg[1]);
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        assert!(AnnealingTourSolver::new(config).is_err());
    }

    #[test]
    fn test_solves_complete_graph() {
        let graph = complete(6);
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        let tour = solver.solve(&graph).expect("complete graph has a cycle");

        assert_closed_tour(&graph, &tour);
        assert_eq!(tour[0], "0");
    }

    #[test]
    fn test_default_solver_behind_trait_object() {
        let graph = complete(5);
        let mut solver: Box<dyn TourSolver> = Box::new(AnnealingTourSolver::default());

        let tour = solver.solve(&graph).expect("complete graph has a cycle");

        assert_closed_tour(&graph, &tour);
    }

    #[test]
    fn test_finds_the_only_cycle() {
        // a -> b -> c -> d -> a is the only Hamiltonian cycle; the cheap
        // edges lead greedy construction into a dead end.
        let mut g = EligibilityGraph::new();
        g.add_edge("a", "c", 1);
        g.add_edge("c", "b", 1);
        g.add_edge("a", "b", 9);
        g.add_edge("b", "c", 9);
        g.add_edge("c", "d", 9);
        g.add_edge("d", "a", 9);
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        let tour = solver.solve(&g).expect("cycle exists");

        assert_eq!(tour, ["a", "b", "c", "d", "a"]);
    }

    #[test]
    fn test_prefers_low_weight_edges() {
        let cheap = [("0", "2"), ("2", "4"), ("4", "1"), ("1", "3"), ("3", "0")];
        let mut g = EligibilityGraph::new();
        for s in 0..5 {
            for d in (0..5).filter(|&d| d != s) {
                g.add_edge(&s.to_string(), &d.to_string(), 5);
            }
        }
        for (s, d) in cheap {
            g.add_edge(s, d, 1);
        }
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        let tour = solver.solve(&g).expect("cycle exists");

        assert_eq!(tour, ["0", "2", "4", "1", "3", "0"]);
    }

    #[test]
    fn test_isolated_node_fails_fast() {
        let mut g = complete(3);
        g.add_node("lonely");
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        assert_eq!(
            solver.solve(&g),
            Err(TourError::Isolated { name: "lonely".into() })
        );
    }

    #[test]
    fn test_single_node_rejected() {
        let mut g = EligibilityGraph::new();
        g.add_node("solo");
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        assert_eq!(solver.solve(&g), Err(TourError::TooFewNodes(1)));
    }

    #[test]
    fn test_no_cycle_reported() {
        // Every node has in and out edges but a and b only reach each other.
        let mut g = EligibilityGraph::new();
        g.add_edge("a", "b", 1);
        g.add_edge("b", "a", 1);
        g.add_edge("c", "d", 1);
        g.add_edge("d", "c", 1);
        let mut solver = AnnealingTourSolver::new(quick()).expect("valid config");

        assert_eq!(solver.solve(&g), Err(TourError::NoHamiltonianCycle));
    }

    #[test]
    fn test_same_seed_same_tours() {
        let graph = complete(7);
        let mut a = AnnealingTourSolver::new(quick()).expect("valid config");
        let mut b = AnnealingTourSolver::new(quick()).expect("valid config");

        for _ in 0..3 {
            assert_eq!(a.solve(&graph), b.solve(&graph));
        }
    }
}
