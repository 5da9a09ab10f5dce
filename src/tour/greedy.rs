//! Greedy nearest-neighbour tour construction.

use super::CostMatrix;

/// Builds an open tour (a permutation of `0..n` starting at 0) by always
/// moving to the cheapest unvisited successor.
///
/// When the current node has no eligible unvisited successor, the lowest
/// unvisited index is taken instead so the result is always a complete
/// permutation; the caller's cost function is responsible for penalising
/// such jumps.
pub fn greedy_tour(costs: &CostMatrix) -> Vec<usize> {
    let n = costs.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    tour.push(0);

    while tour.len() < n {
        let next = (0..n)
            .filter(|&d| !visited[d])
            .filter_map(|d| costs.get(current, d).map(|w| (w, d)))
            .min()
            .map(|(_, d)| d)
            .or_else(|| (0..n).find(|&d| !visited[d]));

        let Some(next) = next else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}
