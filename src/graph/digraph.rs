//! Owned directed graph keyed by participant name.

use std::collections::HashMap;

/// A directed graph with per-edge data `W`.
///
/// Nodes are stored by index in insertion order; successors of each node
/// keep the order in which their edges were first added. The graph is a
/// plain value: cloning it yields an independent working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<W> {
    names: Vec<String>,
    index: HashMap<String, usize>,
    successors: Vec<Vec<(usize, W)>>,
    in_degrees: Vec<usize>,
    edge_count: usize,
}

impl<W> Default for DiGraph<W> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            in_degrees: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<W> DiGraph<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` if absent and returns its index.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.successors.push(Vec::new());
        self.in_degrees.push(0);
        idx
    }

    /// Adds the edge `src -> dst`, creating missing nodes.
    ///
    /// An existing edge keeps its position among `src`'s successors and
    /// has its data replaced.
    pub fn add_edge(&mut self, src: &str, dst: &str, data: W) {
        let s = self.add_node(src);
        let d = self.add_node(dst);
        match self.successors[s].iter_mut().find(|(to, _)| *to == d) {
            Some(edge) => edge.1 = data,
            None => {
                self.successors[s].push((d, data));
                self.in_degrees[d] += 1;
                self.edge_count += 1;
            }
        }
    }

    /// Removes `src -> dst`, returning its data if the edge existed.
    pub fn remove_edge(&mut self, src: &str, dst: &str) -> Option<W> {
        let s = self.index_of(src)?;
        let d = self.index_of(dst)?;
        let pos = self.successors[s].iter().position(|(to, _)| *to == d)?;
        let (_, data) = self.successors[s].remove(pos);
        self.in_degrees[d] -= 1;
        self.edge_count -= 1;
        Some(data)
    }

    pub fn edge(&self, src: &str, dst: &str) -> Option<&W> {
        let s = self.index_of(src)?;
        let d = self.index_of(dst)?;
        self.edge_by_index(s, d)
    }

    pub fn edge_by_index(&self, src: usize, dst: usize) -> Option<&W> {
        self.successors
            .get(src)?
            .iter()
            .find(|(to, _)| *to == dst)
            .map(|(_, data)| data)
    }

    pub fn has_edge(&self, src: &str, dst: &str) -> bool {
        self.edge(src, dst).is_some()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Direct successors of `name` with edge data, in insertion order.
    /// Empty for unknown nodes.
    pub fn successors(&self, name: &str) -> impl Iterator<Item = (&str, &W)> + '_ {
        self.index_of(name)
            .into_iter()
            .flat_map(move |s| self.successors[s].iter())
            .map(move |(d, data)| (self.names[*d].as_str(), data))
    }

    pub fn out_degree(&self, name: &str) -> usize {
        self.index_of(name)
            .map_or(0, |s| self.successors[s].len())
    }

    pub fn in_degree(&self, name: &str) -> usize {
        self.index_of(name).map_or(0, |d| self.in_degrees[d])
    }

    /// All edges as `(src, dst, data)`, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &W)> + '_ {
        self.successors.iter().enumerate().flat_map(move |(s, out)| {
            out.iter()
                .map(move |(d, data)| (self.names[s].as_str(), self.names[*d].as_str(), data))
        })
    }

    /// Edge endpoints as owned pairs, for diagnostics.
    pub fn edge_list(&self) -> Vec<(String, String)> {
        self.edges()
            .map(|(s, d, _)| (s.to_string(), d.to_string()))
            .collect()
    }
}
