//! Undirected graph used to assemble rings from loose way segments.

use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Undirected graph over node identities.
///
/// The graph is built in one pass from a set of paths and is not changed afterwards. Nodes are stored in the order
/// they were first seen, so iteration over the graph is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    neighbors: Vec<Vec<usize>>,
}

impl<N: Copy + Eq + Hash> Graph<N> {
    /// Builds a graph with an edge between every two consecutive nodes of every path.
    ///
    /// Repeated edges are merged. Edges from a node to itself are ignored.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = N>,
    {
        let mut graph = Self {
            nodes: vec![],
            index: HashMap::new(),
            neighbors: vec![],
        };

        for path in paths {
            let mut prev = None;
            for node in path {
                let current = graph.add_node(node);
                if let Some(prev) = prev {
                    graph.add_edge(prev, current);
                }
                prev = Some(current);
            }
        }

        graph
    }

    fn add_node(&mut self, node: N) -> usize {
        if let Some(&index) = self.index.get(&node) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(node);
        self.neighbors.push(vec![]);
        self.index.insert(node, index);
        index
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        if a == b || self.neighbors[a].contains(&b) {
            return;
        }

        self.neighbors[a].push(b);
        self.neighbors[b].push(a);
    }

    /// Nodes of the graph in the order they were first seen.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Neighbors of the node, or `None` if the node is not in the graph.
    pub fn neighbors_of(&self, node: &N) -> Option<impl Iterator<Item = &N> + '_> {
        let index = *self.index.get(node)?;
        Some(self.neighbors[index].iter().map(|&i| &self.nodes[i]))
    }

    /// Number of neighbors of the node, or `None` if the node is not in the graph.
    pub fn degree(&self, node: &N) -> Option<usize> {
        let index = *self.index.get(node)?;
        Some(self.neighbors[index].len())
    }

    /// First node that does not have exactly two neighbors.
    ///
    /// If there is no such node, the graph is a disjoint union of simple cycles.
    pub fn irregular_node(&self) -> Option<N> {
        self.neighbors
            .iter()
            .position(|n| n.len() != 2)
            .map(|index| self.nodes[index])
    }

    /// Decomposes the graph into simple cycles.
    ///
    /// Returns `None` if the graph is not a disjoint union of simple cycles (see [`Graph::irregular_node`]). Every
    /// returned cycle lists its nodes in the walking order without repeating the first one at the end.
    pub fn cycles(&self) -> Option<Vec<Vec<N>>> {
        if self.irregular_node().is_some() {
            return None;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut cycles = vec![];

        for start in 0..self.nodes.len() {
            if visited[start] {
                continue;
            }

            let mut cycle = vec![self.nodes[start]];
            visited[start] = true;

            let mut prev = start;
            let mut current = self.neighbors[start][0];
            while current != start {
                cycle.push(self.nodes[current]);
                visited[current] = true;

                let next = self.neighbors[current]
                    .iter()
                    .copied()
                    .find(|&n| n != prev)?;
                prev = current;
                current = next;
            }

            cycles.push(cycle);
        }

        Some(cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_paths() {
        let graph = Graph::from_paths([vec![1, 2, 3], vec![3, 4], vec![2, 3]]);

        assert_eq!(graph.nodes(), &[1, 2, 3, 4]);
        assert_eq!(graph.degree(&2), Some(2));
        assert_eq!(graph.degree(&3), Some(2));
        assert_eq!(graph.degree(&4), Some(1));
        assert_eq!(graph.degree(&5), None);

        let mut neighbors: Vec<i32> = graph.neighbors_of(&3).unwrap().copied().collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![2, 4]);
        assert!(graph.neighbors_of(&10).is_none());
    }

    #[test]
    fn self_loops_are_ignored() {
        let graph = Graph::from_paths([vec![1, 1, 2]]);
        assert_eq!(graph.degree(&1), Some(1));
    }

    #[test]
    fn single_cycle() {
        let graph = Graph::from_paths([vec![1, 2, 3], vec![3, 4, 5, 1]]);

        let cycles = graph.cycles().unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reversed_segments() {
        let graph = Graph::from_paths([vec![1, 2, 3], vec![1, 5, 4, 3]]);

        let cycles = graph.cycles().unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 5);
    }

    #[test]
    fn disjoint_cycles() {
        let graph = Graph::from_paths([vec![1, 2, 3, 1], vec![10, 11, 12, 13, 10]]);

        let mut lengths: Vec<usize> = graph.cycles().unwrap().iter().map(Vec::len).collect();
        lengths.sort();
        assert_eq!(lengths, vec![3, 4]);
    }

    #[test]
    fn open_path() {
        let graph = Graph::from_paths([vec![1, 2, 3]]);
        assert_eq!(graph.irregular_node(), Some(1));
        assert!(graph.cycles().is_none());
    }

    #[test]
    fn branching() {
        let graph = Graph::from_paths([vec![1, 2, 3, 1], vec![2, 4]]);
        assert_eq!(graph.irregular_node(), Some(2));
        assert!(graph.cycles().is_none());
    }

    #[test]
    fn empty() {
        let graph = Graph::<i64>::from_paths(Vec::<Vec<i64>>::new());
        assert!(graph.is_empty());
        assert_eq!(graph.cycles(), Some(vec![]));
    }
}
