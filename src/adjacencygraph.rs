/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A graph stored as adjacency lists.
//!
//! Nodes are identified by their name. The graph can only grow: nodes and
//! arcs can be added, but never removed. Adding an arc implicitly adds its
//! end nodes.
//!
//! # Example
//!
//! ```
//! use rs_transit::{AdjacencyGraph, Graph};
//!
//! let mut g: AdjacencyGraph = AdjacencyGraph::new();
//! g.add_line_arc("Nation", "Bastille", 4.0, "1");
//! g.add_line_arc("Nation", "Bastille", 6.0, "9");
//! g.add_node("Opera");
//!
//! assert_eq!(g.list_nodes(), vec!["Nation", "Bastille", "Opera"]);
//! assert_eq!(g.successors("Nation").len(), 2);
//! assert!(g.successors("Louvre").is_empty());
//! assert_eq!(g.to_string(), "Nation -> Bastille(4,1) Bastille(6,9)\nBastille ->\nOpera ->\n");
//! ```

use crate::arc::Arc;
use crate::traits::Graph;
use crate::Cost;

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A graph stored as adjacency lists.
///
/// The nodes are kept in insertion order. The outgoing arcs of the `i`-th
/// node are stored in `adj[i]`, again in insertion order. Parallel arcs
/// are allowed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AdjacencyGraph<W = f64> {
    /// The node names.
    nodes: Vec<String>,
    /// Position of each node in `nodes`.
    index: HashMap<String, usize>,
    /// The outgoing arcs of each node.
    adj: Vec<Vec<Arc<W>>>,
}

impl<W> AdjacencyGraph<W> {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new, empty graph with room for `nnodes` nodes.
    pub fn with_capacity(nnodes: usize) -> Self {
        AdjacencyGraph {
            nodes: Vec::with_capacity(nnodes),
            index: HashMap::with_capacity(nnodes),
            adj: Vec::with_capacity(nnodes),
        }
    }

    /// Create a new graph by passing it to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_transit::{AdjacencyGraph, Graph};
    ///
    /// let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
    ///     g.add_arc("X", "Y", 5.0);
    ///     g.add_arc("Y", "Z", 3.0);
    /// });
    ///
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_arcs(), 2);
    /// ```
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut g = Self::new();
        f(&mut g);
        g
    }

    /// Add the node `u` to the graph.
    ///
    /// Nothing happens if the node already exists. Returns the (insertion)
    /// index of the node.
    pub fn add_node(&mut self, u: &str) -> usize {
        if let Some(&i) = self.index.get(u) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(u.to_string());
        self.index.insert(u.to_string(), i);
        self.adj.push(vec![]);
        i
    }

    /// Add an arc from `u` to `v` that does not belong to any line.
    ///
    /// Both nodes are added to the graph if necessary.
    pub fn add_arc(&mut self, u: &str, v: &str, cost: W) {
        let i = self.add_node(u);
        self.add_node(v);
        self.adj[i].push(Arc::new(v, cost));
    }

    /// Add an arc from `u` to `v` on the given line.
    ///
    /// Both nodes are added to the graph if necessary.
    pub fn add_line_arc(&mut self, u: &str, v: &str, cost: W, line: &str) {
        let i = self.add_node(u);
        self.add_node(v);
        self.adj[i].push(Arc::with_line(v, cost, line));
    }

    /// Return `true` if `u` is a node of the graph.
    pub fn contains_node(&self, u: &str) -> bool {
        self.index.contains_key(u)
    }

    /// Return the insertion index of node `u`.
    pub fn node_id(&self, u: &str) -> Option<usize> {
        self.index.get(u).copied()
    }
}

impl<W> Default for AdjacencyGraph<W> {
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

impl<W> Graph for AdjacencyGraph<W>
where
    W: Cost,
{
    type Weight = W;

    fn list_nodes(&self) -> Vec<String> {
        self.nodes.clone()
    }

    fn successors(&self, u: &str) -> &[Arc<W>] {
        match self.index.get(u) {
            Some(&i) => &self.adj[i],
            None => &[],
        }
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_arcs(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}

impl<W: fmt::Display> fmt::Display for AdjacencyGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for (u, arcs) in self.nodes.iter().zip(&self.adj) {
            write!(f, "{} ->", u)?;
            for a in arcs {
                write!(f, " {}", a)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::traits::Graph;
    use crate::AdjacencyGraph;

    fn figure() -> AdjacencyGraph {
        AdjacencyGraph::new_with(|g| {
            g.add_arc("A", "B", 12.0);
            g.add_arc("A", "D", 87.0);
            g.add_arc("B", "E", 11.0);
            g.add_arc("C", "A", 19.0);
            g.add_arc("D", "B", 23.0);
            g.add_arc("D", "C", 10.0);
            g.add_arc("E", "D", 43.0);
        })
    }

    #[test]
    fn test_nodes() {
        let g = figure();
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_arcs(), 7);
        assert_eq!(g.list_nodes(), vec!["A", "B", "D", "E", "C"]);
        assert_eq!(g.node_id("C"), Some(4));
        assert_eq!(g.node_id("Z"), None);
    }

    #[test]
    fn test_list_nodes_is_a_copy() {
        let g = figure();
        let mut nodes = g.list_nodes();
        nodes.push("Z".to_string());
        nodes.swap(0, 1);
        assert_eq!(g.list_nodes(), vec!["A", "B", "D", "E", "C"]);
        assert!(!g.contains_node("Z"));
    }

    #[test]
    fn test_successors() {
        let g = figure();

        let succ: Vec<_> = g.successors("A").iter().map(|a| (a.dest(), a.cost())).collect();
        assert_eq!(succ, vec![("B", 12.0), ("D", 87.0)]);

        let succ: Vec<_> = g.successors("D").iter().map(|a| (a.dest(), a.cost())).collect();
        assert_eq!(succ, vec![("B", 23.0), ("C", 10.0)]);

        assert!(g.successors("Z").is_empty());
    }

    #[test]
    fn test_add_arc() {
        let mut g = figure();
        g.add_arc("E", "C", 15.0);
        g.add_arc("E", "F", 1.0);

        let succ: Vec<_> = g.successors("E").iter().map(|a| a.dest()).collect();
        assert_eq!(succ, vec!["D", "C", "F"]);
        assert_eq!(g.num_nodes(), 6);
        assert_eq!(g.num_arcs(), 9);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = AdjacencyGraph::<f64>::new();
        assert_eq!(g.add_node("A"), 0);
        assert_eq!(g.add_node("B"), 1);
        assert_eq!(g.add_node("A"), 0);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_arcs(), 0);
    }

    #[test]
    fn test_parallel_arcs() {
        let mut g: AdjacencyGraph = AdjacencyGraph::new();
        g.add_arc("A", "B", 5.0);
        g.add_arc("A", "B", 3.0);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_arcs(), 2);
        assert_eq!(g.successors("A")[1].cost(), 3.0);
    }

    #[test]
    fn test_arriving_line() {
        let mut g: AdjacencyGraph = AdjacencyGraph::new();
        g.add_line_arc("A", "B", 1.0, "1");
        g.add_line_arc("A", "B", 1.0, "2");
        g.add_arc("B", "C", 1.0);

        assert_eq!(g.arriving_line("A", "B"), Some("1"));
        assert_eq!(g.arriving_line("B", "C"), None);
        assert_eq!(g.arriving_line("C", "A"), None);
    }

    #[test]
    fn test_display() {
        let mut g: AdjacencyGraph = AdjacencyGraph::new();
        g.add_arc("A", "B", 12.0);
        g.add_line_arc("B", "A", 3.5, "M1");
        assert_eq!(g.to_string(), "A -> B(12)\nB -> A(3.5,M1)\n");
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use crate::traits::Graph;
        use crate::AdjacencyGraph;
        use serde_json;

        #[test]
        fn test_serde() {
            let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
                g.add_line_arc("A", "B", 2.0, "1");
                g.add_arc("B", "C", 3.0);
            });

            let serialized = serde_json::to_string(&g).unwrap();
            let h: AdjacencyGraph = serde_json::from_str(&serialized).unwrap();

            assert_eq!(g.list_nodes(), h.list_nodes());
            for u in g.list_nodes() {
                assert_eq!(g.successors(&u), h.successors(&u));
            }
        }
    }
}
