// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! The result of a single-source shortest path computation.

use super::{Error, Result};
use crate::Cost;

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Distances and predecessors of all nodes w.r.t. some source node.
///
/// Every node known to the result has a distance, which is infinite if the
/// node has not been reached, and at most one predecessor. The nodes known to
/// a result returned by a solver are exactly the nodes of the graph at the
/// time of the call, in the same order.
///
/// Following the predecessors from some node backwards leads to the
/// source node of the computation. The source node itself has no
/// predecessor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPaths<W = f64> {
    /// The known nodes in registration order.
    nodes: Vec<String>,
    /// Position of each node in `nodes`.
    index: HashMap<String, usize>,
    /// The distance of each node.
    dist: Vec<W>,
    /// The predecessor of each node.
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W>
where
    W: Cost,
{
    /// Create an empty result without any nodes.
    pub fn new() -> Self {
        ShortestPaths {
            nodes: vec![],
            index: HashMap::new(),
            dist: vec![],
            pred: vec![],
        }
    }

    /// Create a result for the given nodes.
    ///
    /// All nodes have infinite distance and no predecessor.
    pub fn with_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut res = Self::new();
        for u in nodes {
            res.register(u.as_ref());
        }
        res
    }

    /// Add node `u` (unreached) if it is not known, yet, and return its index.
    fn register(&mut self, u: &str) -> usize {
        if let Some(&i) = self.index.get(u) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(u.to_string());
        self.index.insert(u.to_string(), i);
        self.dist.push(W::infinity());
        self.pred.push(None);
        i
    }

    /// Set the distance of node `u`.
    ///
    /// The node is added to the result if it is not known, yet.
    pub fn set_distance(&mut self, u: &str, d: W) {
        let i = self.register(u);
        self.dist[i] = d;
    }

    /// Set the predecessor of node `u`.
    ///
    /// Both nodes are added to the result if they are not known, yet.
    pub fn set_predecessor(&mut self, u: &str, p: Option<&str>) {
        let p = p.map(|p| self.register(p));
        let i = self.register(u);
        self.pred[i] = p;
    }

    /// Return the number of known nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` if no node is known.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return `true` if `u` is a known node.
    pub fn contains(&self, u: &str) -> bool {
        self.index.contains_key(u)
    }

    /// Return the distance of node `u`.
    ///
    /// The distance is infinite if the node has not been reached. Fails with
    /// [`Error::UnknownNode`] if the node is unknown.
    pub fn distance(&self, u: &str) -> Result<W> {
        self.index
            .get(u)
            .map(|&i| self.dist[i])
            .ok_or_else(|| Error::UnknownNode(u.to_string()))
    }

    /// Return the predecessor of node `u`.
    ///
    /// Returns `None` for the source node, for unreached and for unknown
    /// nodes.
    pub fn predecessor(&self, u: &str) -> Option<&str> {
        let i = *self.index.get(u)?;
        self.pred[i].map(|p| self.nodes[p].as_str())
    }

    /// Return `true` if `u` has a finite distance.
    pub fn is_reachable(&self, u: &str) -> bool {
        self.distance(u).map_or(false, |d| d.is_finite())
    }

    /// Return the path from the source node to `dest`.
    ///
    /// The path is obtained by following the predecessors starting at `dest`
    /// until a node without predecessor is reached. It starts at the source
    /// and ends at `dest`.
    ///
    /// The returned path is empty if `dest` is unknown, unreachable *or the
    /// source node itself*. Note that the path to the source node is *not*
    /// `[source]`. Callers that need it must handle the source themselves.
    ///
    /// A path can visit each node at most once. If the predecessor chain is
    /// longer than the number of known nodes, it contains a cycle and
    /// [`Error::CorruptedPredecessorChain`] is returned. This cannot happen
    /// for results computed by the solvers on graphs with non-negative
    /// costs.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_transit::ShortestPaths;
    ///
    /// let mut res = ShortestPaths::with_nodes(vec!["s", "a", "b", "x"]);
    /// res.set_distance("s", 0.0);
    /// res.set_distance("a", 1.0);
    /// res.set_distance("b", 3.0);
    /// res.set_predecessor("a", Some("s"));
    /// res.set_predecessor("b", Some("a"));
    ///
    /// assert_eq!(res.reconstruct_path("b").unwrap(), vec!["s", "a", "b"]);
    /// assert!(res.reconstruct_path("s").unwrap().is_empty());
    /// assert!(res.reconstruct_path("x").unwrap().is_empty());
    /// assert!(res.reconstruct_path("y").unwrap().is_empty());
    /// ```
    pub fn reconstruct_path(&self, dest: &str) -> Result<Vec<&str>> {
        let mut cur = match self.index.get(dest) {
            Some(&i) if self.pred[i].is_some() => i,
            _ => return Ok(vec![]),
        };

        let bound = self.nodes.len();
        let mut path = vec![self.nodes[cur].as_str()];
        while let Some(p) = self.pred[cur] {
            if path.len() >= bound {
                return Err(Error::CorruptedPredecessorChain {
                    node: dest.to_string(),
                    bound,
                });
            }
            path.push(self.nodes[p].as_str());
            cur = p;
        }
        path.reverse();

        Ok(path)
    }

    /// Return an iterator over all known nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    /// Return an iterator over all known nodes with distance and predecessor.
    pub fn iter(&self) -> impl Iterator<Item = (&str, W, Option<&str>)> + '_ {
        self.nodes
            .iter()
            .zip(self.dist.iter().zip(&self.pred))
            .map(move |(u, (&d, p))| (u.as_str(), d, p.map(|p| self.nodes[p].as_str())))
    }

    // Index based access for the solvers.

    pub(crate) fn id(&self, u: &str) -> Option<usize> {
        self.index.get(u).copied()
    }

    pub(crate) fn name(&self, i: usize) -> &str {
        &self.nodes[i]
    }

    pub(crate) fn dist_at(&self, i: usize) -> W {
        self.dist[i]
    }

    pub(crate) fn pred_at(&self, i: usize) -> Option<usize> {
        self.pred[i]
    }

    pub(crate) fn update(&mut self, i: usize, d: W, p: Option<usize>) {
        self.dist[i] = d;
        self.pred[i] = p;
    }
}

impl<W> Default for ShortestPaths<W>
where
    W: Cost,
{
    fn default() -> Self {
        ShortestPaths::new()
    }
}

/// Write one line `u -> d:<distance> p:<predecessor>` per node.
///
/// The nodes are sorted by name, unknown predecessors are written as `-`.
impl<W> fmt::Display for ShortestPaths<W>
where
    W: Cost,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        let mut lines: Vec<_> = self.iter().collect();
        lines.sort_by(|a, b| a.0.cmp(b.0));
        for (u, d, p) in lines {
            writeln!(f, "{} -> d:{} p:{}", u, d, p.unwrap_or("-"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ShortestPaths;
    use crate::shortestpath::Error;

    fn chain() -> ShortestPaths {
        let mut res = ShortestPaths::with_nodes(vec!["A", "B", "C", "D", "Z"]);
        res.set_distance("A", 0.0);
        for &(u, p, d) in &[("B", "A", 1.0), ("C", "B", 2.0), ("D", "C", 4.0)] {
            res.set_distance(u, d);
            res.set_predecessor(u, Some(p));
        }
        res
    }

    #[test]
    fn test_distance() {
        let res = chain();
        assert_eq!(res.distance("A"), Ok(0.0));
        assert_eq!(res.distance("D"), Ok(4.0));
        assert_eq!(res.distance("Z"), Ok(f64::INFINITY));
        assert_eq!(res.distance("Y"), Err(Error::UnknownNode("Y".to_string())));
        assert!(res.is_reachable("C"));
        assert!(!res.is_reachable("Z"));
        assert!(!res.is_reachable("Y"));
    }

    #[test]
    fn test_predecessor() {
        let res = chain();
        assert_eq!(res.predecessor("A"), None);
        assert_eq!(res.predecessor("C"), Some("B"));
        assert_eq!(res.predecessor("Z"), None);
        assert_eq!(res.predecessor("Y"), None);
    }

    #[test]
    fn test_path() {
        let res = chain();
        assert_eq!(res.reconstruct_path("D").unwrap(), vec!["A", "B", "C", "D"]);
        assert_eq!(res.reconstruct_path("B").unwrap(), vec!["A", "B"]);
        assert!(res.reconstruct_path("A").unwrap().is_empty());
        assert!(res.reconstruct_path("Z").unwrap().is_empty());
        assert!(res.reconstruct_path("Y").unwrap().is_empty());
    }

    #[test]
    fn test_path_with_cycle() {
        let mut res = chain();
        res.set_predecessor("A", Some("D"));
        assert_eq!(
            res.reconstruct_path("C"),
            Err(Error::CorruptedPredecessorChain {
                node: "C".to_string(),
                bound: 5
            })
        );
    }

    #[test]
    fn test_setters_register_nodes() {
        let mut res = ShortestPaths::<f64>::new();
        assert!(res.is_empty());
        res.set_predecessor("b", Some("a"));
        assert_eq!(res.len(), 2);
        assert_eq!(res.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(res.distance("a"), Ok(f64::INFINITY));
        res.set_distance("c", 2.0);
        assert_eq!(res.distance("c"), Ok(2.0));
        assert_eq!(res.len(), 3);
    }

    #[test]
    fn test_display() {
        let mut res = ShortestPaths::with_nodes(vec!["b", "a", "c"]);
        res.set_distance("a", 0.0);
        res.set_distance("b", 1.5);
        res.set_predecessor("b", Some("a"));
        assert_eq!(res.to_string(), "a -> d:0 p:-\nb -> d:1.5 p:a\nc -> d:inf p:-\n");
    }
}
