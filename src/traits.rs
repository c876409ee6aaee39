/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for graph data structures.
//!
//! The algorithms of this crate only need two capabilities of a graph: the
//! list of all nodes and the outgoing arcs of each node. Both are collected
//! in the [`Graph`] trait, so alternative backing structures can be used
//! with the same solvers. [`AdjacencyGraph`][crate::AdjacencyGraph] is the
//! default implementation.

use crate::arc::Arc;
use crate::Cost;

/// A directed graph with string-labelled nodes and (optionally) line-labelled arcs.
pub trait Graph {
    /// Type of the arc costs.
    type Weight: Cost;

    /// Return all nodes of the graph in insertion order.
    ///
    /// The returned vector is a copy, modifying it does not change the
    /// graph.
    fn list_nodes(&self) -> Vec<String>;

    /// Return the arcs leaving node `u` in insertion order.
    ///
    /// If `u` is not a node of the graph, the slice is empty.
    fn successors(&self, u: &str) -> &[Arc<Self::Weight>];

    /// Return the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.list_nodes().len()
    }

    /// Return the number of arcs in the graph.
    fn num_arcs(&self) -> usize {
        self.list_nodes().iter().map(|u| self.successors(u).len()).sum()
    }

    /// Return the line of the first arc from `u` to `v`.
    ///
    /// This is the line a path is assumed to use when it reaches `v` coming
    /// from `u`. Returns `None` if there is no such arc or if the arc does
    /// not belong to any line.
    ///
    /// The lookup scans the outgoing arcs of `u`, i.e. it takes
    /// O(deg(u)) time.
    fn arriving_line(&self, u: &str, v: &str) -> Option<&str> {
        self.successors(u).iter().find(|a| a.dest() == v).and_then(|a| a.line())
    }
}

impl<'a, G> Graph for &'a G
where
    G: Graph,
{
    type Weight = G::Weight;

    fn list_nodes(&self) -> Vec<String> {
        (**self).list_nodes()
    }

    fn successors(&self, u: &str) -> &[Arc<Self::Weight>] {
        (**self).successors(u)
    }

    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }
}
