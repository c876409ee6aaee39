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

//! Single-source shortest path algorithms.
//!
//! Two algorithms are provided, [`bellmanford`] (a fixed-point iteration)
//! and [`dijkstra`]. Both compute a [`ShortestPaths`] result containing the
//! distance and predecessor of each node of the graph.
//!
//! All arc costs must be non-negative. The algorithms do not check this. On
//! graphs with negative cycles the fixed-point iteration of Bellman-Ford
//! does not terminate.
//!
//! # Line-change penalty
//!
//! Each algorithm has a variant that adds a [`LinePenalty`] to the cost of
//! an arc if the arc belongs to another line than the arc used to reach its
//! source node. The arriving line of a node `u` is the line of the *first*
//! arc from the predecessor of `u` to `u` (see
//! [`Graph::arriving_line`][crate::Graph::arriving_line]). If either line is
//! missing, there is no penalty.
//!
//! The penalty depends on the path used to reach a node, not only on the
//! arc. The fixed-point iteration takes changing predecessors into account
//! in later sweeps. Dijkstra uses the predecessor that is fixed when a node
//! leaves the frontier. Both are not guaranteed to find the cheapest path
//! under the penalty model, and they may disagree on some graphs.

mod paths;
pub use self::paths::ShortestPaths;

pub mod bellmanford;
pub mod dijkstra;

use crate::arc::Arc;
use crate::num::traits::Zero;
use crate::traits::Graph;
use crate::Cost;

use thiserror::Error;

/// Error of a shortest path computation or query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source node of a computation is not a node of the graph.
    #[error("unknown source node `{0}`")]
    UnknownSource(String),
    /// A result has been queried for a node it does not know.
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    /// Following the predecessors did not reach the source.
    ///
    /// This means the predecessors contain a cycle.
    #[error("predecessor chain of `{node}` is longer than {bound} nodes")]
    CorruptedPredecessorChain { node: String, bound: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The default line-change penalty.
pub const DEFAULT_LINE_CHANGE_PENALTY: u8 = 10;

/// The surcharge for changing lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePenalty<W = f64> {
    change: W,
}

impl<W> LinePenalty<W>
where
    W: Cost,
{
    /// Create a penalty of `change` for each line change.
    pub fn new(change: W) -> Self {
        LinePenalty { change }
    }

    /// Return the surcharge of a single line change.
    pub fn change(&self) -> W {
        self.change
    }

    /// Return the surcharge for taking `arc` after arriving on line `arriving`.
    pub fn surcharge(&self, arriving: Option<&str>, arc: &Arc<W>) -> W {
        if arc.changes_line(arriving) {
            self.change
        } else {
            W::zero()
        }
    }
}

impl<W> Default for LinePenalty<W>
where
    W: Cost,
{
    fn default() -> Self {
        LinePenalty::new(<W as From<u8>>::from(DEFAULT_LINE_CHANGE_PENALTY))
    }
}

/// A single-source shortest path algorithm.
///
/// This trait allows to run the algorithms generically, e.g. to compare
/// them.
///
/// # Example
///
/// ```
/// use rs_transit::{AdjacencyGraph, BellmanFord, Dijkstra, Solver};
///
/// fn check<S: Solver>(solver: S) {
///     let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
///         g.add_line_arc("a", "b", 1.0, "1");
///         g.add_line_arc("b", "c", 1.0, "2");
///     });
///     assert_eq!(solver.solve(&g, "a").unwrap().distance("c"), Ok(2.0));
///     assert_eq!(solver.solve_with_penalty(&g, "a").unwrap().distance("c"), Ok(12.0));
/// }
///
/// check(BellmanFord);
/// check(Dijkstra);
/// ```
pub trait Solver {
    /// The name of the algorithm.
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `src` using only the arc costs.
    fn solve<G: Graph>(&self, g: &G, src: &str) -> Result<ShortestPaths<G::Weight>>;

    /// Compute shortest paths from `src` with the given line-change penalty.
    fn solve_with_line_penalty<G: Graph>(
        &self,
        g: &G,
        src: &str,
        penalty: LinePenalty<G::Weight>,
    ) -> Result<ShortestPaths<G::Weight>>;

    /// Compute shortest paths from `src` with the default line-change penalty.
    fn solve_with_penalty<G: Graph>(&self, g: &G, src: &str) -> Result<ShortestPaths<G::Weight>> {
        self.solve_with_line_penalty(g, src, LinePenalty::default())
    }
}

/// The fixed-point algorithm, see [`bellmanford`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BellmanFord;

impl Solver for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn solve<G: Graph>(&self, g: &G, src: &str) -> Result<ShortestPaths<G::Weight>> {
        bellmanford::solve(g, src)
    }

    fn solve_with_line_penalty<G: Graph>(
        &self,
        g: &G,
        src: &str,
        penalty: LinePenalty<G::Weight>,
    ) -> Result<ShortestPaths<G::Weight>> {
        bellmanford::solve_with_line_penalty(g, src, penalty)
    }
}

/// Dijkstra's algorithm with a binary heap, see [`dijkstra`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

impl Solver for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve<G: Graph>(&self, g: &G, src: &str) -> Result<ShortestPaths<G::Weight>> {
        dijkstra::solve(g, src)
    }

    fn solve_with_line_penalty<G: Graph>(
        &self,
        g: &G,
        src: &str,
        penalty: LinePenalty<G::Weight>,
    ) -> Result<ShortestPaths<G::Weight>> {
        dijkstra::solve_with_line_penalty(g, src, penalty)
    }
}

/// Create the initial result: all nodes unreached except `src` at distance 0.
///
/// Returns the result and the index of the source node.
fn init<G>(g: &G, src: &str) -> Result<(ShortestPaths<G::Weight>, usize)>
where
    G: Graph,
{
    let mut res = ShortestPaths::with_nodes(g.list_nodes());
    let s = res.id(src).ok_or_else(|| Error::UnknownSource(src.to_string()))?;
    res.update(s, G::Weight::zero(), None);
    Ok((res, s))
}

/// Return the line on which node `u` has been reached.
fn arriving_line<'g, G>(g: &'g G, res: &ShortestPaths<G::Weight>, u: usize) -> Option<&'g str>
where
    G: Graph,
{
    res.pred_at(u).and_then(|p| g.arriving_line(res.name(p), res.name(u)))
}

/// Return the cost of a path.
///
/// The path is given as a sequence of nodes. The cost of each step is the
/// cheapest arc between the two nodes plus, if `penalty` is given, the
/// surcharge for changing from the arriving line to the line of that arc.
/// The arriving line is determined as in the solvers, i.e. by the first arc
/// between the previous two nodes.
///
/// Returns `None` if two consecutive nodes are not connected by an arc. The
/// cost of a path with less than two nodes is zero.
///
/// # Example
///
/// ```
/// use rs_transit::AdjacencyGraph;
/// use rs_transit::shortestpath::{path_cost, LinePenalty};
///
/// let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
///     g.add_line_arc("a", "b", 1.0, "1");
///     g.add_line_arc("b", "c", 2.0, "2");
/// });
///
/// assert_eq!(path_cost(&g, &["a", "b", "c"], None), Some(3.0));
/// assert_eq!(path_cost(&g, &["a", "b", "c"], Some(LinePenalty::default())), Some(13.0));
/// assert_eq!(path_cost(&g, &["a", "c"], None), None);
/// ```
pub fn path_cost<G, S>(g: &G, path: &[S], penalty: Option<LinePenalty<G::Weight>>) -> Option<G::Weight>
where
    G: Graph,
    S: AsRef<str>,
{
    let mut total = G::Weight::zero();
    for (i, uv) in path.windows(2).enumerate() {
        let (u, v) = (uv[0].as_ref(), uv[1].as_ref());
        let arriving = if i > 0 {
            g.arriving_line(path[i - 1].as_ref(), u)
        } else {
            None
        };
        total = g
            .successors(u)
            .iter()
            .filter(|a| a.dest() == v)
            .map(|a| {
                let extra = penalty.map_or_else(G::Weight::zero, |p| p.surcharge(arriving, a));
                total + a.cost() + extra
            })
            .fold(None, |best: Option<G::Weight>, c| match best {
                Some(b) if b <= c => Some(b),
                _ => Some(c),
            })?;
    }
    Some(total)
}

/// Return the number of line changes along a path.
///
/// The line of each step is the line of the first arc between the two
/// nodes. Steps without line do not count as change.
pub fn line_changes<G, S>(g: &G, path: &[S]) -> usize
where
    G: Graph,
    S: AsRef<str>,
{
    let lines: Vec<_> = path
        .windows(2)
        .map(|uv| g.arriving_line(uv[0].as_ref(), uv[1].as_ref()))
        .collect();
    lines
        .windows(2)
        .filter(|l| match (l[0], l[1]) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        })
        .count()
}
