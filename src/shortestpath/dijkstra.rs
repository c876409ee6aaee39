/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a directed graph. Each arc is assigned a
//! non-negative cost $c \colon A \to \mathbb{R}_+$.
//!
//! The nodes are finalized in the order of increasing distance. Nodes with
//! equal distance are finalized in the order in which they have been added
//! to the graph. Once a node is finalized, its distance and predecessor do
//! not change anymore.
//!
//! With line-change penalty the surcharge of the arcs leaving a node `u`
//! is determined by the predecessor of `u` at the time `u` is finalized.
//! Another predecessor with slightly larger distance but without line
//! change is not considered.
//!
//! The frontier of the search is exchangeable (see
//! [`Frontier`][crate::collections::Frontier]). The default is a binary heap
//! leading to a running time of O((n + m) log n).
//!
//! # Example
//!
//! ```
//! use rs_transit::AdjacencyGraph;
//! use rs_transit::collections::LinearFrontier;
//! use rs_transit::shortestpath::dijkstra;
//!
//! let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
//!     g.add_arc("A", "B", 12.0);
//!     g.add_arc("A", "D", 87.0);
//!     g.add_arc("B", "E", 11.0);
//!     g.add_arc("C", "A", 19.0);
//!     g.add_arc("D", "B", 23.0);
//!     g.add_arc("D", "C", 10.0);
//!     g.add_arc("E", "D", 43.0);
//! });
//!
//! let res = dijkstra::solve(&g, "A").unwrap();
//! assert_eq!(res.distance("D"), Ok(66.0));
//! assert_eq!(res.predecessor("D"), Some("E"));
//!
//! // the O(n^2) frontier yields the same result
//! let res2 = dijkstra::solve_with_frontier(&g, "A", None, LinearFrontier::new()).unwrap();
//! assert_eq!(res, res2);
//! ```

use super::{arriving_line, init, LinePenalty, Result, ShortestPaths};
use crate::collections::{BinHeap, Frontier};
use crate::num::traits::Zero;
use crate::traits::Graph;

use tracing::{debug, trace};

/// Compute shortest paths from `src` using only the arc costs.
///
/// Fails with [`Error::UnknownSource`][super::Error::UnknownSource] if `src`
/// is not a node of `g`.
pub fn solve<G>(g: &G, src: &str) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    solve_with_frontier(g, src, None, BinHeap::new())
}

/// Compute shortest paths from `src` with the default line-change penalty.
pub fn solve_with_penalty<G>(g: &G, src: &str) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    solve_with_frontier(g, src, Some(LinePenalty::default()), BinHeap::new())
}

/// Compute shortest paths from `src` with a custom line-change penalty.
pub fn solve_with_line_penalty<G>(g: &G, src: &str, penalty: LinePenalty<G::Weight>) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    solve_with_frontier(g, src, Some(penalty), BinHeap::new())
}

/// Run Dijkstra's algorithm with a custom frontier.
///
/// If `penalty` is `None`, only the arc costs are used. The frontier is
/// reset before the search, so it can be reused for several searches.
///
/// # Parameters
///
/// - `g`: the graph
/// - `src`: the source node
/// - `penalty`: the (optional) line-change penalty
/// - `frontier`: the priority queue of unfinished nodes
#[tracing::instrument(level = "debug", skip_all, fields(source = %src, penalty = penalty.is_some()))]
pub fn solve_with_frontier<G, F>(
    g: &G,
    src: &str,
    penalty: Option<LinePenalty<G::Weight>>,
    mut frontier: F,
) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
    F: Frontier<G::Weight>,
{
    let (mut res, s) = init(g, src)?;
    let n = res.len();
    let mut done = vec![false; n];

    frontier.reset(n);
    frontier.push(s, G::Weight::zero());

    let mut nfinished = 0;
    while let Some((u, du)) = frontier.pop_min() {
        done[u] = true;
        nfinished += 1;

        // the predecessor of u is fixed from now on
        let arriving = match penalty {
            Some(_) => arriving_line(g, &res, u),
            None => None,
        };

        for a in g.successors(res.name(u)) {
            let v = match res.id(a.dest()) {
                Some(v) if !done[v] => v,
                _ => continue,
            };
            let extra = penalty.map_or_else(G::Weight::zero, |p| p.surcharge(arriving, a));
            let newdist = du + a.cost() + extra;
            if newdist < res.dist_at(v) {
                trace!(node = a.dest(), pred = res.name(u), dist = ?newdist, "relax");
                res.update(v, newdist, Some(u));
                frontier.push(v, newdist);
            }
        }
    }

    debug!(finished = nfinished, unreachable = n - nfinished, "frontier exhausted");

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::{solve, solve_with_frontier, solve_with_penalty};
    use crate::collections::LinearFrontier;
    use crate::shortestpath::{Error, LinePenalty};
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
    fn test_from_a() {
        let res = solve(&figure(), "A").unwrap();
        for &(u, d) in &[("A", 0.0), ("B", 12.0), ("C", 76.0), ("D", 66.0), ("E", 23.0)] {
            assert_eq!(res.distance(u), Ok(d), "distance of {}", u);
        }
        assert_eq!(res.predecessor("A"), None);
        for &(u, p) in &[("B", "A"), ("C", "D"), ("D", "E"), ("E", "B")] {
            assert_eq!(res.predecessor(u), Some(p), "predecessor of {}", u);
        }
    }

    #[test]
    fn test_from_b() {
        let res = solve(&figure(), "B").unwrap();
        for &(u, d) in &[("B", 0.0), ("E", 11.0), ("D", 54.0), ("C", 64.0)] {
            assert_eq!(res.distance(u), Ok(d), "distance of {}", u);
        }
        assert_eq!(res.predecessor("B"), None);
        assert_eq!(res.predecessor("E"), Some("B"));
        assert_eq!(res.predecessor("D"), Some("E"));
        assert_eq!(res.predecessor("C"), Some("D"));
    }

    #[test]
    fn test_unknown_source() {
        let g = figure();
        assert_eq!(solve(&g, "Z"), Err(Error::UnknownSource("Z".to_string())));
        assert_eq!(solve_with_penalty(&g, "Z"), Err(Error::UnknownSource("Z".to_string())));
    }

    #[test]
    fn test_tie_break() {
        // b and c are both at distance 1, b has been added first
        let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
            g.add_arc("a", "b", 1.0);
            g.add_arc("a", "c", 1.0);
            g.add_arc("c", "d", 1.0);
            g.add_arc("b", "d", 1.0);
        });
        let res = solve(&g, "a").unwrap();
        assert_eq!(res.distance("d"), Ok(2.0));
        assert_eq!(res.predecessor("d"), Some("b"));

        let res = solve_with_frontier(&g, "a", None, LinearFrontier::new()).unwrap();
        assert_eq!(res.predecessor("d"), Some("b"));
    }

    #[test]
    fn test_extraction_time_predecessor() {
        // x is finalized with predecessor b (line 1). Its outgoing arc on
        // line 2 is therefore charged, although reaching x via c (line 2)
        // would have avoided the change.
        let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
            g.add_line_arc("s", "b", 1.0, "1");
            g.add_line_arc("s", "c", 1.0, "2");
            g.add_line_arc("b", "x", 1.0, "1");
            g.add_line_arc("c", "x", 2.0, "2");
            g.add_line_arc("x", "t", 1.0, "2");
        });
        let penalty = Some(LinePenalty::new(10.0));
        let res = solve_with_frontier(&g, "s", penalty, LinearFrontier::new()).unwrap();
        assert_eq!(res.distance("x"), Ok(2.0));
        assert_eq!(res.predecessor("x"), Some("b"));
        assert_eq!(res.distance("t"), Ok(13.0));
        assert_eq!(res.reconstruct_path("t").unwrap(), vec!["s", "b", "x", "t"]);
    }
}
