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

//! The shortest-path algorithm by Bellman and Ford as fixed-point iteration.
//!
//! The algorithm repeatedly sweeps over all reached nodes (in the order of
//! the graph) and relaxes their outgoing arcs. Distances improved during a
//! sweep are used immediately by the rest of the sweep. The iteration stops
//! as soon as a sweep does not change any distance.
//!
//! For non-negative costs the algorithm terminates after at most O(n)
//! sweeps, i.e. in O(n m) time. There is no negative cycle detection: with
//! a negative cycle reachable from the source the iteration never stops.
//!
//! # Stale distances with line-change penalty
//!
//! With penalty the surcharge of an arc leaving `u` depends on the line on
//! which `u` has been reached, i.e. on the predecessor of `u`. If the
//! predecessor of `u` changes in a later step, the arriving line may change
//! as well, but the distances of the successors of `u` are only updated if
//! they decrease. A successor `v` may therefore keep a distance computed
//! with the old arriving line of `u`. In this case the path returned by
//! [`ShortestPaths::reconstruct_path`] for `v` is more expensive than the
//! distance of `v` (see [`path_cost`][super::path_cost]), and the result
//! may differ from the one of [`dijkstra`][super::dijkstra].
//!
//! For example, with arcs `s->u` (cost 5, line 1), `u->v` (1, line 1), `s->w`
//! (1, line 2) and `w->u` (1, line 2) and a penalty of 10, node `v` gets
//! distance 6 via `s, u, v`. Later `u` is improved via `w` on line 2, so the
//! reconstructed path `s, w, u, v` costs 13, but the distance stays 6.
//!
//! # Example
//!
//! ```
//! use rs_transit::AdjacencyGraph;
//! use rs_transit::shortestpath::bellmanford;
//!
//! let g: AdjacencyGraph = AdjacencyGraph::new_with(|g| {
//!     g.add_line_arc("a", "b", 2.0, "1");
//!     g.add_line_arc("b", "c", 2.0, "1");
//!     g.add_line_arc("a", "d", 1.0, "2");
//!     g.add_line_arc("d", "c", 1.0, "3");
//! });
//!
//! let res = bellmanford::solve(&g, "a").unwrap();
//! assert_eq!(res.distance("c"), Ok(2.0));
//! assert_eq!(res.reconstruct_path("c").unwrap(), vec!["a", "d", "c"]);
//!
//! // with penalty the change from line 2 to line 3 costs 10 extra
//! let res = bellmanford::solve_with_penalty(&g, "a").unwrap();
//! assert_eq!(res.distance("c"), Ok(4.0));
//! assert_eq!(res.reconstruct_path("c").unwrap(), vec!["a", "b", "c"]);
//! ```

use super::{arriving_line, init, LinePenalty, Result, ShortestPaths};
use crate::num::traits::{Float, Zero};
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
    fixed_point(g, src, None)
}

/// Compute shortest paths from `src` with the default line-change penalty.
pub fn solve_with_penalty<G>(g: &G, src: &str) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    fixed_point(g, src, Some(LinePenalty::default()))
}

/// Compute shortest paths from `src` with a custom line-change penalty.
pub fn solve_with_line_penalty<G>(g: &G, src: &str, penalty: LinePenalty<G::Weight>) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    fixed_point(g, src, Some(penalty))
}

#[tracing::instrument(level = "debug", skip_all, fields(source = %src, penalty = penalty.is_some()))]
fn fixed_point<G>(g: &G, src: &str, penalty: Option<LinePenalty<G::Weight>>) -> Result<ShortestPaths<G::Weight>>
where
    G: Graph,
{
    let (mut res, _) = init(g, src)?;
    let n = res.len();

    let mut sweeps = 0;
    loop {
        sweeps += 1;
        let mut changed = false;
        for u in 0..n {
            let du = res.dist_at(u);
            // skip nodes that have not been reached, yet
            if du.is_infinite() {
                continue;
            }

            let arriving = match penalty {
                Some(_) => arriving_line(g, &res, u),
                None => None,
            };

            for a in g.successors(res.name(u)) {
                let v = match res.id(a.dest()) {
                    Some(v) => v,
                    None => continue,
                };
                let extra = penalty.map_or_else(G::Weight::zero, |p| p.surcharge(arriving, a));
                let newdist = du + a.cost() + extra;
                if newdist < res.dist_at(v) {
                    trace!(node = a.dest(), pred = res.name(u), dist = ?newdist, "relax");
                    res.update(v, newdist, Some(u));
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    debug!(sweeps, nodes = n, "fixed point reached");

    Ok(res)
}
