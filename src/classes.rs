// Copyright (c) 2016, 2017, 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! The nodes of all graphs are named by their index `"0"`, `"1"`, ...

use crate::AdjacencyGraph;

/// Returns a directed path with one arc per element of `costs`.
///
/// The path runs from node `0` to node `costs.len()`.
pub fn path<W: Copy>(costs: &[W]) -> AdjacencyGraph<W> {
    let mut g = AdjacencyGraph::with_capacity(costs.len() + 1);
    g.add_node("0");
    for (i, &c) in costs.iter().enumerate() {
        g.add_arc(&i.to_string(), &(i + 1).to_string(), c);
    }
    g
}

/// Returns a directed star with one ray per element of `costs`.
///
/// The center is node `0`, all arcs leave the center.
pub fn star<W: Copy>(costs: &[W]) -> AdjacencyGraph<W> {
    let mut g = AdjacencyGraph::with_capacity(costs.len() + 1);
    g.add_node("0");
    for (i, &c) in costs.iter().enumerate() {
        g.add_arc("0", &(i + 1).to_string(), c);
    }
    g
}

/// Returns the complete directed graph on `n` nodes.
///
/// The arc from `i` to `j` has cost `cost(i, j)`.
pub fn complete<W, F>(n: usize, cost: F) -> AdjacencyGraph<W>
where
    F: Fn(usize, usize) -> W,
{
    let mut g = AdjacencyGraph::with_capacity(n);
    let names: Vec<_> = (0..n).map(|i| i.to_string()).collect();
    for u in &names {
        g.add_node(u);
    }
    for i in 0..n {
        for j in 0..n {
            if i != j {
                g.add_arc(&names[i], &names[j], cost(i, j));
            }
        }
    }
    g
}

/// Return a grid network with `n` columns and `m` rows.
///
/// Each row is a line `H<row>` and each column is a line `V<column>`. Both
/// are served in both directions, each arc has cost `cost`. The nodes are
/// created from left to right and from bottom to top. The following is a
/// grid with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// ```
/// use rs_transit::{classes, Graph};
///
/// let g = classes::grid(5, 4, 1.0);
/// assert_eq!(g.num_nodes(), 20);
/// assert_eq!(g.num_arcs(), 2 * (4 * 4 + 5 * 3));
/// assert_eq!(g.arriving_line("6", "7"), Some("H1"));
/// assert_eq!(g.arriving_line("12", "7"), Some("V2"));
/// ```
pub fn grid<W: Copy>(n: usize, m: usize, cost: W) -> AdjacencyGraph<W> {
    let mut g = AdjacencyGraph::with_capacity(n * m);
    for i in 0..n * m {
        g.add_node(&i.to_string());
    }
    for row in 0..m {
        let line = format!("H{}", row);
        for col in 1..n {
            let (u, v) = ((row * n + col - 1).to_string(), (row * n + col).to_string());
            g.add_line_arc(&u, &v, cost, &line);
            g.add_line_arc(&v, &u, cost, &line);
        }
    }
    for col in 0..n {
        let line = format!("V{}", col);
        for row in 1..m {
            let (u, v) = (((row - 1) * n + col).to_string(), (row * n + col).to_string());
            g.add_line_arc(&u, &v, cost, &line);
            g.add_line_arc(&v, &u, cost, &line);
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::{complete, grid, path, star};
    use crate::traits::Graph;

    #[test]
    fn test_path() {
        let g = path(&[1.0, 2.0, 3.0]);
        assert_eq!(g.list_nodes(), vec!["0", "1", "2", "3"]);
        assert_eq!(g.num_arcs(), 3);
        assert_eq!(g.successors("2")[0].dest(), "3");

        assert_eq!(path::<f64>(&[]).num_nodes(), 1);
    }

    #[test]
    fn test_star() {
        let g = star(&[5.0, 8.0]);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.successors("0").len(), 2);
        assert!(g.successors("1").is_empty());
    }

    #[test]
    fn test_complete() {
        let g = complete(4, |i, j| (i * 10 + j) as f64);
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_arcs(), 12);
        let succ: Vec<_> = g.successors("2").iter().map(|a| (a.dest(), a.cost())).collect();
        assert_eq!(succ, vec![("0", 20.0), ("1", 21.0), ("3", 23.0)]);
    }

    #[test]
    fn test_grid_lines() {
        let g = grid(3, 2, 1.0);
        for u in g.list_nodes() {
            for a in g.successors(&u) {
                let line = a.line().unwrap();
                let (ui, vi): (usize, usize) = (u.parse().unwrap(), a.dest().parse().unwrap());
                if line.starts_with('H') {
                    assert_eq!(ui / 3, vi / 3);
                } else {
                    assert_eq!(ui % 3, vi % 3);
                }
            }
        }
    }
}
