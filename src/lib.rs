// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//#![forbid(unsafe_code)]

//! Shortest paths on weighted directed graphs with named lines.
//!
//! The crate provides a simple string-keyed adjacency-list graph whose arcs
//! may carry a *line* label (e.g. a metro line) and two single-source
//! shortest path algorithms, Bellman-Ford and Dijkstra. Each algorithm comes
//! in two flavours: the plain one only uses the arc costs, the penalty one
//! adds a fixed surcharge whenever two consecutive arcs belong to different
//! lines.
//!
//! # Example
//!
//! ```
//! use rs_transit::AdjacencyGraph;
//! use rs_transit::shortestpath::{bellmanford, dijkstra};
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
//! let bf = bellmanford::solve(&g, "A").unwrap();
//! let dj = dijkstra::solve(&g, "A").unwrap();
//!
//! assert_eq!(bf.distance("C").unwrap(), 76.0);
//! assert_eq!(bf, dj);
//! assert_eq!(dj.reconstruct_path("C").unwrap(), vec!["A", "B", "E", "D", "C"]);
//! ```

mod num {
    pub use num_traits as traits;
}

use std::fmt::{Debug, Display};

/// Numeric type of arc costs and distances.
///
/// This is any floating point type that can represent the small integer
/// constants used by the algorithms (e.g. the default line-change penalty).
pub trait Cost: num::traits::Float + From<u8> + Debug + Display {}

impl<T> Cost for T where T: num::traits::Float + From<u8> + Debug + Display {}

// # Data structures

pub mod traits;
pub use self::traits::Graph;

pub mod arc;
pub use self::arc::Arc;

pub mod adjacencygraph;
pub use self::adjacencygraph::AdjacencyGraph;

pub mod collections;

pub mod classes;

// # Algorithms

pub mod shortestpath;
pub use self::shortestpath::{BellmanFord, Dijkstra, ShortestPaths, Solver};

// # Readers

#[cfg(feature = "network")]
pub mod network;
