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

//! Arcs of a graph.

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An outgoing arc.
///
/// An arc only knows its sink node, the source node is the node whose
/// adjacency list contains the arc. The `line` is an optional label of the
/// route the arc belongs to. Arcs without line never cause a line change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arc<W = f64> {
    dest: String,
    cost: W,
    line: Option<String>,
}

impl<W> Arc<W> {
    /// Create a new arc to `dest` without line.
    pub fn new<S: Into<String>>(dest: S, cost: W) -> Self {
        Arc {
            dest: dest.into(),
            cost,
            line: None,
        }
    }

    /// Create a new arc to `dest` on the given line.
    pub fn with_line<S, L>(dest: S, cost: W, line: L) -> Self
    where
        S: Into<String>,
        L: Into<String>,
    {
        Arc {
            dest: dest.into(),
            cost,
            line: Some(line.into()),
        }
    }

    /// Return the sink node of the arc.
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// Return the line of the arc.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// Return `true` if taking this arc after arriving on `arriving` is a line change.
    ///
    /// This is only the case if both lines are known and differ.
    pub fn changes_line(&self, arriving: Option<&str>) -> bool {
        match (arriving, self.line()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

impl<W: Copy> Arc<W> {
    /// Return the cost of the arc.
    pub fn cost(&self) -> W {
        self.cost
    }
}

impl<W: fmt::Display> fmt::Display for Arc<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.line {
            Some(ref line) => write!(f, "{}({},{})", self.dest, self.cost, line),
            None => write!(f, "{}({})", self.dest, self.cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Arc;

    #[test]
    fn test_display() {
        assert_eq!(Arc::new("B", 12.0).to_string(), "B(12)");
        assert_eq!(Arc::with_line("B", 2.5, "7bis").to_string(), "B(2.5,7bis)");
    }

    #[test]
    fn test_changes_line() {
        let plain = Arc::new("B", 1.0);
        let l1 = Arc::with_line("B", 1.0, "1");

        assert!(!plain.changes_line(None));
        assert!(!plain.changes_line(Some("1")));
        assert!(!l1.changes_line(None));
        assert!(!l1.changes_line(Some("1")));
        assert!(l1.changes_line(Some("2")));
    }
}
