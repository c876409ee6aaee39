/*
 * Copyright (c) 2018, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The frontier of a Dijkstra search.
//!
//! A frontier holds nodes (given by their index `0..n`) together with a
//! tentative distance. Nodes are returned by increasing distance, nodes with
//! the same distance by increasing index. Since the node index is the
//! insertion order of the graph, ties are broken in favour of the node that
//! was added to the graph first. All implementations must follow this order,
//! so that the result of a search does not depend on the frontier.

use crate::Cost;

/// A priority queue of nodes keyed by their tentative distance.
pub trait Frontier<W> {
    /// Remove all elements and prepare the frontier for nodes `0..n`.
    fn reset(&mut self, n: usize);

    /// Return `true` iff the frontier contains no node.
    fn is_empty(&self) -> bool;

    /// Insert node `u` with distance `d`.
    ///
    /// If `u` is already contained in the frontier, its distance is set to
    /// `d` if `d` is smaller than the current one.
    fn push(&mut self, u: usize, d: W);

    /// Remove and return the node with the smallest distance or `None` if
    /// the frontier is empty.
    fn pop_min(&mut self) -> Option<(usize, W)>;
}

impl<'a, F, W> Frontier<W> for &'a mut F
where
    F: Frontier<W>,
{
    fn reset(&mut self, n: usize) {
        (**self).reset(n)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn push(&mut self, u: usize, d: W) {
        (**self).push(u, d)
    }

    fn pop_min(&mut self) -> Option<(usize, W)> {
        (**self).pop_min()
    }
}

/// A frontier that scans all nodes to find the minimum.
///
/// `pop_min` takes O(n) time, so a whole search takes O(n^2).
pub struct LinearFrontier<W> {
    dist: Vec<Option<W>>,
    len: usize,
}

impl<W> LinearFrontier<W> {
    /// Create a new, empty frontier.
    pub fn new() -> Self {
        Default::default()
    }
}

impl<W> Default for LinearFrontier<W> {
    fn default() -> Self {
        LinearFrontier { dist: vec![], len: 0 }
    }
}

impl<W> Frontier<W> for LinearFrontier<W>
where
    W: Cost,
{
    fn reset(&mut self, n: usize) {
        self.dist.clear();
        self.dist.resize(n, None);
        self.len = 0;
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, u: usize, d: W) {
        match self.dist[u] {
            None => {
                self.dist[u] = Some(d);
                self.len += 1;
            }
            Some(old) if d < old => self.dist[u] = Some(d),
            Some(_) => {}
        }
    }

    fn pop_min(&mut self) -> Option<(usize, W)> {
        let mut best: Option<(usize, W)> = None;
        for (u, d) in self.dist.iter().enumerate() {
            if let Some(d) = *d {
                // strict comparison, the first node wins ties
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((u, d));
                }
            }
        }
        if let Some((u, _)) = best {
            self.dist[u] = None;
            self.len -= 1;
        }
        best
    }
}

/// An indexed binary heap.
///
/// All operations take O(log n) time.
pub struct BinHeap<W> {
    /// The nodes on the heap.
    heap: Vec<usize>,
    /// Position of each node on the heap, `None` if it is not on the heap.
    pos: Vec<Option<usize>>,
    /// The distance of each node on the heap.
    dist: Vec<W>,
}

impl<W> BinHeap<W> {
    /// Create a new, empty heap.
    pub fn new() -> Self {
        Default::default()
    }
}

impl<W> Default for BinHeap<W> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            pos: vec![],
            dist: vec![],
        }
    }
}

impl<W> Frontier<W> for BinHeap<W>
where
    W: Cost,
{
    fn reset(&mut self, n: usize) {
        self.heap.clear();
        self.pos.clear();
        self.pos.resize(n, None);
        self.dist.clear();
        self.dist.resize(n, W::infinity());
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn push(&mut self, u: usize, d: W) {
        match self.pos[u] {
            None => {
                self.dist[u] = d;
                self.heap.push(u);
                self.upheap(self.heap.len() - 1);
            }
            Some(p) if d < self.dist[u] => {
                self.dist[u] = d;
                self.upheap(p);
            }
            Some(_) => {}
        }
    }

    fn pop_min(&mut self) -> Option<(usize, W)> {
        if self.heap.is_empty() {
            return None;
        }
        let u = self.heap.swap_remove(0);
        self.pos[u] = None;
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some((u, self.dist[u]))
    }
}

impl<W> BinHeap<W>
where
    W: Cost,
{
    /// Return `true` if node `u` must be extracted before node `v`.
    fn less(&self, u: usize, v: usize) -> bool {
        let (du, dv) = (self.dist[u], self.dist[v]);
        du < dv || (du == dv && u < v)
    }

    /// Move the element at position `cur` up until its parent is smaller.
    fn upheap(&mut self, mut cur: usize) {
        let u = self.heap[cur];
        while cur > 0 {
            let parent = (cur - 1) / 2;
            let p = self.heap[parent];
            if !self.less(u, p) {
                break;
            }
            self.heap[cur] = p;
            self.pos[p] = Some(cur);
            cur = parent;
        }
        self.heap[cur] = u;
        self.pos[u] = Some(cur);
    }

    /// Move the element at position `cur` down until both children are larger.
    fn downheap(&mut self, mut cur: usize) {
        let n = self.heap.len();
        let u = self.heap[cur];
        loop {
            let left = 2 * cur + 1;
            let right = left + 1;
            if left >= n {
                break;
            }
            let next = if right < n && self.less(self.heap[right], self.heap[left]) {
                right
            } else {
                left
            };
            let v = self.heap[next];
            if !self.less(v, u) {
                break;
            }
            self.heap[cur] = v;
            self.pos[v] = Some(cur);
            cur = next;
        }
        self.heap[cur] = u;
        self.pos[u] = Some(cur);
    }
}

#[cfg(test)]
mod tests {
    use super::{BinHeap, Frontier, LinearFrontier};

    fn drain<F: Frontier<f64>>(mut q: F) -> Vec<(usize, f64)> {
        q.reset(8);
        for &(u, d) in &[(3, 7.0), (5, 2.0), (0, 9.0), (7, 2.0), (1, 4.0), (6, 4.0)] {
            q.push(u, d);
        }
        q.push(0, 1.0); // decrease
        q.push(5, 8.0); // not smaller, ignored
        let mut order = vec![];
        while let Some(x) = q.pop_min() {
            order.push(x);
        }
        assert!(q.is_empty());
        order
    }

    #[test]
    fn test_order() {
        let expected = vec![(0, 1.0), (5, 2.0), (7, 2.0), (1, 4.0), (6, 4.0), (3, 7.0)];
        assert_eq!(drain(BinHeap::new()), expected);
        assert_eq!(drain(LinearFrontier::new()), expected);
    }

    #[test]
    fn test_reuse() {
        let mut q = BinHeap::<f64>::new();
        q.reset(3);
        q.push(2, 1.0);
        q.reset(3);
        assert!(q.is_empty());
        q.push(1, 5.0);
        q.push(0, 5.0);
        assert_eq!(q.pop_min(), Some((0, 5.0)));
        q.push(0, 3.0);
        assert_eq!(q.pop_min(), Some((0, 3.0)));
        assert_eq!(q.pop_min(), Some((1, 5.0)));
        assert_eq!(q.pop_min(), None);
    }
}
