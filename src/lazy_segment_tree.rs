use crate::{
    error::{Error, Result},
    groups::{Aggregate, Elem},
};
use std::mem;

/// A range update. Both kinds act on every element of an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update<T> {
    /// Add the value to every element.
    Add(T),
    /// Overwrite every element with the value.
    Set(T),
}

/// A marker waiting to be pushed to the children of an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending<T> {
    None,
    Add(T),
    Set(T),
}

/// Segment tree over `len` elements with lazy range-add and range-set.
///
/// Nodes live in a flat array in heap order: the root is `1`, the children of
/// `i` are `2i` and `2i + 1`, and the leaves start at `size`, the next power of
/// two `>= len`. Leaves past `len` hold the neutral element of the mode and are
/// never touched by updates.
///
/// Every range is 0-based and inclusive: `[start, end]` with `start <= end < len`.
///
/// A node's value always includes its own pending marker; the marker only
/// describes what its children have not seen yet.
#[derive(Clone, Debug)]
pub struct LazySegmentTree<T: Elem> {
    mode: Aggregate,
    len: usize,
    size: usize,
    values: Vec<T>,
    lazy: Vec<Pending<T>>,
}

impl<T: Elem> LazySegmentTree<T> {
    /// Builds a tree of `len` elements. Element `i` is `initial[i]` when present
    /// and `default` otherwise.
    ///
    /// O(n)
    pub fn build(len: usize, default: T, initial: &[T], mode: Aggregate) -> Result<Self> {
        if len == 0 {
            return Err(Error::ZeroLength);
        }
        if initial.len() > len {
            return Err(Error::TooManyValues {
                given: initial.len(),
                len,
            });
        }

        let size = len.next_power_of_two();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build", len, size, %mode);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut tree = Self {
            mode,
            len,
            size,
            values: vec![mode.neutral(); 2 * size],
            lazy: vec![Pending::None; size],
        };
        tree.build_node(1, 0, size - 1, initial, default);
        Ok(tree)
    }

    /// Builds a tree over exactly the elements of `initial`.
    #[inline]
    pub fn new(initial: &[T], mode: Aggregate) -> Result<Self> {
        Self::build(initial.len(), mode.neutral(), initial, mode)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, trees of length zero can't be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn mode(&self) -> Aggregate {
        self.mode
    }

    /// Applies `op` to every element of `[start, end]`.
    ///
    /// O(log n)
    pub fn update(&mut self, start: usize, end: usize, op: Update<T>) -> Result<()> {
        self.check_range(start, end)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("update", start, end, ?op);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.update_node(1, 0, self.size - 1, start, end, op);
        Ok(())
    }

    /// Adds `val` to every element of `[start, end]`.
    #[inline]
    pub fn add(&mut self, start: usize, end: usize, val: T) -> Result<()> {
        self.update(start, end, Update::Add(val))
    }

    /// Sets every element of `[start, end]` to `val`.
    #[inline]
    pub fn set(&mut self, start: usize, end: usize, val: T) -> Result<()> {
        self.update(start, end, Update::Set(val))
    }

    /// Aggregate of `[start, end]`. Takes `&mut self` because visiting a node
    /// pushes its pending marker down; the observable contents don't change.
    ///
    /// O(log n)
    pub fn query(&mut self, start: usize, end: usize) -> Result<T> {
        self.check_range(start, end)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("query", start, end, mode = %self.mode);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Ok(self.query_node(1, 0, self.size - 1, start, end))
    }

    /// The current value of element `i`.
    #[inline]
    pub fn get(&mut self, i: usize) -> Result<T> {
        self.query(i, i)
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        for &index in &[start, end] {
            if index >= self.len {
                return Err(Error::OutOfBounds {
                    index,
                    len: self.len,
                });
            }
        }
        if start > end {
            return Err(Error::EmptyRange { start, end });
        }
        Ok(())
    }

    fn build_node(&mut self, node: usize, l: usize, r: usize, initial: &[T], default: T) {
        if l == r {
            self.values[node] = match initial.get(l) {
                Some(&x) => x,
                None if l < self.len => default,
                None => self.mode.neutral(),
            };
            return;
        }

        let mid = l + (r - l) / 2;
        self.build_node(2 * node, l, mid, initial, default);
        self.build_node(2 * node + 1, mid + 1, r, initial, default);
        self.push_up(node);
    }

    /// Applies `op` to the node covering `range_len` elements without descending.
    fn apply(&mut self, node: usize, range_len: usize, op: Update<T>) {
        match op {
            Update::Set(v) => {
                self.values[node] = self.mode.upstream(v, range_len);
                if node < self.size {
                    self.lazy[node] = Pending::Set(v);
                }
            }
            Update::Add(v) => {
                self.values[node] = self.values[node] + self.mode.upstream(v, range_len);
                if node < self.size {
                    // A pending set absorbs the add.
                    self.lazy[node] = match self.lazy[node] {
                        Pending::None => Pending::Add(v),
                        Pending::Add(a) => Pending::Add(a + v),
                        Pending::Set(s) => Pending::Set(s + v),
                    };
                }
            }
        }
    }

    fn push_down(&mut self, node: usize, l: usize, mid: usize, r: usize) {
        if l == r {
            return;
        }

        let op = match mem::replace(&mut self.lazy[node], Pending::None) {
            Pending::None => return,
            Pending::Set(v) => Update::Set(v),
            Pending::Add(v) => Update::Add(v),
        };
        self.apply(2 * node, mid - l + 1, op);
        self.apply(2 * node + 1, r - mid, op);
    }

    #[inline]
    fn push_up(&mut self, node: usize) {
        self.values[node] = self
            .mode
            .combine(self.values[2 * node], self.values[2 * node + 1]);
    }

    fn update_node(&mut self, node: usize, l: usize, r: usize, start: usize, end: usize, op: Update<T>) {
        if end < l || r < start {
            return;
        }
        if start <= l && r <= end {
            self.apply(node, r - l + 1, op);
            return;
        }

        let mid = l + (r - l) / 2;
        self.push_down(node, l, mid, r);
        self.update_node(2 * node, l, mid, start, end, op);
        self.update_node(2 * node + 1, mid + 1, r, start, end, op);
        self.push_up(node);
    }

    fn query_node(&mut self, node: usize, l: usize, r: usize, start: usize, end: usize) -> T {
        if end < l || r < start {
            return self.mode.neutral();
        }
        if start <= l && r <= end {
            return self.values[node];
        }

        let mid = l + (r - l) / 2;
        self.push_down(node, l, mid, r);
        let lhs = self.query_node(2 * node, l, mid, start, end);
        let rhs = self.query_node(2 * node + 1, mid + 1, r, start, end);
        self.mode.combine(lhs, rhs)
    }
}
