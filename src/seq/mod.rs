//! The sequence contract shared by every generator.
//!
//! A generator is a pure map from a logical index to a point plus a single
//! atomic [`Counter`]. All state changes go through the counter, so a
//! generator may be shared between threads and popped concurrently: each
//! logical index is handed to exactly one caller.
use std::iter::Iterator;
use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

mod halton;
mod integer;
mod vdcorput;

pub use halton::*;
pub use integer::*;
pub use vdcorput::*;

/// Position of a generator within its sequence.
///
/// Starts at zero. The value produced by the next `pop` is the point at
/// `get() + 1`. Indices wrap around past `u64::MAX`.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, index: u64) {
        self.0.store(index, Ordering::Relaxed);
    }

    /// Reserve the next `n` indices and return the index just before them.
    #[inline]
    pub fn advance(&self, n: u64) -> u64 {
        self.0.fetch_add(n, Ordering::Relaxed)
    }
}

/// A deterministic, restartable, infinite low-discrepancy sequence
pub trait Sequence {
    type Item;

    /// The counter holding this generator's position
    fn counter(&self) -> &Counter;

    /// The point at logical index `index`. Does not touch the counter.
    fn point(&self, index: u64) -> Self::Item;

    /// Advance by one and return the point at the new index
    fn pop(&self) -> Self::Item {
        let prev = self.counter().advance(1);
        self.point(prev.wrapping_add(1))
    }

    /// The point the next `pop` would return
    fn peek(&self) -> Self::Item {
        self.point(self.counter().get().wrapping_add(1))
    }

    /// Advance by `n` without producing anything
    fn skip(&self, n: u64) {
        self.counter().advance(n);
    }

    /// The next `n` points, in order.
    ///
    /// The whole block of indices is reserved at once, so a batch taken from
    /// a shared generator is never interleaved with other callers' pops.
    fn batch(&self, n: usize) -> Vec<Self::Item> {
        let start = self.counter().advance(n as u64);
        (1..=n as u64)
            .map(|i| self.point(start.wrapping_add(i)))
            .collect()
    }

    /// Same as [`batch`](Sequence::batch), with the points evaluated in
    /// parallel
    fn par_batch(&self, n: usize) -> Vec<Self::Item>
    where
        Self: Sync,
        Self::Item: Send,
    {
        let start = self.counter().advance(n as u64).wrapping_add(1);
        (0..n)
            .into_par_iter()
            .map(|i| self.point(start.wrapping_add(i as u64)))
            .collect()
    }

    /// Set the position to `seed`. The next `pop` returns the point at
    /// `seed + 1`.
    fn reseed(&self, seed: u64) {
        self.counter().set(seed);
    }

    fn get_index(&self) -> u64 {
        self.counter().get()
    }

    /// An endless iterator that pops from this generator
    fn iter(&self) -> Iter<'_, Self> {
        Iter { seq: self }
    }
}

/// Iterator view of a [`Sequence`]. Each call to `next` is a `pop`.
pub struct Iter<'a, S: Sequence + ?Sized> {
    seq: &'a S,
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.seq.pop())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
