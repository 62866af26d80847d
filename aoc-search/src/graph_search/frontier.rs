//! Min-priority frontier ordered by cumulative cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::cost::Cost;

/// A frontier entry wrapping a state with its cumulative cost.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the lowest
/// cost first. Among equal costs the most recently pushed entry pops first.
#[derive(Debug)]
struct FrontierEntry<T, C> {
    cost: C,
    seq: u64,
    state: T,
}

impl<T, C: Cost> PartialEq for FrontierEntry<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: Cost> Eq for FrontierEntry<T, C> {}

impl<T, C: Cost> PartialOrd for FrontierEntry<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Cost> Ord for FrontierEntry<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp_cost(&self.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Binary-heap frontier with a newest-first tie-break and a size high-water mark.
#[derive(Debug)]
pub(crate) struct Frontier<T, C> {
    heap: BinaryHeap<FrontierEntry<T, C>>,
    next_seq: u64,
    high_water: usize,
}

impl<T, C: Cost> Frontier<T, C> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
            high_water: 0,
        }
    }

    pub(crate) fn push(&mut self, state: T, cost: C) {
        self.heap.push(FrontierEntry {
            cost,
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pops the lowest-cost entry.
    pub(crate) fn pop(&mut self) -> Option<(T, C)> {
        self.heap.pop().map(|entry| (entry.state, entry.cost))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}
