//! Queues of discovered but not yet finalized cells.
//!
//! Both frontiers are append-only: a cell may be pushed several times and stale entries are
//! discarded by the search when they are popped after the cell has been finalized.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::coordinate::Coordinate;

pub trait Frontier: Default {
    fn push(&mut self, priority: f64, coordinate: Coordinate);
    fn pop(&mut self) -> Option<(f64, Coordinate)>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct SmallestCostHolder {
    estimated_cost: f64,
    coordinate: Coordinate,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap yields the smallest estimate. Ties go to the smaller
        // coordinate, ordered by x and then y.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.coordinate.cmp(&self.coordinate),
            s => s,
        }
    }
}

/// Min-priority queue with lazy deletion.
///
/// Entries pop in non-decreasing priority. Equal priorities pop the smaller [Coordinate] first
/// (by `x`, then `y`), which decides between equal-cost paths and makes runs reproducible.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, priority: f64, coordinate: Coordinate) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: priority,
            coordinate,
        });
    }

    fn pop(&mut self) -> Option<(f64, Coordinate)> {
        self.heap
            .pop()
            .map(|holder| (holder.estimated_cost, holder.coordinate))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Strict first-in first-out queue. Priorities are carried along but never reorder entries.
#[derive(Default)]
pub struct FifoFrontier {
    queue: VecDeque<(f64, Coordinate)>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, priority: f64, coordinate: Coordinate) {
        self.queue.push_back((priority, coordinate));
    }

    fn pop(&mut self) -> Option<(f64, Coordinate)> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
