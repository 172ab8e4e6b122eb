//! The traversal loop shared by every solver.
//!
//! Cells are finalized in the order the frontier yields them. A cell that is popped again after
//! it was finalized is a stale duplicate and is skipped, so the frontier never needs a
//! decrease-key operation.
use fxhash::{FxHashMap, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, warn};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::weighted_grid::{WeightedGrid, IMPASSABLE};
use crate::{reconstruct_path, FxIndexMap};

/// What happens when an already discovered, not yet finalized cell is reached again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiscoveryPolicy {
    /// The first discovery sets the predecessor and cost for good. Optimal for Dijkstra and
    /// breadth-first search; for A* only when the pop order happens to discover every cell from
    /// its cheapest neighbour first.
    #[default]
    FirstWins,
    /// A strictly cheaper route re-parents the cell and pushes it again. Optimal for any
    /// consistent heuristic.
    Relax,
}

/// Output of a successful search. Only finalized cells appear in `cost` and `predecessor`; the
/// start maps to [None] in `predecessor`.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub cost: FxHashMap<Coordinate, f64>,
    pub predecessor: FxIndexMap<Coordinate, Option<Coordinate>>,
    pub visited: FxHashSet<Coordinate>,
}

impl SearchResult {
    /// The route from start to goal.
    pub fn path(&self) -> Result<Vec<Coordinate>> {
        reconstruct_path(&self.predecessor, self.goal)
    }

    /// Confirmed cost of reaching the goal, or [IMPASSABLE] if the goal has no entry in `cost`.
    pub fn total_cost(&self) -> f64 {
        self.cost.get(&self.goal).copied().unwrap_or(IMPASSABLE)
    }
}

/// Generalized best-first search from `start` to `goal` over the 4-connected passable cells of
/// `grid`.
///
/// Entering a cell costs `step_cost(weight)`. The frontier orders cells by
/// `cost + heuristic(cell, goal)`; with a zero heuristic this is Dijkstra's algorithm, with an
/// admissible distance estimate it is A*, and with a [FifoFrontier](crate::FifoFrontier) and unit
/// step cost it is a breadth-first search. The heuristic is trusted, not validated.
///
/// Returns [Error::NoPath] if the frontier empties before the goal is finalized and
/// [Error::OutOfBounds] if start or goal lie outside the grid.
pub fn best_first_search<Q, FH, FC>(
    grid: &WeightedGrid,
    start: Coordinate,
    goal: Coordinate,
    mut frontier: Q,
    mut heuristic: FH,
    mut step_cost: FC,
    policy: DiscoveryPolicy,
) -> Result<SearchResult>
where
    Q: Frontier,
    FH: FnMut(&Coordinate, &Coordinate) -> f64,
    FC: FnMut(f64) -> f64,
{
    grid.weight(&start)?;
    if !grid.weight(&goal)?.is_finite() {
        warn!("Goal {} is impassable and can only be reached as the start", goal);
    }
    if !grid.is_passable(&start) {
        warn!("Searching from impassable start {}", start);
    }

    let mut cost: FxHashMap<Coordinate, f64> = FxHashMap::default();
    let mut predecessor: FxIndexMap<Coordinate, Option<Coordinate>> = FxIndexMap::default();
    let mut visited: FxHashSet<Coordinate> = FxHashSet::default();
    cost.insert(start, 0.0);
    predecessor.insert(start, None);
    frontier.push(heuristic(&start, &goal), start);
    let mut pushes = 1usize;
    let mut stale = 0usize;

    while let Some((_, node)) = frontier.pop() {
        if !visited.insert(node) {
            stale += 1;
            continue;
        }
        if node == goal {
            debug!(
                "Reached {} from {}: {} finalized, {} pushed, {} stale",
                goal,
                start,
                visited.len(),
                pushes,
                stale
            );
            cost.retain(|c, _| visited.contains(c));
            predecessor.retain(|c, _| visited.contains(c));
            return Ok(SearchResult {
                start,
                goal,
                cost,
                predecessor,
                visited,
            });
        }
        let node_cost = cost[&node];
        for neighbour in grid.neighbours(&node) {
            if visited.contains(&neighbour) {
                continue;
            }
            let weight = grid.weight(&neighbour)?;
            if !weight.is_finite() {
                continue;
            }
            let new_cost = node_cost + step_cost(weight);
            match predecessor.entry(neighbour) {
                Vacant(e) => {
                    e.insert(Some(node));
                }
                Occupied(mut e) => {
                    if policy == DiscoveryPolicy::Relax && new_cost < cost[&neighbour] {
                        e.insert(Some(node));
                    } else {
                        continue;
                    }
                }
            }
            cost.insert(neighbour, new_cost);
            frontier.push(new_cost + heuristic(&neighbour, &goal), neighbour);
            pushes += 1;
        }
    }
    debug!(
        "Frontier exhausted after finalizing {} cells, {} is unreachable from {}",
        visited.len(),
        goal,
        start
    );
    Err(Error::NoPath { start, goal })
}
