//! # grid_best_first
//!
//! Minimum-cost paths on weighted grids with 4-connected (axis-aligned) movement. Every cell
//! carries a non-negative weight which is the cost of entering it, or is
//! [impassable](weighted_grid::IMPASSABLE).
//!
//! A single [best-first search](https://en.wikipedia.org/wiki/Best-first_search) loop
//! ([best_first_search]) covers three configurations, exposed as [solver]s:
//! - [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm): zero heuristic.
//! - [A*](https://en.wikipedia.org/wiki/A*_search_algorithm): Manhattan distance heuristic.
//! - [Breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search): FIFO frontier,
//!   every step costs 1.
//!
//! Boards can be read from text with [Board], where every character maps to a weight and two
//! marker characters denote the start and the goal.
pub mod best_first;
pub mod board;
pub mod coordinate;
pub mod error;
pub mod frontier;
pub mod solver;
pub mod weighted_grid;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub use best_first::{best_first_search, DiscoveryPolicy, SearchResult};
pub use board::{Board, Marker, ParsedBoard, WeightTable};
pub use coordinate::Coordinate;
pub use error::{Error, ErrorKind, Result};
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use solver::{GridSolver, SearchMode};
pub use weighted_grid::{WeightedGrid, IMPASSABLE};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Turns a predecessor mapping into the route from the start (the coordinate that maps to [None])
/// to `goal`, both inclusive.
///
/// Fails with [Error::MissingPredecessor] if `goal` (or any link on its chain) is absent, which
/// is the case when the search that produced the mapping did not reach it.
pub fn reconstruct_path(
    predecessor: &FxIndexMap<Coordinate, Option<Coordinate>>,
    goal: Coordinate,
) -> Result<Vec<Coordinate>> {
    let mut path = vec![goal];
    let mut current = goal;
    loop {
        match predecessor.get(&current) {
            Some(Some(previous)) => {
                current = *previous;
                path.push(current);
                // A cycle cannot come out of a search, but a hand-built mapping may contain one
                if path.len() > predecessor.len() + 1 {
                    return Err(Error::MissingPredecessor(goal));
                }
            }
            Some(None) => break,
            None => return Err(Error::MissingPredecessor(current)),
        }
    }
    path.reverse();
    Ok(path)
}
