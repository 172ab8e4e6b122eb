use crate::best_first::{best_first_search, DiscoveryPolicy, SearchResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::weighted_grid::WeightedGrid;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

pub use astar::AstarSolver;
pub use bfs::BreadthFirstSolver;
pub use dijkstra::DijkstraSolver;

/// Heuristic of Dijkstra's algorithm.
pub fn zero_heuristic(_: &Coordinate, _: &Coordinate) -> f64 {
    0.0
}

/// Number of unit steps between two cells on a 4-connected grid. Admissible as long as no
/// passable cell weighs less than 1.
pub fn manhattan_heuristic(p1: &Coordinate, p2: &Coordinate) -> f64 {
    p1.manhattan_distance(p2) as f64
}

/// A configuration of [best_first_search]. Implementors choose the frontier, the heuristic and
/// how a cell weight turns into a step cost; the traversal itself is shared.
pub trait GridSolver {
    type Frontier: Frontier;

    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> f64;

    /// Cost of entering a cell of the given (finite) weight.
    fn step_cost(&self, weight: f64) -> f64 {
        weight
    }

    fn discovery_policy(&self) -> DiscoveryPolicy {
        DiscoveryPolicy::FirstWins
    }

    /// Runs the search. The grid is only read, so several searches may share it.
    fn search(
        &self,
        grid: &WeightedGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<SearchResult> {
        best_first_search(
            grid,
            start,
            goal,
            Self::Frontier::default(),
            |p1, p2| self.heuristic(p1, p2),
            |weight| self.step_cost(weight),
            self.discovery_policy(),
        )
    }

    /// Computes a path from start to goal, see [search](Self::search).
    fn get_path_single_goal(
        &self,
        grid: &WeightedGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Vec<Coordinate>> {
        self.search(grid, start, goal)?.path()
    }
}

/// Best-first search with an arbitrary heuristic function. Use this for estimates that are not
/// covered by [AstarSolver]; admissibility is up to the caller.
#[derive(Clone, Debug)]
pub struct HeuristicSolver<F> {
    pub heuristic: F,
    pub policy: DiscoveryPolicy,
}

impl<F> HeuristicSolver<F>
where
    F: Fn(&Coordinate, &Coordinate) -> f64,
{
    pub fn new(heuristic: F) -> HeuristicSolver<F> {
        HeuristicSolver {
            heuristic,
            policy: DiscoveryPolicy::default(),
        }
    }
}

impl<F> GridSolver for HeuristicSolver<F>
where
    F: Fn(&Coordinate, &Coordinate) -> f64,
{
    type Frontier = crate::frontier::PriorityFrontier;

    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> f64 {
        (self.heuristic)(p1, p2)
    }

    fn discovery_policy(&self) -> DiscoveryPolicy {
        self.policy
    }
}

/// The three standard configurations, for callers that pick one at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchMode {
    #[default]
    Dijkstra,
    AStar,
    BreadthFirst,
}

impl SearchMode {
    pub fn search(
        &self,
        grid: &WeightedGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<SearchResult> {
        match self {
            SearchMode::Dijkstra => DijkstraSolver.search(grid, start, goal),
            SearchMode::AStar => AstarSolver::new().search(grid, start, goal),
            SearchMode::BreadthFirst => BreadthFirstSolver.search(grid, start, goal),
        }
    }
}
