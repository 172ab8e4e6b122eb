use crate::{
    best_first::DiscoveryPolicy,
    coordinate::Coordinate,
    frontier::PriorityFrontier,
    solver::{manhattan_heuristic, GridSolver},
};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
    pub policy: DiscoveryPolicy,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            policy: DiscoveryPolicy::FirstWins,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    /// Manhattan distance times the heuristic factor. A factor above 1 (weighted A*) expands
    /// fewer cells but gives up optimality; a factor below 1 keeps the estimate admissible on
    /// grids with weights below 1.
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> f64 {
        manhattan_heuristic(p1, p2) * self.heuristic_factor
    }

    fn discovery_policy(&self) -> DiscoveryPolicy {
        self.policy
    }
}
