use crate::{coordinate::Coordinate, frontier::FifoFrontier, solver::GridSolver};

/// Breadth-first search: cells are expanded in discovery order and every step costs 1, so the
/// result minimizes the number of steps and ignores weights other than [IMPASSABLE](crate::IMPASSABLE).
#[derive(Clone, Debug)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    type Frontier = FifoFrontier;

    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> f64 {
        0.0
    }

    fn step_cost(&self, _: f64) -> f64 {
        1.0
    }
}
