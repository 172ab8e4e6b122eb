use crate::{coordinate::Coordinate, frontier::PriorityFrontier, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier;

    /// Always zero, so cells are finalized in order of their cost.
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> f64 {
        0.0
    }
}
