use grid_best_first::solver::{AstarSolver, GridSolver};
use grid_best_first::{Coordinate, WeightedGrid, IMPASSABLE};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = WeightedGrid::new(3, 3, 1.0);
    grid.set(Coordinate::new(1, 1), IMPASSABLE).unwrap();
    println!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    let path = AstarSolver::new()
        .get_path_single_goal(&grid, start, end)
        .unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
