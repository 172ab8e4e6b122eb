use grid_best_first::solver::{AstarSolver, GridSolver};
use grid_best_first::{Coordinate, WeightedGrid, IMPASSABLE};

// The heuristic_factor can be set to scale the heuristic, causing nodes that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the algorithm in
// certain scenarios, at the price of possibly longer paths.

fn block(grid: &mut WeightedGrid, x: usize, y: usize, w: usize, h: usize) {
    for i in x..x + w {
        for j in y..y + h {
            grid.set(Coordinate::new(i, j), IMPASSABLE).unwrap();
        }
    }
}

fn main() {
    const N: usize = 30;
    let mut grid = WeightedGrid::new(N, N, 1.0);
    block(&mut grid, 8, 8, 8, 8);
    block(&mut grid, 0, 3, 6, 6);
    block(&mut grid, 10, 0, 6, 6);
    let start = Coordinate::new(1, 1);
    let end = Coordinate::new(N - 3, N - 3);
    for heuristic_factor in [1.0, 1.3, 2.0] {
        let solver = AstarSolver {
            heuristic_factor,
            ..AstarSolver::new()
        };
        let result = solver.search(&grid, start, end).unwrap();
        println!(
            "factor {heuristic_factor}: cost {}, {} cells finalized",
            result.total_cost(),
            result.visited.len()
        );
    }
}
