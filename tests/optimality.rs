/// Compares search costs against an exhaustive enumeration of simple paths on small random grids.
use grid_best_first::{
    solver::{AstarSolver, BreadthFirstSolver, DijkstraSolver, GridSolver},
    Coordinate, DiscoveryPolicy, WeightedGrid, IMPASSABLE,
};
use rand::prelude::*;

/// Cheapest simple path from `node` to `goal`, charging `step` for every entered cell.
fn brute_force<F>(
    grid: &WeightedGrid,
    node: Coordinate,
    goal: Coordinate,
    on_path: &mut Vec<Coordinate>,
    step: &F,
) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    if node == goal {
        return Some(0.0);
    }
    on_path.push(node);
    let mut best: Option<f64> = None;
    for n in grid.neighbours(&node) {
        if !grid.is_passable(&n) || on_path.contains(&n) {
            continue;
        }
        let weight = grid.weight(&n).unwrap();
        if let Some(rest) = brute_force(grid, n, goal, on_path, step) {
            let total = step(weight) + rest;
            best = Some(best.map_or(total, |b: f64| b.min(total)));
        }
    }
    on_path.pop();
    best
}

fn random_weighted_grid(n: usize, rng: &mut StdRng) -> WeightedGrid {
    let mut grid = WeightedGrid::new(n, n, 1.0);
    for y in 0..n {
        for x in 0..n {
            let weight = if rng.gen_bool(0.2) {
                IMPASSABLE
            } else {
                rng.gen_range(1..10) as f64
            };
            grid.set(Coordinate::new(x, y), weight).unwrap();
        }
    }
    grid.set(Coordinate::new(0, 0), 1.0).unwrap();
    grid.set(Coordinate::new(n - 1, n - 1), 1.0).unwrap();
    grid.update();
    grid
}

fn check_against_brute_force<S: GridSolver>(solver: &S, weighted: bool, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for n in [3, 4, 5] {
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(n - 1, n - 1);
        for _ in 0..200 {
            let grid = random_weighted_grid(n, &mut rng);
            let expected = if weighted {
                brute_force(&grid, start, goal, &mut Vec::new(), &|w| w)
            } else {
                brute_force(&grid, start, goal, &mut Vec::new(), &|_| 1.0)
            };
            match (solver.search(&grid, start, goal), expected) {
                (Ok(result), Some(expected)) => {
                    assert_eq!(result.total_cost(), expected, "\n{grid}");
                    let path = result.path().unwrap();
                    let path_cost = if weighted {
                        grid.path_cost(&path).unwrap()
                    } else {
                        (path.len() - 1) as f64
                    };
                    assert_eq!(path_cost, expected);
                }
                (Err(e), None) => assert!(e.is_no_path()),
                (result, expected) => panic!(
                    "search gave {:?}, brute force gave {expected:?}\n{grid}",
                    result.map(|r| r.total_cost())
                ),
            }
        }
    }
}

#[test]
fn dijkstra_is_optimal() {
    check_against_brute_force(&DijkstraSolver, true, 0);
}

#[test]
fn astar_with_relaxation_is_optimal() {
    let solver = AstarSolver {
        policy: DiscoveryPolicy::Relax,
        ..AstarSolver::new()
    };
    check_against_brute_force(&solver, true, 1);
}

#[test]
fn breadth_first_minimizes_steps() {
    check_against_brute_force(&BreadthFirstSolver, false, 2);
}

/// First-wins A* never beats the optimum, and never returns an invalid path.
#[test]
fn astar_first_wins_is_bounded() {
    let mut rng = StdRng::seed_from_u64(4);
    let solver = AstarSolver::new();
    for _ in 0..500 {
        let grid = random_weighted_grid(5, &mut rng);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(4, 4);
        let optimum = DijkstraSolver.search(&grid, start, goal);
        match (solver.search(&grid, start, goal), optimum) {
            (Ok(result), Ok(optimum)) => {
                assert!(result.total_cost() >= optimum.total_cost());
                let path = result.path().unwrap();
                assert!(grid.is_valid_path(&path));
                assert_eq!(grid.path_cost(&path).unwrap(), result.total_cost());
            }
            (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
            _ => panic!("A* and Dijkstra disagree on reachability\n{grid}"),
        }
    }
}
