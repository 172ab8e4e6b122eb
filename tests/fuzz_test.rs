/// Fuzzes the search by checking for many random grids that a path is found exactly when the goal
/// is reachable by being part of the same connected component, and that every returned path is a
/// valid 4-connected walk. All three search modes are tested.
use grid_best_first::{
    solver::{AstarSolver, GridSolver},
    Coordinate, DiscoveryPolicy, SearchMode, WeightedGrid, IMPASSABLE,
};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, blocked: f64) -> WeightedGrid {
    let mut grid = WeightedGrid::new(w, h, 1.0);
    for y in 0..h {
        for x in 0..w {
            let weight = if rng.gen_bool(blocked) {
                IMPASSABLE
            } else {
                rng.gen_range(1..10) as f64
            };
            grid.set(Coordinate::new(x, y), weight).unwrap();
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &WeightedGrid, start: &Coordinate, end: &Coordinate) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Coordinate::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_passable(&p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

const MODES: [SearchMode; 3] = [
    SearchMode::Dijkstra,
    SearchMode::AStar,
    SearchMode::BreadthFirst,
];

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.4);
        grid.set(start, 1.0).unwrap();
        grid.set(end, 1.0).unwrap();
        grid.update();
        let reachable = grid.reachable(&start, &end);
        for mode in MODES {
            let result = mode.search(&grid, start, end);
            // Show the grid if the outcome disagrees with the components
            if result.is_ok() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            match result {
                Ok(result) => {
                    assert!(reachable);
                    let path = result.path().unwrap();
                    assert!(grid.is_valid_path(&path), "{mode:?}: {path:?}");
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                }
                Err(e) => {
                    assert!(!reachable);
                    assert!(e.is_no_path());
                }
            }
        }
    }
}

#[test]
fn fuzz_random_endpoints() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let w = rng.gen_range(1..12);
        let h = rng.gen_range(1..12);
        let grid = random_grid(w, h, &mut rng, 0.3);
        let start = Coordinate::new(rng.gen_range(0..w), rng.gen_range(0..h));
        let goal = Coordinate::new(rng.gen_range(0..w), rng.gen_range(0..h));
        if !grid.is_passable(&start) {
            continue;
        }
        let reachable = grid.reachable(&start, &goal);
        for mode in MODES {
            assert_eq!(mode.search(&grid, start, goal).is_ok(), reachable);
        }
    }
}

/// Repeated runs produce identical tables and paths.
#[test]
fn fuzz_determinism() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(3);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N - 1, N - 1);
    for _ in 0..300 {
        let mut grid = random_grid(N, N, &mut rng, 0.25);
        grid.set(start, 1.0).unwrap();
        grid.set(end, 1.0).unwrap();
        grid.update();
        for mode in MODES {
            match (mode.search(&grid, start, end), mode.search(&grid, start, end)) {
                (Ok(a), Ok(b)) => {
                    assert_eq!(a.cost, b.cost);
                    assert_eq!(a.predecessor, b.predecessor);
                    assert_eq!(a.visited, b.visited);
                    assert_eq!(a.path().unwrap(), b.path().unwrap());
                }
                (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
                _ => panic!("{mode:?} gave different outcomes on the same grid"),
            }
        }
    }
}

/// On unit weight grids all modes agree on the number of steps.
#[test]
fn fuzz_uniform_agreement() {
    const N: usize = 10;
    let mut rng = StdRng::seed_from_u64(11);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N - 1, N - 1);
    let astar = AstarSolver {
        policy: DiscoveryPolicy::Relax,
        ..AstarSolver::new()
    };
    for _ in 0..1000 {
        let mut grid = WeightedGrid::new(N, N, 1.0);
        for y in 0..N {
            for x in 0..N {
                if rng.gen_bool(0.3) {
                    grid.set(Coordinate::new(x, y), IMPASSABLE).unwrap();
                }
            }
        }
        grid.set(start, 1.0).unwrap();
        grid.set(end, 1.0).unwrap();
        grid.update();
        if grid.unreachable(&start, &end) {
            continue;
        }
        let bfs = SearchMode::BreadthFirst.search(&grid, start, end).unwrap();
        let dijkstra = SearchMode::Dijkstra.search(&grid, start, end).unwrap();
        let first_wins = SearchMode::AStar.search(&grid, start, end).unwrap();
        let a = astar.search(&grid, start, end).unwrap();
        let lengths = [
            bfs.path().unwrap().len(),
            dijkstra.path().unwrap().len(),
            first_wins.path().unwrap().len(),
            a.path().unwrap().len(),
        ];
        if lengths.iter().any(|&l| l != lengths[0]) {
            visualize_grid(&grid, &start, &end);
        }
        assert!(lengths.iter().all(|&l| l == lengths[0]), "{lengths:?}");
        assert_eq!(bfs.total_cost(), dijkstra.total_cost());
        assert_eq!(dijkstra.total_cost(), first_wins.total_cost());
        assert_eq!(dijkstra.total_cost(), a.total_cost());
    }
}
