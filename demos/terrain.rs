use grid_best_first::{Board, SearchMode, WeightTable};

// Compares the three search modes on a terrain board, where water (w) costs 100, mountains (m) 50,
// forest (f) 10, grassland (g) 5 and road (r) 1. Breadth-first search ignores these costs.

fn main() {
    let board: Board = include_str!("../boards/terrain-1.txt").parse().unwrap();
    let parsed = board.to_grid(&WeightTable::terrain()).unwrap();
    for mode in [
        SearchMode::Dijkstra,
        SearchMode::AStar,
        SearchMode::BreadthFirst,
    ] {
        let result = mode.search(&parsed.grid, parsed.start, parsed.goal).unwrap();
        let path = result.path().unwrap();
        println!(
            "{mode:?}: weighted cost {}, {} finalized",
            parsed.grid.path_cost(&path).unwrap(),
            result.visited.len()
        );
        println!("{}", board.with_path(&path, 'o').unwrap());
    }
}
