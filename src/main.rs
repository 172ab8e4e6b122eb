use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{error, info};

use grid_best_first::solver::{AstarSolver, BreadthFirstSolver, DijkstraSolver};
use grid_best_first::{
    Board, DiscoveryPolicy, ErrorKind, GridSolver, Marker, ParsedBoard, Result, SearchMode,
    SearchResult, WeightTable, IMPASSABLE,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TablePreset {
    /// `.` costs 1, `#` is impassable
    Obstacles,
    /// w=100, m=50, f=10, g=5, r=1
    Terrain,
}

/// Finds and draws the cheapest path between the start and goal markers of a board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file, one row per line
    board: PathBuf,

    #[arg(short, long, value_enum, default_value_t = SearchMode::AStar)]
    mode: SearchMode,

    /// Built-in weight table
    #[arg(short, long, value_enum, default_value_t = TablePreset::Obstacles)]
    table: TablePreset,

    /// JSON weight table, replaces the built-in table
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Extra weight entries as CHAR=WEIGHT; `inf` marks an impassable character
    #[arg(short = 'w', long = "weight", value_parser = parse_weight)]
    overrides: Vec<(char, f64)>,

    /// Start marker and its cost, as CHAR=COST
    #[arg(long, value_parser = parse_weight)]
    start: Option<(char, f64)>,

    /// Goal marker and its cost, as CHAR=COST
    #[arg(long, value_parser = parse_weight)]
    goal: Option<(char, f64)>,

    /// Character drawn on path cells
    #[arg(long, default_value_t = 'o')]
    path_char: char,

    /// Also draw finalized cells that are not on the path
    #[arg(long)]
    visited_char: Option<char>,

    /// Scales the A* heuristic; values above 1 trade optimality for speed
    #[arg(long, default_value_t = 1.0)]
    heuristic_factor: f64,

    /// Re-parent discovered cells when a cheaper route shows up
    #[arg(long)]
    relax: bool,
}

fn parse_weight(s: &str) -> std::result::Result<(char, f64), String> {
    let (symbol, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHAR=WEIGHT, got {s:?}"))?;
    let mut chars = symbol.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("{symbol:?} is not a single character")),
    };
    let weight = match weight {
        "inf" | "#" => IMPASSABLE,
        w => w.parse::<f64>().map_err(|e| e.to_string())?,
    };
    Ok((symbol, weight))
}

fn weight_table(args: &Args) -> Result<WeightTable> {
    let mut table = match &args.weights {
        Some(path) => WeightTable::from_file(path)?,
        None => match args.table {
            TablePreset::Obstacles => WeightTable::obstacles(),
            TablePreset::Terrain => WeightTable::terrain(),
        },
    };
    for &(symbol, weight) in &args.overrides {
        table.insert(symbol, weight)?;
    }
    if let Some(start) = args.start {
        table.start = Marker::from(start);
    }
    if let Some(goal) = args.goal {
        table.goal = Marker::from(goal);
    }
    Ok(table)
}

fn search(args: &Args, board: &ParsedBoard) -> Result<SearchResult> {
    let grid = &board.grid;
    let policy = if args.relax {
        DiscoveryPolicy::Relax
    } else {
        DiscoveryPolicy::FirstWins
    };
    match args.mode {
        SearchMode::AStar => AstarSolver {
            heuristic_factor: args.heuristic_factor,
            policy,
        }
        .search(grid, board.start, board.goal),
        SearchMode::Dijkstra => DijkstraSolver.search(grid, board.start, board.goal),
        SearchMode::BreadthFirst => BreadthFirstSolver.search(grid, board.start, board.goal),
    }
}

fn run(args: &Args) -> Result<String> {
    let board = Board::from_file(&args.board)?;
    let table = weight_table(args)?;
    let parsed = board.to_grid(&table)?;
    info!(
        "Start {} and goal {} are {}",
        parsed.start,
        parsed.goal,
        if parsed.grid.reachable(&parsed.start, &parsed.goal) {
            "connected"
        } else {
            "disconnected"
        }
    );
    let result = search(args, &parsed)?;
    let path = result.path()?;
    let mut rendered = board.clone();
    if let Some(visited_char) = args.visited_char {
        rendered = rendered.with_cells(&result.visited, visited_char)?;
    }
    rendered = rendered.with_path(&path, args.path_char)?;
    Ok(format!(
        "{}cost {} over {} cells, {} finalized",
        rendered,
        result.total_cost(),
        path.len(),
        result.visited.len()
    ))
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => match e.kind() {
            ErrorKind::NoPath => {
                println!("Unsolvable board: {e}");
                ExitCode::from(1)
            }
            ErrorKind::Configuration | ErrorKind::OutOfBounds => {
                error!("Invalid board: {e}");
                eprintln!("Invalid board: {e}");
                ExitCode::from(2)
            }
        },
    }
}
