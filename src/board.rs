//! Textual boards: one character per cell, translated to weights through a [WeightTable].
use core::fmt;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use fxhash::FxHashMap;
use log::info;
use serde::Deserialize;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::weighted_grid::{WeightedGrid, IMPASSABLE};

/// A character that occurs exactly once on a board, together with the weight of its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub symbol: char,
    pub cost: f64,
}

impl Marker {
    pub const fn new(symbol: char, cost: f64) -> Marker {
        Marker { symbol, cost }
    }
}

impl From<(char, f64)> for Marker {
    fn from((symbol, cost): (char, f64)) -> Marker {
        Marker { symbol, cost }
    }
}

pub const DEFAULT_START: Marker = Marker::new('A', 1.0);
pub const DEFAULT_GOAL: Marker = Marker::new('B', 1.0);

/// Maps board characters to cell weights, plus the start and goal markers.
#[derive(Clone, Debug)]
pub struct WeightTable {
    weights: FxHashMap<char, f64>,
    pub start: Marker,
    pub goal: Marker,
}

/// On-disk form of a [WeightTable]. `null` weights are impassable.
#[derive(Deserialize)]
struct WeightTableFile {
    weights: BTreeMap<String, Option<f64>>,
    start: Option<(char, f64)>,
    goal: Option<(char, f64)>,
}

impl WeightTable {
    pub fn new(start: Marker, goal: Marker) -> WeightTable {
        WeightTable {
            weights: FxHashMap::default(),
            start,
            goal,
        }
    }

    /// `.` costs 1 and `#` is impassable.
    pub fn obstacles() -> WeightTable {
        let mut table = WeightTable::new(DEFAULT_START, DEFAULT_GOAL);
        table.weights.insert('.', 1.0);
        table.weights.insert('#', IMPASSABLE);
        table
    }

    /// Terrain types: water (`w`), mountains (`m`), forest (`f`), grassland (`g`) and road (`r`).
    pub fn terrain() -> WeightTable {
        let mut table = WeightTable::new(DEFAULT_START, DEFAULT_GOAL);
        for (symbol, weight) in [('w', 100.0), ('m', 50.0), ('f', 10.0), ('g', 5.0), ('r', 1.0)] {
            table.weights.insert(symbol, weight);
        }
        table
    }

    /// Adds or replaces the weight of a character. Weights must be non-negative; use
    /// [IMPASSABLE] for blocked cells.
    pub fn insert(&mut self, symbol: char, weight: f64) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::InvalidWeightTable(format!(
                "weight {weight} for {symbol:?} is negative"
            )));
        }
        self.weights.insert(symbol, weight);
        Ok(())
    }

    /// Weight of a character. Markers take precedence over plain entries.
    pub fn get(&self, symbol: char) -> Option<f64> {
        if symbol == self.start.symbol {
            Some(self.start.cost)
        } else if symbol == self.goal.symbol {
            Some(self.goal.cost)
        } else {
            self.weights.get(&symbol).copied()
        }
    }

    /// Parses a table such as `{"weights": {".": 1, "#": null}, "start": ["A", 1]}`. Missing
    /// markers default to `A` and `B` with cost 1.
    pub fn from_json(json: &str) -> Result<WeightTable> {
        let file: WeightTableFile = serde_json::from_str(json)?;
        let mut table = WeightTable::new(
            file.start.map_or(DEFAULT_START, Marker::from),
            file.goal.map_or(DEFAULT_GOAL, Marker::from),
        );
        for (key, weight) in file.weights {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    return Err(Error::InvalidWeightTable(format!(
                        "key {key:?} is not a single character"
                    )))
                }
            };
            table.insert(symbol, weight.unwrap_or(IMPASSABLE))?;
        }
        table.validate()?;
        Ok(table)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<WeightTable> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        WeightTable::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.start.symbol == self.goal.symbol {
            return Err(Error::InvalidWeightTable(format!(
                "start and goal share the marker {:?}",
                self.start.symbol
            )));
        }
        for marker in [self.start, self.goal] {
            if marker.cost.is_nan() || marker.cost < 0.0 {
                return Err(Error::InvalidWeightTable(format!(
                    "marker {:?} has negative cost {}",
                    marker.symbol, marker.cost
                )));
            }
        }
        Ok(())
    }
}

/// A board translated into weights, with the resolved marker positions.
#[derive(Clone, Debug)]
pub struct ParsedBoard {
    pub grid: WeightedGrid,
    pub start: Coordinate,
    pub goal: Coordinate,
}

/// A rectangular board of characters, indexed `[y][x]` with `y` growing downward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<char>>,
}

impl Board {
    /// Checks that there is at least one row and that all rows have the same length.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Board> {
        let expected = rows.first().map(Vec::len).ok_or(Error::EmptyBoard)?;
        if expected == 0 {
            return Err(Error::EmptyBoard);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::RaggedRows {
                row,
                expected,
                found,
            });
        }
        Ok(Board { rows })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let board: Board = text.parse()?;
        info!(
            "Loaded {}x{} board from {}",
            board.width(),
            board.height(),
            path.display()
        );
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, coordinate: &Coordinate) -> Option<char> {
        self.rows.get(coordinate.y)?.get(coordinate.x).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Positions of every occurrence of `symbol`, in row-major order.
    pub fn find(&self, symbol: char) -> Vec<Coordinate> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, &c)| c == symbol)
                    .map(move |(x, _)| Coordinate::new(x, y))
            })
            .collect()
    }

    fn find_marker(&self, marker: &Marker) -> Result<Coordinate> {
        match self.find(marker.symbol).as_slice() {
            [] => Err(Error::MissingMarker(marker.symbol)),
            [single] => Ok(*single),
            [first, second, ..] => Err(Error::DuplicateMarker {
                marker: marker.symbol,
                first: *first,
                second: *second,
            }),
        }
    }

    /// Translates every cell through `table` and locates the start and goal markers.
    pub fn to_grid(&self, table: &WeightTable) -> Result<ParsedBoard> {
        table.validate()?;
        let start = self.find_marker(&table.start)?;
        let goal = self.find_marker(&table.goal)?;
        let mut grid = WeightedGrid::new(self.width(), self.height(), IMPASSABLE);
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &character) in row.iter().enumerate() {
                let at = Coordinate::new(x, y);
                let weight = table
                    .get(character)
                    .ok_or(Error::UnmappedCharacter { character, at })?;
                grid.set(at, weight)?;
            }
        }
        grid.update();
        Ok(ParsedBoard { grid, start, goal })
    }

    /// A copy of the board with the given cells overwritten by `fill`. The board itself is left
    /// untouched.
    pub fn with_cells<'a, I>(&self, cells: I, fill: char) -> Result<Board>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut board = self.clone();
        for c in cells {
            let cell = board
                .rows
                .get_mut(c.y)
                .and_then(|row| row.get_mut(c.x))
                .ok_or(Error::OutOfBounds {
                    coordinate: *c,
                    width: self.width(),
                    height: self.height(),
                })?;
            *cell = fill;
        }
        Ok(board)
    }

    /// Renders `path` onto a copy of the board.
    pub fn with_path(&self, path: &[Coordinate], fill: char) -> Result<Board> {
        self.with_cells(path, fill)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// One row per line. Empty lines are skipped; every other character, spaces included, is a
    /// cell.
    fn from_str(s: &str) -> Result<Board> {
        Board::from_rows(
            s.lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().collect())
                .collect(),
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
