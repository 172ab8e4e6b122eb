use std::path::PathBuf;

use thiserror::Error;

use crate::coordinate::Coordinate;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [Error], so that callers can tell an invalid board apart from an
/// unsolvable one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The board, weight table or search output handed in was malformed.
    Configuration,
    /// The frontier ran dry before the goal was finalized. A valid negative result.
    NoPath,
    /// A coordinate outside of the grid was queried.
    OutOfBounds,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("board has no rows")]
    EmptyBoard,

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("character {character:?} at {at} has no weight table entry")]
    UnmappedCharacter { character: char, at: Coordinate },

    #[error("marker {0:?} does not occur on the board")]
    MissingMarker(char),

    #[error("marker {marker:?} occurs more than once, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Coordinate,
        second: Coordinate,
    },

    #[error("invalid weight {weight} for {at}: weights must be non-negative")]
    InvalidWeight { weight: f64, at: Coordinate },

    #[error("invalid weight table: {0}")]
    InvalidWeightTable(String),

    #[error("{0} has no predecessor entry")]
    MissingPredecessor(Coordinate),

    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse weight table")]
    Json(#[from] serde_json::Error),

    #[error("no path from {start} to {goal}")]
    NoPath { start: Coordinate, goal: Coordinate },

    #[error("{coordinate} lies outside of the {width}x{height} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoPath { .. } => ErrorKind::NoPath,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            _ => ErrorKind::Configuration,
        }
    }

    pub fn is_no_path(&self) -> bool {
        self.kind() == ErrorKind::NoPath
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let no_path = Error::NoPath {
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(1, 1),
        };
        let oob = Error::OutOfBounds {
            coordinate: Coordinate::new(5, 0),
            width: 3,
            height: 3,
        };
        assert!(no_path.is_no_path());
        assert_eq!(oob.kind(), ErrorKind::OutOfBounds);
        assert_eq!(Error::MissingMarker('A').kind(), ErrorKind::Configuration);
        assert_eq!(
            oob.to_string(),
            "(5, 0) lies outside of the 3x3 grid".to_string()
        );
    }
}
