use core::fmt;
use smallvec::SmallVec;

/// Offsets of the four axis-aligned neighbours in the order they are expanded: west, north, east,
/// south. The y-axis points down, matching the row order of a textual board.
pub const NEUMANN_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A cell position on a grid. `x` is the column and `y` the row; both are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Coordinate {
        Coordinate { x, y }
    }

    /// Applies an offset, returning [None] if either component would become negative.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Coordinate> {
        Some(Coordinate {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// The (up to) four axis-aligned neighbours, in west, north, east, south order. Bounds on the
    /// positive side are not checked here, see [WeightedGrid::neighbours](crate::WeightedGrid::neighbours).
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True if the two coordinates differ by exactly one axis-aligned unit step.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Coordinate {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
