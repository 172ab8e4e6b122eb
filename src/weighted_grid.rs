use core::fmt;

use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// Weight marking a cell that can never be entered.
pub const IMPASSABLE: f64 = f64::INFINITY;

/// [WeightedGrid] stores a non-negative traversal weight for every cell of a fixed-size rectangle,
/// where [IMPASSABLE] marks blocked cells. Entering a cell costs its weight. In addition it
/// maintains information about connected components of passable cells using a [UnionFind]
/// structure, which gives a cheap reachability check independent of any search.
#[derive(Clone, Debug)]
pub struct WeightedGrid {
    width: usize,
    height: usize,
    weights: Vec<f64>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

fn check_weight(weight: f64, at: Coordinate) -> Result<()> {
    if weight.is_nan() || weight < 0.0 {
        Err(Error::InvalidWeight { weight, at })
    } else {
        Ok(())
    }
}

impl WeightedGrid {
    /// Creates a grid with every cell set to `default_weight`.
    ///
    /// # Panics
    /// Panics if `default_weight` is negative or NaN, or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize, default_weight: f64) -> WeightedGrid {
        assert!(
            check_weight(default_weight, Coordinate::default()).is_ok(),
            "default weight must be non-negative"
        );
        let Some(cells) = width.checked_mul(height) else {
            panic!("a {width}x{height} grid has more cells than fit in usize");
        };
        let mut grid = WeightedGrid {
            width,
            height,
            weights: vec![default_weight; cells],
            components: UnionFind::new(cells),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coordinate: &Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    fn ix(&self, coordinate: &Coordinate) -> usize {
        coordinate.y * self.width + coordinate.x
    }

    fn checked_ix(&self, coordinate: &Coordinate) -> Result<usize> {
        if self.in_bounds(coordinate) {
            Ok(self.ix(coordinate))
        } else {
            Err(Error::OutOfBounds {
                coordinate: *coordinate,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The weight of a cell, which is the cost of entering it.
    pub fn weight(&self, coordinate: &Coordinate) -> Result<f64> {
        self.checked_ix(coordinate).map(|ix| self.weights[ix])
    }

    /// Updates the weight of a cell. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set(&mut self, coordinate: Coordinate, weight: f64) -> Result<()> {
        let ix = self.checked_ix(&coordinate)?;
        check_weight(weight, coordinate)?;
        let was_passable = self.weights[ix].is_finite();
        self.weights[ix] = weight;
        if !weight.is_finite() {
            if was_passable {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(&coordinate) {
                if self.is_passable(&n) {
                    let n_ix = self.ix(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        Ok(())
    }

    /// A cell is passable if it lies on the grid and its weight is finite. [IMPASSABLE] cells are
    /// never passable, whatever comparisons against their weight would suggest.
    pub fn is_passable(&self, coordinate: &Coordinate) -> bool {
        self.in_bounds(coordinate) && self.weights[self.ix(coordinate)].is_finite()
    }

    /// The in-bounds axis-aligned neighbours of a cell, in west, north, east, south order.
    /// Passability is not checked.
    pub fn neighbours(&self, coordinate: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        let mut neighborhood = coordinate.neumann_neighborhood();
        neighborhood.retain(|n| self.in_bounds(n));
        neighborhood
    }

    /// Smallest weight among passable cells, if there are any.
    pub fn min_weight(&self) -> Option<f64> {
        self.weights
            .iter()
            .copied()
            .filter(|w| w.is_finite())
            .min_by(f64::total_cmp)
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, coordinate: &Coordinate) -> Result<usize> {
        self.checked_ix(coordinate).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        debug_assert!(
            !self.components_dirty,
            "components are dirty, call update() first"
        );
        self.is_passable(start)
            && self.is_passable(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Coordinate::new(x, y);
                if !self.is_passable(&point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                // Linking east and south covers every edge exactly once
                for n in [Coordinate::new(x + 1, y), Coordinate::new(x, y + 1)] {
                    if self.is_passable(&n) {
                        let ix = self.ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Cost of following `path`: the sum of the weights of every cell after the first, which is
    /// what a search charges for it.
    pub fn path_cost(&self, path: &[Coordinate]) -> Result<f64> {
        path.iter()
            .skip(1)
            .map(|c| self.weight(c))
            .fold_ok(0.0, |acc, w| acc + w)
    }

    /// Checks that consecutive cells are axis-aligned unit steps apart and that every cell is
    /// passable. The empty path is not valid.
    pub fn is_valid_path(&self, path: &[Coordinate]) -> bool {
        !path.is_empty()
            && path.iter().all(|c| self.is_passable(c))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

impl fmt::Display for WeightedGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.weights.chunks(self.width.max(1)) {
            let values = row
                .iter()
                .map(|w| {
                    if w.is_finite() {
                        format!("{w}")
                    } else {
                        "#".to_owned()
                    }
                })
                .join(" ");
            writeln!(f, "{}", values)?;
        }
        Ok(())
    }
}
