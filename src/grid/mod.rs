//! Packed icosahedron net addressing
//!
//! The twenty faces of an icosahedron, each subdivided into a triangular
//! lattice with `3N` triangles along a side, are unfolded into a rectangle of
//! `30N × 9N` coordinates. Only part of the rectangle is occupied: column `x`
//! holds a band of `6N` consecutive rows whose lower edge follows a tent
//! function of `x`, tracing the zig-zag of the net around the poles.
//!
//! Everything here is a pure function of `N` and a coordinate. The seams where
//! the net folds back onto itself are handled in [`directions`].

pub mod directions;

pub use directions::{
    Boundary, Delta, Orientation, DIRECTION_COUNT, SLOT_LEFT, SLOT_RIGHT, SLOT_VERTICAL,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Largest supported subdivision factor
///
/// Keeps every coordinate and cell count comfortably inside `i32`/`usize`
/// arithmetic. Cell count grows as `180·N²`, so practical values are far lower.
pub const MAX_SUBDIVISION: u32 = 1024;

/// Cells per unit of `N²`: twenty faces of `(3N)²` triangles each
pub const CELLS_PER_N2: usize = 180;

/// Dimensions of the packed rectangle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Columns, `10 · edge`
    pub x: i32,
    /// Rows, `3 · edge`
    pub y: i32,
}

/// Addressing rules for an icosahedron net with subdivision factor `N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoGrid {
    n: i32,
    edge: i32,
    size: GridSize,
}

impl IcoGrid {
    /// Create the addressing for subdivision factor `n`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` is zero or above [`MAX_SUBDIVISION`].
    pub fn new(n: u32) -> Result<Self> {
        if n == 0 || n > MAX_SUBDIVISION {
            return Err(GridError::InvalidParameter(format!(
                "subdivision factor must be in 1..={} (got {})",
                MAX_SUBDIVISION, n
            )));
        }
        let n = n as i32;
        let edge = 3 * n;
        Ok(Self {
            n,
            edge,
            size: GridSize {
                x: 10 * edge,
                y: 3 * edge,
            },
        })
    }

    /// Subdivision factor `N`
    #[inline]
    pub fn n(&self) -> u32 {
        self.n as u32
    }

    /// Triangles along one face edge, `3N`
    #[inline]
    pub fn edge(&self) -> i32 {
        self.edge
    }

    /// Dimensions of the packed rectangle
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Horizontal wrap period of the whole net, `30N`
    #[inline]
    pub fn wrap_width(&self) -> i32 {
        self.size.x
    }

    /// Present cells per column, `2 · edge`
    #[inline]
    pub fn band_height(&self) -> i32 {
        2 * self.edge
    }

    /// Number of cells on the net, `180·N²`
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size.x as usize * self.band_height() as usize
    }

    /// First occupied row of column `x`
    ///
    /// A tent function over a period of `2 · edge`: rises from 0 to `edge`
    /// and falls back. Assumes `x` is inside the rectangle.
    #[inline]
    pub fn lower_border(&self, x: i32) -> i32 {
        let period = 2 * self.edge;
        let xx = x.rem_euclid(period);
        if xx <= self.edge {
            xx
        } else {
            period - xx
        }
    }

    /// Check whether a cell exists at `(x, y)`
    pub fn exists_at(&self, x: i32, y: i32) -> bool {
        if !(0 <= x && x < self.size.x && 0 <= y && y < self.size.y) {
            return false;
        }
        let min_y = self.lower_border(x);
        let max_y = self.band_height() + min_y - 1;
        min_y <= y && y <= max_y
    }

    /// Whether the triangle at `(x, y)` points down
    #[inline]
    pub fn is_up_side_down(&self, x: i32, y: i32) -> bool {
        Orientation::of(x, y) == Orientation::Down
    }

    /// Fold a column into `[0, 30N)`
    #[inline]
    pub fn fold_x(&self, x: i32) -> i32 {
        x.rem_euclid(self.size.x)
    }

    /// Dense index of the cell at `(x, y)`, in column-major creation order
    ///
    /// Each column holds exactly `band_height` cells, so the index is
    /// `x · band_height + (y - lower_border(x))`.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.exists_at(x, y) {
            return None;
        }
        let column = x as usize * self.band_height() as usize;
        Some(column + (y - self.lower_border(x)) as usize)
    }

    /// Inverse of [`index_of`](Self::index_of)
    pub fn coord_of(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.cell_count() {
            return None;
        }
        let band = self.band_height() as usize;
        let x = (index / band) as i32;
        let y = (index % band) as i32 + self.lower_border(x);
        Some((x, y))
    }

    /// Boundary class of the cell at `(x, y)`
    pub fn boundary(&self, x: i32, y: i32) -> Result<Boundary> {
        self.require(x, y)?;
        Ok(directions::classify(self.n, x, y).1)
    }

    /// Neighbor offsets `[left, right, vertical]` of the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` if no cell exists at `(x, y)`.
    pub fn directions(&self, x: i32, y: i32) -> Result<[Delta; DIRECTION_COUNT]> {
        self.require(x, y)?;
        Ok(directions::directions_at(self.n, x, y))
    }

    /// Coordinates of the three edge neighbors of `(x, y)`, with `x` folded
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` if no cell exists at `(x, y)`, and
    /// `InconsistentTopology` if a direction lands on an empty coordinate.
    pub fn neighbor_coords(&self, x: i32, y: i32) -> Result<[(i32, i32); DIRECTION_COUNT]> {
        let deltas = self.directions(x, y)?;
        let mut coords = [(0, 0); DIRECTION_COUNT];
        for (slot, (dx, dy)) in deltas.into_iter().enumerate() {
            let nx = self.fold_x(x + dx);
            let ny = y + dy;
            if !self.exists_at(nx, ny) {
                return Err(GridError::InconsistentTopology { x, y, nx, ny });
            }
            coords[slot] = (nx, ny);
        }
        Ok(coords)
    }

    fn require(&self, x: i32, y: i32) -> Result<()> {
        if self.exists_at(x, y) {
            Ok(())
        } else {
            Err(GridError::CellNotFound { x, y })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_size_and_count() {
        for n in 1..=6u32 {
            let grid = IcoGrid::new(n).unwrap();
            let edge = 3 * n as i32;
            assert_eq!(grid.size(), GridSize { x: 10 * edge, y: 3 * edge });
            assert_eq!(grid.cell_count(), CELLS_PER_N2 * (n * n) as usize);
        }
    }

    #[test]
    fn test_invalid_subdivision() {
        assert!(matches!(IcoGrid::new(0), Err(GridError::InvalidParameter(_))));
        assert!(IcoGrid::new(MAX_SUBDIVISION + 1).is_err());
        assert!(IcoGrid::new(MAX_SUBDIVISION).is_ok());
    }

    #[test]
    fn test_exists_matches_count() {
        for n in 1..=5u32 {
            let grid = IcoGrid::new(n).unwrap();
            let size = grid.size();
            let present = (0..size.x)
                .flat_map(|x| (0..size.y).map(move |y| (x, y)))
                .filter(|&(x, y)| grid.exists_at(x, y))
                .count();
            assert_eq!(present, grid.cell_count());
        }
    }

    #[test]
    fn test_exists_out_of_bounds() {
        let grid = IcoGrid::new(2).unwrap();
        assert!(!grid.exists_at(-1, 0));
        assert!(!grid.exists_at(0, -1));
        assert!(!grid.exists_at(60, 0));
        assert!(!grid.exists_at(0, 18));
    }

    #[test]
    fn test_band_shape() {
        // N = 1: edge = 3, bands slide down to the equator and back
        let grid = IcoGrid::new(1).unwrap();
        assert!(grid.exists_at(0, 0));
        assert!(grid.exists_at(0, 5));
        assert!(!grid.exists_at(0, 6));
        assert!(!grid.exists_at(3, 2));
        assert!(grid.exists_at(3, 3));
        assert!(grid.exists_at(3, 8));
        assert!(!grid.exists_at(6, 6));
        assert!(grid.exists_at(6, 0));
    }

    #[test]
    fn test_index_roundtrip_is_dense() {
        let grid = IcoGrid::new(3).unwrap();
        let size = grid.size();
        let mut expected = 0;
        for x in 0..size.x {
            for y in 0..size.y {
                if let Some(index) = grid.index_of(x, y) {
                    assert_eq!(index, expected);
                    assert_eq!(grid.coord_of(index), Some((x, y)));
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, grid.cell_count());
        assert_eq!(grid.coord_of(grid.cell_count()), None);
    }

    #[test]
    fn test_directions_scenario() {
        let grid = IcoGrid::new(3).unwrap();
        assert_eq!(grid.directions(0, 0).unwrap(), [(-18, 0), (18, 0), (0, 1)]);
        assert_eq!(grid.boundary(0, 0).unwrap(), Boundary::NorthPole);
    }

    #[test]
    fn test_directions_missing_cell() {
        let grid = IcoGrid::new(1).unwrap();
        assert_eq!(
            grid.directions(0, 8),
            Err(GridError::CellNotFound { x: 0, y: 8 })
        );
    }

    #[test]
    fn test_all_neighbors_exist_and_reciprocate() {
        for n in 1..=5u32 {
            let grid = IcoGrid::new(n).unwrap();
            for index in 0..grid.cell_count() {
                let (x, y) = grid.coord_of(index).unwrap();
                let neighbors = grid.neighbor_coords(x, y).unwrap();
                for (nx, ny) in neighbors {
                    assert_ne!((nx, ny), (x, y));
                    let back = grid.neighbor_coords(nx, ny).unwrap();
                    assert!(
                        back.contains(&(x, y)),
                        "N={}: ({}, {}) -> ({}, {}) not reciprocated",
                        n, x, y, nx, ny
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbors_are_distinct() {
        let grid = IcoGrid::new(2).unwrap();
        for index in 0..grid.cell_count() {
            let (x, y) = grid.coord_of(index).unwrap();
            let [a, b, c] = grid.neighbor_coords(x, y).unwrap();
            assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn test_interior_neighbors_have_opposite_orientation() {
        // Seam and pole jumps are even offsets, so only interior cells flip
        let grid = IcoGrid::new(3).unwrap();
        for index in 0..grid.cell_count() {
            let (x, y) = grid.coord_of(index).unwrap();
            if grid.boundary(x, y).unwrap() != Boundary::Interior {
                continue;
            }
            for (nx, ny) in grid.neighbor_coords(x, y).unwrap() {
                assert_ne!(grid.is_up_side_down(x, y), grid.is_up_side_down(nx, ny));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_exists_is_pure(n in 1u32..=8, x in -20i32..260, y in -20i32..90) {
            let grid = IcoGrid::new(n).unwrap();
            let first = grid.exists_at(x, y);
            prop_assert_eq!(first, grid.exists_at(x, y));
            prop_assert_eq!(first, grid.index_of(x, y).is_some());
        }

        #[test]
        fn prop_index_inverts_coord(n in 1u32..=8, seed in any::<usize>()) {
            let grid = IcoGrid::new(n).unwrap();
            let index = seed % grid.cell_count();
            let (x, y) = grid.coord_of(index).unwrap();
            prop_assert!(grid.exists_at(x, y));
            prop_assert_eq!(grid.index_of(x, y), Some(index));
        }
    }
}
