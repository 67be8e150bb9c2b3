//! Neighbor direction table
//!
//! Every triangle has three edge neighbors: one to the left, one to the right
//! and one vertically (above for upward triangles, below for downward ones).
//! Away from the seams of the net those are plain unit steps. On a pole row or
//! on a fold line one horizontal neighbor lives in a distant column, and the
//! step has to jump there.
//!
//! The cases are disjoint once evaluated in order, so they are modelled as a
//! [`Boundary`] classification followed by a single `match` producing the
//! delta triple.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate offset `(dx, dy)` in the packed array
pub type Delta = (i32, i32);

/// Number of edge neighbors of a triangle
pub const DIRECTION_COUNT: usize = 3;

/// Slot of the left neighbor in a direction triple
pub const SLOT_LEFT: usize = 0;
/// Slot of the right neighbor in a direction triple
pub const SLOT_RIGHT: usize = 1;
/// Slot of the vertical neighbor in a direction triple
pub const SLOT_VERTICAL: usize = 2;

/// Which way a triangle points
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Apex at the top; the vertical neighbor is at `y + 1`
    Up,
    /// Apex at the bottom; the vertical neighbor is at `y - 1`
    Down,
}

impl Orientation {
    /// Orientation of the triangle at `(x, y)`, from the parity of `x + y`
    #[inline]
    pub fn of(x: i32, y: i32) -> Self {
        if (x + y).rem_euclid(2) == 0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// Vertical offset of the neighbor sharing the horizontal edge
    #[inline]
    pub fn vertical_step(self) -> i32 {
        match self {
            Orientation::Up => 1,
            Orientation::Down => -1,
        }
    }
}

/// Where a triangle sits relative to the poles and fold lines of the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// First row; both horizontal neighbors wrap around the north pole
    NorthPole,
    /// Upper-half fold where `xx == yy`; the right neighbor jumps across
    UpperLeftSeam,
    /// Upper-half fold where `6N - xx == yy`; the left neighbor jumps across
    UpperRightSeam,
    /// Last row; both horizontal neighbors wrap around the south pole
    SouthPole,
    /// Lower-half fold where `xx - 1 == yy`; the left neighbor jumps across
    LowerLeftSeam,
    /// Lower-half fold where `6N - xx - 1 == yy`; the right neighbor jumps across
    LowerRightSeam,
    /// Ordinary lattice cell
    Interior,
}

/// Classify a triangle for the direction table
///
/// `n` is the subdivision factor. Rows are tested in order and the first match
/// wins: the pole rows take precedence over the seams they intersect.
pub fn classify(n: i32, x: i32, y: i32) -> (Orientation, Boundary) {
    let period = 6 * n;
    let xx = x.rem_euclid(period);
    let yy = y.rem_euclid(period);
    let orientation = Orientation::of(x, y);

    let boundary = match orientation {
        Orientation::Up => {
            if y == 0 {
                Boundary::NorthPole
            } else if xx == yy && y < 3 * n {
                Boundary::UpperLeftSeam
            } else if period - xx == yy && y < 3 * n {
                Boundary::UpperRightSeam
            } else {
                Boundary::Interior
            }
        }
        Orientation::Down => {
            if y == 9 * n - 1 {
                Boundary::SouthPole
            } else if xx - 1 == yy && y >= 6 * n {
                Boundary::LowerLeftSeam
            } else if period - xx - 1 == yy && y >= 6 * n {
                Boundary::LowerRightSeam
            } else {
                Boundary::Interior
            }
        }
    };

    (orientation, boundary)
}

/// Direction triple `[left, right, vertical]` for a classified triangle
///
/// `yy` is `y mod 6N`, the row within the current half-period, which sizes
/// the seam jumps.
pub fn deltas(n: i32, orientation: Orientation, boundary: Boundary, yy: i32) -> [Delta; DIRECTION_COUNT] {
    let pole = 6 * n;
    let vertical = (0, orientation.vertical_step());

    let (left, right) = match boundary {
        Boundary::NorthPole | Boundary::SouthPole => (-pole, pole),
        Boundary::UpperLeftSeam => (-1, 2 * (3 * n - yy)),
        Boundary::UpperRightSeam => (-2 * (3 * n - yy), 1),
        Boundary::LowerLeftSeam => (-2 * (yy + 1), 1),
        Boundary::LowerRightSeam => (-1, 2 * (yy + 1)),
        Boundary::Interior => (-1, 1),
    };

    [(left, 0), (right, 0), vertical]
}

/// Direction triple for the triangle at `(x, y)`
///
/// Does not check that a cell exists there; see
/// [`IcoGrid::directions`](super::IcoGrid::directions) for the checked form.
pub fn directions_at(n: i32, x: i32, y: i32) -> [Delta; DIRECTION_COUNT] {
    let (orientation, boundary) = classify(n, x, y);
    deltas(n, orientation, boundary, y.rem_euclid(6 * n))
}
