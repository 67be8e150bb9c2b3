//! Net Cell Structure
//!
//! Represents one triangle of the subdivided icosahedron with its position,
//! orientation and plate classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::Orientation;
use crate::tectonics::{PlateId, PlateKind};

/// RGBA color type
pub type Color = [f32; 4];

/// A single triangular cell of the net
///
/// Position and orientation are fixed at construction. Color and plate fields
/// are rewritten by plate generation; nothing else mutates a cell.
///
/// # Memory Usage
///
/// Roughly 64 bytes per cell. For N = 20 (72,000 cells) that is ~4.6 MB.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column in the packed array
    pub x: i32,

    /// Row in the packed array
    pub y: i32,

    /// True for downward-pointing triangles (odd `x + y`)
    pub up_side_down: bool,

    /// Base terrain color
    pub color: Color,

    /// Plate visualization color, set by plate generation
    pub tectonic_color: Color,

    /// Plate this cell belongs to, once plates have been generated
    pub plate_id: Option<PlateId>,

    /// Classification of the owning plate
    pub plate_kind: Option<PlateKind>,
}

impl Cell {
    /// Color of a cell before any terrain or plate pass has run
    pub const DEFAULT_COLOR: Color = [0.55, 0.55, 0.55, 1.0];

    /// Create an unclassified cell at `(x, y)`
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            up_side_down: Orientation::of(x, y) == Orientation::Down,
            color: Self::DEFAULT_COLOR,
            tectonic_color: Self::DEFAULT_COLOR,
            plate_id: None,
            plate_kind: None,
        }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.up_side_down {
            Orientation::Down
        } else {
            Orientation::Up
        }
    }

    /// Whether the owning plate is oceanic; false before generation
    #[inline]
    pub fn is_oceanic(&self) -> bool {
        self.plate_kind == Some(PlateKind::Oceanic)
    }

    /// Assign this cell to a plate
    pub(crate) fn assign_plate(&mut self, plate_id: PlateId, kind: PlateKind, color: Color) {
        self.plate_id = Some(plate_id);
        self.plate_kind = Some(kind);
        self.tectonic_color = color;
    }
}
