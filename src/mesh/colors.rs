//! Color mapping for cells

use crate::cell::{Cell, Color};

/// Trait for choosing the display color of a cell
pub trait CellColorMapper {
    /// Map a cell to an RGBA color
    fn map_color(&self, cell: &Cell) -> Color;
}

/// Shows the base terrain color
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainColorMapper;

impl CellColorMapper for TerrainColorMapper {
    fn map_color(&self, cell: &Cell) -> Color {
        cell.color
    }
}

/// Shows the plate color written by plate generation
#[derive(Debug, Clone, Copy, Default)]
pub struct TectonicColorMapper;

impl CellColorMapper for TectonicColorMapper {
    fn map_color(&self, cell: &Cell) -> Color {
        cell.tectonic_color
    }
}

/// Switchable display mode, for viewers that toggle between layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Terrain,
    Tectonic,
}

impl CellColorMapper for DisplayMode {
    fn map_color(&self, cell: &Cell) -> Color {
        match self {
            DisplayMode::Terrain => TerrainColorMapper.map_color(cell),
            DisplayMode::Tectonic => TectonicColorMapper.map_color(cell),
        }
    }
}
