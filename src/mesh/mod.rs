//! Flat mesh generation for WorldMap
//!
//! Lays the net out in the plane, one triangle per cell, and produces
//! engine-agnostic vertex data.

mod colors;

pub use colors::{CellColorMapper, DisplayMode, TectonicColorMapper, TerrainColorMapper};

use glam::Vec2;

use crate::cell::{Cell, Color};
use crate::world::WorldMap;

/// Size of one face of the solid in output units
///
/// The full net is five faces wide (ten half-faces) and three faces tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetLayout {
    pub face_width: f32,
    pub face_height: f32,
}

impl Default for NetLayout {
    fn default() -> Self {
        Self {
            face_width: 300.0,
            face_height: 260.0,
        }
    }
}

impl NetLayout {
    /// Width and height of one cell for subdivision factor `n`
    pub fn cell_size(&self, n: u32) -> Vec2 {
        let edge = (3 * n) as f32;
        Vec2::new(self.face_width / edge, self.face_height / edge)
    }

    /// The two zig-zag polylines bounding the net, top and bottom strip
    pub fn outline(&self) -> [Vec<Vec2>; 2] {
        let strip = |low: f32, high: f32| -> Vec<Vec2> {
            (0..11)
                .map(|i| {
                    let y = if i % 2 == 0 { low } else { high };
                    Vec2::new(self.face_width / 2.0 * i as f32, y * self.face_height)
                })
                .collect()
        };
        [strip(0.0, 1.0), strip(2.0, 3.0)]
    }
}

/// Engine-agnostic mesh data output
///
/// Three vertices per cell, in the order of [`WorldMap::cells`], so vertex
/// `3 * i + k` always belongs to cell `i`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (2D, net layout)
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Vertices of a cell in the plane, in cell units
///
/// Odd rows are shifted half a cell left. Upward triangles have their flat
/// edge at `y` and apex at `y + 1`; downward ones the reverse.
pub fn triangle_vertices(cell: &Cell) -> [Vec2; 3] {
    let mut left = if cell.up_side_down {
        (cell.x - 1).div_euclid(2) as f32 + 0.5
    } else {
        cell.x.div_euclid(2) as f32
    };
    if cell.y.rem_euclid(2) == 1 {
        left -= 0.5;
    }

    let (bottom, top) = (cell.y as f32, (cell.y + 1) as f32);
    let (base, apex) = if cell.up_side_down {
        (top, bottom)
    } else {
        (bottom, top)
    };

    [
        Vec2::new(left, base),
        Vec2::new(left + 1.0, base),
        Vec2::new(left + 0.5, apex),
    ]
}

/// Generate the flat mesh of `world` with the given color mapping
pub fn generate_mesh<C>(world: &WorldMap, layout: &NetLayout, color_mapper: &C) -> MeshData
where
    C: CellColorMapper + ?Sized,
{
    let scale = layout.cell_size(world.n());
    let cell_count = world.cell_count();
    let mut mesh = MeshData {
        positions: Vec::with_capacity(cell_count * 3),
        colors: Vec::with_capacity(cell_count * 3),
        indices: Vec::with_capacity(cell_count * 3),
    };

    for cell in world.cells() {
        let base_idx = mesh.positions.len() as u32;
        let color = color_mapper.map_color(cell);
        for vertex in triangle_vertices(cell) {
            let vertex = vertex * scale;
            mesh.positions.push([vertex.x, vertex.y]);
            mesh.colors.push(color);
        }
        mesh.indices.extend([base_idx, base_idx + 1, base_idx + 2]);
    }

    mesh
}

/// Recolor an existing mesh after the cells changed
///
/// Geometry is left alone; only `colors` is rewritten. The mesh must have been
/// generated from the same world.
pub fn update_colors<C>(mesh: &mut MeshData, world: &WorldMap, color_mapper: &C)
where
    C: CellColorMapper + ?Sized,
{
    debug_assert_eq!(mesh.colors.len(), world.cell_count() * 3);
    for (chunk, cell) in mesh.colors.chunks_exact_mut(3).zip(world.cells()) {
        let color: Color = color_mapper.map_color(cell);
        chunk.fill(color);
    }
}
