//! WorldMap main structure

use log::debug;

use crate::cell::Cell;
use crate::config::WorldConfig;
use crate::error::{GridError, Result};
use crate::grid::{Boundary, Delta, GridSize, IcoGrid, Orientation, DIRECTION_COUNT};
use crate::movement::Heading;
use crate::tectonics::{PlateGenerator, PlateSummary};

/// A subdivided icosahedron unfolded into a packed 2D array
///
/// Owns every cell of the net in an arena. Cells are stored in creation order
/// (columns left to right, and by increasing row within a column), and that order
/// never changes, so renderers can keep parallel vertex buffers indexed the
/// same way.
///
/// # Examples
///
/// ```
/// use icosa_plates::*;
///
/// let mut world = WorldMap::new(3).unwrap();
/// assert_eq!(world.cell_count(), 180 * 3 * 3);
///
/// // Neighbors of the first cell wrap around the north pole
/// assert_eq!(world.get_directions(0, 0).unwrap(), [(-18, 0), (18, 0), (0, 1)]);
///
/// world.generate(7, 0.5, 239).unwrap();
/// assert!(world.cells().iter().all(|cell| cell.plate_id.is_some()));
/// ```
#[derive(Debug, Clone)]
pub struct WorldMap {
    /// Addressing rules for this subdivision factor
    grid: IcoGrid,

    /// All present cells, indexed by `IcoGrid::index_of`
    cells: Vec<Cell>,
}

impl WorldMap {
    /// Build the world for subdivision factor `n`
    ///
    /// Every coordinate of the packed rectangle is tested with
    /// [`exists_at`](Self::exists_at) and a cell is created where it holds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` is zero or too large.
    pub fn new(n: u32) -> Result<Self> {
        let grid = IcoGrid::new(n)?;
        let GridSize { x: width, y: height } = grid.size();

        let cells: Vec<Cell> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .filter(|&(x, y)| grid.exists_at(x, y))
            .map(|(x, y)| Cell::new(x, y))
            .collect();
        debug_assert_eq!(cells.len(), grid.cell_count());

        debug!(
            "Built icosahedron net N={} ({}x{} packed, {} cells)",
            n,
            width,
            height,
            cells.len()
        );

        Ok(Self { grid, cells })
    }

    /// Build the world described by `config`, without generating plates
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        Self::new(config.subdivision)
    }

    /// Build the world described by `config` and generate its plates
    pub fn generate_from_config(config: &WorldConfig) -> Result<(Self, Vec<PlateSummary>)> {
        let mut world = Self::from_config(config)?;
        let plates = PlateGenerator::new(config.plate_count, config.submergence)?
            .generate_seeded(&mut world, config.seed)?;
        Ok((world, plates))
    }

    /// Subdivision factor `N`
    #[inline]
    pub fn n(&self) -> u32 {
        self.grid.n()
    }

    /// Dimensions of the packed rectangle, `(30N, 9N)`
    #[inline]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Addressing rules backing this world
    #[inline]
    pub fn grid(&self) -> &IcoGrid {
        &self.grid
    }

    /// All cells, in creation order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of cells, always `180·N²`
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn exists_at(&self, x: i32, y: i32) -> bool {
        self.grid.exists_at(x, y)
    }

    /// Position of the cell at `(x, y)` in [`cells`](Self::cells)
    #[inline]
    pub fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        self.grid.index_of(x, y)
    }

    /// Cell at `(x, y)`, or `None` where the net has no cell
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell_index(x, y).map(|index| &self.cells[index])
    }

    /// Neighbor offsets `[left, right, vertical]` of the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` if no cell exists at `(x, y)`.
    pub fn get_directions(&self, x: i32, y: i32) -> Result<[Delta; DIRECTION_COUNT]> {
        self.grid.directions(x, y)
    }

    /// Seam classification of the cell at `(x, y)`
    pub fn boundary(&self, x: i32, y: i32) -> Result<Boundary> {
        self.grid.boundary(x, y)
    }

    /// Arena indices of the three edge neighbors of `(x, y)`
    pub fn near_cell_indices(&self, x: i32, y: i32) -> Result<[usize; DIRECTION_COUNT]> {
        let coords = self.grid.neighbor_coords(x, y)?;
        let mut indices = [0; DIRECTION_COUNT];
        for (slot, (nx, ny)) in coords.into_iter().enumerate() {
            indices[slot] = self
                .cell_index(nx, ny)
                .ok_or(GridError::InconsistentTopology { x, y, nx, ny })?;
        }
        Ok(indices)
    }

    /// The three cells sharing an edge with `(x, y)`, in direction order
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` if no cell exists at `(x, y)`.
    pub fn near_cells(&self, x: i32, y: i32) -> Result<[&Cell; DIRECTION_COUNT]> {
        let [left, right, vertical] = self.near_cell_indices(x, y)?;
        Ok([&self.cells[left], &self.cells[right], &self.cells[vertical]])
    }

    /// Destination of one step from `(x, y)` towards `heading`
    ///
    /// The column is folded into the net's wrap period. Headings that have no
    /// edge neighbor for this triangle's orientation leave the position as is.
    pub fn step(&self, x: i32, y: i32, heading: Heading) -> Result<(i32, i32)> {
        let directions = self.get_directions(x, y)?;
        let Some(slot) = heading.slot(Orientation::of(x, y)) else {
            return Ok((x, y));
        };
        let (dx, dy) = directions[slot];
        Ok((self.grid.fold_x(x + dx), y + dy))
    }

    /// Partition the world into tectonic plates
    ///
    /// Shorthand for [`PlateGenerator::generate_seeded`]; the same arguments
    /// always produce the same partition and colors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `plate_count` is outside
    /// `1..=cell_count` or `submergence` outside `[0, 1]`. Cells are left
    /// untouched on error.
    pub fn generate(
        &mut self,
        plate_count: usize,
        submergence: f32,
        seed: u64,
    ) -> Result<Vec<PlateSummary>> {
        PlateGenerator::new(plate_count, submergence)?.generate_seeded(self, seed)
    }

    /// Number of distinct plates currently assigned, zero before generation
    pub fn plate_count(&self) -> usize {
        self.cells
            .iter()
            .filter_map(|cell| cell.plate_id)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Share of cells on oceanic plates
    pub fn oceanic_fraction(&self) -> f32 {
        let submerged = self.cells.iter().filter(|cell| cell.is_oceanic()).count();
        submerged as f32 / self.cells.len() as f32
    }
}
