//! Tectonic plate generation
//!
//! Partitions every cell of a [`WorldMap`] into `k` contiguous plates:
//!
//! 1. Pick `k` distinct seed cells uniformly at random
//! 2. Grow all plates at once, breadth-first, drawing the plate to expand
//!    uniformly among those that can still grow
//! 3. Mark the smallest plates oceanic until the submerged share of cells
//!    reaches the requested fraction; the rest are continental
//! 4. Paint each plate with a color derived from its id and kind

mod palette;

pub use palette::PlatePalette;

use std::collections::VecDeque;

use log::{debug, info};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Color;
use crate::error::{GridError, Result};
use crate::world::WorldMap;

/// Identifier of a plate, `0..plate_count`
pub type PlateId = usize;

/// Plate classification
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateKind {
    /// Submerged plate
    Oceanic,
    /// Emerged plate
    Continental,
}

/// Statistics for one generated plate
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlateSummary {
    pub id: PlateId,
    pub kind: PlateKind,
    /// Number of member cells
    pub cell_count: usize,
    /// Display color written to every member's `tectonic_color`
    pub color: Color,
    /// Coordinate of the cell the plate grew from
    pub seed_cell: (i32, i32),
}

/// Randomized plate partitioner
///
/// # Example
///
/// ```
/// use icosa_plates::*;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut world = WorldMap::new(2).unwrap();
/// let generator = PlateGenerator::new(6, 0.5).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let plates = generator.generate(&mut world, &mut rng).unwrap();
/// assert_eq!(plates.len(), 6);
/// assert!(world.cells().iter().all(|cell| cell.plate_id.is_some()));
/// ```
#[derive(Debug, Clone)]
pub struct PlateGenerator {
    plate_count: usize,
    submergence: f32,
    palette: PlatePalette,
}

impl PlateGenerator {
    /// Create a generator for `plate_count` plates with `submergence` of the
    /// cells oceanic
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `plate_count` is zero or `submergence`
    /// is not within `[0, 1]`. The upper bound on `plate_count` depends on the
    /// world and is checked by [`generate`](Self::generate).
    pub fn new(plate_count: usize, submergence: f32) -> Result<Self> {
        validate_plate_count(plate_count, None)?;
        validate_submergence(submergence)?;
        Ok(Self {
            plate_count,
            submergence,
            palette: PlatePalette::default(),
        })
    }

    /// Replace the default plate palette
    pub fn with_palette(mut self, palette: PlatePalette) -> Self {
        self.palette = palette;
        self
    }

    #[inline]
    pub fn plate_count(&self) -> usize {
        self.plate_count
    }

    #[inline]
    pub fn submergence(&self) -> f32 {
        self.submergence
    }

    /// Partition `world` into plates, seeding the randomness from `seed`
    pub fn generate_seeded(&self, world: &mut WorldMap, seed: u64) -> Result<Vec<PlateSummary>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(world, &mut rng)
    }

    /// Partition `world` into plates using `rng`
    ///
    /// Rewrites `plate_id`, `plate_kind` and `tectonic_color` of every cell.
    /// The result is fully determined by the world size, the generator
    /// settings and the state of `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the world has fewer cells than plates,
    /// in which case no cell is touched.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        world: &mut WorldMap,
        rng: &mut R,
    ) -> Result<Vec<PlateSummary>> {
        let cell_count = world.cell_count();
        validate_plate_count(self.plate_count, Some(cell_count))?;

        let seeds: Vec<usize> = index::sample(rng, cell_count, self.plate_count).into_vec();
        let owners = grow_plates(world, &seeds, rng)?;

        let mut sizes = vec![0usize; self.plate_count];
        for &plate in &owners {
            sizes[plate] += 1;
        }
        let kinds = classify_plates(&sizes, self.submergence);
        let colors: Vec<Color> = kinds
            .iter()
            .enumerate()
            .map(|(plate, &kind)| self.palette.color_for(plate, kind))
            .collect();

        for (cell, &plate) in world.cells_mut().iter_mut().zip(&owners) {
            cell.assign_plate(plate, kinds[plate], colors[plate]);
        }

        let summaries: Vec<PlateSummary> = (0..self.plate_count)
            .map(|plate| PlateSummary {
                id: plate,
                kind: kinds[plate],
                cell_count: sizes[plate],
                color: colors[plate],
                seed_cell: world.cells()[seeds[plate]].position(),
            })
            .collect();

        let submerged: usize = summaries
            .iter()
            .filter(|plate| plate.kind == PlateKind::Oceanic)
            .map(|plate| plate.cell_count)
            .sum();
        info!(
            "Generated {} plates over {} cells: {:.1}% oceanic (target {:.1}%)",
            self.plate_count,
            cell_count,
            100.0 * submerged as f32 / cell_count as f32,
            100.0 * self.submergence
        );

        Ok(summaries)
    }
}

fn validate_plate_count(plate_count: usize, cell_count: Option<usize>) -> Result<()> {
    if plate_count == 0 {
        return Err(GridError::InvalidParameter(
            "plate count must be >= 1 (got 0)".into(),
        ));
    }
    if let Some(cell_count) = cell_count {
        if plate_count > cell_count {
            return Err(GridError::InvalidParameter(format!(
                "plate count must be <= cell count {} (got {})",
                cell_count, plate_count
            )));
        }
    }
    Ok(())
}

fn validate_submergence(submergence: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&submergence) {
        return Err(GridError::InvalidParameter(format!(
            "submergence must be within [0, 1] (got {})",
            submergence
        )));
    }
    Ok(())
}

/// Multi-source breadth-first growth; returns the owning plate of every cell
///
/// Each plate keeps its own FIFO frontier. Every step draws one plate
/// uniformly from those whose frontier is non-empty, pops its oldest cell and
/// claims all unclaimed neighbors of it. A plate only ever pushes onto its own
/// frontier, so once drained it is retired for good.
fn grow_plates<R: Rng + ?Sized>(
    world: &WorldMap,
    seeds: &[usize],
    rng: &mut R,
) -> Result<Vec<PlateId>> {
    let cells = world.cells();
    let mut owners: Vec<Option<PlateId>> = vec![None; cells.len()];
    let mut frontiers: Vec<VecDeque<usize>> = Vec::with_capacity(seeds.len());
    for (plate, &seed) in seeds.iter().enumerate() {
        owners[seed] = Some(plate);
        frontiers.push(VecDeque::from([seed]));
    }

    let mut active: Vec<PlateId> = (0..seeds.len()).collect();
    let mut steps = 0usize;
    while !active.is_empty() {
        let slot = rng.gen_range(0..active.len());
        let plate = active[slot];

        if let Some(current) = frontiers[plate].pop_front() {
            let (x, y) = cells[current].position();
            for neighbor in world.near_cell_indices(x, y)? {
                if owners[neighbor].is_none() {
                    owners[neighbor] = Some(plate);
                    frontiers[plate].push_back(neighbor);
                }
            }
            steps += 1;
        }

        if frontiers[plate].is_empty() {
            active.swap_remove(slot);
        }
    }
    debug!("Plate growth finished after {} expansions", steps);

    owners
        .into_iter()
        .enumerate()
        .map(|(index, owner)| {
            owner.ok_or_else(|| {
                // The net is connected, so every cell is reachable from any seed
                let (x, y) = cells[index].position();
                GridError::InconsistentTopology { x, y, nx: x, ny: y }
            })
        })
        .collect()
}

/// Decide which plates are oceanic
///
/// Plates are taken smallest first (ties by id) and submerged while the
/// running total stays at or below `submergence · total`. The first plate
/// that would overshoot is submerged only if that leaves the total strictly
/// closer to the target; the walk stops there. A lone plate is always
/// continental: it cannot be split to honour a partial target.
pub fn classify_plates(sizes: &[usize], submergence: f32) -> Vec<PlateKind> {
    let mut kinds = vec![PlateKind::Continental; sizes.len()];
    if sizes.len() <= 1 {
        return kinds;
    }

    let total: usize = sizes.iter().sum();
    let target = submergence as f64 * total as f64;

    let mut order: Vec<PlateId> = (0..sizes.len()).collect();
    order.sort_by_key(|&plate| (sizes[plate], plate));

    let mut submerged = 0usize;
    for plate in order {
        let without = submerged as f64;
        let with = (submerged + sizes[plate]) as f64;
        if with <= target {
            kinds[plate] = PlateKind::Oceanic;
            submerged += sizes[plate];
            continue;
        }
        if with - target < target - without {
            kinds[plate] = PlateKind::Oceanic;
        }
        break;
    }

    kinds
}
