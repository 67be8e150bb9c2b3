//! Icosahedron net grids and tectonic plates
//!
//! A standalone library that unfolds a subdivided icosahedron into a packed,
//! periodic 2D array of triangles, resolves seam-aware neighbors across the
//! folds of the net, and partitions the surface into tectonic plates.
//! Rendering is left to the caller; [`mesh`] produces engine-agnostic data.
//!
//! # Quick Start
//!
//! ```rust
//! use icosa_plates::*;
//!
//! // Build a world: 180·N² triangular cells
//! let mut world = WorldMap::new(3).unwrap();
//!
//! // Partition into 7 plates, half of the surface oceanic
//! let plates = world.generate(7, 0.5, 239).unwrap();
//! println!("Generated {} plates over {} cells", plates.len(), world.cell_count());
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&world, &NetLayout::default(), &TectonicColorMapper);
//! assert_eq!(mesh.triangle_count(), world.cell_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, cells and plate summaries

// Modules
pub mod error;
pub mod config;
pub mod grid;
pub mod cell;
pub mod movement;
pub mod tectonics;
pub mod world;
pub mod mesh;

// Re-export core types for convenience
pub use error::{GridError, Result};
pub use config::{WorldConfig, WorldConfigBuilder};
pub use grid::{Boundary, Delta, GridSize, IcoGrid, Orientation};
pub use cell::{Cell, Color};
pub use movement::Heading;
pub use tectonics::{PlateGenerator, PlateId, PlateKind, PlatePalette, PlateSummary};
pub use world::WorldMap;
pub use mesh::{
    generate_mesh, update_colors, CellColorMapper, DisplayMode, MeshData, NetLayout,
    TectonicColorMapper, TerrainColorMapper,
};

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
