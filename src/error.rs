//! Error types for grid construction, queries and plate generation

use thiserror::Error;

/// Errors that can occur while building the world or generating plates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A parameter was out of its valid range; nothing was mutated
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A neighbor direction resolved to a coordinate with no cell
    ///
    /// The addressing formulas are consistent for every `N >= 1`, so this
    /// indicates a defect in the grid code rather than bad input.
    #[error("inconsistent topology: neighbor ({nx}, {ny}) of cell ({x}, {y}) does not exist")]
    InconsistentTopology {
        x: i32,
        y: i32,
        nx: i32,
        ny: i32,
    },

    /// No cell exists at the requested coordinate
    #[error("cell not found at ({x}, {y})")]
    CellNotFound { x: i32, y: i32 },
}

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
