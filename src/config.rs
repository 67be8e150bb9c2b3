//! World Configuration and Builder
//!
//! This module provides configuration types for deterministic world and plate generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::{CELLS_PER_N2, MAX_SUBDIVISION};

/// Configuration for deterministic world generation
///
/// The same configuration always produces the identical net and plate
/// partition, so only the configuration needs to be stored or shared.
///
/// # Example
///
/// ```rust
/// use icosa_plates::*;
///
/// let config = WorldConfigBuilder::new()
///     .subdivision(3)
///     .unwrap()
///     .plate_count(7)
///     .unwrap()
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_count(), 1620);
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: WorldConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Subdivision factor `N`; each face edge carries `3N` triangles
    ///
    /// Cell count is `180·N²`, so memory and generation time grow
    /// quadratically. Values above ~80 get slow.
    pub subdivision: u32,

    /// Number of tectonic plates to partition the net into
    pub plate_count: usize,

    /// Target share of cells on oceanic plates, in `[0, 1]`
    pub submergence: f32,

    /// Random seed for plate generation
    pub seed: u64,
}

impl WorldConfig {
    /// Number of cells this configuration produces
    #[inline]
    pub fn cell_count(&self) -> usize {
        CELLS_PER_N2 * (self.subdivision as usize).pow(2)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            subdivision: WorldConfigBuilder::DEFAULT_SUBDIVISION,
            plate_count: WorldConfigBuilder::DEFAULT_PLATE_COUNT,
            submergence: WorldConfigBuilder::DEFAULT_SUBMERGENCE,
            seed: 0,
        }
    }
}

/// Builder for creating WorldConfig with validation
///
/// # Example
///
/// ```rust
/// use icosa_plates::*;
///
/// // Use defaults
/// let config = WorldConfigBuilder::new().build().unwrap();
/// assert_eq!(config.subdivision, 3);
///
/// // Customize
/// let config = WorldConfigBuilder::new()
///     .subdivision(20)
///     .unwrap()
///     .plate_count(200)
///     .unwrap()
///     .submergence(0.65)
///     .unwrap()
///     .seed(239)
///     .build()
///     .unwrap();
/// assert_eq!(config.plate_count, 200);
/// ```
#[derive(Debug, Clone)]
pub struct WorldConfigBuilder {
    subdivision: u32,
    plate_count: usize,
    submergence: f32,
    seed: Option<u64>,
}

impl WorldConfigBuilder {
    pub const DEFAULT_SUBDIVISION: u32 = 3;
    pub const DEFAULT_PLATE_COUNT: usize = 7;
    pub const DEFAULT_SUBMERGENCE: f32 = 0.5;

    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - subdivision: 3 (1,620 cells)
    /// - plate_count: 7
    /// - submergence: 0.5
    /// - seed: Random (generated from thread_rng)
    pub fn new() -> Self {
        Self {
            subdivision: Self::DEFAULT_SUBDIVISION,
            plate_count: Self::DEFAULT_PLATE_COUNT,
            submergence: Self::DEFAULT_SUBMERGENCE,
            seed: None,
        }
    }

    /// Set the subdivision factor `N`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` is zero or above `MAX_SUBDIVISION`
    pub fn subdivision(mut self, n: u32) -> Result<Self> {
        if n == 0 || n > MAX_SUBDIVISION {
            return Err(GridError::InvalidParameter(format!(
                "subdivision factor must be in 1..={} (got {})",
                MAX_SUBDIVISION, n
            )));
        }
        self.subdivision = n;
        Ok(self)
    }

    /// Set the number of tectonic plates
    ///
    /// The upper bound (one plate per cell) is checked by [`build`](Self::build),
    /// since it depends on the subdivision factor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is zero
    pub fn plate_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(GridError::InvalidParameter(
                "plate count must be >= 1 (got 0)".into(),
            ));
        }
        self.plate_count = count;
        Ok(self)
    }

    /// Set the target share of oceanic cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fraction` is not within `[0, 1]`
    pub fn submergence(mut self, fraction: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(GridError::InvalidParameter(format!(
                "submergence must be within [0, 1] (got {})",
                fraction
            )));
        }
        self.submergence = fraction;
        Ok(self)
    }

    /// Set the random seed for plate generation
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if there are more plates than cells
    pub fn build(self) -> Result<WorldConfig> {
        let config = WorldConfig {
            subdivision: self.subdivision,
            plate_count: self.plate_count,
            submergence: self.submergence,
            seed: self.seed.unwrap_or_else(rand::random),
        };

        if config.plate_count > config.cell_count() {
            return Err(GridError::InvalidParameter(format!(
                "plate count must be <= cell count {} (got {})",
                config.cell_count(),
                config.plate_count
            )));
        }

        Ok(config)
    }
}

impl Default for WorldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = WorldConfigBuilder::new().build().unwrap();
        assert_eq!(config.subdivision, 3);
        assert_eq!(config.plate_count, 7);
        assert_eq!(config.submergence, 0.5);
        // seed is random, so just verify it was set
        let _seed = config.seed;
    }

    #[test]
    fn test_builder_custom() {
        let config = WorldConfigBuilder::new()
            .subdivision(5)
            .unwrap()
            .plate_count(40)
            .unwrap()
            .submergence(0.3)
            .unwrap()
            .seed(99)
            .build()
            .unwrap();

        assert_eq!(config.subdivision, 5);
        assert_eq!(config.plate_count, 40);
        assert_eq!(config.submergence, 0.3);
        assert_eq!(config.seed, 99);
        assert_eq!(config.cell_count(), 4500);
    }

    #[test]
    fn test_default_config_matches_builder() {
        let config = WorldConfig::default();
        let built = WorldConfigBuilder::new().seed(0).build().unwrap();
        assert_eq!(config, built);
    }

    #[test]
    fn test_builder_invalid_subdivision() {
        assert!(WorldConfigBuilder::new().subdivision(0).is_err());
        assert!(WorldConfigBuilder::new().subdivision(MAX_SUBDIVISION + 1).is_err());
    }

    #[test]
    fn test_builder_invalid_plate_count() {
        assert!(WorldConfigBuilder::new().plate_count(0).is_err());

        // N = 1 has 180 cells
        let result = WorldConfigBuilder::new()
            .subdivision(1)
            .unwrap()
            .plate_count(181)
            .unwrap()
            .build();
        assert!(matches!(result, Err(GridError::InvalidParameter(_))));

        let result = WorldConfigBuilder::new()
            .subdivision(1)
            .unwrap()
            .plate_count(180)
            .unwrap()
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_invalid_submergence() {
        assert!(WorldConfigBuilder::new().submergence(-0.01).is_err());
        assert!(WorldConfigBuilder::new().submergence(1.01).is_err());
        assert!(WorldConfigBuilder::new().submergence(f32::NAN).is_err());
        assert!(WorldConfigBuilder::new().submergence(0.0).is_ok());
        assert!(WorldConfigBuilder::new().submergence(1.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = WorldConfigBuilder::new()
            .subdivision(4)
            .unwrap()
            .seed(12345)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: WorldConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
