//! Plate colors

use crate::cell::Color;
use crate::tectonics::{PlateId, PlateKind};

/// Colors used to paint plates
///
/// Each kind blends between two endpoint colors. Where a plate lands on that
/// blend, and how bright it is, comes from a hash of its id, so the same plate
/// id always gets the same color and neighbouring ids rarely look alike.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatePalette {
    /// Darkest oceanic color
    pub deep_ocean: Color,
    /// Lightest oceanic color
    pub shallow_ocean: Color,
    /// Continental color at the green end
    pub lowland: Color,
    /// Continental color at the brown end
    pub highland: Color,
}

impl Default for PlatePalette {
    fn default() -> Self {
        Self {
            deep_ocean: [0.04, 0.12, 0.42, 1.0],
            shallow_ocean: [0.20, 0.45, 0.85, 1.0],
            lowland: [0.18, 0.52, 0.16, 1.0],
            highland: [0.52, 0.36, 0.16, 1.0],
        }
    }
}

impl PlatePalette {
    /// Deterministic display color for a plate
    pub fn color_for(&self, plate_id: PlateId, kind: PlateKind) -> Color {
        let hash = mix(plate_id as u64);
        let blend = unit(hash);
        let shade = 0.8 + 0.35 * unit(hash >> 24);

        let (from, to) = match kind {
            PlateKind::Oceanic => (self.deep_ocean, self.shallow_ocean),
            PlateKind::Continental => (self.lowland, self.highland),
        };

        let mut color = [0.0, 0.0, 0.0, 1.0];
        for channel in 0..3 {
            let value = from[channel] + (to[channel] - from[channel]) * blend;
            color[channel] = (value * shade).clamp(0.0, 1.0);
        }
        color[3] = from[3] + (to[3] - from[3]) * blend;
        color
    }
}

/// SplitMix64 finalizer
fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Low 24 bits as a fraction in `[0, 1]`
fn unit(bits: u64) -> f32 {
    (bits & 0xFF_FFFF) as f32 / 0xFF_FFFF as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oceanic_colors_are_blue() {
        let palette = PlatePalette::default();
        for id in 0..64 {
            let color = palette.color_for(id, PlateKind::Oceanic);
            assert!(color[2] > color[0], "plate {} not blue: {:?}", id, color);
            assert!(color[2] > color[1], "plate {} not blue: {:?}", id, color);
            assert_eq!(color[3], 1.0);
        }
    }

    #[test]
    fn test_continental_colors_are_earthy() {
        let palette = PlatePalette::default();
        for id in 0..64 {
            let color = palette.color_for(id, PlateKind::Continental);
            // green or brown: blue is always the weakest channel
            assert!(color[2] < color[0] && color[2] < color[1], "plate {}: {:?}", id, color);
        }
    }

    #[test]
    fn test_colors_are_deterministic() {
        let palette = PlatePalette::default();
        assert_eq!(
            palette.color_for(17, PlateKind::Continental),
            palette.color_for(17, PlateKind::Continental)
        );
    }

    #[test]
    fn test_neighbouring_ids_differ() {
        let palette = PlatePalette::default();
        let distinct = (0..32)
            .filter(|&id| {
                palette.color_for(id, PlateKind::Oceanic)
                    != palette.color_for(id + 1, PlateKind::Oceanic)
            })
            .count();
        assert_eq!(distinct, 32);
    }

    #[test]
    fn test_custom_palette() {
        let palette = PlatePalette {
            deep_ocean: [0.0, 0.0, 0.5, 1.0],
            shallow_ocean: [0.0, 0.0, 0.5, 1.0],
            ..Default::default()
        };
        let color = palette.color_for(5, PlateKind::Oceanic);
        assert_eq!(color[0], 0.0);
        assert_eq!(color[1], 0.0);
        assert!(color[2] >= 0.4 && color[2] <= 0.575);
    }
}
