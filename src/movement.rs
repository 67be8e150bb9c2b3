//! Eight-way movement over the net
//!
//! A triangle only has three edge neighbors, so eight compass headings are
//! folded onto them depending on which way the triangle points. The layout
//! matches a `Q W E / A D / Z X C` key block: on an upward triangle every
//! northern heading leads through the top edge, and on a downward triangle
//! every southern heading leads through the bottom edge.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{Orientation, SLOT_LEFT, SLOT_RIGHT, SLOT_VERTICAL};

/// Compass heading for a single step
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Heading {
    /// All headings, in key-block reading order
    pub const ALL: [Heading; 8] = [
        Heading::NorthWest,
        Heading::North,
        Heading::NorthEast,
        Heading::West,
        Heading::East,
        Heading::SouthWest,
        Heading::South,
        Heading::SouthEast,
    ];

    /// Direction slot taken by this heading, or `None` if the triangle has
    /// no edge that way
    pub fn slot(self, orientation: Orientation) -> Option<usize> {
        match (orientation, self) {
            (Orientation::Up, Heading::NorthWest | Heading::North | Heading::NorthEast) => {
                Some(SLOT_VERTICAL)
            }
            (Orientation::Up, Heading::West | Heading::SouthWest) => Some(SLOT_LEFT),
            (Orientation::Up, Heading::East | Heading::SouthEast) => Some(SLOT_RIGHT),
            (Orientation::Up, Heading::South) => None,

            (Orientation::Down, Heading::SouthWest | Heading::South | Heading::SouthEast) => {
                Some(SLOT_VERTICAL)
            }
            (Orientation::Down, Heading::West | Heading::NorthWest) => Some(SLOT_LEFT),
            (Orientation::Down, Heading::East | Heading::NorthEast) => Some(SLOT_RIGHT),
            (Orientation::Down, Heading::North) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward_slots() {
        assert_eq!(Heading::North.slot(Orientation::Up), Some(SLOT_VERTICAL));
        assert_eq!(Heading::NorthEast.slot(Orientation::Up), Some(SLOT_VERTICAL));
        assert_eq!(Heading::SouthWest.slot(Orientation::Up), Some(SLOT_LEFT));
        assert_eq!(Heading::SouthEast.slot(Orientation::Up), Some(SLOT_RIGHT));
        assert_eq!(Heading::South.slot(Orientation::Up), None);
    }

    #[test]
    fn test_downward_slots() {
        assert_eq!(Heading::South.slot(Orientation::Down), Some(SLOT_VERTICAL));
        assert_eq!(Heading::SouthWest.slot(Orientation::Down), Some(SLOT_VERTICAL));
        assert_eq!(Heading::NorthWest.slot(Orientation::Down), Some(SLOT_LEFT));
        assert_eq!(Heading::NorthEast.slot(Orientation::Down), Some(SLOT_RIGHT));
        assert_eq!(Heading::North.slot(Orientation::Down), None);
    }

    #[test]
    fn test_every_slot_reachable() {
        for orientation in [Orientation::Up, Orientation::Down] {
            for slot in [SLOT_LEFT, SLOT_RIGHT, SLOT_VERTICAL] {
                assert!(Heading::ALL
                    .iter()
                    .any(|heading| heading.slot(orientation) == Some(slot)));
            }
            let blocked = Heading::ALL
                .iter()
                .filter(|heading| heading.slot(orientation).is_none())
                .count();
            assert_eq!(blocked, 1);
        }
    }
}
