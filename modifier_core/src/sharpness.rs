//! Sharpness levels and their damage multipliers
//!
//! Sharpness degrades in tiers from Purple down to Red; each tier scales
//! raw and elemental damage by a fixed multiplier:
//!
//! |         | Red  | Orange | Yellow | Green | Blue   | White | Purple |
//! |---------|------|--------|--------|-------|--------|-------|--------|
//! | Attack  | 0.50 | 0.75   | 1.00   | 1.05  | 1.20   | 1.32  | 1.39   |
//! | Element | 0.25 | 0.50   | 0.75   | 1.00  | 1.0625 | 1.15  | 1.25   |

use serde::{Deserialize, Serialize};

/// Weapon sharpness level, ordered from lowest to highest effectiveness
///
/// `None` represents a weapon with no sharpness gauge and maps to the same
/// neutral multipliers as `Yellow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sharpness {
    None,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    White,
    Purple,
}

impl Sharpness {
    /// Get all sharpness levels, lowest to highest
    pub fn all() -> &'static [Sharpness] {
        &[
            Sharpness::None,
            Sharpness::Red,
            Sharpness::Orange,
            Sharpness::Yellow,
            Sharpness::Green,
            Sharpness::Blue,
            Sharpness::White,
            Sharpness::Purple,
        ]
    }

    /// Raw attack multiplier for this sharpness level
    pub fn attack_modifier(self) -> f64 {
        match self {
            Sharpness::Red => 0.50,
            Sharpness::Orange => 0.75,
            Sharpness::Yellow | Sharpness::None => 1.00,
            Sharpness::Green => 1.05,
            Sharpness::Blue => 1.20,
            Sharpness::White => 1.32,
            Sharpness::Purple => 1.39,
        }
    }

    /// Elemental damage multiplier for this sharpness level
    pub fn elemental_modifier(self) -> f64 {
        match self {
            Sharpness::Red => 0.25,
            Sharpness::Orange => 0.50,
            Sharpness::Yellow | Sharpness::None => 0.75,
            Sharpness::Green => 1.00,
            Sharpness::Blue => 1.0625,
            Sharpness::White => 1.15,
            Sharpness::Purple => 1.25,
        }
    }
}
