//! Skill tier tables and conversions
//!
//! Each armor skill grants a fixed, table-defined bonus per invested tier.
//! Attack Boost and Critical Eye run to tier 7 and are returned as full
//! per-tier tables; Critical Boost and Weakness Exploit run to tier 3 and
//! are modeled as closed enums so an out-of-range tier cannot be
//! constructed without going through the fallible conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A skill level outside the closed range its table defines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{skill} level {level} is out of range (max {max})")]
pub struct SkillLevelError {
    pub skill: &'static str,
    pub level: u8,
    pub max: u8,
}

/// Attack as modified by each tier (0-7) of Attack Boost
///
/// Tiers 1-3 add a flat +3/+6/+9; tiers 4-7 switch to a multiply-then-add
/// progression. Index 0 is the unmodified input.
///
/// | 1  | 2  | 3  | 4      | 5      | 6      | 7       |
/// |----|----|----|--------|--------|--------|---------|
/// | +3 | +6 | +9 | 1.05+7 | 1.06+8 | 1.08+9 | 1.10+10 |
pub fn apply_attack_boost(attack: f64) -> [f64; 8] {
    [
        attack,
        attack + 3.0,
        attack + 6.0,
        attack + 9.0,
        attack * 1.05 + 7.0,
        attack * 1.06 + 8.0,
        attack * 1.08 + 9.0,
        attack * 1.10 + 10.0,
    ]
}

/// Affinity as modified by each tier (0-7) of Critical Eye
///
/// All tiers are flat percentage-point additions; unlike Attack Boost
/// there is no formula break past tier 4. Index 0 is the unmodified input.
///
/// | 1   | 2    | 3    | 4    | 5    | 6    | 7    |
/// |-----|------|------|------|------|------|------|
/// | +5% | +10% | +15% | +20% | +25% | +30% | +40% |
pub fn apply_critical_eye(affinity: f64) -> [f64; 8] {
    [
        affinity,
        affinity + 5.0,
        affinity + 10.0,
        affinity + 15.0,
        affinity + 20.0,
        affinity + 25.0,
        affinity + 30.0,
        affinity + 40.0,
    ]
}

/// Critical Boost skill tier (0 = skill not equipped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritBoostLevel {
    None,
    Level1,
    Level2,
    Level3,
}

impl CritBoostLevel {
    /// Get all tiers in ascending order
    pub fn all() -> &'static [CritBoostLevel] {
        &[
            CritBoostLevel::None,
            CritBoostLevel::Level1,
            CritBoostLevel::Level2,
            CritBoostLevel::Level3,
        ]
    }

    /// Raw tier number (0-3)
    pub fn level(self) -> u8 {
        match self {
            CritBoostLevel::None => 0,
            CritBoostLevel::Level1 => 1,
            CritBoostLevel::Level2 => 2,
            CritBoostLevel::Level3 => 3,
        }
    }

    /// Bonus over the 1.0 base of the critical damage multiplier
    ///
    /// The game's critical multiplier at this tier is `1.0 + bonus`
    /// (1.25x with no skill, up to 1.40x at tier 3).
    pub fn multiplier_bonus(self) -> f64 {
        match self {
            CritBoostLevel::None => 0.25,
            CritBoostLevel::Level1 => 0.30,
            CritBoostLevel::Level2 => 0.35,
            CritBoostLevel::Level3 => 0.40,
        }
    }
}

impl TryFrom<u8> for CritBoostLevel {
    type Error = SkillLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(CritBoostLevel::None),
            1 => Ok(CritBoostLevel::Level1),
            2 => Ok(CritBoostLevel::Level2),
            3 => Ok(CritBoostLevel::Level3),
            _ => Err(SkillLevelError {
                skill: "critical_boost",
                level,
                max: 3,
            }),
        }
    }
}

/// Weakness Exploit skill tier (0 = skill not equipped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessExploitLevel {
    None,
    Level1,
    Level2,
    Level3,
}

impl WeaknessExploitLevel {
    /// Get all tiers in ascending order
    pub fn all() -> &'static [WeaknessExploitLevel] {
        &[
            WeaknessExploitLevel::None,
            WeaknessExploitLevel::Level1,
            WeaknessExploitLevel::Level2,
            WeaknessExploitLevel::Level3,
        ]
    }

    /// Raw tier number (0-3)
    pub fn level(self) -> u8 {
        match self {
            WeaknessExploitLevel::None => 0,
            WeaknessExploitLevel::Level1 => 1,
            WeaknessExploitLevel::Level2 => 2,
            WeaknessExploitLevel::Level3 => 3,
        }
    }

    /// Affinity bonus granted when striking a weak point, as a fraction
    ///
    /// | 1    | 2    | 3    |
    /// |------|------|------|
    /// | +15% | +30% | +50% |
    pub fn affinity_bonus(self) -> f64 {
        match self {
            WeaknessExploitLevel::None => 0.0,
            WeaknessExploitLevel::Level1 => 0.15,
            WeaknessExploitLevel::Level2 => 0.30,
            WeaknessExploitLevel::Level3 => 0.50,
        }
    }
}

impl TryFrom<u8> for WeaknessExploitLevel {
    type Error = SkillLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(WeaknessExploitLevel::None),
            1 => Ok(WeaknessExploitLevel::Level1),
            2 => Ok(WeaknessExploitLevel::Level2),
            3 => Ok(WeaknessExploitLevel::Level3),
            _ => Err(SkillLevelError {
                skill: "weakness_exploit",
                level,
                max: 3,
            }),
        }
    }
}
