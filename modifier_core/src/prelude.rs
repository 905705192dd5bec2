//! Prelude module for convenient imports
//!
//! ```rust
//! use modifier_core::prelude::*;
//! ```

pub use crate::sharpness::Sharpness;
pub use crate::skill::{
    apply_attack_boost, apply_critical_eye, CritBoostLevel, SkillLevelError, WeaknessExploitLevel,
};
