//! modifier_core - Modifier tables for Monster Hunter Rise damage calculation
//!
//! This library provides:
//! - Sharpness: weapon sharpness levels and their damage multipliers
//! - Attack Boost / Critical Eye: per-tier stat tables
//! - Critical Boost / Weakness Exploit: tier-to-bonus conversions
//!
//! Every operation is a pure lookup or constant-time formula; there is no
//! state, no I/O, and no randomness. The assembler that combines these
//! modifiers into a full damage number lives outside this crate.

pub mod prelude;
pub mod sharpness;
pub mod skill;

// Re-export core types for convenience
pub use sharpness::Sharpness;
pub use skill::{
    apply_attack_boost, apply_critical_eye, CritBoostLevel, SkillLevelError, WeaknessExploitLevel,
};
