//! Hauberk - combat-resolution rules engine for old-school tabletop
//! rulesets
//!
//! The crate decides whether an attack connects, computes armor class,
//! applies weapon mastery, mitigates damage, tracks encumbrance, and
//! orders combat turns. It consumes already-evaluated die rolls and
//! returns deterministic derived results; persistence, rendering and
//! randomness belong to the surrounding application.

pub mod abilities;
pub mod armor;
pub mod attack;
pub mod combatant;
pub mod core;
pub mod damage;
pub mod dice;
pub mod encumbrance;
pub mod initiative;
