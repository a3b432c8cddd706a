//! Weapon mastery ranks
//!
//! A mastery grants an attack bonus that depends on whether the target's
//! weapon category matches the mastery's primary category, and a defense
//! AC bonus usable against a capped number of attacks per round.

use crate::core::types::WeaponCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasteryLevel {
    /// Rank name, e.g. "Skilled" or "Grand Master"
    pub rank: String,

    /// Target weapon category granting the primary bonus
    pub primary_category: WeaponCategory,
    pub primary_bonus: i32,
    pub secondary_bonus: i32,

    /// Damage formula overrides, carried as dice expressions
    pub damage_primary: Option<String>,
    pub damage_secondary: Option<String>,

    /// Defense: AC improvement against attacks of this category
    pub defense_category: WeaponCategory,
    pub defense_bonus: i32,
    /// Attacks per round the defense bonus applies against
    pub defense_uses: u32,
}

impl MasteryLevel {
    /// Entry rank: small bonus, no defense
    pub fn skilled(primary: WeaponCategory) -> Self {
        Self {
            rank: "Skilled".to_string(),
            primary_category: primary,
            primary_bonus: 1,
            secondary_bonus: 0,
            damage_primary: None,
            damage_secondary: None,
            defense_category: WeaponCategory::Handheld,
            defense_bonus: 0,
            defense_uses: 0,
        }
    }

    /// Expert rank: defense bonus against two attacks per round
    pub fn expert(primary: WeaponCategory) -> Self {
        Self {
            rank: "Expert".to_string(),
            primary_category: primary,
            primary_bonus: 3,
            secondary_bonus: 1,
            damage_primary: Some("1d8 + 2".to_string()),
            damage_secondary: Some("1d8 + 1".to_string()),
            defense_category: WeaponCategory::Handheld,
            defense_bonus: 2,
            defense_uses: 2,
        }
    }
}

/// A defense bonus carried on the AC record, derived from an equipped
/// weapon's mastery during the preparation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryDefenseBonus {
    /// Weapon it came from, for display
    pub label: String,
    /// Attacking-weapon category it applies against
    pub against: WeaponCategory,
    /// AC improvement (subtracted from the descending total)
    pub bonus: i32,
    /// Per-round cap on attacks it applies against
    pub max_uses: u32,
}
