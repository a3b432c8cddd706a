//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Intelligence,
    Wisdom,
    Dexterity,
    Constitution,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Charisma,
    ];
}

/// Player characters follow class rules (retainers, unskilled weapon
/// penalties); monsters do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatantKind {
    Character,
    Monster,
}

/// Weapon taxonomy used for mastery matching and per-round counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    /// Ordinary wielded weapons
    Handheld,
    /// Monster natural weapons (claws, bite)
    Natural,
    /// Siege engines
    Siege,
    /// Matches any category
    Universal,
}

impl WeaponCategory {
    /// Does an attack of category `attacking` satisfy this category filter?
    pub fn matches(&self, attacking: WeaponCategory) -> bool {
        *self == WeaponCategory::Universal || *self == attacking
    }
}

/// The kind of attack being made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackCategory {
    Melee,
    Missile,
    Special,
}

/// Damage taxonomy for mitigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Physical,
    Slashing,
    Piercing,
    Bludgeoning,
    Breath,
    Magic,
}

impl DamageType {
    /// Physical-family damage is subject to armor-based mitigation
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            DamageType::Physical
                | DamageType::Slashing
                | DamageType::Piercing
                | DamageType::Bludgeoning
        )
    }
}

/// Equipment classification for encumbrance bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Ammunition,
    Armor,
    Treasure,
    LightSource,
    Container,
    Misc,
}

/// Weight class of worn armor, used by the basic encumbrance strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorWeight {
    Unarmored,
    Light,
    Heavy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_matches_everything() {
        assert!(WeaponCategory::Universal.matches(WeaponCategory::Handheld));
        assert!(WeaponCategory::Universal.matches(WeaponCategory::Natural));
        assert!(WeaponCategory::Universal.matches(WeaponCategory::Siege));
    }

    #[test]
    fn test_category_matches_itself_only() {
        assert!(WeaponCategory::Handheld.matches(WeaponCategory::Handheld));
        assert!(!WeaponCategory::Handheld.matches(WeaponCategory::Natural));
    }

    #[test]
    fn test_physical_family() {
        assert!(DamageType::Slashing.is_physical());
        assert!(DamageType::Piercing.is_physical());
        assert!(!DamageType::Breath.is_physical());
        assert!(!DamageType::Magic.is_physical());
    }
}
