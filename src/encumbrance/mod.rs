//! Carried weight, encumbrance tiers, and movement rates
//!
//! Strategy selected once at configuration time. Tiers come either from
//! the capacity/weight ratio (classic, expert) or from the worn armor's
//! weight class (basic); the disabled mode never slows anyone down.

use crate::combatant::{Combatant, EquipmentItem};
use crate::core::config::EncumbranceOption;
use crate::core::constants::BASELINE_GEAR_WEIGHT;
use crate::core::types::{ArmorWeight, ItemKind};
use serde::{Deserialize, Serialize};

/// Discrete encumbrance bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Unencumbered,
    Light,
    Heavy,
    Severe,
    Immobile,
}

impl Tier {
    /// Movement-rate scale factor for this bracket
    pub fn factor(&self) -> f32 {
        match self {
            Tier::Unencumbered => 1.0,
            Tier::Light => 0.75,
            Tier::Heavy => 0.5,
            Tier::Severe => 0.25,
            Tier::Immobile => 0.0,
        }
    }
}

/// Capacity-to-weight ratio thresholds, descending; first match wins,
/// fallback to Immobile
const RATIO_TIERS: [(f32, Tier); 4] = [
    (4.0, Tier::Unencumbered),
    (2.66, Tier::Light),
    (2.0, Tier::Heavy),
    (1.0, Tier::Severe),
];

/// Movement rates per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Exploration rate
    pub primary: i32,
    /// Encounter rate
    pub secondary: i32,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            primary: 120,
            secondary: 40,
        }
    }
}

/// Stored encumbrance state on a combatant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncumbranceRecord {
    /// Total carried weight; zero when untracked
    pub total: i32,
    /// Maximum carrying capacity, in coins
    pub capacity: i32,
    pub tier: Tier,
    pub movement: Movement,
}

impl Default for EncumbranceRecord {
    fn default() -> Self {
        Self {
            total: 0,
            capacity: 1600,
            tier: Tier::Unencumbered,
            movement: Movement::default(),
        }
    }
}

/// Carried-weight strategy, selected once from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncumbranceStrategy {
    /// Weight untracked, movement never reduced
    Disabled,
    /// Tier from worn armor weight class only
    Basic,
    /// Weapons, ammunition, armor and treasure plus a gear allowance
    Classic,
    /// As classic, but the gear bucket holds every remaining item kind
    Expert,
}

impl EncumbranceStrategy {
    pub fn from_config(option: EncumbranceOption) -> Self {
        match option {
            EncumbranceOption::None => EncumbranceStrategy::Disabled,
            EncumbranceOption::Basic => EncumbranceStrategy::Basic,
            EncumbranceOption::Classic => EncumbranceStrategy::Classic,
            EncumbranceOption::Expert => EncumbranceStrategy::Expert,
        }
    }

    /// Total carried weight under this strategy
    pub fn compute_total(&self, items: &[EquipmentItem]) -> i32 {
        match self {
            EncumbranceStrategy::Disabled | EncumbranceStrategy::Basic => 0,
            EncumbranceStrategy::Classic => {
                let counted = items
                    .iter()
                    .filter(|i| i.carried())
                    .filter(|i| {
                        matches!(
                            i.kind,
                            ItemKind::Weapon
                                | ItemKind::Ammunition
                                | ItemKind::Armor
                                | ItemKind::Treasure
                        )
                    })
                    .map(|i| i.weight * i.quantity)
                    .sum::<i32>();
                counted + BASELINE_GEAR_WEIGHT
            }
            EncumbranceStrategy::Expert => {
                let counted = items
                    .iter()
                    .filter(|i| i.carried())
                    .map(|i| i.weight * i.quantity)
                    .sum::<i32>();
                counted + BASELINE_GEAR_WEIGHT
            }
        }
    }

    /// Encumbrance bracket for a total under this strategy
    pub fn tier_for(&self, combatant: &Combatant, total: i32) -> Tier {
        match self {
            EncumbranceStrategy::Disabled => Tier::Unencumbered,
            EncumbranceStrategy::Basic => {
                let worn = combatant
                    .equipped_armor()
                    .map(|a| a.armor_weight)
                    .unwrap_or(ArmorWeight::Unarmored);
                match worn {
                    ArmorWeight::Unarmored => Tier::Unencumbered,
                    ArmorWeight::Light => Tier::Light,
                    ArmorWeight::Heavy => Tier::Heavy,
                }
            }
            EncumbranceStrategy::Classic | EncumbranceStrategy::Expert => {
                // Zero weight would divide by zero; treat as unburdened
                if total <= 0 {
                    return Tier::Unencumbered;
                }
                let ratio = combatant.encumbrance.capacity as f32 / total as f32;
                RATIO_TIERS
                    .iter()
                    .find(|(threshold, _)| ratio >= *threshold)
                    .map(|(_, tier)| *tier)
                    .unwrap_or(Tier::Immobile)
            }
        }
    }

    /// Movement rates after scaling by the tier factor, floored
    pub fn movement_for(&self, combatant: &Combatant, tier: Tier) -> Movement {
        let factor = tier.factor();
        Movement {
            primary: (combatant.base_movement.primary as f32 * factor).floor() as i32,
            secondary: (combatant.base_movement.secondary as f32 * factor).floor() as i32,
        }
    }

    /// Recompute a combatant's whole encumbrance record, returning the
    /// display digest
    pub fn recompute(&self, combatant: &mut Combatant) -> Vec<String> {
        let total = self.compute_total(&combatant.items);
        let tier = self.tier_for(combatant, total);
        let movement = self.movement_for(combatant, tier);

        combatant.encumbrance.total = total;
        combatant.encumbrance.tier = tier;
        combatant.encumbrance.movement = movement;

        let mut digest = Vec::new();
        if !matches!(self, EncumbranceStrategy::Disabled) {
            digest.push(format!(
                "Encumbrance: {}/{} ({:?})",
                total, combatant.encumbrance.capacity, tier
            ));
            digest.push(format!(
                "Movement: {}/{}",
                movement.primary, movement.secondary
            ));
        }
        digest
    }
}
