//! Mastery-derived attack and defense modifiers
//!
//! Attack: primary or secondary bonus depending on the target's weapon
//! category; characters loosing a missile weapon they hold no mastery
//! in eat a flat penalty.
//!
//! Defense: the best eligible bonus under the per-round usage cap, per
//! attacking weapon category. A capped-out bonus is silently dropped
//! from the eligible set; that is not an error.

use crate::combatant::{Combatant, EquipmentItem};
use crate::core::constants::UNSKILLED_MISSILE_PENALTY;
use crate::core::types::{AttackCategory, CombatantKind, WeaponCategory};

/// Attack-roll modifier for this attacker/weapon/target combination
pub fn attack_modifier(
    attacker: &Combatant,
    weapon: &EquipmentItem,
    target_category: WeaponCategory,
    attack_category: AttackCategory,
) -> (i32, Vec<String>) {
    if let Some(mastery) = &weapon.mastery {
        if mastery.primary_category.matches(target_category) {
            let digest = vec![format!(
                "{} mastery ({}): {:+} (primary)",
                weapon.name, mastery.rank, mastery.primary_bonus
            )];
            (mastery.primary_bonus, digest)
        } else {
            let digest = vec![format!(
                "{} mastery ({}): {:+} (secondary)",
                weapon.name, mastery.rank, mastery.secondary_bonus
            )];
            (mastery.secondary_bonus, digest)
        }
    } else if attack_category == AttackCategory::Missile
        && attacker.kind == CombatantKind::Character
    {
        let digest = vec![format!(
            "Unskilled missile use: {:+}",
            UNSKILLED_MISSILE_PENALTY
        )];
        (UNSKILLED_MISSILE_PENALTY, digest)
    } else {
        (0, Vec::new())
    }
}

/// Result of defense-bonus selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenseAdjustment {
    /// Effective armor class used for the hit decision
    pub ac: i32,
    /// Armor class shown to the player; differs from `ac` when the
    /// bonused value would be worse than the unbonused one
    pub display_ac: i32,
}

/// Best legal mastery defense bonus against an attack of the given
/// weapon category, honoring the per-round usage caps
pub fn defense_modifier(
    attacker_category: WeaponCategory,
    defender: &Combatant,
    attack_category: AttackCategory,
) -> DefenseAdjustment {
    let base = if attack_category == AttackCategory::Missile {
        defender.armor_class.total_ranged
    } else {
        defender.armor_class.total
    };

    let received = defender.counters.received(attacker_category);
    let best_bonused = defender
        .armor_class
        .mastery_defense
        .iter()
        .filter(|bonus| bonus.against.matches(attacker_category))
        .filter(|bonus| received < bonus.max_uses)
        .map(|bonus| base - bonus.bonus)
        .min();

    match best_bonused {
        Some(bonused) => DefenseAdjustment {
            ac: bonused.min(base),
            display_ac: bonused,
        },
        None => DefenseAdjustment {
            ac: base,
            display_ac: base,
        },
    }
}
