//! Damage application and mitigation
//!
//! A signed delta is applied to hit points. Positive deltas are pure
//! healing, clamped to the maximum and never mitigated. Negative deltas
//! are reduced by physical, breath and magic mitigation sources; the
//! total reduction can never exceed the incoming damage, so mitigation
//! never turns a hit into healing.

use crate::combatant::{Combatant, EquipmentItem};
use crate::core::config::RulesConfig;
use crate::core::types::{AttackCategory, DamageType};

/// Mitigation from the physical family: the flat self-damage modifier,
/// or the armor value when that mode is on (halved, rounded down, for
/// piercing). Armor-value mitigation always lets at least 1 point
/// through.
fn physical_mitigation(
    combatant: &Combatant,
    damage_type: DamageType,
    magnitude: i32,
    config: &RulesConfig,
) -> (i32, Option<String>) {
    if !damage_type.is_physical() {
        return (0, None);
    }

    if config.use_armor_value {
        if let Some(armor_value) = combatant.armor_class.value {
            let raw = if damage_type == DamageType::Piercing {
                armor_value / 2
            } else {
                armor_value
            };
            let capped = raw.clamp(0, (magnitude - 1).max(0));
            return (capped, Some(format!("Armor absorbs {}", capped)));
        }
        // No armor value resolved: fall through to the flat modifier
    }

    let flat = combatant.modifiers.self_damage;
    if flat > 0 {
        (flat, Some(format!("Toughness absorbs {}", flat)))
    } else {
        (0, None)
    }
}

/// Apply a signed hit-point delta, returning the audit digest
pub fn apply_damage(
    combatant: &mut Combatant,
    delta: i32,
    damage_type: DamageType,
    attack_category: AttackCategory,
    source: Option<&EquipmentItem>,
    config: &RulesConfig,
) -> Vec<String> {
    let mut digest = Vec::new();

    if delta == 0 {
        return digest;
    }

    if delta > 0 {
        // Healing: no mitigation, clamp to maximum
        let hp = &mut combatant.hit_points;
        let before = hp.current;
        hp.current = (hp.current + delta).min(hp.max);
        digest.push(format!("Restored {} hit points", hp.current - before));
        return digest;
    }

    let magnitude = -delta;
    tracing::debug!(
        target = %combatant.name,
        magnitude,
        ?damage_type,
        ?attack_category,
        source = source.map(|s| s.name.as_str()),
        "applying damage"
    );

    let (physical, physical_line) =
        physical_mitigation(combatant, damage_type, magnitude, config);
    if let Some(line) = physical_line {
        digest.push(line);
    }

    let mods = &combatant.modifiers;
    let breath = if damage_type == DamageType::Breath {
        let scaled = magnitude * mods.breath_percent / 100;
        let total = mods.breath + scaled;
        if total > 0 {
            digest.push(format!("Breath protection absorbs {}", total));
        }
        total
    } else {
        0
    };
    let magic = if damage_type == DamageType::Magic {
        if mods.magic > 0 {
            digest.push(format!("Magic protection absorbs {}", mods.magic));
        }
        mods.magic
    } else {
        0
    };

    // Mitigation is a positive offset that can never exceed the hit
    let mitigation = (physical + breath + magic).clamp(0, magnitude);
    combatant.hit_points.current += delta + mitigation;

    digest.push(format!("Suffered {} damage", magnitude - mitigation));
    digest
}
