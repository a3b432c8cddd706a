//! Attack resolution
//!
//! Ties the configured resolver, the attacker's mastery bonus, and each
//! target's rate-limited mastery defense into one verdict per target.
//! Everything here is pure: the roll has already happened, counters are
//! read but never written.

pub mod mastery_mod;
pub mod resolver;
pub mod tables;

pub use mastery_mod::{attack_modifier, defense_modifier, DefenseAdjustment};
pub use resolver::{HitResolution, ToHitResolver};

use crate::combatant::{Combatant, EquipmentItem};
use crate::core::constants::ASCENDING_PIVOT;
use crate::core::context::RulesContext;
use crate::core::types::{AttackCategory, CombatantId, WeaponCategory};
use serde::Serialize;

/// One attack, after the dice have been rolled
#[derive(Debug, Clone, Copy)]
pub struct AttackContext<'a> {
    pub attacker: &'a Combatant,
    pub weapon: Option<&'a EquipmentItem>,
    pub category: AttackCategory,
    /// Situational modifier entered by hand
    pub manual_modifier: i32,
    /// Fully evaluated roll total
    pub roll_total: i32,
    /// Raw die result, for the natural 1 / natural 20 rules
    pub die_result: i32,
}

/// Verdict against one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetOutcome {
    pub target_id: CombatantId,
    pub target_name: String,
    /// Armor class shown for this target, on the active scale
    pub target_ac: i32,
    pub success: bool,
    pub message: String,
}

/// Full outcome of one resolved attack
#[derive(Debug, Clone)]
pub struct AttackOutcome {
    /// Resolution from the unmodified roll, for the headline message
    pub resolution: HitResolution,
    pub message: String,
    pub targets: Vec<TargetOutcome>,
    pub digest: Vec<String>,
}

fn headline(resolution: HitResolution, ascending: bool) -> String {
    match resolution {
        HitResolution::Miss => "The attack misses everything".to_string(),
        HitResolution::AlwaysHits => "The attack hits regardless of armor class".to_string(),
        HitResolution::Ac(ac) => {
            if ascending {
                format!("The attack hits armor class {} or lower", ac)
            } else {
                format!("The attack hits armor class {} or higher", ac)
            }
        }
    }
}

/// Does a resolution defeat a target at this effective descending AC?
fn defeats(resolution: HitResolution, effective_ac: i32, ascending: bool) -> bool {
    match resolution {
        HitResolution::Miss => false,
        HitResolution::AlwaysHits => true,
        HitResolution::Ac(hit_ac) => {
            if ascending {
                // Direct strategy: roll total against the ascending value
                hit_ac >= ASCENDING_PIVOT - effective_ac
            } else {
                effective_ac >= hit_ac
            }
        }
    }
}

/// Resolve one attack against any number of targets
pub fn resolve_attack(
    ctx: &AttackContext,
    targets: &[&Combatant],
    rules: &RulesContext,
) -> AttackOutcome {
    let resolver = rules.resolver;
    let ascending = resolver.ascending();
    let bar = ctx.attacker.base_attack_rating;

    let base_total = ctx.roll_total + ctx.manual_modifier;
    let resolution = resolver.resolve(ctx.die_result, base_total, bar);

    let attacker_category = ctx
        .weapon
        .map(|w| w.category)
        .unwrap_or(WeaponCategory::Natural);

    let mut digest = Vec::new();
    if ctx.manual_modifier != 0 {
        digest.push(format!("Situational modifier {:+}", ctx.manual_modifier));
    }

    let mut target_outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        // Mastery bonus depends on the target's own weapon category
        let (mastery_bonus, mastery_digest) = match ctx.weapon {
            Some(weapon) => attack_modifier(
                ctx.attacker,
                weapon,
                target.weapon_category(),
                ctx.category,
            ),
            None => (0, Vec::new()),
        };
        digest.extend(mastery_digest);

        let per_target = resolver.resolve(ctx.die_result, base_total + mastery_bonus, bar);
        let defense = defense_modifier(attacker_category, target, ctx.category);
        let success = defeats(per_target, defense.ac, ascending);

        let shown_ac = if ascending {
            ASCENDING_PIVOT - defense.display_ac
        } else {
            defense.display_ac
        };
        let message = if success {
            format!("Hits {} (AC {})", target.name, shown_ac)
        } else {
            format!("Misses {} (AC {})", target.name, shown_ac)
        };

        target_outcomes.push(TargetOutcome {
            target_id: target.id,
            target_name: target.name.clone(),
            target_ac: shown_ac,
            success,
            message,
        });
    }

    AttackOutcome {
        resolution,
        message: headline(resolution, ascending),
        targets: target_outcomes,
        digest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{RulesConfig, ToHitSystem};

    fn rules_for(system: ToHitSystem) -> RulesContext {
        let config = RulesConfig {
            to_hit_system: system,
            ..RulesConfig::default()
        };
        RulesContext::new(config)
    }

    #[test]
    fn test_linear_attack_against_target() {
        let rules = rules_for(ToHitSystem::Thac0);
        let mut attacker = Combatant::test_fighter();
        attacker.base_attack_rating = 19;
        let mut target = Combatant::test_goblin();
        target.armor_class.total = 6;

        let weapon = EquipmentItem::sword();
        let ctx = AttackContext {
            attacker: &attacker,
            weapon: Some(&weapon),
            category: AttackCategory::Melee,
            manual_modifier: 0,
            roll_total: 13,
            die_result: 13,
        };
        let outcome = resolve_attack(&ctx, &[&target], &rules);
        // hit AC = 19 - 13 = 6, target AC 6 is exactly defeated
        assert_eq!(outcome.resolution, HitResolution::Ac(6));
        assert!(outcome.targets[0].success);
    }

    #[test]
    fn test_linear_attack_misses_better_armor() {
        let rules = rules_for(ToHitSystem::Thac0);
        let attacker = Combatant::test_fighter();
        let mut target = Combatant::test_goblin();
        target.armor_class.total = 2;

        let weapon = EquipmentItem::sword();
        let ctx = AttackContext {
            attacker: &attacker,
            weapon: Some(&weapon),
            category: AttackCategory::Melee,
            manual_modifier: 0,
            roll_total: 13,
            die_result: 13,
        };
        let outcome = resolve_attack(&ctx, &[&target], &rules);
        assert!(!outcome.targets[0].success);
    }

    #[test]
    fn test_ascending_comparison() {
        let rules = rules_for(ToHitSystem::Aac);
        let attacker = Combatant::test_fighter();
        let mut target = Combatant::test_goblin();
        target.armor_class.total = 6; // ascending 13

        let weapon = EquipmentItem::sword();
        let mut ctx = AttackContext {
            attacker: &attacker,
            weapon: Some(&weapon),
            category: AttackCategory::Melee,
            manual_modifier: 0,
            roll_total: 13,
            die_result: 13,
        };
        let outcome = resolve_attack(&ctx, &[&target], &rules);
        assert!(outcome.targets[0].success);

        ctx.roll_total = 12;
        let outcome = resolve_attack(&ctx, &[&target], &rules);
        assert!(!outcome.targets[0].success);
    }

    #[test]
    fn test_natural_one_misses_every_target_on_tables() {
        let rules = rules_for(ToHitSystem::DarkDungeons);
        let attacker = Combatant::test_fighter();
        let mut target = Combatant::test_goblin();
        target.armor_class.total = 9;

        let weapon = EquipmentItem::sword();
        let ctx = AttackContext {
            attacker: &attacker,
            weapon: Some(&weapon),
            category: AttackCategory::Melee,
            manual_modifier: 10,
            roll_total: 11,
            die_result: 1,
        };
        let outcome = resolve_attack(&ctx, &[&target], &rules);
        assert_eq!(outcome.resolution, HitResolution::Miss);
        assert!(!outcome.targets[0].success);
    }
}
