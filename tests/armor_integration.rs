//! Armor-class pipeline integration tests
//!
//! These drive the full preparation pass through `RulesContext` and
//! verify the worked examples: naked baseline, worn armor, shield, and
//! the two armor-class conventions staying consistent.

use hauberk::combatant::{Combatant, EquipmentItem};
use hauberk::core::types::Ability;
use hauberk::core::{RulesConfig, RulesContext};

fn context() -> RulesContext {
    RulesContext::new(RulesConfig::default())
}

/// Worked example: naked constant 9, dexterity modifier +1, base
/// modifier 0 gives naked 8; armor AC 4 gives total 3; shield value 1
/// gives total 2.
#[test]
fn test_worked_example_naked_armor_shield() {
    let context = context();
    let mut fighter = Combatant::test_fighter();
    fighter.items.clear();
    fighter.set_ability(Ability::Dexterity, 13);

    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.naked, 8);

    let mut armor = EquipmentItem::chain_mail();
    armor.ac_total = Some(4);
    fighter.items.push(armor);
    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.total, 3);

    let mut shield = EquipmentItem::shield();
    shield.ac_value = Some(1);
    fighter.items.push(shield);
    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.total, 2);
}

/// A shield of value 2 improves both totals by exactly 2, all else
/// equal.
#[test]
fn test_shield_shifts_both_totals_by_value() {
    let context = context();

    let mut without = Combatant::test_fighter();
    context.prepare(&mut without);

    let mut with = Combatant::test_fighter();
    let mut shield = EquipmentItem::shield();
    shield.ac_value = Some(2);
    with.items.push(shield);
    context.prepare(&mut with);

    assert_eq!(with.armor_class.total, without.armor_class.total - 2);
    assert_eq!(
        with.armor_class.total_ranged,
        without.armor_class.total_ranged - 2
    );
}

#[test]
fn test_natural_armor_monster() {
    let context = context();
    let mut goblin = Combatant::test_goblin();
    goblin.items.push(EquipmentItem::natural_armor(6, 2));

    let digest = context.prepare(&mut goblin);
    assert_eq!(goblin.armor_class.total, 6);
    assert_eq!(goblin.armor_class.naked, 6);
    assert_eq!(goblin.armor_class.value, Some(2));
    assert!(digest.iter().any(|line| line.contains("Natural Armor")));
}

#[test]
fn test_ascending_mirror_of_descending() {
    let context = context();
    let mut fighter = Combatant::test_fighter();
    fighter.items.push(EquipmentItem::shield());
    context.prepare(&mut fighter);

    let record = &fighter.armor_class;
    assert_eq!(record.total + record.total_aac, 19);
    assert_eq!(record.naked + record.naked_aac, 19);
    assert_eq!(record.total_ranged + record.total_ranged_aac, 19);
}

#[test]
fn test_recompute_discards_stale_state() {
    let context = context();
    let mut fighter = Combatant::test_fighter();
    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.total, 3);

    // unequip the armor; the next pass starts from scratch
    fighter.items.retain(|item| !item.name.contains("Chain"));
    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.total, 8);
    assert_eq!(fighter.armor_class.value, None);
}

#[test]
fn test_upgrade_clause_never_worsens() {
    let context = context();
    let mut fighter = Combatant::test_fighter();
    fighter.modifiers.upgrade_ac = Some(7);
    context.prepare(&mut fighter);
    // total 3 beats the upgrade; nothing changes
    assert_eq!(fighter.armor_class.total, 3);

    fighter.modifiers.upgrade_ac = Some(0);
    context.prepare(&mut fighter);
    assert_eq!(fighter.armor_class.total, 0);
    assert_eq!(fighter.armor_class.naked, 0);
}
