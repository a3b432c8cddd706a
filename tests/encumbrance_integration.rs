//! Encumbrance strategy integration tests

use hauberk::combatant::{Combatant, EquipmentItem};
use hauberk::core::config::EncumbranceOption;
use hauberk::core::{RulesConfig, RulesContext};
use hauberk::encumbrance::Tier;

fn context_for(option: EncumbranceOption) -> RulesContext {
    RulesContext::new(RulesConfig {
        encumbrance: option,
        ..RulesConfig::default()
    })
}

#[test]
fn test_none_option_never_tracks() {
    let context = context_for(EncumbranceOption::None);
    let mut fighter = Combatant::test_fighter();
    fighter.items.push(EquipmentItem::treasure(1, 5000));
    context.prepare(&mut fighter);

    assert_eq!(fighter.encumbrance.total, 0);
    assert_eq!(fighter.encumbrance.tier, Tier::Unencumbered);
    assert_eq!(fighter.encumbrance.movement.primary, 120);
}

#[test]
fn test_basic_option_reads_armor_class_weight() {
    let context = context_for(EncumbranceOption::Basic);

    let mut armored = Combatant::test_fighter(); // chain mail, heavy
    context.prepare(&mut armored);
    assert_eq!(armored.encumbrance.tier, Tier::Heavy);
    assert_eq!(armored.encumbrance.movement.primary, 60);

    let mut scout = Combatant::test_fighter();
    scout.items[1] = EquipmentItem::leather_armor();
    context.prepare(&mut scout);
    assert_eq!(scout.encumbrance.tier, Tier::Light);
    assert_eq!(scout.encumbrance.movement.primary, 90);
}

#[test]
fn test_classic_ignores_light_sources() {
    let context = context_for(EncumbranceOption::Classic);
    let mut fighter = Combatant::test_fighter();
    context.prepare(&mut fighter);
    let before = fighter.encumbrance.total;

    fighter.items.push(EquipmentItem::torch());
    context.prepare(&mut fighter);
    assert_eq!(fighter.encumbrance.total, before);
}

#[test]
fn test_expert_counts_light_sources() {
    let context = context_for(EncumbranceOption::Expert);
    let mut fighter = Combatant::test_fighter();
    context.prepare(&mut fighter);
    let before = fighter.encumbrance.total;

    fighter.items.push(EquipmentItem::torch());
    context.prepare(&mut fighter);
    assert_eq!(fighter.encumbrance.total, before + 20);
}

#[test]
fn test_treasure_drags_movement_down() {
    let context = context_for(EncumbranceOption::Classic);
    let mut fighter = Combatant::test_fighter();
    context.prepare(&mut fighter);
    let unladen = fighter.encumbrance.movement.primary;

    fighter.items.push(EquipmentItem::treasure(1, 1200));
    context.prepare(&mut fighter);
    assert!(fighter.encumbrance.movement.primary < unladen);

    fighter.items.push(EquipmentItem::treasure(1, 4000));
    context.prepare(&mut fighter);
    assert_eq!(fighter.encumbrance.tier, Tier::Immobile);
    assert_eq!(fighter.encumbrance.movement.primary, 0);
}

#[test]
fn test_doubling_quantities_never_lightens() {
    let context = context_for(EncumbranceOption::Classic);
    let mut fighter = Combatant::test_fighter();
    fighter.items.push(EquipmentItem::treasure(2, 150));
    context.prepare(&mut fighter);
    let before = fighter.encumbrance.total;

    for item in &mut fighter.items {
        item.quantity *= 2;
    }
    context.prepare(&mut fighter);
    assert!(fighter.encumbrance.total >= before);
}
