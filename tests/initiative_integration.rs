//! Initiative batch and turn-order integration tests

use hauberk::combatant::{Combatant, DeclaredAction, EquipmentItem};
use hauberk::core::config::InitiativeMode;
use hauberk::core::types::{Ability, CombatantId, CombatantKind};
use hauberk::core::{RulesConfig, RulesContext};
use hauberk::dice::SequenceRoller;
use hauberk::initiative::{order_turns, roll_initiative_batch};

fn party() -> Vec<Combatant> {
    let mut fighter = Combatant::test_fighter();
    fighter.id = CombatantId::new(1);
    let mut goblin = Combatant::test_goblin();
    goblin.id = CombatantId::new(2);
    let mut ogre = Combatant::new(CombatantId::new(3), "Ogre", CombatantKind::Monster);
    ogre.set_ability(Ability::Dexterity, 8);
    vec![fighter, goblin, ogre]
}

#[test]
fn test_roll_then_order_full_round() {
    let context = RulesContext::new(RulesConfig::default());
    let mut combatants = party();
    for combatant in &mut combatants {
        context.prepare(combatant);
    }

    let mut roller = SequenceRoller::new(vec![2, 5, 4]);
    let results = roll_initiative_batch(
        &mut combatants,
        &context.config.initiative_formula,
        &mut roller,
    );
    assert!(results.iter().all(|r| r.value.is_some()));

    let refs: Vec<&Combatant> = combatants.iter().collect();
    let order = order_turns(&refs, &context.config);
    // fighter 2 + 1 dex = 3, goblin 5 + 0 = 5, ogre 4 - 1 = 3;
    // the 3-3 tie falls to the dexterity totals (13 vs 8)
    assert_eq!(
        order,
        vec![
            CombatantId::new(2),
            CombatantId::new(1),
            CombatantId::new(3)
        ]
    );
}

/// Equal rolls: the slow-weapon wielder acts last unless the simple
/// mode is on.
#[test]
fn test_slow_weapon_breaks_ties() {
    let config = RulesConfig::default();
    let mut a = Combatant::new(CombatantId::new(1), "A", CombatantKind::Character);
    a.initiative = Some(18);
    let mut b = Combatant::new(CombatantId::new(2), "B", CombatantKind::Character);
    b.initiative = Some(18);
    b.items.push(EquipmentItem::two_handed_sword());

    let order = order_turns(&[&b, &a], &config);
    assert_eq!(order[0], CombatantId::new(1));

    let simple = RulesConfig {
        initiative_mode: InitiativeMode::Simple,
        ..RulesConfig::default()
    };
    // under simple rules the slow weapon no longer matters; stable
    // order falls back to the remaining keys
    let order = order_turns(&[&b, &a], &simple);
    assert_eq!(order.len(), 2);
}

#[test]
fn test_declared_actions_with_checklist_mode() {
    let config = RulesConfig {
        declared_actions: true,
        initiative_mode: InitiativeMode::IndividualChecklist,
        ..RulesConfig::default()
    };
    let mut combatants = party();
    combatants[0].initiative = Some(1);
    combatants[0].counters.declared_action = Some(DeclaredAction {
        name: "Spell".to_string(),
        phase: 0,
    });
    combatants[1].initiative = Some(20);
    combatants[1].counters.declared_action = Some(DeclaredAction {
        name: "Melee".to_string(),
        phase: 1,
    });
    combatants[2].initiative = Some(20);
    // no declaration: sorts after every declared phase

    let refs: Vec<&Combatant> = combatants.iter().collect();
    let order = order_turns(&refs, &config);
    assert_eq!(
        order,
        vec![
            CombatantId::new(1),
            CombatantId::new(2),
            CombatantId::new(3)
        ]
    );
}

#[test]
fn test_malformed_formula_keeps_batch_consistent() {
    let mut combatants = party();
    let mut roller = SequenceRoller::new(vec![6, 6, 6]);
    let results = roll_initiative_batch(&mut combatants, "2x6", &mut roller);

    // nobody gets a partial commit
    assert!(results.iter().all(|r| r.value.is_none()));
    assert!(combatants.iter().all(|c| c.initiative.is_none()));

    // and the ordering still works, falling to the dexterity key
    let refs: Vec<&Combatant> = combatants.iter().collect();
    let order = order_turns(&refs, &RulesConfig::default());
    assert_eq!(order.first(), Some(&CombatantId::new(1)));
}
