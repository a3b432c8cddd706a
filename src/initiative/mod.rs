//! Turn order and the initiative batch protocol
//!
//! Ordering is a multi-key comparison: declared-action phase (when that
//! rule is on), slow weapons last (unless the simple mode), then the
//! rolled value, then a dexterity tie-break. The batch roll evaluates
//! every combatant's formula first and commits all values in one pass;
//! partial results are never visible.

use crate::combatant::Combatant;
use crate::core::config::{InitiativeMode, RulesConfig};
use crate::core::types::{Ability, CombatantId};
use crate::dice::{DiceFormula, DieRoller};
use serde::Serialize;
use std::cmp::Ordering;

/// Phase index for the declared-action key; undeclared sorts last
fn declared_phase(combatant: &Combatant) -> u32 {
    combatant
        .counters
        .declared_action
        .as_ref()
        .map(|action| action.phase)
        .unwrap_or(u32::MAX)
}

/// Dexterity tie-break; combatants without the score sort last
fn tie_break(combatant: &Combatant) -> i32 {
    combatant
        .ability(Ability::Dexterity)
        .map(|score| score.total)
        .unwrap_or(i32::MIN)
}

fn compare(a: &Combatant, b: &Combatant, config: &RulesConfig) -> Ordering {
    if config.declared_actions && config.initiative_mode == InitiativeMode::IndividualChecklist {
        let by_phase = declared_phase(a).cmp(&declared_phase(b));
        if by_phase != Ordering::Equal {
            return by_phase;
        }
    }

    if config.initiative_mode != InitiativeMode::Simple {
        let by_slow = a.has_slow_weapon().cmp(&b.has_slow_weapon());
        if by_slow != Ordering::Equal {
            return by_slow;
        }
    }

    let by_roll = b
        .initiative
        .unwrap_or(i32::MIN)
        .cmp(&a.initiative.unwrap_or(i32::MIN));
    if by_roll != Ordering::Equal {
        return by_roll;
    }

    tie_break(b).cmp(&tie_break(a))
}

/// Total turn order for a round
///
/// Combatants without a placed token are excluded entirely.
pub fn order_turns(combatants: &[&Combatant], config: &RulesConfig) -> Vec<CombatantId> {
    let mut placed: Vec<&Combatant> = combatants
        .iter()
        .copied()
        .filter(|c| c.placed_token)
        .collect();
    placed.sort_by(|a, b| compare(a, b, config));
    placed.iter().map(|c| c.id).collect()
}

/// One combatant's committed initiative value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitiativeResult {
    pub id: CombatantId,
    /// `None` when the formula failed to evaluate
    pub value: Option<i32>,
}

/// Roll-relevant modifier substituted into the formula
fn initiative_modifier(combatant: &Combatant) -> i32 {
    combatant.modifiers.initiative + combatant.ability_modifier(Ability::Dexterity)
}

/// Evaluate the configured formula for every combatant, then commit all
/// values as one atomic batch
///
/// A malformed formula is logged and yields `None` for every combatant;
/// callers must treat `None` as "no value", never as zero.
pub fn roll_initiative_batch(
    combatants: &mut [Combatant],
    formula: &str,
    roller: &mut dyn DieRoller,
) -> Vec<InitiativeResult> {
    let parsed = match DiceFormula::parse(formula) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::error!(%error, formula, "initiative formula failed to parse");
            None
        }
    };

    // Evaluate everything before committing anything
    let results: Vec<InitiativeResult> = combatants
        .iter()
        .map(|combatant| InitiativeResult {
            id: combatant.id,
            value: parsed
                .as_ref()
                .map(|f| f.evaluate(initiative_modifier(combatant), roller)),
        })
        .collect();

    for (combatant, result) in combatants.iter_mut().zip(&results) {
        combatant.initiative = result.value;
    }
    results
}
