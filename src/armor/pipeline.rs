//! The five-stage armor-class pipeline
//!
//! Order is fixed: reset, natural armor, worn armor, shield, flat
//! modifiers and upgrade. Each stage returns its own digest lines; the
//! driver concatenates them. The whole record is recomputed from current
//! equipment every preparation pass.
//!
//! Sign conventions: descending AC, lower is better; a positive modifier
//! always improves (subtracts from) the armor class.

use crate::combatant::{Combatant, MasteryDefenseBonus};
use crate::core::constants::{ASCENDING_PIVOT, NAKED_AC};
use crate::core::types::Ability;

/// Working values while the pipeline runs
#[derive(Debug, Clone, Copy)]
struct AcBuild {
    naked: i32,
    total: i32,
    total_ranged: i32,
    shield: i32,
    /// Running flat-modifier total from worn armor
    ac_mod: i32,
    /// Armor value recorded for mitigation
    value: Option<i32>,
}

impl AcBuild {
    /// Stage 1: baseline from the naked constant, the dexterity
    /// modifier, and the actor's flat base modifier
    fn reset(combatant: &Combatant) -> (Self, Vec<String>) {
        let dex = combatant.ability_modifier(Ability::Dexterity);
        let base_mod = combatant.modifiers.base_ac;
        let naked = NAKED_AC - dex - base_mod;

        let build = Self {
            naked,
            total: naked,
            total_ranged: naked,
            shield: 0,
            ac_mod: 0,
            value: None,
        };
        let digest = vec![format!(
            "Naked AC {} (base {}, dexterity {:+}, modifier {:+})",
            naked, NAKED_AC, dex, base_mod
        )];
        (build, digest)
    }

    /// Stage 2: natural armor fully overrides naked and both totals
    fn natural(mut self, combatant: &Combatant) -> (Self, Vec<String>) {
        let Some(item) = combatant.equipped_natural_armor() else {
            return (self, Vec::new());
        };
        let Some(total) = item.ac_total else {
            // Unresolved armor formula: no value available, not zero
            tracing::warn!(item = %item.name, "natural armor has no resolved AC, skipping");
            return (self, Vec::new());
        };

        self.naked = total;
        self.total = total;
        self.total_ranged = total;
        self.value = item.ac_value;

        let digest = match item.ac_value {
            Some(value) => vec![format!("{}: AC {} (armor value {})", item.name, total, value)],
            None => vec![format!("{}: AC {}", item.name, total)],
        };
        (self, digest)
    }

    /// Stage 3: worn armor overrides the running totals; the dexterity
    /// modifier still applies on top, and the item's flat modifier
    /// accumulates
    fn worn(mut self, combatant: &Combatant) -> (Self, Vec<String>) {
        let Some(armor) = combatant.equipped_armor() else {
            return (self, Vec::new());
        };
        let Some(total) = armor.ac_total else {
            tracing::warn!(item = %armor.name, "worn armor has no resolved AC, skipping");
            return (self, Vec::new());
        };

        let dex = combatant.ability_modifier(Ability::Dexterity);
        self.total = total - dex;
        self.total_ranged = total - dex;
        self.ac_mod += armor.ac_mod;
        if self.value.is_none() {
            self.value = armor.ac_value;
        }

        let digest = vec![format!(
            "{}: AC {} (dexterity {:+})",
            armor.name, total, dex
        )];
        (self, digest)
    }

    /// Stage 4: the shield value improves both totals
    fn shield(mut self, combatant: &Combatant) -> (Self, Vec<String>) {
        let Some(shield) = combatant.equipped_shield() else {
            return (self, Vec::new());
        };
        let Some(value) = shield.ac_value else {
            tracing::warn!(item = %shield.name, "shield has no resolved value, skipping");
            return (self, Vec::new());
        };

        self.total -= value;
        self.total_ranged -= value;
        self.shield = value;

        (self, vec![format!("{}: {:+}", shield.name, value)])
    }

    /// Stage 5: flat modifiers, then the upgrade-only-if-better clause
    fn flats(mut self, combatant: &Combatant) -> (Self, Vec<String>) {
        let mods = &combatant.modifiers;
        let mut digest = Vec::new();

        let melee = mods.melee_ac + self.ac_mod;
        let ranged = mods.ranged_ac + self.ac_mod;
        if melee != 0 {
            self.total -= melee;
            digest.push(format!("Melee AC modifier {:+}", melee));
        }
        if ranged != 0 {
            self.total_ranged -= ranged;
            digest.push(format!("Ranged AC modifier {:+}", ranged));
        }

        if let Some(upgrade) = mods.upgrade_ac {
            // Never worsens: replaces only when numerically better
            if upgrade < self.total {
                self.total = upgrade;
                digest.push(format!("AC upgraded to {}", upgrade));
            }
            if upgrade < self.naked {
                self.naked = upgrade;
            }
        }
        (self, digest)
    }
}

/// Defense bonuses from equipped-weapon masteries, merged in as an
/// auxiliary list after stage 5; they never mutate the stored totals
fn mastery_defense(combatant: &Combatant) -> Vec<MasteryDefenseBonus> {
    combatant
        .equipped_items()
        .filter_map(|item| {
            let mastery = item.mastery.as_ref()?;
            if mastery.defense_bonus <= 0 || mastery.defense_uses == 0 {
                return None;
            }
            Some(MasteryDefenseBonus {
                label: item.name.clone(),
                against: mastery.defense_category,
                bonus: mastery.defense_bonus,
                max_uses: mastery.defense_uses,
            })
        })
        .collect()
}

/// Run the full pipeline and write the record back into the combatant,
/// returning the concatenated digest
pub fn recompute_armor_class(combatant: &mut Combatant) -> Vec<String> {
    let mut digest = Vec::new();

    let (build, lines) = AcBuild::reset(combatant);
    digest.extend(lines);
    let (build, lines) = build.natural(combatant);
    digest.extend(lines);
    let (build, lines) = build.worn(combatant);
    digest.extend(lines);
    let (build, lines) = build.shield(combatant);
    digest.extend(lines);
    let (build, lines) = build.flats(combatant);
    digest.extend(lines);

    let record = &mut combatant.armor_class;
    record.naked = build.naked;
    record.total = build.total;
    record.total_ranged = build.total_ranged;
    record.shield = build.shield;
    record.ac_mod = build.ac_mod;
    record.value = build.value;
    record.naked_aac = ASCENDING_PIVOT - build.naked;
    record.total_aac = ASCENDING_PIVOT - build.total;
    record.total_ranged_aac = ASCENDING_PIVOT - build.total_ranged;

    combatant.armor_class.mastery_defense = mastery_defense(combatant);
    digest
}
