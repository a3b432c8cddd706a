//! The combatant record and its derived fields
//!
//! Derived fields (ability modifiers, armor class, encumbrance) are
//! recomputed whole at every preparation pass; nothing here caches
//! increments across mutations.

pub mod equipment;
pub mod mastery;

pub use equipment::EquipmentItem;
pub use mastery::{MasteryDefenseBonus, MasteryLevel};

use crate::abilities::AbilityTableSet;
use crate::core::constants::{ASCENDING_PIVOT, NAKED_AC};
use crate::core::types::{Ability, CombatantId, CombatantKind, ItemKind, WeaponCategory};
use crate::encumbrance::{EncumbranceRecord, Movement};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One ability score with its derived fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub base: i32,
    pub temp: i32,
    /// base + temp, recomputed each preparation pass
    pub total: i32,
    /// Table-derived modifier, recomputed each preparation pass
    pub modifier: i32,
}

impl AbilityScore {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            temp: 0,
            total: base,
            modifier: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

/// An action declared before initiative, ordered by phase index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredAction {
    pub name: String,
    pub phase: u32,
}

/// Per-round combat counters
///
/// Owned by the external round controller; this crate reads them during
/// modifier computation and increments them only from the attack flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundCounters {
    pub attacks_made: u32,
    attacks_received: AHashMap<WeaponCategory, u32>,
    pub declared_action: Option<DeclaredAction>,
}

impl RoundCounters {
    /// Attacks received this round from the given weapon category
    pub fn received(&self, category: WeaponCategory) -> u32 {
        self.attacks_received.get(&category).copied().unwrap_or(0)
    }

    pub fn record_received(&mut self, category: WeaponCategory) {
        *self.attacks_received.entry(category).or_insert(0) += 1;
    }

    pub fn record_made(&mut self) {
        self.attacks_made += 1;
    }

    /// Round boundary: everything back to zero
    pub fn reset(&mut self) {
        self.attacks_made = 0;
        self.attacks_received.clear();
        self.declared_action = None;
    }
}

/// The full armor-class record, in both conventions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorClassRecord {
    /// Unarmored value (descending: lower is better)
    pub naked: i32,
    pub total: i32,
    pub total_ranged: i32,
    /// Shield contribution, recorded separately for display
    pub shield: i32,
    /// Accumulated flat modifiers from worn armor
    pub ac_mod: i32,
    /// Armor value for mitigation; `None` when no armor value resolved
    pub value: Option<i32>,

    // Ascending convention (higher is better)
    pub naked_aac: i32,
    pub total_aac: i32,
    pub total_ranged_aac: i32,

    /// Defense bonuses from equipped-weapon masteries; applied per
    /// incoming attack, never baked into the totals above
    pub mastery_defense: Vec<MasteryDefenseBonus>,
}

impl Default for ArmorClassRecord {
    fn default() -> Self {
        Self {
            naked: NAKED_AC,
            total: NAKED_AC,
            total_ranged: NAKED_AC,
            shield: 0,
            ac_mod: 0,
            value: None,
            naked_aac: ASCENDING_PIVOT - NAKED_AC,
            total_aac: ASCENDING_PIVOT - NAKED_AC,
            total_ranged_aac: ASCENDING_PIVOT - NAKED_AC,
            mastery_defense: Vec::new(),
        }
    }
}

/// Actor-level flat modifiers feeding armor class, mitigation and
/// initiative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatModifiers {
    /// Flat shift of the naked baseline
    pub base_ac: i32,
    pub melee_ac: i32,
    pub ranged_ac: i32,
    /// "Upgrade only if better": replaces naked/total when lower
    pub upgrade_ac: Option<i32>,

    /// Flat physical mitigation
    pub self_damage: i32,
    /// Flat breath mitigation
    pub breath: i32,
    /// Breath mitigation scaling, percent of the raw delta
    pub breath_percent: i32,
    /// Flat magic mitigation
    pub magic: i32,

    pub initiative: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub kind: CombatantKind,

    pub abilities: AHashMap<Ability, AbilityScore>,
    /// Base-to-hit value, improves with level
    pub base_attack_rating: i32,

    pub armor_class: ArmorClassRecord,
    pub hit_points: HitPoints,
    pub counters: RoundCounters,
    pub modifiers: CombatModifiers,
    pub encumbrance: EncumbranceRecord,
    pub items: Vec<EquipmentItem>,

    pub base_movement: Movement,
    /// Committed initiative value for the current round
    pub initiative: Option<i32>,
    /// Only combatants with a placed token take part in turn order
    pub placed_token: bool,
}

impl Combatant {
    pub fn new(id: CombatantId, name: &str, kind: CombatantKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            abilities: AHashMap::new(),
            base_attack_rating: 19,
            armor_class: ArmorClassRecord::default(),
            hit_points: HitPoints { current: 8, max: 8 },
            counters: RoundCounters::default(),
            modifiers: CombatModifiers::default(),
            encumbrance: EncumbranceRecord::default(),
            items: Vec::new(),
            base_movement: Movement {
                primary: 120,
                secondary: 40,
            },
            initiative: None,
            placed_token: true,
        }
    }

    /// Test combatant: first-level fighter with sword and chain
    pub fn test_fighter() -> Self {
        let mut fighter = Combatant::new(CombatantId::new(1), "Fighter", CombatantKind::Character);
        fighter.set_ability(Ability::Strength, 13);
        fighter.set_ability(Ability::Dexterity, 13);
        fighter.set_ability(Ability::Charisma, 9);
        fighter.items.push(EquipmentItem::sword());
        fighter.items.push(EquipmentItem::chain_mail());
        fighter
    }

    /// Test combatant: unarmored monster with natural weapons
    pub fn test_goblin() -> Self {
        let mut goblin = Combatant::new(CombatantId::new(2), "Goblin", CombatantKind::Monster);
        goblin.set_ability(Ability::Dexterity, 9);
        goblin.hit_points = HitPoints { current: 4, max: 4 };
        let mut claws = EquipmentItem::new("Claws", ItemKind::Weapon);
        claws.category = WeaponCategory::Natural;
        claws.equipped = true;
        goblin.items.push(claws);
        goblin
    }

    pub fn set_ability(&mut self, ability: Ability, base: i32) {
        self.abilities.insert(ability, AbilityScore::new(base));
    }

    pub fn ability(&self, ability: Ability) -> Option<&AbilityScore> {
        self.abilities.get(&ability)
    }

    /// Derived modifier for an ability; missing scores contribute zero
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.get(&ability).map(|s| s.modifier).unwrap_or(0)
    }

    /// Recompute totals and table modifiers for every ability score
    pub fn refresh_abilities(&mut self, tables: &AbilityTableSet) {
        for (ability, score) in self.abilities.iter_mut() {
            score.total = score.base + score.temp;
            score.modifier = tables.modifier_for(*ability, score.total);
        }
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter().filter(|i| i.equipped && i.carried())
    }

    /// First equipped weapon, the one attacks are made with
    pub fn equipped_weapon(&self) -> Option<&EquipmentItem> {
        self.equipped_items().find(|i| i.kind == ItemKind::Weapon)
    }

    /// Category of the equipped weapon, for mastery matching against
    /// this combatant as a target
    pub fn weapon_category(&self) -> WeaponCategory {
        self.equipped_weapon()
            .map(|w| w.category)
            .unwrap_or(WeaponCategory::Natural)
    }

    pub fn has_slow_weapon(&self) -> bool {
        self.equipped_items()
            .any(|i| i.kind == ItemKind::Weapon && i.slow)
    }

    pub fn equipped_natural_armor(&self) -> Option<&EquipmentItem> {
        self.equipped_items().find(|i| i.is_natural)
    }

    pub fn equipped_armor(&self) -> Option<&EquipmentItem> {
        self.equipped_items()
            .find(|i| i.kind == ItemKind::Armor && !i.is_shield && !i.is_natural)
    }

    pub fn equipped_shield(&self) -> Option<&EquipmentItem> {
        self.equipped_items().find(|i| i.is_shield)
    }
}
