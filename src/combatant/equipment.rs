//! Equipment items: weapons, armor, and carried gear
//!
//! Items carry every field the rules read from them; absent armor fields
//! are `None`, never zero, so downstream mitigation can tell "no armor
//! value" apart from "armor value 0".

use crate::combatant::mastery::MasteryLevel;
use crate::core::types::{ArmorWeight, DamageType, ItemKind, WeaponCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub kind: ItemKind,
    /// Weight per unit, in coins
    pub weight: i32,
    pub quantity: i32,

    /// Base armor value, used for armor-value mitigation
    pub ac_value: Option<i32>,
    /// Total descending AC granted when worn; `None` when unresolved
    pub ac_total: Option<i32>,
    /// Flat modifier accumulated into the AC record
    pub ac_mod: i32,
    pub is_shield: bool,
    pub is_natural: bool,
    pub armor_weight: ArmorWeight,

    pub equipped: bool,
    pub dropped: bool,
    /// Stored inside a container; excluded from encumbrance
    pub contained: bool,

    /// Slow weapons act last within a tied initiative roll
    pub slow: bool,
    pub category: WeaponCategory,
    pub damage_type: DamageType,
    pub mastery: Option<MasteryLevel>,
}

impl EquipmentItem {
    pub fn new(name: &str, kind: ItemKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            weight: 0,
            quantity: 1,
            ac_value: None,
            ac_total: None,
            ac_mod: 0,
            is_shield: false,
            is_natural: false,
            armor_weight: ArmorWeight::Unarmored,
            equipped: false,
            dropped: false,
            contained: false,
            slow: false,
            category: WeaponCategory::Handheld,
            damage_type: DamageType::Physical,
            mastery: None,
        }
    }

    /// One-handed sword
    pub fn sword() -> Self {
        let mut item = Self::new("Sword", ItemKind::Weapon);
        item.weight = 60;
        item.damage_type = DamageType::Slashing;
        item.equipped = true;
        item
    }

    /// Two-handed weapon, slow in initiative
    pub fn two_handed_sword() -> Self {
        let mut item = Self::new("Two-Handed Sword", ItemKind::Weapon);
        item.weight = 150;
        item.damage_type = DamageType::Slashing;
        item.slow = true;
        item.equipped = true;
        item
    }

    /// Missile weapon
    pub fn long_bow() -> Self {
        let mut item = Self::new("Long Bow", ItemKind::Weapon);
        item.weight = 30;
        item.damage_type = DamageType::Piercing;
        item.equipped = true;
        item
    }

    /// Worn body armor
    pub fn chain_mail() -> Self {
        let mut item = Self::new("Chain Mail", ItemKind::Armor);
        item.weight = 400;
        item.ac_total = Some(4);
        item.ac_value = Some(5);
        item.armor_weight = ArmorWeight::Heavy;
        item.equipped = true;
        item
    }

    pub fn leather_armor() -> Self {
        let mut item = Self::new("Leather Armor", ItemKind::Armor);
        item.weight = 200;
        item.ac_total = Some(7);
        item.ac_value = Some(2);
        item.armor_weight = ArmorWeight::Light;
        item.equipped = true;
        item
    }

    pub fn shield() -> Self {
        let mut item = Self::new("Shield", ItemKind::Armor);
        item.weight = 100;
        item.ac_value = Some(1);
        item.is_shield = true;
        item.equipped = true;
        item
    }

    /// Monster hide; fully overrides the computed armor class
    pub fn natural_armor(ac_total: i32, ac_value: i32) -> Self {
        let mut item = Self::new("Natural Armor", ItemKind::Armor);
        item.ac_total = Some(ac_total);
        item.ac_value = Some(ac_value);
        item.is_natural = true;
        item.category = WeaponCategory::Natural;
        item.equipped = true;
        item
    }

    pub fn treasure(weight: i32, quantity: i32) -> Self {
        let mut item = Self::new("Coins", ItemKind::Treasure);
        item.weight = weight;
        item.quantity = quantity;
        item
    }

    pub fn torch() -> Self {
        let mut item = Self::new("Torch", ItemKind::LightSource);
        item.weight = 20;
        item
    }

    /// Counted toward carried weight at all? Dropped and contained items
    /// are excluded everywhere.
    pub fn carried(&self) -> bool {
        !self.dropped && !self.contained
    }
}
