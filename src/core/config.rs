//! Rules configuration
//!
//! Which rule variants are in force for a session. Loaded once (typically
//! from TOML) and threaded into every component via `RulesContext`.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Attack-resolution rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToHitSystem {
    /// Linear: hit AC = base attack rating - roll total
    Thac0,
    /// Ascending armor class, roll total compared directly
    Aac,
    /// Generated table, strict +1 per step, clamped [2, 20]
    Classic,
    /// Generated table with plateaus at roll 20
    DarkDungeons,
    /// Generated table with longer plateaus at every tenth roll value
    Heroic,
}

/// Carried-weight tracking variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncumbranceOption {
    /// Not tracked at all; always unencumbered
    None,
    /// Tier chosen from worn armor weight class only
    Basic,
    /// Weapons, ammunition, armor and treasure count, plus a gear allowance
    Classic,
    /// As classic, but every carried item counts
    Expert,
}

/// Initiative comparator variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InitiativeMode {
    /// Roll order only; slow weapons are ignored
    Simple,
    /// Slow weapons act last within a tied roll
    Individual,
    /// As individual, plus declared-action phase ordering
    IndividualChecklist,
}

/// Complete rule-variant selection for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesConfig {
    /// Which attack-resolution family is in force
    pub to_hit_system: ToHitSystem,

    /// Which carried-weight strategy is in force
    pub encumbrance: EncumbranceOption,

    /// Identifier of the active ability modifier table set
    ///
    /// Unknown identifiers fall back to the classic shared table with a
    /// logged warning; they are never fatal.
    pub ability_score_mods: String,

    /// Whether combatants declare actions before initiative is compared
    pub declared_actions: bool,

    /// Initiative comparator variant
    pub initiative_mode: InitiativeMode,

    /// Mitigate physical damage by armor value instead of the flat
    /// self-damage modifier
    pub use_armor_value: bool,

    /// Dice expression rolled per combatant for initiative; `@mod` is
    /// replaced by the combatant's initiative modifier
    pub initiative_formula: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            to_hit_system: ToHitSystem::Thac0,
            encumbrance: EncumbranceOption::Classic,
            ability_score_mods: "classic".to_string(),
            declared_actions: false,
            initiative_mode: InitiativeMode::Individual,
            use_armor_value: false,
            initiative_formula: "1d6 + @mod".to_string(),
        }
    }
}

impl RulesConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
