//! The per-session rules context
//!
//! Built once from configuration and threaded by reference into every
//! component: no global registry, no string-keyed lookup. Also drives
//! the preparation pass that recomputes a combatant's derived fields.

use crate::abilities::AbilityTableSet;
use crate::armor::recompute_armor_class;
use crate::attack::ToHitResolver;
use crate::combatant::Combatant;
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::encumbrance::EncumbranceStrategy;
use std::path::Path;

pub struct RulesContext {
    pub config: RulesConfig,
    pub abilities: AbilityTableSet,
    pub resolver: ToHitResolver,
    pub encumbrance: EncumbranceStrategy,
}

impl RulesContext {
    pub fn new(config: RulesConfig) -> Self {
        let abilities = AbilityTableSet::for_id(&config.ability_score_mods);
        let resolver = ToHitResolver::from_config(config.to_hit_system);
        let encumbrance = EncumbranceStrategy::from_config(config.encumbrance);
        Self {
            config,
            abilities,
            resolver,
            encumbrance,
        }
    }

    /// Build a context straight from a TOML configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(RulesConfig::load(path)?))
    }

    /// The preparation pass: recompute every derived field on a
    /// combatant from its current equipment and modifiers
    ///
    /// Always a full recomputation; nothing is diffed or cached across
    /// mutations.
    pub fn prepare(&self, combatant: &mut Combatant) -> Vec<String> {
        combatant.refresh_abilities(&self.abilities);
        let mut digest = recompute_armor_class(combatant);
        digest.extend(self.encumbrance.recompute(combatant));
        digest
    }
}
