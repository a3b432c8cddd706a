//! The five attack-resolution strategies
//!
//! Each maps (raw die result, roll total, base attack rating) to the
//! best armor class the roll defeats. The strategy is picked once from
//! configuration and carried in the rules context.

use crate::attack::tables::{best_hittable, plateau_table, static_table, HitTableEntry};
use crate::core::config::ToHitSystem;
use crate::core::constants::{
    DIE_MAX, DIE_MIN, EXTENDED_PLATEAU_REPEAT, PLATEAU_AC_FLOOR, PLATEAU_REPEAT,
};

/// Outcome of worst-hittable-AC resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResolution {
    /// Cannot hit anything (worst die result on table systems)
    Miss,
    /// Hits any target at this armor class or easier
    Ac(i32),
    /// Hits regardless of armor class (best die result)
    AlwaysHits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToHitResolver {
    /// hit AC = base attack rating - roll total
    Linear,
    /// hit AC = roll total, on the ascending scale
    Direct,
    /// Generated non-repeating table
    StaticTable,
    /// Generated plateau table (roll 20 repeats)
    Plateau,
    /// Generated plateau table with longer repeats at each tenth value
    ExtendedPlateau,
}

impl ToHitResolver {
    pub fn from_config(system: ToHitSystem) -> Self {
        match system {
            ToHitSystem::Thac0 => ToHitResolver::Linear,
            ToHitSystem::Aac => ToHitResolver::Direct,
            ToHitSystem::Classic => ToHitResolver::StaticTable,
            ToHitSystem::DarkDungeons => ToHitResolver::Plateau,
            ToHitSystem::Heroic => ToHitResolver::ExtendedPlateau,
        }
    }

    /// Does this strategy compare on the ascending scale?
    pub fn ascending(&self) -> bool {
        matches!(self, ToHitResolver::Direct)
    }

    /// Resolve the best (lowest) armor class this roll defeats
    ///
    /// The linear and direct strategies apply no die special-casing of
    /// their own; table strategies force a miss on a natural 1 and an
    /// unconditional hit on a natural 20.
    pub fn resolve(
        &self,
        die_result: i32,
        roll_total: i32,
        base_attack_rating: i32,
    ) -> HitResolution {
        match self {
            ToHitResolver::Linear => HitResolution::Ac(base_attack_rating - roll_total),
            ToHitResolver::Direct => HitResolution::Ac(roll_total),
            ToHitResolver::StaticTable | ToHitResolver::Plateau | ToHitResolver::ExtendedPlateau => {
                if die_result <= DIE_MIN {
                    return HitResolution::Miss;
                }
                if die_result >= DIE_MAX {
                    return HitResolution::AlwaysHits;
                }
                let table = self.build_table(base_attack_rating);
                match best_hittable(&table, roll_total) {
                    Some(ac) => {
                        if ac == PLATEAU_AC_FLOOR {
                            // Past the documented thresholds; clamped
                            // rather than extrapolated
                            tracing::warn!(
                                roll_total,
                                base_attack_rating,
                                "hit table lookup clamped at generation floor"
                            );
                        }
                        HitResolution::Ac(ac)
                    }
                    None => HitResolution::Miss,
                }
            }
        }
    }

    fn build_table(&self, base_attack_rating: i32) -> Vec<HitTableEntry> {
        match self {
            ToHitResolver::StaticTable => static_table(base_attack_rating),
            ToHitResolver::Plateau => {
                plateau_table(base_attack_rating, PLATEAU_REPEAT, |v| v == 20)
            }
            ToHitResolver::ExtendedPlateau => {
                plateau_table(base_attack_rating, EXTENDED_PLATEAU_REPEAT, |v| {
                    v >= 20 && v % 10 == 0
                })
            }
            ToHitResolver::Linear | ToHitResolver::Direct => Vec::new(),
        }
    }
}
