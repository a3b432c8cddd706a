//! Threshold lookup tables for ability modifiers
//!
//! Lookup policy, everywhere: rows sorted descending by threshold, first
//! row whose threshold <= total wins, else the lowest-threshold row.

use crate::core::types::Ability;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One row of a modifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRow {
    /// Minimum ability total this row applies to
    pub threshold: i32,
    pub modifier: i32,
}

/// Descending-sorted modifier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierTable {
    rows: Vec<ThresholdRow>,
}

impl ModifierTable {
    /// Build a table; rows are sorted descending by threshold on entry
    pub fn new(mut rows: Vec<ThresholdRow>) -> Self {
        rows.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self { rows }
    }

    /// Highest threshold <= total wins; fallback to the lowest row
    pub fn lookup(&self, total: i32) -> i32 {
        self.rows
            .iter()
            .find(|row| total >= row.threshold)
            .or_else(|| self.rows.last())
            .map(|row| row.modifier)
            .unwrap_or(0)
    }
}

/// Derived retainer limits for player characters, from charisma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerStats {
    pub max_retainers: u32,
    pub morale: i32,
}

/// Charisma-keyed retainer table, same lookup policy as modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerTable {
    rows: Vec<(i32, RetainerStats)>,
}

impl RetainerTable {
    pub fn new(mut rows: Vec<(i32, RetainerStats)>) -> Self {
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        Self { rows }
    }

    pub fn lookup(&self, charisma_total: i32) -> RetainerStats {
        self.rows
            .iter()
            .find(|(threshold, _)| charisma_total >= *threshold)
            .or_else(|| self.rows.last())
            .map(|(_, stats)| *stats)
            .unwrap_or(RetainerStats {
                max_retainers: 0,
                morale: 0,
            })
    }
}

/// Table sourcing scheme: one shared table, or one table per ability
#[derive(Debug, Clone)]
pub enum TableScheme {
    Shared(ModifierTable),
    PerAbility(AHashMap<Ability, ModifierTable>),
}

/// The active set of ability tables for a session
#[derive(Debug, Clone)]
pub struct AbilityTableSet {
    scheme: TableScheme,
    retainer: RetainerTable,
}

/// The classic shared progression: 3 -> -3 up to 18 -> +3
fn classic_rows() -> Vec<ThresholdRow> {
    vec![
        ThresholdRow { threshold: 18, modifier: 3 },
        ThresholdRow { threshold: 16, modifier: 2 },
        ThresholdRow { threshold: 13, modifier: 1 },
        ThresholdRow { threshold: 9, modifier: 0 },
        ThresholdRow { threshold: 6, modifier: -1 },
        ThresholdRow { threshold: 4, modifier: -2 },
        ThresholdRow { threshold: 3, modifier: -3 },
    ]
}

/// Extended progression used by the advanced per-ability set for the
/// physical abilities, which keep scaling past 18
fn extended_rows() -> Vec<ThresholdRow> {
    let mut rows = classic_rows();
    rows.push(ThresholdRow { threshold: 19, modifier: 4 });
    rows
}

fn retainer_rows() -> Vec<(i32, RetainerStats)> {
    vec![
        (18, RetainerStats { max_retainers: 7, morale: 10 }),
        (16, RetainerStats { max_retainers: 6, morale: 9 }),
        (13, RetainerStats { max_retainers: 5, morale: 8 }),
        (9, RetainerStats { max_retainers: 4, morale: 7 }),
        (6, RetainerStats { max_retainers: 3, morale: 6 }),
        (4, RetainerStats { max_retainers: 2, morale: 5 }),
        (3, RetainerStats { max_retainers: 1, morale: 4 }),
    ]
}

impl AbilityTableSet {
    /// The classic scheme: a single table shared by every ability
    pub fn classic() -> Self {
        Self {
            scheme: TableScheme::Shared(ModifierTable::new(classic_rows())),
            retainer: RetainerTable::new(retainer_rows()),
        }
    }

    /// The advanced scheme: per-ability tables; strength and dexterity
    /// continue scaling past 18
    pub fn advanced() -> Self {
        let mut tables = AHashMap::new();
        for ability in Ability::ALL {
            let rows = match ability {
                Ability::Strength | Ability::Dexterity => extended_rows(),
                _ => classic_rows(),
            };
            tables.insert(ability, ModifierTable::new(rows));
        }
        Self {
            scheme: TableScheme::PerAbility(tables),
            retainer: RetainerTable::new(retainer_rows()),
        }
    }

    /// Resolve a table-set identifier from configuration
    ///
    /// Unknown identifiers warn and fall back to the classic set.
    pub fn for_id(id: &str) -> Self {
        match id {
            "classic" => Self::classic(),
            "advanced" => Self::advanced(),
            other => {
                tracing::warn!(table_set = other, "unknown ability table set, using classic");
                Self::classic()
            }
        }
    }

    /// Modifier for an ability total
    pub fn modifier_for(&self, ability: Ability, total: i32) -> i32 {
        match &self.scheme {
            TableScheme::Shared(table) => table.lookup(total),
            TableScheme::PerAbility(tables) => match tables.get(&ability) {
                Some(table) => table.lookup(total),
                None => {
                    tracing::warn!(?ability, "no table for ability, using zero modifier");
                    0
                }
            },
        }
    }

    /// Retainer limits from the charisma table (player characters only)
    pub fn retainer_stats(&self, charisma_total: i32) -> RetainerStats {
        self.retainer.lookup(charisma_total)
    }
}
