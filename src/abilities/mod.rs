pub mod tables;

pub use tables::{AbilityTableSet, ModifierTable, RetainerStats, ThresholdRow};
