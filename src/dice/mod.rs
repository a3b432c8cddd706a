//! Dice expression handling
//!
//! The engine never generates randomness itself: callers inject a
//! `DieRoller` and the engine only combines the produced die results.
//! A malformed expression is a recoverable error; callers treat the
//! missing value as "no value available", never as zero.

pub mod parser;

use crate::core::error::{EngineError, Result};
use nom::combinator::all_consuming;
use nom::Parser;
use parser::Term;

/// Source of raw die results, injected by the surrounding system
pub trait DieRoller {
    /// Produce one die result in `1..=sides`
    fn roll(&mut self, sides: u32) -> u32;
}

/// A parsed, evaluatable dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceFormula {
    terms: Vec<(i32, Term)>,
}

impl DiceFormula {
    /// Parse an expression such as `"1d6 + @mod"` or `"2d8 - 1"`
    pub fn parse(input: &str) -> Result<Self> {
        let (_, terms) = all_consuming(parser::formula)
            .parse(input)
            .map_err(|_| EngineError::MalformedFormula(input.to_string()))?;

        // Zero-sided dice are as malformed as bad syntax
        if terms
            .iter()
            .any(|(_, t)| matches!(t, Term::Dice { sides: 0, .. }))
        {
            return Err(EngineError::MalformedFormula(input.to_string()));
        }

        Ok(Self { terms })
    }

    /// Evaluate with `@mod` replaced by `modifier`, drawing die results
    /// from `roller`
    pub fn evaluate(&self, modifier: i32, roller: &mut dyn DieRoller) -> i32 {
        self.terms
            .iter()
            .map(|(sign, term)| {
                let value = match term {
                    Term::Dice { count, sides } => {
                        (0..*count).map(|_| roller.roll(*sides) as i32).sum()
                    }
                    Term::Constant(n) => *n,
                    Term::Modifier => modifier,
                };
                sign * value
            })
            .sum()
    }
}

/// Roller that replays a fixed sequence, for deterministic tests
pub struct SequenceRoller {
    results: Vec<u32>,
    next: usize,
}

impl SequenceRoller {
    pub fn new(results: Vec<u32>) -> Self {
        Self { results, next: 0 }
    }
}

impl DieRoller for SequenceRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.results.get(self.next).copied().unwrap_or(1);
        self.next += 1;
        value.clamp(1, sides.max(1))
    }
}
