//! nom grammar for initiative dice expressions
//!
//! `formula := term (('+' | '-') term)*`
//! `term := [count] 'd' sides | "@mod" | integer`

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, map_res, opt};
use nom::multi::many0;
use nom::{IResult, Parser};

/// One additive term of a dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Dice { count: u32, sides: u32 },
    Constant(i32),
    /// The `@mod` placeholder, substituted at evaluation time
    Modifier,
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse).parse(input)
}

fn dice(input: &str) -> IResult<&str, Term> {
    map((opt(number), char('d'), number), |(count, _, sides)| {
        Term::Dice {
            count: count.unwrap_or(1),
            sides,
        }
    })
    .parse(input)
}

fn modifier(input: &str) -> IResult<&str, Term> {
    map(tag("@mod"), |_| Term::Modifier).parse(input)
}

fn constant(input: &str) -> IResult<&str, Term> {
    map(number, |n| Term::Constant(n as i32)).parse(input)
}

fn term(input: &str) -> IResult<&str, Term> {
    alt((dice, modifier, constant)).parse(input)
}

fn signed_tail(input: &str) -> IResult<&str, (i32, Term)> {
    map(
        (multispace0, alt((char('+'), char('-'))), multispace0, term),
        |(_, sign, _, t)| (if sign == '-' { -1 } else { 1 }, t),
    )
    .parse(input)
}

/// Parse a full expression into signed terms; the first term is positive
pub fn formula(input: &str) -> IResult<&str, Vec<(i32, Term)>> {
    map(
        (multispace0, term, many0(signed_tail), multispace0),
        |(_, first, rest, _)| {
            let mut terms = vec![(1, first)];
            terms.extend(rest);
            terms
        },
    )
    .parse(input)
}
