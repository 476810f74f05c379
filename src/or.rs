use crate::cursor::Cursor;
use crate::error::Failure;
use crate::outcome::Outcome;
use crate::parser::{Parser, SharedParser};
use std::fmt;
use std::rc::Rc;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// This is ordered choice: when the first parser succeeds its result is
/// returned even if the second would have matched more input. When both fail
/// the failure that got further into the input is reported.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(first) => self
                .parser2
                .parse(cursor)
                .map_err(|second| first.furthest(second)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of same-typed alternatives
///
/// Alternatives are tried left to right from the same cursor and the first
/// success wins. The list can be grown with [`Choice::or`].
pub struct Choice<'code, C: Cursor<'code>, O> {
    alternatives: Vec<SharedParser<'code, C, O>>,
}

impl<'code, C: Cursor<'code>, O> Choice<'code, C, O> {
    pub fn new(alternatives: Vec<SharedParser<'code, C, O>>) -> Self {
        Choice { alternatives }
    }

    /// Append an alternative that is tried after all existing ones
    pub fn or<P>(mut self, alternative: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        self.alternatives.push(Rc::new(alternative));
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<'code, C: Cursor<'code>, O> Clone for Choice<'code, C, O> {
    fn clone(&self) -> Self {
        Choice {
            alternatives: self.alternatives.clone(),
        }
    }
}

impl<'code, C: Cursor<'code>, O> fmt::Debug for Choice<'code, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

impl<'code, C: Cursor<'code>, O> Parser<'code> for Choice<'code, C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> Outcome<O, C> {
        let mut furthest: Option<Failure> = None;
        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(failure) => {
                    furthest = Some(match furthest {
                        Some(previous) => previous.furthest(failure),
                        None => failure,
                    });
                }
            }
        }
        Err(furthest.unwrap_or(Failure::NoAlternatives {
            position: cursor.position(),
        }))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, C: Cursor<'code>, O>(
    alternatives: Vec<SharedParser<'code, C, O>>,
) -> Choice<'code, C, O> {
    Choice::new(alternatives)
}
