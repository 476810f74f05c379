use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::{Parser, SharedParser};
use std::fmt;
use std::rc::Rc;

/// Parser combinator that runs a list of same-typed parsers one after another
///
/// Every component must succeed, each starting where the previous one
/// stopped; the results are collected in order. The first failing component
/// fails the whole sequence and later components are never run.
pub struct Seq<'code, C: Cursor<'code>, O> {
    parsers: Vec<SharedParser<'code, C, O>>,
}

impl<'code, C: Cursor<'code>, O> Seq<'code, C, O> {
    pub fn new(parsers: Vec<SharedParser<'code, C, O>>) -> Self {
        Seq { parsers }
    }

    /// Append one more component, flattening into the same result list
    pub fn and_then<P>(mut self, next: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        self.parsers.push(Rc::new(next));
        self
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl<'code, C: Cursor<'code>, O> Clone for Seq<'code, C, O> {
    fn clone(&self) -> Self {
        Seq {
            parsers: self.parsers.clone(),
        }
    }
}

impl<'code, C: Cursor<'code>, O> fmt::Debug for Seq<'code, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("parsers", &self.parsers.len())
            .finish()
    }
}

impl<'code, C: Cursor<'code>, O> Parser<'code> for Seq<'code, C, O> {
    type Cursor = C;
    type Output = Vec<O>;

    fn parse(&self, mut cursor: C) -> Outcome<Vec<O>, C> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, C: Cursor<'code>, O>(parsers: Vec<SharedParser<'code, C, O>>) -> Seq<'code, C, O> {
    Seq::new(parsers)
}

/// Extension trait to add .and_then() method support for parsers
pub trait SeqExt<'code>: Parser<'code> + Sized + 'code {
    fn and_then<P>(self, next: P) -> Seq<'code, Self::Cursor, Self::Output>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output> + 'code,
    {
        Seq::new(vec![Rc::new(self), Rc::new(next)])
    }
}

/// Implement SeqExt for all parsers
impl<'code, P> SeqExt<'code> for P where P: Parser<'code> + 'code {}
