use crate::cursor::Cursor;
use crate::outcome::Outcome;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// Parsers are stateless values: the same parser may be run any number of
/// times on different cursors without observable history.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. The input
    /// cursor is never modified, so a caller that sees a failure can retry
    /// from the very same position.
    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser that can be cloned cheaply
///
/// Lists of alternatives or sequence components must share a single type, so
/// heterogeneous parsers are erased into this before being collected.
pub type SharedParser<'code, C, O> = Rc<dyn Parser<'code, Cursor = C, Output = O> + 'code>;

/// Extension trait to add .shared() method support for parsers
pub trait SharedExt<'code>: Parser<'code> + Sized + 'code {
    fn shared(self) -> SharedParser<'code, Self::Cursor, Self::Output> {
        Rc::new(self)
    }
}

/// Implement SharedExt for all parsers
impl<'code, P> SharedExt<'code> for P where P: Parser<'code> + 'code {}
