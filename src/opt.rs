use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional, substituting a default
///
/// On failure of the inner parser this succeeds with a clone of `default`
/// and the original, unconsumed cursor.
#[derive(Debug, Clone)]
pub struct Opt<P, O> {
    parser: P,
    default: O,
}

impl<P, O> Opt<P, O> {
    pub fn new(parser: P, default: O) -> Self {
        Opt { parser, default }
    }
}

impl<'code, P, O> Parser<'code> for Opt<P, O>
where
    P: Parser<'code, Output = O>,
    O: Clone,
{
    type Cursor = P::Cursor;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Parser combinator that reports whether an optional parser matched
///
/// Yields `Some(value)` when the inner parser succeeds and `None`, without
/// consuming input, when it fails.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Opt parser
pub fn opt<'code, P>(parser: P, default: P::Output) -> Opt<P, P::Output>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Opt::new(parser, default)
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .opt() and .optional() method support for parsers
pub trait OptExt<'code>: Parser<'code> + Sized {
    fn opt(self, default: Self::Output) -> Opt<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Opt::new(self, default)
    }

    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptExt for all parsers
impl<'code, P> OptExt<'code> for P where P: Parser<'code> {}
