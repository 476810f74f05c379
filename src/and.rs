use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The two parsers may produce different output types, which the n-ary
/// [`Seq`](crate::seq::Seq) cannot express without erasing them first.
///
/// Note: When chaining multiple `.and_pair()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use pegcomb::and::AndExt;
/// use pegcomb::cursors::TextCursor;
/// use pegcomb::parser::Parser;
/// use pegcomb::primitive::{is_token, one_of};
///
/// let cursor = TextCursor::new("a7");
/// let ((letter, digit), cursor) = is_token('a')
///     .and_pair(one_of('0'..='9'))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!((letter, digit), ('a', '7'));
/// assert_eq!(cursor.remaining(), "");
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequences two parsers and keeps only the first result
#[derive(Debug, Clone)]
pub struct AndFirst<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndFirst<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndFirst { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for AndFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        let (result, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((result, cursor))
    }
}

/// Sequences two parsers and keeps only the second result
#[derive(Debug, Clone)]
pub struct AndSecond<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> AndSecond<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        AndSecond { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for AndSecond<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and_pair<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Convenience function to create an AndFirst parser
pub fn and_first<'code, P1, P2>(parser1: P1, parser2: P2) -> AndFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    AndFirst::new(parser1, parser2)
}

/// Convenience function to create an AndSecond parser
pub fn and_second<'code, P1, P2>(parser1: P1, parser2: P2) -> AndSecond<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    AndSecond::new(parser1, parser2)
}

/// Extension trait to add the pairing methods to all parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and_pair<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }

    fn and_first<P>(self, other: P) -> AndFirst<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        AndFirst::new(self, other)
    }

    fn and_second<P>(self, other: P) -> AndSecond<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        AndSecond::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;
    use crate::error::Failure;
    use crate::map::MapExt;
    use crate::primitive::{end, is_token, one_of};

    #[test]
    fn test_and_pair_both_succeed() {
        let cursor = TextCursor::new("A5xyz");
        let parser = is_token('A').and_pair(is_token('5'));

        let ((c1, c2), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c1, 'A');
        assert_eq!(c2, '5');
        assert_eq!(cursor.first().unwrap(), 'x');
    }

    #[test]
    fn test_and_pair_heterogeneous_outputs() {
        let cursor = TextCursor::new("#7");
        let digit = one_of('0'..='9').map(|c: char| c.to_digit(10).unwrap_or(0));
        let parser = is_token('#').and_pair(digit);

        let ((hash, n), _) = parser.parse(cursor).unwrap();
        assert_eq!(hash, '#');
        assert_eq!(n, 7u32);
    }

    #[test]
    fn test_and_pair_first_fails() {
        let cursor = TextCursor::new("Bxyz");
        let parser = is_token('A').and_pair(is_token('x'));

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::Unexpected { position: 0 })
        );
    }

    #[test]
    fn test_and_pair_second_fails() {
        let cursor = TextCursor::new("Axyz");
        let parser = is_token('A').and_pair(is_token('5'));

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::Unexpected { position: 1 })
        );
    }

    #[test]
    fn test_and_pair_chain() {
        let cursor = TextCursor::new("A5B");
        let parser = is_token('A').and_pair(is_token('5')).and_pair(is_token('B'));

        let (((a, five), b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, five, b), ('A', '5', 'B'));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_and_first_keeps_first() {
        let cursor = TextCursor::new("x;");
        let parser = is_token('x').and_first(is_token(';'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 'x');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_and_first_requires_second() {
        let cursor = TextCursor::new("x,");
        let parser = and_first(is_token('x'), is_token(';'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_and_second_keeps_second() {
        let cursor = TextCursor::new("-9");
        let parser = and_second(is_token('-'), one_of('0'..='9'));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, '9');
    }

    #[test]
    fn test_and_first_with_end_requires_full_input() {
        let parser = is_token('a').and_first(end(()));

        assert!(parser.parse(TextCursor::new("a")).is_ok());
        assert_eq!(
            parser.parse(TextCursor::new("ab")),
            Err(Failure::TrailingInput { position: 1 })
        );
    }

    #[test]
    fn test_function_syntax() {
        let cursor = TextCursor::new("XY");
        let parser = and_pair(is_token('X'), is_token('Y'));

        let ((x, y), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((x, y), ('X', 'Y'));
        assert!(cursor.at_end());
    }
}
