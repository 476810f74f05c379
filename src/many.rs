use crate::cursor::Cursor;
use crate::error::Failure;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that greedily repeats a parser at least `at_least` times
///
/// The base parser is applied until it fails and every result is collected.
/// Repetition never gives back matches to let a following parser succeed.
/// If fewer than `at_least` repetitions matched, the whole parser fails and
/// the partial progress is discarded.
///
/// A base parser that succeeds without consuming input would match forever;
/// repetition stops at the first such match once the minimum count is met.
/// That zero-width match is still part of the output, so `end(()).many(0)`
/// on empty input yields one `()`.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
    at_least: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, at_least: usize) -> Self {
        Many { parser, at_least }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, start: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        let mut results = Vec::new();
        let mut cursor = start;

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            let stalled = next_cursor.position() == cursor.position();
            results.push(value);
            cursor = next_cursor;
            if stalled && results.len() >= self.at_least {
                break;
            }
        }

        if results.len() >= self.at_least {
            Ok((results, cursor))
        } else {
            Err(Failure::TooFewRepetitions {
                position: start.position(),
                needed: self.at_least,
                found: results.len(),
            })
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P, at_least: usize) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, at_least)
}

/// Convenience function for one or more repetitions
pub fn some<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, 1)
}

/// Extension trait to add .many() and .some() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self, at_least: usize) -> Many<Self> {
        Many::new(self, at_least)
    }

    fn some(self) -> Many<Self> {
        Many::new(self, 1)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::{ByteCursor, TextCursor};
    use crate::opt::OptExt;
    use crate::or::OrExt;
    use crate::primitive::{any, end, is_token};

    #[test]
    fn test_many_zero_matches() {
        let cursor = TextCursor::new("xyz");
        let parser = many(is_token('a'), 0);

        let (results, rest) = parser.parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = TextCursor::new("aaabcd");
        let parser = is_token('a').many(0);

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.first().unwrap(), 'b');
    }

    #[test]
    fn test_many_thresholds() {
        let cursor = TextCursor::new("abc");
        let letter = is_token('a').or(is_token('b')).or(is_token('c'));

        let (all, rest) = letter.clone().many(0).parse(cursor).unwrap();
        assert_eq!(all, vec!['a', 'b', 'c']);
        assert!(rest.at_end());

        let (all, _) = letter.clone().many(2).parse(cursor).unwrap();
        assert_eq!(all, vec!['a', 'b', 'c']);

        assert_eq!(
            letter.many(4).parse(cursor),
            Err(Failure::TooFewRepetitions {
                position: 0,
                needed: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn test_many_exact_threshold() {
        let cursor = ByteCursor::new(b"aab");
        let parser = is_token(b'a').many(2);

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_some_requires_one() {
        assert!(some(is_token('a')).parse(TextCursor::new("b")).is_err());
        assert!(is_token('a').some().parse(TextCursor::new("")).is_err());

        let (results, _) = is_token('a').some().parse(TextCursor::new("ab")).unwrap();
        assert_eq!(results, vec!['a']);
    }

    #[test]
    fn test_many_consumes_everything() {
        let cursor = TextCursor::new("hello");
        let parser = any().many(0);

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_many_is_greedy() {
        // a* 'a' can never match: the repetition keeps every 'a'
        let cursor = TextCursor::new("aaa");
        let parser = is_token('a').many(0).and_pair(is_token('a'));

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::EndOfInput { position: 3 })
        );
    }

    #[test]
    fn test_many_zero_width_terminates() {
        let cursor = TextCursor::new("abc");
        let parser = is_token('x').opt('-').many(0);

        let (results, rest) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['-']);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_many_keeps_the_zero_width_match() {
        let cursor = TextCursor::new("");
        let parser = end(()).many(0);

        let (results, rest) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec![()]);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_many_zero_width_meets_minimum() {
        let cursor = TextCursor::new("");
        let parser = end(()).many(3);

        let (results, rest) = parser.parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert!(rest.at_end());
    }
}
