//! The parsers that look at the cursor directly
//!
//! Every other combinator only delegates to its children, so these are the
//! only places where a token is read and compared.

use crate::cursor::Cursor;
use crate::error::Failure;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

/// Parser that consumes and returns a single token, whatever it is
#[derive(Debug, Clone, Copy)]
pub struct AnyToken<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> AnyToken<C> {
    pub fn new() -> Self {
        AnyToken {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for AnyToken<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for AnyToken<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> Outcome<Self::Output, C> {
        let token = cursor.first()?;
        Ok((token, cursor.rest()))
    }
}

/// Convenience function to create an AnyToken parser
pub fn any<C>() -> AnyToken<C> {
    AnyToken::new()
}

/// Parser that matches one specific token
#[derive(Debug, Clone, Copy)]
pub struct IsToken<C, T> {
    expected: T,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, T> IsToken<C, T> {
    pub fn new(expected: T) -> Self {
        IsToken {
            expected,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, T> Parser<'code> for IsToken<C, T>
where
    C: Cursor<'code, Element = T>,
    T: PartialEq,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: C) -> Outcome<T, C> {
        let token = cursor.first()?;
        if token == self.expected {
            Ok((token, cursor.rest()))
        } else {
            Err(Failure::Unexpected {
                position: cursor.position(),
            })
        }
    }
}

/// Convenience function to create an IsToken parser
pub fn is_token<C, T>(expected: T) -> IsToken<C, T> {
    IsToken::new(expected)
}

/// A set of tokens that [`OneOf`] tests membership against
pub trait TokenSet<T> {
    fn contains_token(&self, token: &T) -> bool;
}

impl<T: PartialEq> TokenSet<T> for [T] {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T: PartialEq, const N: usize> TokenSet<T> for [T; N] {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T: PartialEq> TokenSet<T> for Vec<T> {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl TokenSet<char> for str {
    fn contains_token(&self, token: &char) -> bool {
        self.contains(*token)
    }
}

impl TokenSet<char> for String {
    fn contains_token(&self, token: &char) -> bool {
        self.as_str().contains_token(token)
    }
}

impl<T: Eq + Hash> TokenSet<T> for HashSet<T> {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T: Ord> TokenSet<T> for BTreeSet<T> {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T: PartialOrd> TokenSet<T> for RangeInclusive<T> {
    fn contains_token(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T, S> TokenSet<T> for &S
where
    S: TokenSet<T> + ?Sized,
{
    fn contains_token(&self, token: &T) -> bool {
        (**self).contains_token(token)
    }
}

/// Parser that matches any single token belonging to a set
#[derive(Debug, Clone)]
pub struct OneOf<C, S> {
    set: S,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, S> OneOf<C, S> {
    pub fn new(set: S) -> Self {
        OneOf {
            set,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, S> Parser<'code> for OneOf<C, S>
where
    C: Cursor<'code>,
    S: TokenSet<C::Element>,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> Outcome<Self::Output, C> {
        let token = cursor.first()?;
        if self.set.contains_token(&token) {
            Ok((token, cursor.rest()))
        } else {
            Err(Failure::Unexpected {
                position: cursor.position(),
            })
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<C, S>(set: S) -> OneOf<C, S> {
    OneOf::new(set)
}

/// Parser that succeeds with a fixed value only at the end of input
#[derive(Debug, Clone)]
pub struct End<C, V> {
    value: V,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, V> End<C, V> {
    pub fn new(value: V) -> Self {
        End {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, V> Parser<'code> for End<C, V>
where
    C: Cursor<'code>,
    V: Clone,
{
    type Cursor = C;
    type Output = V;

    fn parse(&self, cursor: C) -> Outcome<V, C> {
        if cursor.at_end() {
            Ok((self.value.clone(), cursor))
        } else {
            Err(Failure::TrailingInput {
                position: cursor.position(),
            })
        }
    }
}

/// Convenience function to create an End parser
pub fn end<C, V>(value: V) -> End<C, V> {
    End::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteCursor, SliceCursor, TextCursor};

    #[test]
    fn test_any_consumes_one() {
        let cursor = TextCursor::new("hi");

        let (ch, cursor) = any().parse(cursor).unwrap();
        assert_eq!(ch, 'h');
        assert_eq!(cursor.first().unwrap(), 'i');
    }

    #[test]
    fn test_any_fails_at_end() {
        let cursor = TextCursor::new("");

        let result = any().parse(cursor);
        assert_eq!(result, Err(Failure::EndOfInput { position: 0 }));
    }

    #[test]
    fn test_is_token_sequence_of_calls() {
        let cursor = TextCursor::new("abc");

        let (a, cursor) = is_token('a').parse(cursor).unwrap();
        let (b, cursor) = is_token('b').parse(cursor).unwrap();
        let (c, cursor) = is_token('c').parse(cursor).unwrap();
        assert_eq!((a, b, c), ('a', 'b', 'c'));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_is_token_mismatch_keeps_cursor() {
        let cursor = TextCursor::new("world");

        let result = is_token('h').parse(cursor);
        assert_eq!(result, Err(Failure::Unexpected { position: 0 }));
        // the caller's cursor is a value and still points at 'w'
        assert_eq!(cursor.first().unwrap(), 'w');
    }

    #[test]
    fn test_is_token_at_end() {
        let cursor = ByteCursor::new(b"a").rest();

        let result = is_token(b'a').parse(cursor);
        assert_eq!(result, Err(Failure::EndOfInput { position: 1 }));
    }

    #[test]
    fn test_is_token_lexer_tokens() {
        #[derive(Debug, Clone, PartialEq)]
        enum Tok {
            LParen,
            Ident(String),
        }

        let tokens = [Tok::LParen, Tok::Ident("x".to_string())];
        let cursor = SliceCursor::new(&tokens);

        let (tok, cursor) = is_token(Tok::LParen).parse(cursor).unwrap();
        assert_eq!(tok, Tok::LParen);
        let (tok, _) = is_token(Tok::Ident("x".to_string())).parse(cursor).unwrap();
        assert_eq!(tok, Tok::Ident("x".to_string()));
    }

    #[test]
    fn test_one_of_str_set() {
        let parser = one_of("+-");

        let (op, _) = parser.parse(TextCursor::new("-1")).unwrap();
        assert_eq!(op, '-');
        assert!(parser.parse(TextCursor::new("*1")).is_err());
    }

    #[test]
    fn test_one_of_range() {
        let parser = one_of('0'..='9');

        assert_eq!(parser.parse(TextCursor::new("7")).unwrap().0, '7');
        assert_eq!(
            parser.parse(TextCursor::new("a")),
            Err(Failure::Unexpected { position: 0 })
        );
    }

    #[test]
    fn test_one_of_byte_array_and_collections() {
        let cursor = ByteCursor::new(b"b");
        assert_eq!(one_of(b"abc").parse(cursor).unwrap().0, b'b');

        let hashed: HashSet<u8> = [b'x', b'b'].into_iter().collect();
        assert_eq!(one_of(hashed).parse(cursor).unwrap().0, b'b');

        let ordered: BTreeSet<u8> = [b'y'].into_iter().collect();
        assert!(one_of(ordered).parse(cursor).is_err());

        assert_eq!(one_of(vec![b'a', b'b']).parse(cursor).unwrap().0, b'b');
    }

    #[test]
    fn test_one_of_at_end() {
        let cursor = TextCursor::new("");

        assert_eq!(
            one_of("ab").parse(cursor),
            Err(Failure::EndOfInput { position: 0 })
        );
    }

    #[test]
    fn test_end_succeeds_only_at_end() {
        let cursor = TextCursor::new("ab");
        let parser = end('x');

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::TrailingInput { position: 0 })
        );

        let at_end = cursor.rest().rest();
        let (value, rest) = parser.parse(at_end).unwrap();
        assert_eq!(value, 'x');
        assert_eq!(rest, at_end);
    }
}
