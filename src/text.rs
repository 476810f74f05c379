//! Whitespace-skipping helpers for character input
//!
//! These are thin sugar over the primitives for grammars that read a
//! [`TextCursor`] directly instead of going through a separate lexer.

use crate::and::AndExt;
use crate::cursors::TextCursor;
use crate::many::ManyExt;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::primitive::{TokenSet, is_token, one_of};

/// Skips any run of spaces, tabs and newlines, including none, yielding `' '`
pub fn space<'code>() -> impl Parser<'code, Cursor = TextCursor<'code>, Output = char> + Clone {
    one_of(" \t\n").many(0).map(|_: Vec<char>| ' ')
}

/// Matches `expected` after skipping leading whitespace
pub fn consume_char<'code>(
    expected: char,
) -> impl Parser<'code, Cursor = TextCursor<'code>, Output = char> + Clone {
    space().and_second(is_token(expected))
}

/// Matches any character of `chars` after skipping leading whitespace
pub fn char_set<'code, S>(chars: S) -> impl Parser<'code, Cursor = TextCursor<'code>, Output = char> + Clone
where
    S: TokenSet<char> + Clone,
{
    space().and_second(one_of(chars))
}

/// Matches a single ASCII digit
pub fn digit<'code>() -> impl Parser<'code, Cursor = TextCursor<'code>, Output = char> + Clone {
    one_of('0'..='9')
}
