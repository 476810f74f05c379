use crate::error::Failure;
use crate::token::Token;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable position in a sequence of tokens. Advancing never
/// mutates a cursor, it returns a new one, so any cursor value that a parser
/// held on to stays valid for backtracking. This abstraction allows parsers to
/// work with different underlying data (text, bytes, lexer tokens) while
/// keeping the same combinator interface.
pub trait Cursor<'code>: Copy {
    /// The type of tokens this cursor iterates over
    type Element: Token;

    /// Get the token at the current cursor position
    ///
    /// Returns [`Failure::EndOfInput`] if the cursor is at the end of the sequence
    fn first(&self) -> Result<Self::Element, Failure>;

    /// Advance the cursor past the current token
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn rest(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-input cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn at_end(&self) -> bool {
        self.first().is_err()
    }
}
