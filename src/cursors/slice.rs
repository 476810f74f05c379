use crate::cursor::Cursor;
use crate::error::Failure;
use crate::token::Token;

/// Cursor over a slice of tokens
///
/// Works for raw bytes as well as for the output of a lexing stage.
#[derive(Debug, PartialEq, Eq)]
pub enum SliceCursor<'code, T> {
    Valid { data: &'code [T], position: usize },
    EndOfInput { data: &'code [T] },
}

// Only the slice reference is copied, so tokens need not be `Copy`
impl<'code, T> Clone for SliceCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T> Copy for SliceCursor<'code, T> {}

impl<'code, T> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfInput { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// The whole underlying sequence, regardless of position
    pub fn source(&self) -> &'code [T] {
        match self {
            SliceCursor::Valid { data, .. } | SliceCursor::EndOfInput { data } => data,
        }
    }

    /// The tokens not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        match self {
            SliceCursor::Valid { data, position } => data.get(*position..).unwrap_or(&[]),
            SliceCursor::EndOfInput { .. } => &[],
        }
    }
}

impl<'code, T: Token> Cursor<'code> for SliceCursor<'code, T> {
    type Element = T;

    fn first(&self) -> Result<Self::Element, Failure> {
        match self {
            SliceCursor::Valid { data, position } => data
                .get(*position)
                .cloned()
                .ok_or(Failure::EndOfInput {
                    position: *position,
                }),
            SliceCursor::EndOfInput { data } => Err(Failure::EndOfInput {
                position: data.len(),
            }),
        }
    }

    fn rest(self) -> Self {
        match self {
            SliceCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    SliceCursor::EndOfInput { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            SliceCursor::EndOfInput { data } => SliceCursor::EndOfInput { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfInput { data } => data.len(),
        }
    }

    fn at_end(&self) -> bool {
        self.position() >= self.source().len()
    }
}

/// A specialized cursor for byte data
pub type ByteCursor<'code> = SliceCursor<'code, u8>;
