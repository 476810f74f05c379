use crate::cursor::Cursor;
use crate::error::Failure;

/// Cursor over UTF-8 text yielding one `char` at a time
///
/// Positions are byte offsets into the text and always fall on a character
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCursor<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        TextCursor { text, offset: 0 }
    }

    /// The whole underlying text, regardless of position
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        self.text.get(self.offset..).unwrap_or("")
    }
}

impl<'code> Cursor<'code> for TextCursor<'code> {
    type Element = char;

    fn first(&self) -> Result<Self::Element, Failure> {
        self.remaining().chars().next().ok_or(Failure::EndOfInput {
            position: self.offset,
        })
    }

    fn rest(self) -> Self {
        match self.remaining().chars().next() {
            Some(ch) => TextCursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.offset
    }
}
