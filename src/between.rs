use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// This parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded. Whitespace is not skipped; wrap the
/// delimiters with [`consume_char`](crate::text::consume_char) for that.
///
/// # Examples
/// - `"(a)"` → `'a'`
/// - `"[content]"` → whatever the content parser yields for `content`
#[derive(Debug, Clone)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Output, Self::Cursor> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;
    use crate::error::Failure;
    use crate::many::ManyExt;
    use crate::primitive::{is_token, one_of};

    #[test]
    fn test_parentheses() {
        let cursor = TextCursor::new("(a)");
        let parser = between(is_token('('), is_token('a'), is_token(')'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 'a');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_brackets_with_repetition() {
        let cursor = TextCursor::new("[abc] rest");
        let parser = between(is_token('['), one_of('a'..='z').many(1), is_token(']'));

        let (letters, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(letters, vec!['a', 'b', 'c']);
        assert_eq!(cursor.first().unwrap(), ' ');
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let cursor = TextCursor::new("a)");
        let parser = between(is_token('('), is_token('a'), is_token(')'));

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::Unexpected { position: 0 })
        );
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let cursor = TextCursor::new("(a");
        let parser = between(is_token('('), is_token('a'), is_token(')'));

        assert_eq!(
            parser.parse(cursor),
            Err(Failure::EndOfInput { position: 2 })
        );
    }
}
