pub mod slice;
pub mod text;

pub use slice::{ByteCursor, SliceCursor};
pub use text::TextCursor;
