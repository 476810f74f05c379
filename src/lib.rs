//! # pegcomb - Ordered-Choice Parser Combinators
//!
//! Small composable parsers over immutable cursors, combined into
//! recursive-descent parsers for arbitrary token types.
//!
//! The engine is deterministic in the PEG sense:
//!
//! - **Ordered choice**: the first alternative that succeeds wins, even if a
//!   later one would have matched more input
//! - **Greedy repetition**: `many` keeps every match and never gives input back
//! - **Immutable cursors**: advancing returns a new cursor, so backtracking is
//!   just reusing an old value
//! - **Forward references**: recursive rules are wired up through [`Ref`]
//!
//! ```
//! use pegcomb::{AndExt, ManyExt, MapExt, OrExt, Parser, TextCursor};
//! use pegcomb::primitive::{end, is_token, one_of};
//!
//! let word = one_of('a'..='z').many(1).map(|cs: Vec<char>| cs.into_iter().collect::<String>());
//! let greeting = word.and_first(is_token('!').or(is_token('?'))).and_first(end(()));
//!
//! let (word, _) = greeting.parse(TextCursor::new("hello!")).unwrap();
//! assert_eq!(word, "hello");
//! assert!(greeting.parse(TextCursor::new("hello")).is_err());
//! ```

pub mod and;
pub mod between;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod many;
pub mod map;
pub mod opt;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod primitive;
pub mod reference;
pub mod seq;
pub mod text;
pub mod token;

pub use and::AndExt;
pub use between::between;
pub use cursor::Cursor;
pub use cursors::{ByteCursor, SliceCursor, TextCursor};
pub use error::{Failure, RefError};
pub use many::{ManyExt, many, some};
pub use map::{MapExt, map};
pub use opt::{OptExt, opt, optional};
pub use or::{OrExt, choice};
pub use outcome::{Outcome, OutcomeExt};
pub use parser::{Parser, SharedExt, SharedParser};
pub use primitive::{TokenSet, any, end, is_token, one_of};
pub use reference::{Ref, RefHandle};
pub use seq::{SeqExt, seq};
pub use token::Token;
