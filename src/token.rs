use std::fmt;

/// Trait for the elements a cursor yields
///
/// Tokens are opaque to the combinators: they are only ever cloned out of the
/// input and compared, either for equality or for membership in a token set.
/// Characters, bytes and the token enums of a separate lexing stage all qualify.
pub trait Token: Clone + PartialEq + fmt::Debug {}

impl<T> Token for T where T: Clone + PartialEq + fmt::Debug {}
