use std::borrow::Cow;
use thiserror::Error;

/// Why a parser rejected its input
///
/// Control flow only ever distinguishes success from failure; the variants and
/// the position they carry exist for diagnostics. Positions are in the units
/// of the cursor that produced them (token index, or byte offset for text).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("unexpected token at position {position}")]
    Unexpected { position: usize },

    #[error("unexpected end of input at position {position}")]
    EndOfInput { position: usize },

    #[error("expected end of input at position {position}")]
    TrailingInput { position: usize },

    #[error(
        "expected at least {needed} repetitions at position {position}, found {found}"
    )]
    TooFewRepetitions {
        position: usize,
        needed: usize,
        found: usize,
    },

    #[error("no alternatives to choose from at position {position}")]
    NoAlternatives { position: usize },

    #[error("rule `{rule}` used before it was bound (position {position})")]
    Unbound {
        rule: Cow<'static, str>,
        position: usize,
    },

    #[error("rule `{rule}` was dropped while still referenced (position {position})")]
    Dangling {
        rule: Cow<'static, str>,
        position: usize,
    },
}

impl Failure {
    /// Returns the position where this failure occurred
    pub fn position(&self) -> usize {
        match self {
            Failure::Unexpected { position }
            | Failure::EndOfInput { position }
            | Failure::TrailingInput { position }
            | Failure::TooFewRepetitions { position, .. }
            | Failure::NoAlternatives { position }
            | Failure::Unbound { position, .. }
            | Failure::Dangling { position, .. } => *position,
        }
    }

    /// Keep whichever failure made it further into the input
    ///
    /// Ties go to `self`, so folding alternatives left to right reports the
    /// earliest alternative among those that got equally far.
    pub fn furthest(self, other: Failure) -> Failure {
        if other.position() > self.position() {
            other
        } else {
            self
        }
    }
}

/// Errors raised while wiring up a grammar, as opposed to while parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefError {
    #[error("rule `{rule}` is already bound")]
    AlreadyBound { rule: Cow<'static, str> },
}
