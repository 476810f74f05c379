use crate::error::Failure;

/// The result of running a parser
///
/// Success carries the produced value and the cursor after the consumed input.
/// A failure carries no cursor at all, so callers cannot pick up a stale
/// position without first matching on the variant.
pub type Outcome<O, C> = Result<(O, C), Failure>;

/// Accessors for the success half of an [`Outcome`]
pub trait OutcomeExt<O, C> {
    /// Whether the parse succeeded
    fn succeeded(&self) -> bool;

    /// The cursor after the consumed input, or `None` for a failure
    fn remaining(&self) -> Option<&C>;

    /// The produced value, or `None` for a failure
    fn value(&self) -> Option<&O>;
}

impl<O, C> OutcomeExt<O, C> for Outcome<O, C> {
    fn succeeded(&self) -> bool {
        self.is_ok()
    }

    fn remaining(&self) -> Option<&C> {
        self.as_ref().ok().map(|(_, cursor)| cursor)
    }

    fn value(&self) -> Option<&O> {
        self.as_ref().ok().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_exposes_value_and_cursor() {
        let outcome: Outcome<char, usize> = Ok(('a', 1));

        assert!(outcome.succeeded());
        assert_eq!(outcome.value(), Some(&'a'));
        assert_eq!(outcome.remaining(), Some(&1));
    }

    #[test]
    fn test_failure_exposes_nothing() {
        let outcome: Outcome<char, usize> = Err(Failure::Unexpected { position: 3 });

        assert!(!outcome.succeeded());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.remaining(), None);
    }
}
