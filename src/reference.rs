//! Forward references for recursive grammars
//!
//! A recursive rule has to mention itself before it exists. [`Ref`] is the
//! owner of a single-assignment slot: hand out [`RefHandle`]s to every place
//! in the grammar that calls back into the rule, then [`Ref::bind`] the real
//! definition once it has been built.
//!
//! Handles only hold a weak pointer to the slot, so a rule that contains
//! handles to itself does not keep itself alive. The `Ref` must outlive every
//! parse that reaches one of its handles.
//!
//! ```
//! use pegcomb::between::between;
//! use pegcomb::cursors::TextCursor;
//! use pegcomb::or::OrExt;
//! use pegcomb::parser::Parser;
//! use pegcomb::primitive::is_token;
//! use pegcomb::reference::Ref;
//!
//! let nested = Ref::named("nested");
//! let parens = between(is_token('('), nested.handle(), is_token(')'));
//! nested.bind(parens.or(is_token('a'))).unwrap();
//!
//! let (inner, _) = nested.parse(TextCursor::new("((a))")).unwrap();
//! assert_eq!(inner, 'a');
//! ```

use crate::cursor::Cursor;
use crate::error::{Failure, RefError};
use crate::outcome::Outcome;
use crate::parser::{Parser, SharedParser};
use log::{debug, trace, warn};
use std::borrow::Cow;
use std::cell::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};

const LOG_TARGET: &str = "pegcomb::rule";

type Slot<'code, C, O> = OnceCell<SharedParser<'code, C, O>>;

/// Owner of a rule definition that may be bound after it is referenced
///
/// The bound rule is tied to a single `'code` lifetime, so every input
/// parsed by a grammar must outlive the grammar itself. To run a recursive
/// grammar over short-lived inputs, such as lines read into a fresh
/// `String`, build the grammar from a function once per input:
///
/// ```
/// use pegcomb::between::between;
/// use pegcomb::cursors::TextCursor;
/// use pegcomb::or::OrExt;
/// use pegcomb::parser::Parser;
/// use pegcomb::primitive::is_token;
/// use pegcomb::reference::Ref;
///
/// fn nested<'code>() -> Ref<'code, TextCursor<'code>, char> {
///     let nested = Ref::named("nested");
///     let parens = between(is_token('('), nested.handle(), is_token(')'));
///     nested.bind(parens.or(is_token('a'))).unwrap();
///     nested
/// }
///
/// for depth in 1..4 {
///     let line = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
///     let (inner, _) = nested().parse(TextCursor::new(&line)).unwrap();
///     assert_eq!(inner, 'a');
/// }
/// ```
pub struct Ref<'code, C: Cursor<'code>, O> {
    rule: Cow<'static, str>,
    slot: Rc<Slot<'code, C, O>>,
}

impl<'code, C: Cursor<'code>, O> Ref<'code, C, O> {
    pub fn new() -> Self {
        Self::named("<anonymous>")
    }

    /// Create an unbound rule; the name shows up in failures and logs
    pub fn named(rule: impl Into<Cow<'static, str>>) -> Self {
        Ref {
            rule: rule.into(),
            slot: Rc::new(OnceCell::new()),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// A parser that calls back into this rule from elsewhere in the grammar
    pub fn handle(&self) -> RefHandle<'code, C, O> {
        RefHandle {
            rule: self.rule.clone(),
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Attach the rule's definition
    ///
    /// A rule can be bound exactly once; later attempts leave the first
    /// definition in place and return [`RefError::AlreadyBound`].
    pub fn bind<P>(&self, parser: P) -> Result<(), RefError>
    where
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        match self.slot.set(Rc::new(parser)) {
            Ok(()) => {
                debug!(target: LOG_TARGET, "bound rule `{}`", self.rule);
                Ok(())
            }
            Err(_) => {
                warn!(target: LOG_TARGET, "rule `{}` is already bound", self.rule);
                Err(RefError::AlreadyBound {
                    rule: self.rule.clone(),
                })
            }
        }
    }
}

impl<'code, C: Cursor<'code>, O> Default for Ref<'code, C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C: Cursor<'code>, O> fmt::Debug for Ref<'code, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref")
            .field("rule", &self.rule)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<'code, C: Cursor<'code>, O> Parser<'code> for Ref<'code, C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> Outcome<O, C> {
        parse_rule(&self.rule, &self.slot, cursor)
    }
}

/// Grammar-side handle to a [`Ref`]
pub struct RefHandle<'code, C: Cursor<'code>, O> {
    rule: Cow<'static, str>,
    slot: Weak<Slot<'code, C, O>>,
}

impl<'code, C: Cursor<'code>, O> RefHandle<'code, C, O> {
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl<'code, C: Cursor<'code>, O> Clone for RefHandle<'code, C, O> {
    fn clone(&self) -> Self {
        RefHandle {
            rule: self.rule.clone(),
            slot: self.slot.clone(),
        }
    }
}

impl<'code, C: Cursor<'code>, O> fmt::Debug for RefHandle<'code, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefHandle")
            .field("rule", &self.rule)
            .finish()
    }
}

impl<'code, C: Cursor<'code>, O> Parser<'code> for RefHandle<'code, C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> Outcome<O, C> {
        match self.slot.upgrade() {
            Some(slot) => parse_rule(&self.rule, &slot, cursor),
            None => Err(Failure::Dangling {
                rule: self.rule.clone(),
                position: cursor.position(),
            }),
        }
    }
}

fn parse_rule<'code, C: Cursor<'code>, O>(
    rule: &Cow<'static, str>,
    slot: &Slot<'code, C, O>,
    cursor: C,
) -> Outcome<O, C> {
    let Some(parser) = slot.get() else {
        return Err(Failure::Unbound {
            rule: rule.clone(),
            position: cursor.position(),
        });
    };

    trace!(target: LOG_TARGET, "enter `{}` at {}", rule, cursor.position());
    let outcome = parser.parse(cursor);
    match &outcome {
        Ok((_, next)) => trace!(
            target: LOG_TARGET,
            "`{}` matched {}..{}",
            rule,
            cursor.position(),
            next.position()
        ),
        Err(failure) => trace!(target: LOG_TARGET, "`{}` failed: {}", rule, failure),
    }
    outcome
}
