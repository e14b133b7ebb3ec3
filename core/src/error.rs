//! Errors that might be returned by parsing.


/// The possible errors that might be returned by applying a rule.
///
/// It is generic over the `Location` type parameter so that errors carry the
/// position type of whatever [`Source`](trait.Source.html) was parsed.  The
/// enum is closed: every failure is either a rule that did not match or an
/// integer literal that did not fit its type.
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error<Location> {
    /// A rule's match condition was not met.  Recoverable: an enclosing
    /// optional or repetition adapter treats this as "absent".
    #[error("expected `{rule}`")]
    Expected {
        /// Identity of the rule that did not match
        rule: &'static str,
        /// Where it was tried
        at: Location,
    },
    /// An integer literal was syntactically well-formed but its value exceeds
    /// the bounds of the integer type it accumulates into.  Not recoverable: it
    /// propagates through optional and repetition adapters.
    #[error("integer overflow for type `{ty}`")]
    Overflow {
        /// Name of the integer type
        ty: &'static str,
        /// The digit that caused the bound to be exceeded
        at: Location,
    },
}

impl<Location> Error<Location>
    where Location: Copy,
{
    /// The location at which the error was raised.
    #[inline]
    pub fn location(&self) -> Location {
        match *self {
            Error::Expected { at, .. } | Error::Overflow { at, .. } => at,
        }
    }

    /// The rule identity of an `Expected` error, or the integer type name of an
    /// `Overflow` error.
    #[inline]
    pub fn rule(&self) -> &'static str {
        match *self {
            Error::Expected { rule, .. } => rule,
            Error::Overflow { ty, .. } => ty,
        }
    }

    /// Predicate for if an optional or repetition adapter may absorb this
    /// error as a non-match.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Expected { .. })
    }
}


/// The type returned by rules and by the cursor's attempt operations.
pub type Result<T, Location> = core::result::Result<T, Error<Location>>;
