//! The backtracking reader that rules are applied to.

use core::any::type_name;

use crate::{Diagnostics, Error, Result, Rule, Source};


/// Reads terminals from a borrowed [`Source`](trait.Source.html), tracking the
/// current location, and owns the [`Diagnostics`](trait.Diagnostics.html) sink
/// that failures are reported to.
///
/// The location only moves forward, except for the rewinding done by
/// [`attempt`](#method.attempt) when a rule fails.  Because of that rewinding,
/// after any rule application (success or failure) the location reflects only
/// entirely-consumed terminals, and no rule ever observes the partial
/// consumption of another rule's failed attempt.
///
/// A `Cursor` is made for a single top-level parse and discarded after, at
/// which point its diagnostics can be taken back with
/// [`into_diagnostics`](#method.into_diagnostics).
#[derive(Debug)]
pub struct Cursor<'s, S, D>
    where S: Source + ?Sized,
{
    source: &'s S,
    location: S::Location,
    diagnostics: D,
}

impl<'s, S, D> Cursor<'s, S, D>
    where S: Source + ?Sized,
          D: Diagnostics<Location = S::Location, Terminal = S::Terminal>,
{
    /// Make a new `Cursor` positioned at the start of `source`.
    #[inline]
    pub fn new(source: &'s S, diagnostics: D) -> Self {
        Self {
            location: source.start(),
            source,
            diagnostics,
        }
    }

    /// The current location.
    #[inline]
    pub fn location(&self) -> S::Location {
        self.location
    }

    /// The sequence being read.
    #[inline]
    pub fn source(&self) -> &'s S {
        self.source
    }

    /// The diagnostics accumulated so far.
    #[inline]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Discard the cursor and hand back its diagnostics.
    #[inline]
    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// Predicate for if no terminal remains.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// The terminal at the current location, without advancing.  `None` at the
    /// end of input.
    #[inline]
    pub fn peek(&self) -> Option<S::Terminal> {
        self.source.terminal_at(self.location).map(|(terminal, _)| terminal)
    }

    /// Consume and return the terminal at the current location.  At the end of
    /// input, `None` is returned and the location is unchanged.
    #[inline]
    pub fn advance(&mut self) -> Option<S::Terminal> {
        let (terminal, next) = self.source.terminal_at(self.location)?;
        self.location = next;
        Some(terminal)
    }

    /// Apply the rule `R`.  On success, the location is left as the rule
    /// advanced it.  On failure, the location is rewound to what it was before
    /// the call and the error is propagated.
    pub fn attempt<R>(&mut self) -> Result<R::Construction, S::Location>
        where R: Rule<Location = S::Location, Terminal = S::Terminal>,
    {
        let saved = self.location;
        match R::parse(self) {
            Ok(construction) => Ok(construction),
            Err(error) => {
                if self.location != saved {
                    log::trace!(target: "gramma", "rewind {:?} -> {:?} after `{}`",
                                self.location, saved, R::name());
                    self.location = saved;
                }
                Err(error)
            }
        }
    }

    /// Apply the rule `R`, where it is fine if it does not match.  A
    /// recoverable failure of `R` yields `Ok(None)`, with the location rewound.
    /// A non-recoverable failure (overflow) is still propagated as an error,
    /// because a malformed construct is not an absent one.
    pub fn attempt_optional<R>(&mut self) -> Result<Option<R::Construction>, S::Location>
        where R: Rule<Location = S::Location, Terminal = S::Terminal>,
    {
        match self.attempt::<R>() {
            Ok(construction) => Ok(Some(construction)),
            Err(error) if error.is_recoverable() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Apply the rule `R` as many times as it matches, collecting the
    /// constructions in order into a new `Container`, which may be empty.
    /// Fails only for non-recoverable failures.
    pub fn attempt_many<R, Container>(&mut self) -> Result<Container, S::Location>
        where R: Rule<Location = S::Location, Terminal = S::Terminal>,
              Container: Default + Extend<R::Construction>,
    {
        let mut container = Container::default();
        self.attempt_many_into::<R, Container>(&mut container)?;
        Ok(container)
    }

    /// Like [`attempt_many`](#method.attempt_many) but extends an existing
    /// `container`.
    ///
    /// The repetition stops after a match that consumed nothing, since applying
    /// the same rule at the same location would match the same way forever.
    pub fn attempt_many_into<R, Container>(&mut self, container: &mut Container)
                                          -> Result<(), S::Location>
        where R: Rule<Location = S::Location, Terminal = S::Terminal>,
              Container: Extend<R::Construction>,
    {
        loop {
            let before = self.location;
            match self.attempt_optional::<R>()? {
                Some(construction) => {
                    container.extend(Some(construction));
                    if self.location == before {
                        return Ok(());
                    }
                }
                None => return Ok(()),
            }
        }
    }

    /// Raise, at `at`, the error that `R` did not match, and report it.
    pub fn expected<R>(&mut self, at: S::Location) -> Error<S::Location>
        where R: Rule + ?Sized,
    {
        self.raise(Error::Expected { rule: R::name(), at })
    }

    /// Raise, at `at`, the error that a value does not fit in the integer type
    /// `T`, and report it.
    pub fn overflow<T>(&mut self, at: S::Location) -> Error<S::Location> {
        self.raise(Error::Overflow { ty: type_name::<T>(), at })
    }

    fn raise(&mut self, error: Error<S::Location>) -> Error<S::Location> {
        let found = self.source.terminal_at(error.location()).map(|(terminal, _)| terminal);
        log::trace!(target: "gramma", "{} at {:?}, found {:?}", error, error.location(), found);
        self.diagnostics.report(&error, found);
        error
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        TerminalRule, NormalizedIntegerLiteral,
        digits::DecimalDigit,
        diagnostics::premade::{LastFailure, NoDiagnostics},
    };
    use core::marker::PhantomData;

    struct Lower<L>(PhantomData<L>);

    impl<L> TerminalRule for Lower<L> {
        type Location = L;
        type Terminal = u8;
        type Construction = u8;

        fn parse_terminal(terminal: u8) -> Option<u8> {
            terminal.is_ascii_lowercase().then_some(terminal)
        }
    }

    struct Counter<'a>(&'a mut usize);

    impl Extend<u8> for Counter<'_> {
        fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
            *self.0 += iter.into_iter().count();
        }
    }

    type Word = (Lower<usize>, Lower<usize>, Lower<usize>);
    type Byte = NormalizedIntegerLiteral<DecimalDigit<usize, u8, u8>,
                                         DecimalDigit<usize, u8, u8>>;

    fn cursor(source: &[u8]) -> Cursor<'_, [u8], LastFailure<usize, u8>> {
        Cursor::new(source, LastFailure::default())
    }

    #[test]
    fn peek_advance() {
        let mut c = Cursor::new(&b"xy"[..], NoDiagnostics::default());
        assert_eq!(c.peek(), Some(b'x'));
        assert_eq!(c.location(), 0);
        assert_eq!(c.advance(), Some(b'x'));
        assert_eq!(c.advance(), Some(b'y'));
        assert!(c.is_at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.advance(), None);
        assert_eq!(c.location(), 2);
    }

    #[test]
    fn attempt_rewinds() {
        let mut c = cursor(b"abC");
        assert_eq!(c.attempt::<Word>(),
                   Err(Error::Expected { rule: Lower::<usize>::name(), at: 2 }));
        assert_eq!(c.location(), 0);
        assert_eq!(c.diagnostics().found(), Some(&b'C'));

        let mut c = cursor(b"abcd");
        assert_eq!(c.attempt::<Word>(), Ok((b'a', b'b', b'c')));
        assert_eq!(c.location(), 3);
    }

    #[test]
    fn optional_never_fails() {
        let mut c = cursor(b"ab1");
        assert_eq!(c.attempt_optional::<Word>(), Ok(None));
        assert_eq!(c.location(), 0);
        assert_eq!(c.attempt_optional::<Lower<usize>>(), Ok(Some(b'a')));
        assert_eq!(c.location(), 1);
    }

    #[test]
    fn optional_propagates_overflow() {
        let mut c = cursor(b"256");
        assert_eq!(c.attempt_optional::<Byte>(),
                   Err(Error::Overflow { ty: "u8", at: 2 }));
        assert_eq!(c.location(), 0);
    }

    #[test]
    fn many() {
        let mut c = cursor(b"abc1");
        let mut count = 0_usize;
        assert_eq!(c.attempt_many_into::<Lower<usize>, _>(&mut Counter(&mut count)), Ok(()));
        assert_eq!(count, 3);
        assert_eq!(c.location(), 3);
        assert_eq!(c.attempt_many_into::<Lower<usize>, _>(&mut Counter(&mut count)), Ok(()));
        assert_eq!(count, 3);
    }
}
