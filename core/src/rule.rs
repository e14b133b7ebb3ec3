//! The contract that every grammar rule implements.

use core::any::type_name;
use core::marker::PhantomData;

use crate::{Cursor, Diagnostics, Result, Source};


/// A grammar rule: a stateless, type-level parsing operation.
///
/// Rules are never instantiated; a rule type's identity and its static
/// configuration (type parameters and associated constants) determine all of
/// its behavior, which is a pure function of the cursor's state when applied.
/// Rules are applied through a [`Cursor`](struct.Cursor.html), by its
/// [`attempt`](struct.Cursor.html#method.attempt) family of methods, which
/// provide the backtracking.  A rule's own `parse` may leave the cursor
/// anywhere when it fails, since the attempt that invoked it rewinds.
///
/// The `Location` and `Terminal` types must be the same as those of the
/// [`Source`](trait.Source.html) the rule is applied to.
pub trait Rule {
    /// Same as the source's `Source::Location`.
    type Location;
    /// Same as the source's `Source::Terminal`.
    type Terminal;
    /// The value produced from the consumed terminals.  `()` for rules that
    /// only match.
    type Construction;

    /// Consume terminals from `cursor` and produce our construction, or fail.
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Self::Construction, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>;

    /// The identity of this rule as recorded in errors.  Defaults to the type's
    /// name.
    #[inline]
    fn name() -> &'static str {
        type_name::<Self>()
    }
}


/// A rule that examines exactly one terminal and maps it, with a pure
/// allocation-free function, to an optional construction.
///
/// Every `TerminalRule` is also a [`Rule`](trait.Rule.html): the terminal at
/// the cursor is consumed and mapped, and if there is no terminal or the
/// mapping gives `None`, it fails with "expected `<name>`" at the location of
/// that terminal.
pub trait TerminalRule {
    /// Same as the source's `Source::Location`.
    type Location;
    /// Same as the source's `Source::Terminal`.
    type Terminal;
    /// The value produced from the terminal.
    type Construction;

    /// Map a single terminal.  `None` means it does not match.
    fn parse_terminal(terminal: Self::Terminal) -> Option<Self::Construction>;
}

impl<R> Rule for R
    where R: TerminalRule,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = R::Construction;

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Self::Construction, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        let at = cursor.location();
        match cursor.advance().and_then(R::parse_terminal) {
            Some(construction) => Ok(construction),
            None => Err(cursor.expected::<Self>(at)),
        }
    }
}


/// Succeeds always, with `Some` construction of `R` if it matched and `None`
/// (having consumed nothing) if it did not.  Non-recoverable failures of `R`
/// are still propagated.
#[derive(Debug)]
pub struct Optional<R>(PhantomData<fn() -> R>);

impl<R> Rule for Optional<R>
    where R: Rule,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = Option<R::Construction>;

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Self::Construction, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        cursor.attempt_optional::<R>()
    }
}


/// Tuples of rules are rules that apply each element in order, producing the
/// tuple of their constructions.  If any element fails, the whole tuple fails,
/// and the attempt of the tuple rewinds past all of its elements.
macro_rules! sequence {
    ($first:ident $(, $rest:ident)+) => {
        impl<$first, $($rest),+> Rule for ($first, $($rest),+)
            where $first: Rule,
                  $($rest: Rule<Location = $first::Location, Terminal = $first::Terminal>),+
        {
            type Location = $first::Location;
            type Terminal = $first::Terminal;
            type Construction = ($first::Construction, $($rest::Construction),+);

            #[inline]
            fn parse<S, D>(cursor: &mut Cursor<'_, S, D>)
                           -> Result<Self::Construction, Self::Location>
                where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
                      D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
            {
                Ok((cursor.attempt::<$first>()?, $(cursor.attempt::<$rest>()?),+))
            }
        }
    };
}

sequence!(A, B);
sequence!(A, B, C);
sequence!(A, B, C, E);
sequence!(A, B, C, E, F);
sequence!(A, B, C, E, F, G);
