//! Rules built by composing other rules.

use core::marker::PhantomData;

use crate::{Cursor, Diagnostics, Result, Rule, Source};


/// Matches only at the end of input, consuming nothing.
#[derive(Debug)]
pub struct End<Location, Terminal>(PhantomData<fn(Location, Terminal)>);

impl<L, T> Rule for End<L, T> {
    type Location = L;
    type Terminal = T;
    type Construction = ();

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<(), L>
        where S: Source<Location = L, Terminal = T> + ?Sized,
              D: Diagnostics<Location = L, Terminal = T>,
    {
        if cursor.is_at_end() {
            Ok(())
        } else {
            let at = cursor.location();
            Err(cursor.expected::<Self>(at))
        }
    }

    #[inline]
    fn name() -> &'static str {
        "end"
    }
}


/// Applies `R` and drops its construction.
#[derive(Debug)]
pub struct Discard<R>(PhantomData<fn() -> R>);

impl<R> Rule for Discard<R>
    where R: Rule,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = ();

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<(), Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        let _ = cursor.attempt::<R>()?;
        Ok(())
    }
}


/// Applies `R` as many times as it matches, collecting its constructions in
/// order into a `Container`.  Never fails except for non-recoverable failures
/// of `R`; the container may be empty.
///
/// With `()` as the container (which extends with `()`s), this discards any
/// number of void matches.
#[derive(Debug)]
pub struct Collect<R, Container>(PhantomData<fn() -> (R, Container)>);

impl<R, Container> Rule for Collect<R, Container>
    where R: Rule,
          Container: Default + Extend<R::Construction>,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = Container;

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Container, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        cursor.attempt_many::<R, Container>()
    }
}


/// Like [`Collect`](struct.Collect.html) but requires at least one match: the
/// first application of `R` is mandatory and its failure is propagated.  If that
/// match consumed nothing, it is the only one.
#[derive(Debug)]
pub struct Reduce<R, Container>(PhantomData<fn() -> (R, Container)>);

impl<R, Container> Rule for Reduce<R, Container>
    where R: Rule,
          R::Location: PartialEq,
          Container: Default + Extend<R::Construction>,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = Container;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Container, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        let before = cursor.location();
        let first = cursor.attempt::<R>()?;
        let mut container = Container::default();
        container.extend(Some(first));
        // Same stopping condition as the repetition.
        if cursor.location() != before {
            cursor.attempt_many_into::<R, Container>(&mut container)?;
        }
        Ok(container)
    }
}


/// A list of one or more `R` separated by `Separator`, collected in order into
/// a `Container`.
///
/// The first element is mandatory.  Each following `Separator` and `R` is
/// attempted as a unit, so when a separator matches but no element follows it,
/// the separator is not consumed either.  Thus a trailing separator is left for
/// whatever comes next (usually causing that to fail).
///
/// Like [`Collect`](struct.Collect.html), the repetition stops after a pair that
/// consumed nothing.
#[derive(Debug)]
pub struct Join<R, Separator, Container>(PhantomData<fn() -> (R, Separator, Container)>);

impl<R, Separator, Container> Rule for Join<R, Separator, Container>
    where R: Rule,
          R::Location: PartialEq,
          Separator: Rule<Location = R::Location, Terminal = R::Terminal>,
          Container: Default + Extend<R::Construction>,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = Container;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Container, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        let first = cursor.attempt::<R>()?;
        let mut container = Container::default();
        container.extend(Some(first));
        loop {
            let before = cursor.location();
            let Some((_, next)) = cursor.attempt_optional::<(Separator, R)>()? else {
                return Ok(container);
            };
            container.extend(Some(next));
            if cursor.location() == before {
                return Ok(container);
            }
        }
    }
}


/// Applies `R` with any amount of the void `Padding` rule stripped from before
/// and after it.  The padding never fails; a failure of `R` is propagated.
#[derive(Debug)]
pub struct Pad<R, Padding>(PhantomData<fn() -> (R, Padding)>);

impl<R, Padding> Rule for Pad<R, Padding>
    where R: Rule,
          Padding: Rule<Location = R::Location, Terminal = R::Terminal, Construction = ()>,
{
    type Location = R::Location;
    type Terminal = R::Terminal;
    type Construction = R::Construction;

    #[inline]
    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<R::Construction, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        cursor.attempt_many::<Padding, ()>()?;
        let construction = cursor.attempt::<R>()?;
        cursor.attempt_many::<Padding, ()>()?;
        Ok(construction)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error, IntegerLiteral, Optional,
        ascii::{Comma, Letter, Space, Whitespace},
        digits::DecimalDigit,
        diagnostics::premade::LastFailure,
    };

    /// Fixed-capacity container so these tests need no heap.
    #[derive(Default, Debug, PartialEq)]
    struct Array<T> {
        items: [Option<T>; 8],
        len: usize,
    }

    impl<T> Extend<T> for Array<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            for item in iter {
                self.items[self.len] = Some(item);
                self.len += 1;
            }
        }
    }

    impl<T: Copy> Array<T> {
        fn of(items: &[T]) -> Self {
            let mut a = Self { items: [None; 8], len: 0 };
            a.extend(items.iter().copied());
            a
        }
    }

    /// Counts extensions, without keeping anything.
    #[derive(Default, Debug, PartialEq)]
    struct Count(usize);

    impl<A> Extend<A> for Count {
        fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
            self.0 += iter.into_iter().count();
        }
    }

    type L = usize;
    type T = u8;
    type Letters = Join<Letter<L, T>, Comma<L, T>, Array<u8>>;
    type Number = IntegerLiteral<DecimalDigit<L, T, u32>>;

    fn cursor(source: &'static [u8]) -> Cursor<'static, [u8], LastFailure<L, T>> {
        Cursor::new(source, LastFailure::default())
    }

    #[test]
    fn end() {
        let mut c = cursor(b"");
        assert_eq!(c.attempt::<End<L, T>>(), Ok(()));

        let mut c = cursor(b"x");
        assert_eq!(c.attempt::<End<L, T>>(), Err(Error::Expected { rule: "end", at: 0 }));
        assert_eq!(c.location(), 0);
    }

    #[test]
    fn discard() {
        let mut c = cursor(b"ab");
        assert_eq!(c.attempt::<Discard<Letter<L, T>>>(), Ok(()));
        assert_eq!(c.location(), 1);
        assert!(c.attempt::<Discard<Comma<L, T>>>().is_err());
        assert_eq!(c.location(), 1);
    }

    #[test]
    fn collect() {
        let mut c = cursor(b"abc,");
        assert_eq!(c.attempt::<Collect<Letter<L, T>, Array<u8>>>(), Ok(Array::of(b"abc")));
        assert_eq!(c.location(), 3);
        assert_eq!(c.attempt::<Collect<Letter<L, T>, Array<u8>>>(), Ok(Array::of(b"")));
        assert_eq!(c.location(), 3);
    }

    #[test]
    fn collect_stops_without_progress() {
        let mut c = cursor(b",");
        assert_eq!(c.attempt::<Collect<Optional<Letter<L, T>>, Array<Option<u8>>>>(),
                   Ok(Array::of(&[None::<u8>])));
        assert_eq!(c.location(), 0);
    }

    #[test]
    fn reduce_minimum() {
        let mut c = cursor(b",");
        assert!(matches!(c.attempt::<Reduce<Letter<L, T>, Array<u8>>>(),
                         Err(Error::Expected { at: 0, .. })));
        assert_eq!(c.location(), 0);

        let mut c = cursor(b"a,");
        assert_eq!(c.attempt::<Reduce<Letter<L, T>, Array<u8>>>(), Ok(Array::of(b"a")));
        assert_eq!(c.location(), 1);
    }

    #[test]
    fn reduce_stops_without_progress() {
        type Letters = Optional<Letter<L, T>>;

        let mut c = cursor(b",");
        assert_eq!(c.attempt::<Reduce<Letters, Array<Option<u8>>>>(),
                   Ok(Array::of(&[None::<u8>])));
        assert_eq!(c.location(), 0);
        assert_eq!(c.attempt::<Reduce<Letters, Count>>(), c.attempt::<Collect<Letters, Count>>());

        let mut c = cursor(b"ab,");
        assert_eq!(c.attempt::<Reduce<Letters, Count>>(), Ok(Count(3)));
        assert_eq!(c.location(), 2);
    }

    #[test]
    fn join_pairing() {
        let mut c = cursor(b"a,b,c");
        assert_eq!(c.attempt::<Letters>(), Ok(Array::of(b"abc")));
        assert!(c.is_at_end());

        let mut c = cursor(b"a,b,");
        assert_eq!(c.attempt::<Letters>(), Ok(Array::of(b"ab")));
        assert_eq!(c.location(), 3);
        assert_eq!(c.attempt::<End<L, T>>(), Err(Error::Expected { rule: "end", at: 3 }));

        let mut c = cursor(b",a");
        assert!(c.attempt::<Letters>().is_err());
        assert_eq!(c.location(), 0);
    }

    #[test]
    fn join_stops_without_progress() {
        type Word = Collect<Letter<L, T>, Count>;
        type Spaces = Collect<Space<L, T>, ()>;

        let mut c = cursor(b"ab");
        assert_eq!(c.attempt::<Join<Word, Spaces, Count>>(), Ok(Count(2)));
        assert!(c.is_at_end());

        let mut c = cursor(b"ab cd,");
        assert_eq!(c.attempt::<Join<Word, Spaces, Count>>(), Ok(Count(3)));
        assert_eq!(c.location(), 5);
    }

    #[test]
    fn join_propagates_overflow() {
        type Numbers = Join<Number, Comma<L, T>, Array<u32>>;

        let mut c = cursor(b"1,99999999999,3");
        assert_eq!(c.attempt::<Numbers>(), Err(Error::Overflow { ty: "u32", at: 11 }));
        assert_eq!(c.location(), 0);
    }

    #[test]
    fn pad_symmetry() {
        let mut c = cursor(b"  42  ");
        assert_eq!(c.attempt::<Pad<Number, Whitespace<L, T>>>(), Ok(42));
        assert!(c.is_at_end());

        let mut c = cursor(b"42");
        assert_eq!(c.attempt::<Pad<Number, Whitespace<L, T>>>(), Ok(42));
        assert!(c.is_at_end());

        let mut c = cursor(b"  x ");
        assert!(c.attempt::<Pad<Number, Whitespace<L, T>>>().is_err());
        assert_eq!(c.location(), 0);
    }
}
