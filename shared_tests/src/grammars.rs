//! Small grammars built from the premade rules, like a grammar author would.

use std::marker::PhantomData;

use gramma_core::{
    Cursor, Diagnostics, Rule, Scalar, Source, Result,
    Join, Pad, Collect, Reduce, IntegerLiteral, NormalizedIntegerLiteral,
    ascii::{Comma, Hyphen, Letter, Period, Whitespace},
    digits::{DecimalDigit, HexDigit, NaturalDecimalDigit},
};


/// Letters separated by commas, e.g. `a,b,c`.
pub type Letters<T> = Join<Letter<usize, T>, Comma<usize, T>, Vec<T>>;

/// Any amount of letters.
pub type Word<T> = Collect<Letter<usize, T>, Vec<T>>;

/// One or more letters.
pub type NonEmptyWord<T> = Reduce<Letter<usize, T>, Vec<T>>;

/// Decimal literal of a `u8`.
pub type Byte<T> = IntegerLiteral<DecimalDigit<usize, T, u8>>;

/// Hexadecimal literal of a `u16`.
pub type Hex16<T> = IntegerLiteral<HexDigit<usize, T, u16>>;

/// Decimal literal of a `u32`, with whitespace around it.
pub type PaddedNumber<T> = Pad<IntegerLiteral<DecimalDigit<usize, T, u32>>,
                               Whitespace<usize, T>>;

/// Comma-separated decimal `u8` literals, with whitespace around each.
pub type Bytes<T> = Join<Pad<Byte<T>, Whitespace<usize, T>>, Comma<usize, T>, Vec<u8>>;


/// A decimal `i32` with an optional leading `-`.
#[derive(Debug)]
pub struct SignedInteger<T>(PhantomData<T>);

impl<T> Rule for SignedInteger<T>
    where T: Scalar,
{
    type Location = usize;
    type Terminal = T;
    type Construction = i32;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<i32, usize>
        where S: Source<Location = usize, Terminal = T> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = T>,
    {
        type Digit<T> = DecimalDigit<usize, T, i32>;

        // Negative values are accumulated downward, so that `i32::MIN` fits.
        let negative = cursor.attempt_optional::<Hyphen<usize, T>>()?.is_some();
        let first = cursor.attempt::<Digit<T>>()?;
        let mut value = if negative { -first } else { first };
        loop {
            let at = cursor.location();
            let Some(digit) = cursor.attempt_optional::<Digit<T>>()? else {
                return Ok(value);
            };
            let next = value.checked_mul(10).and_then(|v| if negative { v.checked_sub(digit) }
                                                           else { v.checked_add(digit) });
            value = match next {
                Some(value) => value,
                None => return Err(cursor.overflow::<i32>(at)),
            };
        }
    }
}


/// A version number component: a lone `0`, or digits without a leading zero.
#[derive(Debug)]
pub struct VersionComponent<T>(PhantomData<T>);

impl<T> Rule for VersionComponent<T>
    where T: Scalar,
{
    type Location = usize;
    type Terminal = T;
    type Construction = u16;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<u16, usize>
        where S: Source<Location = usize, Terminal = T> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = T>,
    {
        type Natural<T> = NormalizedIntegerLiteral<NaturalDecimalDigit<usize, T, u16>,
                                                   DecimalDigit<usize, T, u16>>;

        match cursor.attempt_optional::<Natural<T>>()? {
            Some(value) => Ok(value),
            // Only `0` can remain as a decimal digit.
            None => cursor.attempt::<DecimalDigit<usize, T, u16>>(),
        }
    }
}

/// `major.minor.patch`
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Version {
    /// First component
    pub major: u16,
    /// Second component
    pub minor: u16,
    /// Third component
    pub patch: u16,
}

/// A [`Version`](struct.Version.html) triple, e.g. `1.20.0`.
#[derive(Debug)]
pub struct VersionTriple<T>(PhantomData<T>);

impl<T> Rule for VersionTriple<T>
    where T: Scalar,
{
    type Location = usize;
    type Terminal = T;
    type Construction = Version;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Version, usize>
        where S: Source<Location = usize, Terminal = T> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = T>,
    {
        let (major, (), minor, (), patch) =
            cursor.attempt::<(VersionComponent<T>, Period<usize, T>,
                              VersionComponent<T>, Period<usize, T>,
                              VersionComponent<T>)>()?;
        Ok(Version { major, minor, patch })
    }
}
