//! Rules for single digits, and for integer literals accumulated from them.

use core::marker::PhantomData;

use crate::{Cursor, Diagnostics, Integer, Result, Rule, Scalar, Source, TerminalRule};


/// A [`TerminalRule`](trait.TerminalRule.html) that recognizes one digit of a
/// numeral in some radix and whose construction is the digit's value.
pub trait DigitRule: TerminalRule {
    /// The base that a sequence of these digits is read in.
    const RADIX: u8;
}


/// Decimal digit, `0` through `9`.
#[derive(Debug)]
pub struct DecimalDigit<Location, Terminal, Construction>(
    PhantomData<fn(Location, Terminal) -> Construction>);

impl<L, T, C> TerminalRule for DecimalDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    type Location = L;
    type Terminal = T;
    type Construction = C;

    #[inline]
    fn parse_terminal(terminal: T) -> Option<C> {
        match terminal.ascii()? {
            d @ b'0' ..= b'9' => Some(C::from_digit(d - b'0')),
            _ => None,
        }
    }
}

impl<L, T, C> DigitRule for DecimalDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    const RADIX: u8 = 10;
}


/// Decimal digit excluding zero, `1` through `9`.  For the leading digit of
/// literals that must not have leading zeros.
#[derive(Debug)]
pub struct NaturalDecimalDigit<Location, Terminal, Construction>(
    PhantomData<fn(Location, Terminal) -> Construction>);

impl<L, T, C> TerminalRule for NaturalDecimalDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    type Location = L;
    type Terminal = T;
    type Construction = C;

    #[inline]
    fn parse_terminal(terminal: T) -> Option<C> {
        match terminal.ascii()? {
            d @ b'1' ..= b'9' => Some(C::from_digit(d - b'0')),
            _ => None,
        }
    }
}

impl<L, T, C> DigitRule for NaturalDecimalDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    const RADIX: u8 = 10;
}


/// Hexadecimal digit, `0` through `9` and `a` through `f` in either case.
#[derive(Debug)]
pub struct HexDigit<Location, Terminal, Construction>(
    PhantomData<fn(Location, Terminal) -> Construction>);

impl<L, T, C> TerminalRule for HexDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    type Location = L;
    type Terminal = T;
    type Construction = C;

    #[inline]
    fn parse_terminal(terminal: T) -> Option<C> {
        match terminal.ascii()? {
            d @ b'0' ..= b'9' => Some(C::from_digit(d - b'0')),
            d @ b'a' ..= b'f' => Some(C::from_digit(d - b'a' + 10)),
            d @ b'A' ..= b'F' => Some(C::from_digit(d - b'A' + 10)),
            _ => None,
        }
    }
}

impl<L, T, C> DigitRule for HexDigit<L, T, C>
    where T: Scalar,
          C: Integer,
{
    const RADIX: u8 = 16;
}


/// Hexadecimal digit, `0` through `9` and lowercase `a` through `f` only.
#[derive(Debug)]
pub struct HexDigitLowercase<Location, Terminal, Construction>(
    PhantomData<fn(Location, Terminal) -> Construction>);

impl<L, T, C> TerminalRule for HexDigitLowercase<L, T, C>
    where T: Scalar,
          C: Integer,
{
    type Location = L;
    type Terminal = T;
    type Construction = C;

    #[inline]
    fn parse_terminal(terminal: T) -> Option<C> {
        match terminal.ascii()? {
            d @ b'0' ..= b'9' => Some(C::from_digit(d - b'0')),
            d @ b'a' ..= b'f' => Some(C::from_digit(d - b'a' + 10)),
            _ => None,
        }
    }
}

impl<L, T, C> DigitRule for HexDigitLowercase<L, T, C>
    where T: Scalar,
          C: Integer,
{
    const RADIX: u8 = 16;
}


/// An unsigned integer literal whose leading digit is recognized by `First`
/// and whose following digits are recognized by `Next`, read in the radix of
/// `Next`.  Choosing a stricter `First`, e.g. `NaturalDecimalDigit`, expresses
/// policies like "no leading zeros".
///
/// The digits are folded into the construction type with overflow-detecting
/// arithmetic.  A literal that does not fit fails with
/// [`Error::Overflow`](enum.Error.html#variant.Overflow), located at the digit
/// that exceeded the bound.  That failure is not recoverable: a shorter prefix
/// of the literal is never accepted instead.
#[derive(Debug)]
pub struct NormalizedIntegerLiteral<First, Next>(PhantomData<fn() -> (First, Next)>);

impl<First, Next> Rule for NormalizedIntegerLiteral<First, Next>
    where First: DigitRule,
          First::Construction: Integer,
          Next: DigitRule<Location = First::Location,
                          Terminal = First::Terminal,
                          Construction = First::Construction>,
{
    type Location = First::Location;
    type Terminal = First::Terminal;
    type Construction = First::Construction;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Self::Construction, Self::Location>
        where S: Source<Location = Self::Location, Terminal = Self::Terminal> + ?Sized,
              D: Diagnostics<Location = Self::Location, Terminal = Self::Terminal>,
    {
        let radix = <Self::Construction as Integer>::from_digit(Next::RADIX);
        let mut value = cursor.attempt::<First>()?;
        loop {
            let at = cursor.location();
            let Some(digit) = cursor.attempt_optional::<Next>()? else {
                return Ok(value);
            };
            value = match value.checked_mul(radix).and_then(|v| v.checked_add(digit)) {
                Some(value) => value,
                None => return Err(cursor.overflow::<Self::Construction>(at)),
            };
        }
    }
}

/// An unsigned integer literal of `Digit`s, which allows leading zeros.
pub type IntegerLiteral<Digit> = NormalizedIntegerLiteral<Digit, Digit>;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, diagnostics::premade::LastFailure};

    fn map<R>(terminal: R::Terminal) -> Option<R::Construction>
        where R: TerminalRule,
    {
        R::parse_terminal(terminal)
    }

    #[test]
    fn decimal_range() {
        for b in 0_u8 ..= 255 {
            let expected = if b.is_ascii_digit() { Some(b - b'0') } else { None };
            assert_eq!(map::<DecimalDigit<(), u8, u8>>(b), expected);
            assert_eq!(map::<DecimalDigit<(), char, u8>>(char::from(b)), expected);
        }
        assert_eq!(map::<DecimalDigit<(), char, u8>>('٣'), None);
        assert_eq!(map::<DecimalDigit<(), u32, u8>>(0x130 + 0x31), None);
    }

    #[test]
    fn natural_decimal_range() {
        assert_eq!(map::<NaturalDecimalDigit<(), u8, i32>>(b'0'), None);
        assert_eq!(map::<NaturalDecimalDigit<(), u8, i32>>(b'1'), Some(1));
        assert_eq!(map::<NaturalDecimalDigit<(), u8, i32>>(b'9'), Some(9));
        assert_eq!(map::<NaturalDecimalDigit<(), u8, i32>>(b'a'), None);
    }

    #[test]
    fn hex_range() {
        for (c, v) in "0123456789abcdef".chars().zip(0_u8 ..) {
            assert_eq!(map::<HexDigit<(), char, u8>>(c), Some(v));
            assert_eq!(map::<HexDigit<(), char, u8>>(c.to_ascii_uppercase()), Some(v));
            assert_eq!(map::<HexDigitLowercase<(), char, u8>>(c), Some(v));
        }
        for c in ['g', 'G', '/', ':', '@', '`', ' '] {
            assert_eq!(map::<HexDigit<(), char, u8>>(c), None);
        }
        for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
            assert_eq!(map::<HexDigitLowercase<(), char, u8>>(c), None);
        }
    }

    #[test]
    fn radix() {
        assert_eq!(DecimalDigit::<(), u8, u8>::RADIX, 10);
        assert_eq!(NaturalDecimalDigit::<(), u8, u8>::RADIX, 10);
        assert_eq!(HexDigit::<(), u8, u8>::RADIX, 16);
        assert_eq!(HexDigitLowercase::<(), u8, u8>::RADIX, 16);
    }

    type U8 = IntegerLiteral<DecimalDigit<usize, u8, u8>>;
    type Hex16 = IntegerLiteral<HexDigit<usize, u8, u16>>;
    type Normalized = NormalizedIntegerLiteral<NaturalDecimalDigit<usize, u8, u32>,
                                               DecimalDigit<usize, u8, u32>>;

    fn cursor(source: &'static [u8]) -> Cursor<'static, [u8], LastFailure<usize, u8>> {
        Cursor::new(source, LastFailure::default())
    }

    #[test]
    fn overflow_determinism() {
        let mut c = cursor(b"255");
        assert_eq!(c.attempt::<U8>(), Ok(255));
        assert!(c.is_at_end());

        let mut c = cursor(b"256");
        assert_eq!(c.attempt::<U8>(), Err(Error::Overflow { ty: "u8", at: 2 }));
        assert_eq!(c.location(), 0);
        assert_eq!(c.diagnostics().found(), Some(&b'6'));

        let mut c = cursor(b"1000");
        assert_eq!(c.attempt::<U8>(), Err(Error::Overflow { ty: "u8", at: 3 }));
    }

    #[test]
    fn leading_zeros() {
        let mut c = cursor(b"0042x");
        assert_eq!(c.attempt::<U8>(), Ok(42));
        assert_eq!(c.location(), 4);

        let mut c = cursor(b"042");
        assert!(matches!(c.attempt::<Normalized>(), Err(Error::Expected { at: 0, .. })));
        assert_eq!(c.location(), 0);

        let mut c = cursor(b"4020");
        assert_eq!(c.attempt::<Normalized>(), Ok(4020));
    }

    #[test]
    fn hex_literal() {
        let mut c = cursor(b"fFfF");
        assert_eq!(c.attempt::<Hex16>(), Ok(0xffff));

        let mut c = cursor(b"10000");
        assert_eq!(c.attempt::<Hex16>(), Err(Error::Overflow { ty: "u16", at: 4 }));
    }

    #[test]
    fn empty() {
        let mut c = cursor(b"");
        assert!(matches!(c.attempt::<U8>(), Err(Error::Expected { at: 0, .. })));
        assert_eq!(c.diagnostics().found(), None);
    }
}
