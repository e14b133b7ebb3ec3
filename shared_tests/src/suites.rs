//! Suites of tests applied across multiple crates


use gramma_core::{
    Diagnostics, End, Error, Rule, Optional, Discard, Collect, Reduce, Pad,
    ascii::{Comma, Letter, Period, Whitespace},
    digits::DecimalDigit,
};

use crate::grammars::*;
use crate::utils::{apply, Encoding};


macro_rules! suite_test {
    // Success, leaving the cursor at the given location.
    ($new:ident, $rule:ty, $input:expr => Ok($expected:expr), at $location:expr) => {{
        let outcome = apply::<$rule, T, D>($input, $new());
        assert_eq!(outcome.result, Ok($expected), "input {:?}", $input);
        assert_eq!(outcome.location, $location, "location for input {:?}", $input);
    }};
    // Failure, which always leaves the cursor at the start.
    ($new:ident, $rule:ty, $input:expr => Err($expected:expr)) => {{
        let outcome = apply::<$rule, T, D>($input, $new());
        assert_eq!(outcome.result, Err($expected), "input {:?}", $input);
        assert_eq!(outcome.location, 0, "location for input {:?}", $input);
    }};
}


/// Digit rules and integer literals, including overflow detection.
pub fn test_suite_numeric<T, D, N>(new_diagnostics: N)
    where T: Encoding,
          D: Diagnostics<Location = usize, Terminal = T>,
          N: Fn() -> D,
{
    let digit = DecimalDigit::<usize, T, u8>::name();

    suite_test!(new_diagnostics, DecimalDigit<usize, T, u8>, "0" => Ok(0), at 1);
    suite_test!(new_diagnostics, DecimalDigit<usize, T, u8>, "9" => Ok(9), at 1);
    suite_test!(new_diagnostics, DecimalDigit<usize, T, u8>, "a"
                => Err(Error::Expected { rule: digit, at: 0 }));
    suite_test!(new_diagnostics, DecimalDigit<usize, T, u8>, ""
                => Err(Error::Expected { rule: digit, at: 0 }));

    suite_test!(new_diagnostics, Byte<T>, "0" => Ok(0), at 1);
    suite_test!(new_diagnostics, Byte<T>, "255" => Ok(255), at 3);
    suite_test!(new_diagnostics, Byte<T>, "007" => Ok(7), at 3);
    suite_test!(new_diagnostics, Byte<T>, "12a" => Ok(12), at 2);
    suite_test!(new_diagnostics, Byte<T>, "256" => Err(Error::Overflow { ty: "u8", at: 2 }));
    suite_test!(new_diagnostics, Byte<T>, "300" => Err(Error::Overflow { ty: "u8", at: 2 }));
    suite_test!(new_diagnostics, Byte<T>, "2550" => Err(Error::Overflow { ty: "u8", at: 3 }));
    suite_test!(new_diagnostics, Byte<T>, "x1" => Err(Error::Expected { rule: digit, at: 0 }));

    suite_test!(new_diagnostics, Hex16<T>, "Ff" => Ok(0xff), at 2);
    suite_test!(new_diagnostics, Hex16<T>, "beef" => Ok(0xbeef), at 4);
    suite_test!(new_diagnostics, Hex16<T>, "0000ffff" => Ok(0xffff), at 8);
    suite_test!(new_diagnostics, Hex16<T>, "1beef"
                => Err(Error::Overflow { ty: "u16", at: 4 }));

    suite_test!(new_diagnostics, SignedInteger<T>, "42" => Ok(42), at 2);
    suite_test!(new_diagnostics, SignedInteger<T>, "-42" => Ok(-42), at 3);
    suite_test!(new_diagnostics, SignedInteger<T>, "2147483647" => Ok(i32::MAX), at 10);
    suite_test!(new_diagnostics, SignedInteger<T>, "-2147483648" => Ok(i32::MIN), at 11);
    suite_test!(new_diagnostics, SignedInteger<T>, "-2147483649"
                => Err(Error::Overflow { ty: "i32", at: 10 }));
    suite_test!(new_diagnostics, SignedInteger<T>, "2147483648"
                => Err(Error::Overflow { ty: "i32", at: 9 }));
    suite_test!(new_diagnostics, SignedInteger<T>, "-0" => Ok(0), at 2);
    suite_test!(new_diagnostics, SignedInteger<T>, "-"
                => Err(Error::Expected { rule: DecimalDigit::<usize, T, i32>::name(), at: 1 }));

    // Overflow is not absorbed by the optional adapter.
    suite_test!(new_diagnostics, Optional<Byte<T>>, "x" => Ok(None), at 0);
    suite_test!(new_diagnostics, Optional<Byte<T>>, "99" => Ok(Some(99)), at 2);
    suite_test!(new_diagnostics, Optional<Byte<T>>, "999"
                => Err(Error::Overflow { ty: "u8", at: 2 }));
}


/// The structural combinators.
pub fn test_suite_structural<T, D, N>(new_diagnostics: N)
    where T: Encoding,
          D: Diagnostics<Location = usize, Terminal = T>,
          N: Fn() -> D,
{
    let letter = Letter::<usize, T>::name();
    let t = T::terminals;

    suite_test!(new_diagnostics, End<usize, T>, "" => Ok(()), at 0);
    suite_test!(new_diagnostics, End<usize, T>, " " => Err(Error::Expected { rule: "end", at: 0 }));

    suite_test!(new_diagnostics, Discard<Byte<T>>, "12," => Ok(()), at 2);
    suite_test!(new_diagnostics, Discard<Comma<usize, T>>, "."
                => Err(Error::Expected { rule: Comma::<usize, T>::name(), at: 0 }));

    suite_test!(new_diagnostics, Word<T>, "" => Ok(vec![]), at 0);
    suite_test!(new_diagnostics, Word<T>, "1" => Ok(vec![]), at 0);
    suite_test!(new_diagnostics, Word<T>, "abc1" => Ok(t("abc")), at 3);

    suite_test!(new_diagnostics, NonEmptyWord<T>, "" => Err(Error::Expected { rule: letter, at: 0 }));
    suite_test!(new_diagnostics, NonEmptyWord<T>, "a" => Ok(t("a")), at 1);
    suite_test!(new_diagnostics, NonEmptyWord<T>, "ab," => Ok(t("ab")), at 2);

    suite_test!(new_diagnostics, Letters<T>, "a" => Ok(t("a")), at 1);
    suite_test!(new_diagnostics, Letters<T>, "a,b,c" => Ok(t("abc")), at 5);
    suite_test!(new_diagnostics, Letters<T>, "a,b," => Ok(t("ab")), at 3);
    suite_test!(new_diagnostics, Letters<T>, "a,,b" => Ok(t("a")), at 1);
    suite_test!(new_diagnostics, Letters<T>, "ab" => Ok(t("a")), at 1);
    suite_test!(new_diagnostics, Letters<T>, ",a" => Err(Error::Expected { rule: letter, at: 0 }));
    // A trailing separator is left unconsumed, so the end is not reached.
    suite_test!(new_diagnostics, (Letters<T>, End<usize, T>), "a,b,"
                => Err(Error::Expected { rule: "end", at: 3 }));
    suite_test!(new_diagnostics, (Letters<T>, End<usize, T>), "a,b,c"
                => Ok((t("abc"), ())), at 5);

    suite_test!(new_diagnostics, PaddedNumber<T>, "  42  " => Ok(42), at 6);
    suite_test!(new_diagnostics, PaddedNumber<T>, "42" => Ok(42), at 2);
    suite_test!(new_diagnostics, PaddedNumber<T>, "\t42\n,"  => Ok(42), at 4);
    suite_test!(new_diagnostics, PaddedNumber<T>, "   "
                => Err(Error::Expected { rule: DecimalDigit::<usize, T, u32>::name(), at: 3 }));

    suite_test!(new_diagnostics, Bytes<T>, " 1 , 2,3 " => Ok(vec![1, 2, 3]), at 9);
    suite_test!(new_diagnostics, Bytes<T>, "1, 256"
                => Err(Error::Overflow { ty: "u8", at: 5 }));

    // Overflow is not the end of a repetition either.
    suite_test!(new_diagnostics, Collect<Pad<Byte<T>, Whitespace<usize, T>>, Vec<u8>>, "1 2 "
                => Ok(vec![1, 2]), at 4);
    suite_test!(new_diagnostics, Collect<Pad<Byte<T>, Whitespace<usize, T>>, Vec<u8>>, "1 256"
                => Err(Error::Overflow { ty: "u8", at: 4 }));
    suite_test!(new_diagnostics, Reduce<Pad<Byte<T>, Whitespace<usize, T>>, Vec<u8>>, "1 256"
                => Err(Error::Overflow { ty: "u8", at: 4 }));
    suite_test!(new_diagnostics, Reduce<Byte<T>, Vec<u8>>, "256"
                => Err(Error::Overflow { ty: "u8", at: 2 }));
}


/// Grammars that combine alternatives and sequences.
pub fn test_suite_grammars<T, D, N>(new_diagnostics: N)
    where T: Encoding,
          D: Diagnostics<Location = usize, Terminal = T>,
          N: Fn() -> D,
{
    let version = |major, minor, patch| Version { major, minor, patch };
    let period = Period::<usize, T>::name();

    suite_test!(new_diagnostics, VersionTriple<T>, "1.20.0" => Ok(version(1, 20, 0)), at 6);
    suite_test!(new_diagnostics, VersionTriple<T>, "0.0.0" => Ok(version(0, 0, 0)), at 5);
    suite_test!(new_diagnostics, VersionTriple<T>, "65535.1.2-rc" => Ok(version(65535, 1, 2)), at 9);
    suite_test!(new_diagnostics, VersionTriple<T>, "01.2.3"
                => Err(Error::Expected { rule: period, at: 1 }));
    suite_test!(new_diagnostics, VersionTriple<T>, "1.2"
                => Err(Error::Expected { rule: period, at: 3 }));
    suite_test!(new_diagnostics, VersionTriple<T>, "1.65536.0"
                => Err(Error::Overflow { ty: "u16", at: 6 }));

    suite_test!(new_diagnostics, (VersionTriple<T>, End<usize, T>), "1.2.3"
                => Ok((version(1, 2, 3), ())), at 5);
    suite_test!(new_diagnostics, (VersionTriple<T>, End<usize, T>), "1.2.3."
                => Err(Error::Expected { rule: "end", at: 5 }));
}
