//! Helpers for applying rules to test inputs given as string literals.

use std::fmt::Debug;

use gramma_core::{Cursor, Diagnostics, Error, Rule, Scalar, Source};


/// A terminal type that test inputs, always written as `&'static str`s, can be
/// presented as.  The locations of ASCII inputs are the same for all of them.
pub trait Encoding: Scalar + PartialEq + Debug + 'static {
    /// The source type whose terminals are `Self`.
    type Source: Source<Location = usize, Terminal = Self> + ?Sized + 'static;

    /// Present `input` as our source type.
    fn source(input: &'static str) -> &'static Self::Source;

    /// The terminal for an ASCII character.
    fn from_ascii(byte: u8) -> Self;

    /// The terminals of an ASCII string.
    fn terminals(ascii: &str) -> Vec<Self> {
        ascii.bytes().map(Self::from_ascii).collect()
    }
}

impl Encoding for u8 {
    type Source = [u8];

    fn source(input: &'static str) -> &'static [u8] {
        input.as_bytes()
    }

    fn from_ascii(byte: u8) -> Self {
        byte
    }
}

impl Encoding for char {
    type Source = str;

    fn source(input: &'static str) -> &'static str {
        input
    }

    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }
}


/// What applying a rule to an entire input resulted in.
#[derive(Debug)]
pub struct Outcome<C, D> {
    /// What the rule returned
    pub result: Result<C, Error<usize>>,
    /// Where the cursor was left
    pub location: usize,
    /// What was reported
    pub diagnostics: D,
}

/// Make a cursor over `input` and attempt `R` with it once.
pub fn apply<R, T, D>(input: &'static str, diagnostics: D) -> Outcome<R::Construction, D>
    where R: Rule<Location = usize, Terminal = T>,
          T: Encoding,
          D: Diagnostics<Location = usize, Terminal = T>,
{
    let mut cursor = Cursor::new(T::source(input), diagnostics);
    let result = cursor.attempt::<R>();
    Outcome {
        result,
        location: cursor.location(),
        diagnostics: cursor.into_diagnostics(),
    }
}
