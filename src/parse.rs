//! Entry points for applying a grammar to an entire input.

use crate::{Cursor, Diagnostics, End, Error, Rule, Source};
use crate::diagnostics::FurthestFailure;


/// The failure of a top-level parse: the error that reached the top, along with
/// the diagnostics that were accumulated before it.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("failed to parse input")]
pub struct Failure<Location, D> {
    /// The error that the grammar's rule returned.
    #[source]
    pub error: Error<Location>,
    /// Everything reported during the parse.
    pub diagnostics: D,
}

impl<Location, D> Failure<Location, D>
    where Location: Copy,
{
    /// Where the returned error was raised.
    #[inline]
    pub fn location(&self) -> Location {
        self.error.location()
    }
}


/// Apply the rule `R` to all of `source`, reporting to `diagnostics`.  It is a
/// failure if `R` does not consume the whole input.
///
/// On success, only the construction is returned and the diagnostics are
/// dropped, since they only describe alternatives that were given up.
pub fn parse<R, S, D>(source: &S, diagnostics: D)
                      -> Result<R::Construction, Failure<S::Location, D>>
    where R: Rule<Location = S::Location, Terminal = S::Terminal>,
          S: Source + ?Sized,
          D: Diagnostics<Location = S::Location, Terminal = S::Terminal>,
{
    let mut cursor = Cursor::new(source, diagnostics);
    let result = cursor.attempt::<(R, End<S::Location, S::Terminal>)>();
    let diagnostics = cursor.into_diagnostics();
    match result {
        Ok((construction, ())) => Ok(construction),
        Err(error) => {
            log::debug!(target: "gramma", "parse of `{}` failed: {} at {:?}",
                        R::name(), error, error.location());
            Err(Failure { error, diagnostics })
        }
    }
}

/// Apply the rule `R` to all of the characters of `source`, keeping the
/// furthest failures for the error message.
#[inline]
pub fn parse_str<R>(source: &str)
                    -> Result<R::Construction, Failure<usize, FurthestFailure<usize, char>>>
    where R: Rule<Location = usize, Terminal = char>,
{
    parse::<R, _, _>(source, FurthestFailure::default())
}

/// Apply the rule `R` to all of the bytes of `source`, keeping the furthest
/// failures for the error message.
#[inline]
pub fn parse_bytes<R>(source: &[u8])
                      -> Result<R::Construction, Failure<usize, FurthestFailure<usize, u8>>>
    where R: Rule<Location = usize, Terminal = u8>,
{
    parse::<R, _, _>(source, FurthestFailure::default())
}
