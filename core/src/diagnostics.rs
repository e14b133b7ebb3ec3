//! The sink that a `Cursor` reports failures to.

use crate::Error;


/// Implementations provided for ready use.
pub mod premade {
    mod no_diagnostics;
    pub use no_diagnostics::NoDiagnostics;

    mod last_failure;
    pub use last_failure::LastFailure;
}


/// Receives every error raised while parsing, together with the terminal that
/// was found at the error's location (`None` at the end of input).
///
/// The associated types must be the same as those of the
/// [`Source`](trait.Source.html) being parsed, which
/// [`Cursor`](struct.Cursor.html) requires, so that error sites can be
/// recorded precisely.  How, and whether, reports are presented is entirely up
/// to the implementation.
///
/// Reports are made as soon as an error is raised, including errors that are
/// later absorbed by an optional or repetition adapter when backtracking.
pub trait Diagnostics {
    /// Same as the cursor's `Source::Location`.
    type Location;
    /// Same as the cursor's `Source::Terminal`.
    type Terminal;

    /// Record the raising of `error`.
    fn report(&mut self, error: &Error<Self::Location>, found: Option<Self::Terminal>);
}

/// This allows a caller to keep ownership of its diagnostics while lending them
/// to a `Cursor`.
impl<D> Diagnostics for &mut D
    where D: Diagnostics + ?Sized,
{
    type Location = D::Location;
    type Terminal = D::Terminal;

    #[inline]
    fn report(&mut self, error: &Error<Self::Location>, found: Option<Self::Terminal>) {
        (**self).report(error, found);
    }
}
