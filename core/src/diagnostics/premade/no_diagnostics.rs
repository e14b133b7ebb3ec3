use core::marker::PhantomData;

use crate::{Diagnostics, Error};


/// A [`Diagnostics`](trait.Diagnostics.html) that ignores every report.  For
/// when only the error returned by the top-level rule matters.
#[derive(Debug)]
pub struct NoDiagnostics<Location, Terminal>(PhantomData<fn(Location, Terminal)>);

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameters.
impl<Location, Terminal> Default for NoDiagnostics<Location, Terminal> {
    /// This type only has one, default, value.
    #[inline]
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<Location, Terminal> Diagnostics for NoDiagnostics<Location, Terminal> {
    type Location = Location;
    type Terminal = Terminal;

    #[inline]
    fn report(&mut self, _error: &Error<Location>, _found: Option<Terminal>) {}
}
