use crate::{Diagnostics, Error};


/// A [`Diagnostics`](trait.Diagnostics.html) that remembers only the most
/// recent report, without heap allocation.
///
/// After a failed top-level parse, the most recent report is the error that
/// was propagated to the caller, unless an enclosing adapter absorbed it and
/// the failure came from something that raised nothing (which the premade
/// rules never do).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LastFailure<Location, Terminal> {
    last: Option<(Error<Location>, Option<Terminal>)>,
    count: usize,
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameters.
impl<Location, Terminal> Default for LastFailure<Location, Terminal> {
    #[inline]
    fn default() -> Self {
        Self { last: None, count: 0 }
    }
}

impl<Location, Terminal> LastFailure<Location, Terminal> {
    /// The most recently reported error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error<Location>> {
        self.last.as_ref().map(|(error, _)| error)
    }

    /// The terminal found where the most recently reported error was raised.
    /// `None` if nothing was reported or if that was at the end of input.
    #[inline]
    pub fn found(&self) -> Option<&Terminal> {
        self.last.as_ref().and_then(|(_, found)| found.as_ref())
    }

    /// How many reports there were in total, including those that
    /// backtracking later made irrelevant.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<Location, Terminal> Diagnostics for LastFailure<Location, Terminal>
    where Location: Copy,
{
    type Location = Location;
    type Terminal = Terminal;

    #[inline]
    fn report(&mut self, error: &Error<Location>, found: Option<Terminal>) {
        self.last = Some((*error, found));
        self.count += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_last() {
        let mut d = LastFailure::<usize, char>::default();
        assert_eq!(d.error(), None);
        assert_eq!(d.count(), 0);

        d.report(&Error::Expected { rule: "a", at: 0 }, Some('x'));
        d.report(&Error::Overflow { ty: "u8", at: 2 }, None);
        assert_eq!(d.error(), Some(&Error::Overflow { ty: "u8", at: 2 }));
        assert_eq!(d.found(), None);
        assert_eq!(d.count(), 2);
    }
}
