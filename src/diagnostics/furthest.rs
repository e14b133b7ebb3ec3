use crate::{Diagnostics, Error};


/// A [`Diagnostics`](../trait.Diagnostics.html) that keeps the errors raised
/// at the furthest location that any rule failed at, which is usually where the
/// input stopped matching the grammar even when backtracking caused the
/// top-level error to be located elsewhere.
///
/// The errors at that location are kept de-duplicated, in the order first
/// reported, so that e.g. "expected one of ..." can be said about them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FurthestFailure<Location, Terminal> {
    location: Option<Location>,
    errors: Vec<Error<Location>>,
    found: Option<Terminal>,
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameters.
impl<Location, Terminal> Default for FurthestFailure<Location, Terminal> {
    #[inline]
    fn default() -> Self {
        Self { location: None, errors: Vec::new(), found: None }
    }
}

impl<Location, Terminal> FurthestFailure<Location, Terminal>
    where Location: Copy,
{
    /// The furthest location of any reported error, or `None` if nothing was
    /// reported.
    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// The errors reported at the furthest location.
    #[inline]
    pub fn errors(&self) -> &[Error<Location>] {
        &self.errors
    }

    /// The identities of the rules, and of the overflowed integer types, at the
    /// furthest location.
    pub fn expected(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(Error::rule)
    }

    /// What was found at the furthest location, or `None` if that was the end
    /// of input.
    #[inline]
    pub fn found(&self) -> Option<&Terminal> {
        self.found.as_ref()
    }
}

impl<Location, Terminal> Diagnostics for FurthestFailure<Location, Terminal>
    where Location: Copy + Ord,
{
    type Location = Location;
    type Terminal = Terminal;

    fn report(&mut self, error: &Error<Location>, found: Option<Terminal>) {
        let at = error.location();
        match self.location {
            Some(furthest) if at < furthest => {}
            Some(furthest) if at == furthest => {
                if !self.errors.contains(error) {
                    self.errors.push(*error);
                }
            }
            _ => {
                self.location = Some(at);
                self.errors.clear();
                self.errors.push(*error);
                self.found = found;
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_furthest() {
        let mut d = FurthestFailure::<usize, char>::default();
        assert_eq!(d.location(), None);

        d.report(&Error::Expected { rule: "a", at: 1 }, Some('x'));
        d.report(&Error::Expected { rule: "b", at: 3 }, Some('y'));
        d.report(&Error::Expected { rule: "c", at: 3 }, Some('y'));
        d.report(&Error::Expected { rule: "b", at: 3 }, Some('y'));
        d.report(&Error::Expected { rule: "d", at: 2 }, Some('z'));

        assert_eq!(d.location(), Some(3));
        assert_eq!(d.expected().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(d.found(), Some(&'y'));

        d.report(&Error::Overflow { ty: "u8", at: 4 }, None);
        assert_eq!(d.errors(), [Error::Overflow { ty: "u8", at: 4 }]);
        assert_eq!(d.found(), None);
    }
}
