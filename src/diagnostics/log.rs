use crate::{Diagnostics, Error};


/// One report made to a [`DiagnosticsLog`](struct.DiagnosticsLog.html).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Report<Location, Terminal> {
    /// What was raised
    pub error: Error<Location>,
    /// What was found where it was raised, or `None` at the end of input
    pub found: Option<Terminal>,
}

/// A [`Diagnostics`](../trait.Diagnostics.html) that keeps every report, in
/// the order they were made, including those for failures that backtracking
/// later made irrelevant.  Mostly useful for inspecting how a grammar explores
/// an input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DiagnosticsLog<Location, Terminal> {
    reports: Vec<Report<Location, Terminal>>,
}

/// Must implement this manually because deriving would place unwanted bounds on
/// the type parameters.
impl<Location, Terminal> Default for DiagnosticsLog<Location, Terminal> {
    #[inline]
    fn default() -> Self {
        Self { reports: Vec::new() }
    }
}

impl<Location, Terminal> DiagnosticsLog<Location, Terminal> {
    /// The reports so far, oldest first.
    #[inline]
    pub fn reports(&self) -> &[Report<Location, Terminal>] {
        &self.reports
    }

    /// Take the reports, oldest first.
    #[inline]
    pub fn into_reports(self) -> Vec<Report<Location, Terminal>> {
        self.reports
    }

    /// The most recent report, which after a failed top-level parse is the
    /// error that was returned.
    #[inline]
    pub fn last(&self) -> Option<&Report<Location, Terminal>> {
        self.reports.last()
    }
}

impl<Location, Terminal> Diagnostics for DiagnosticsLog<Location, Terminal>
    where Location: Copy,
{
    type Location = Location;
    type Terminal = Terminal;

    #[inline]
    fn report(&mut self, error: &Error<Location>, found: Option<Terminal>) {
        self.reports.push(Report { error: *error, found });
    }
}
