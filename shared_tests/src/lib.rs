//! Used by the integration tests of both the [core](../gramma_core/index.html)
//! and the [full](../gramma/index.html) crates.  It provides sample grammars,
//! and test suites that can be run with different terminal types and different
//! [`Diagnostics`](../gramma_core/trait.Diagnostics.html) sinks, so the same
//! expectations are checked against every combination.

pub mod grammars;
pub mod suites;
pub mod utils;
