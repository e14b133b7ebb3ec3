//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`gramma_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`gramma_core`].
//!
//! * Provides [`Diagnostics`] sinks that use heap allocation to keep every
//! report, or every rule that was expected at the furthest location reached.
//!
//! * Provides [`parse`] functions for applying a grammar to an entire input,
//! which return the diagnostics along with any error as a [`Failure`] that
//! implements [`std::error::Error`].
//!
//! * Provides the [`Many`] alias for collecting into a `Vec`.
//!
//! Unlike [`gramma_core`], this crate's purpose mostly is to provide premade
//! implementations intended for ready use.  So, instead of placing such items
//! in sub-modules named `premade`, they are placed at the top of their
//! respective modules, including for the premade items re-exported from
//! `gramma_core`.
//!
//! [`gramma_core`]: ../gramma_core/index.html
//! [`Diagnostics`]: ../gramma_core/trait.Diagnostics.html
//! [`parse`]: parse/index.html
//! [`Failure`]: parse/struct.Failure.html
//! [`std::error::Error`]: http://doc.rust-lang.org/std/error/trait.Error.html
//! [`Many`]: type.Many.html


// Re-export everything from the core crate. (Except items shadowed by ours,
// which are re-exported elsewhere.)
#[doc(no_inline)]
pub use gramma_core::*;

pub mod parse;
#[doc(no_inline)]
pub use parse::{parse, parse_bytes, parse_str, Failure};

/// `Diagnostics` types that use the `std` library, including heap allocation.
/// Also re-exports the core crate's module and premades.
pub mod diagnostics {
    #[doc(no_inline)]
    pub use gramma_core::diagnostics::{*, premade::*};

    mod log;
    pub use log::{DiagnosticsLog, Report};

    mod furthest;
    pub use furthest::FurthestFailure;
}

/// Applies `R` as many times as it matches, collecting its constructions into
/// a `Vec`.  Never fails except for non-recoverable failures of `R`.
pub type Many<R> = Collect<R, Vec<<R as Rule>::Construction>>;
