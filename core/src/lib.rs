//! The core of a generic parsing-combinator library: a small set of composable
//! rule types that consume terminals from a backtracking cursor and produce
//! typed constructions.
//!
//! A grammar is a collection of [`Rule`] types.  Rules are stateless and are
//! never instantiated: everything about a rule is static, determined by its
//! type, and its behavior is a pure function of the [`Cursor`] it is applied
//! to.  Rules are composed by naming other rules as type parameters, e.g.
//! `Join<Letter<usize, u8>, Comma<usize, u8>, Vec<u8>>`, and so a whole grammar
//! is resolved at compile time, without dynamic dispatch.
//!
//! Every rule application goes through the cursor's [`attempt`] family of
//! methods.  If a rule fails, the cursor rewinds to where the attempt started,
//! so a failed sub-rule never leaves partial consumption visible to its caller,
//! which makes backtracking automatic.  Failures that mean "this rule did not
//! match here" are absorbed by optional and repetition adapters, while an
//! integer literal that overflows its type is a hard failure that they
//! propagate.
//!
//! Single-terminal rules can be written as pure functions by implementing
//! [`TerminalRule`], which is adapted into a `Rule` once for all of them.
//!
//! Failures are reported, as they are raised, to a [`Diagnostics`] sink owned
//! by the cursor, which knows the location and the rule identity.  How they
//! are presented is up to the sink.
//!
//! This core crate is `no_std` and does no heap allocation.  The collecting
//! combinators extend any `Default + Extend` container you choose.
//!
//! [`Rule`]: trait.Rule.html
//! [`Cursor`]: struct.Cursor.html
//! [`attempt`]: struct.Cursor.html#method.attempt
//! [`TerminalRule`]: trait.TerminalRule.html
//! [`Diagnostics`]: trait.Diagnostics.html

#![no_std]


mod error;
pub use error::{Error, Result};

mod source;
pub use source::Source;

mod cursor;
pub use cursor::Cursor;

mod rule;
pub use rule::{Rule, TerminalRule, Optional};

mod integer;
pub use integer::{Integer, Scalar};

pub mod diagnostics;
#[doc(no_inline)]
pub use diagnostics::Diagnostics;

pub mod digits;
#[doc(no_inline)]
pub use digits::{DigitRule, NormalizedIntegerLiteral, IntegerLiteral};

pub mod combinators;
#[doc(no_inline)]
pub use combinators::{End, Discard, Collect, Reduce, Join, Pad};

pub mod ascii;
