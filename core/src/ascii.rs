//! Terminal rules for common ASCII characters, over any `Scalar` terminal
//! type, for use as separators and padding.

use core::marker::PhantomData;

use crate::{Scalar, TerminalRule};


macro_rules! ascii_rules {
    ($($(#[$doc:meta])* $name:ident = $($byte:literal)|+;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub struct $name<Location, Terminal>(PhantomData<fn(Location, Terminal)>);

            impl<L, T> TerminalRule for $name<L, T>
                where T: Scalar,
            {
                type Location = L;
                type Terminal = T;
                type Construction = ();

                #[inline]
                fn parse_terminal(terminal: T) -> Option<()> {
                    match terminal.ascii()? {
                        $($byte)|+ => Some(()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

ascii_rules! {
    /// `,`
    Comma = b',';
    /// `:`
    Colon = b':';
    /// `.`
    Period = b'.';
    /// `-`
    Hyphen = b'-';
    /// `+`
    Plus = b'+';
    /// A single space character.
    Space = b' ';
    /// One space, horizontal tab, carriage return, or line feed.
    Whitespace = b' ' | b'\t' | b'\r' | b'\n';
    /// `(`
    ParenthesisLeft = b'(';
    /// `)`
    ParenthesisRight = b')';
    /// `[`
    BracketLeft = b'[';
    /// `]`
    BracketRight = b']';
    /// `{`
    BraceLeft = b'{';
    /// `}`
    BraceRight = b'}';
}


/// An ASCII letter in either case.  The construction is the terminal itself.
#[derive(Debug)]
pub struct Letter<Location, Terminal>(PhantomData<fn(Location, Terminal)>);

impl<L, T> TerminalRule for Letter<L, T>
    where T: Scalar,
{
    type Location = L;
    type Terminal = T;
    type Construction = T;

    #[inline]
    fn parse_terminal(terminal: T) -> Option<T> {
        terminal.ascii().filter(u8::is_ascii_alphabetic).map(|_| terminal)
    }
}
