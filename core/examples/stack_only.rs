//! Shows defining a small grammar, for CSS-like colors, when using only the
//! `gramma_core` crate, with nothing allocated on the heap.

use gramma_core::{
    Cursor, Diagnostics, End, IntegerLiteral, Pad, Rule, Source, Result, TerminalRule,
    ascii::{Comma, ParenthesisLeft, ParenthesisRight, Whitespace},
    digits::{DecimalDigit, HexDigit},
    diagnostics::premade::LastFailure,
};


/// Matches only the byte `B`.
#[derive(Debug)]
struct Is<const B: u8>;

impl<const B: u8> TerminalRule for Is<B> {
    type Location = usize;
    type Terminal = u8;
    type Construction = ();

    fn parse_terminal(terminal: u8) -> Option<()> {
        (terminal == B).then_some(())
    }
}

#[derive(Copy, Clone, Debug)]
struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Exactly two hex digits.
#[derive(Debug)]
struct HexChannel;

impl Rule for HexChannel {
    type Location = usize;
    type Terminal = u8;
    type Construction = u8;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<u8, usize>
        where S: Source<Location = usize, Terminal = u8> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = u8>,
    {
        type Hex = HexDigit<usize, u8, u8>;
        let (high, low) = cursor.attempt::<(Hex, Hex)>()?;
        Ok(high * 16 + low)
    }
}

/// `#rrggbb`
#[derive(Debug)]
struct HexColor;

impl Rule for HexColor {
    type Location = usize;
    type Terminal = u8;
    type Construction = Color;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Color, usize>
        where S: Source<Location = usize, Terminal = u8> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = u8>,
    {
        let ((), red, green, blue) =
            cursor.attempt::<(Is<b'#'>, HexChannel, HexChannel, HexChannel)>()?;
        Ok(Color { red, green, blue })
    }
}

/// `rgb(r, g, b)` with decimal channels.
#[derive(Debug)]
struct RgbColor;

impl Rule for RgbColor {
    type Location = usize;
    type Terminal = u8;
    type Construction = Color;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Color, usize>
        where S: Source<Location = usize, Terminal = u8> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = u8>,
    {
        type Channel = Pad<IntegerLiteral<DecimalDigit<usize, u8, u8>>, Whitespace<usize, u8>>;
        type C = Comma<usize, u8>;

        let ((), (), (), ()) =
            cursor.attempt::<(Is<b'r'>, Is<b'g'>, Is<b'b'>, ParenthesisLeft<usize, u8>)>()?;
        let (red, (), green, (), blue) = cursor.attempt::<(Channel, C, Channel, C, Channel)>()?;
        let () = cursor.attempt::<ParenthesisRight<usize, u8>>()?;
        Ok(Color { red, green, blue })
    }
}

/// Either form.
#[derive(Debug)]
struct AnyColor;

impl Rule for AnyColor {
    type Location = usize;
    type Terminal = u8;
    type Construction = Color;

    fn parse<S, D>(cursor: &mut Cursor<'_, S, D>) -> Result<Color, usize>
        where S: Source<Location = usize, Terminal = u8> + ?Sized,
              D: Diagnostics<Location = usize, Terminal = u8>,
    {
        match cursor.attempt_optional::<HexColor>()? {
            Some(color) => Ok(color),
            None => cursor.attempt::<RgbColor>(),
        }
    }
}

fn main() {
    let inputs = ["#ff8000", "rgb(255, 128,0)", "rgb( 1 ,2,3 )", "#ff80", "rgb(256,0,0)",
                  "rgb(1,2,3)x"];

    for input in inputs {
        let mut cursor = Cursor::new(input.as_bytes(), LastFailure::default());
        match cursor.attempt::<(AnyColor, End<usize, u8>)>() {
            Ok((Color { red, green, blue }, ())) =>
                println!("{input:?} => red {red}, green {green}, blue {blue}"),
            Err(error) => {
                let found = cursor.diagnostics().found().map(|&b| char::from(b));
                println!("{input:?} => {error} at {}, found {found:?}", error.location());
            }
        }
    }
}
