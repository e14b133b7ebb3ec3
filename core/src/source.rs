//! Our abstraction of the input sequence that a `Cursor` reads from.

use core::fmt::Debug;


/// An immutable, randomly-addressable sequence of terminals.  This determines
/// the associated types of the positions within it and of its elements, which
/// every [`Rule`](trait.Rule.html) applied to it must agree with.
pub trait Source {
    /// Positional information of a terminal relative to the start of the
    /// sequence.  Ordered so that diagnostics can tell which failure happened
    /// further along.
    type Location: Copy + Ord + Debug;
    /// The element type.
    type Terminal: Copy + Debug;

    /// The location of the first terminal, which is also the end location when
    /// the sequence is empty.
    fn start(&self) -> Self::Location;

    /// The terminal at `location` together with the location just after it, or
    /// `None` if `location` is at (or beyond) the end.
    fn terminal_at(&self, location: Self::Location)
                   -> Option<(Self::Terminal, Self::Location)>;
}


/// Slices are indexed by element.
impl<T> Source for [T]
    where T: Copy + Debug,
{
    type Location = usize;
    type Terminal = T;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn terminal_at(&self, location: usize) -> Option<(T, usize)> {
        self.get(location).map(|&terminal| (terminal, location + 1))
    }
}

impl<T, const N: usize> Source for [T; N]
    where T: Copy + Debug,
{
    type Location = usize;
    type Terminal = T;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn terminal_at(&self, location: usize) -> Option<(T, usize)> {
        self[..].terminal_at(location)
    }
}

/// String slices are indexed by byte offset and yield `char`s, so a location
/// always lies on a `char` boundary.
impl Source for str {
    type Location = usize;
    type Terminal = char;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn terminal_at(&self, location: usize) -> Option<(char, usize)> {
        let ch = self.get(location ..)?.chars().next()?;
        Some((ch, location + ch.len_utf8()))
    }
}
