//! Bounded integers that digits can be accumulated into, and terminals that
//! digits can be recognized in.


/// A fixed-width integer type with overflow-detecting arithmetic.
pub trait Integer: Copy {
    /// Convert the value of a single digit, which is always below 36.
    fn from_digit(digit: u8) -> Self;

    /// `self * other`, or `None` on overflow.
    fn checked_mul(self, other: Self) -> Option<Self>;

    /// `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer {
    ($($ty:ty)*) => {
        $(
            impl Integer for $ty {
                #[inline]
                #[allow(trivial_numeric_casts, clippy::cast_possible_wrap,
                        clippy::cast_lossless)]
                fn from_digit(digit: u8) -> Self {
                    digit as $ty
                }

                #[inline]
                fn checked_mul(self, other: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, other)
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);


/// A terminal type that has a numeric or Unicode scalar value, which is what
/// digit and ASCII rules test against.
pub trait Scalar: Copy {
    /// The numeric value, or the Unicode scalar value for `char`.
    fn scalar(self) -> u32;

    /// The value as an ASCII byte, or `None` if it is not in the ASCII range.
    #[inline]
    fn ascii(self) -> Option<u8> {
        u8::try_from(self.scalar()).ok().filter(u8::is_ascii)
    }
}

impl Scalar for u8 {
    #[inline]
    fn scalar(self) -> u32 {
        self.into()
    }
}

impl Scalar for u16 {
    #[inline]
    fn scalar(self) -> u32 {
        self.into()
    }
}

impl Scalar for u32 {
    #[inline]
    fn scalar(self) -> u32 {
        self
    }
}

impl Scalar for char {
    #[inline]
    fn scalar(self) -> u32 {
        self.into()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked() {
        assert_eq!(Integer::checked_mul(25_u8, 10), Some(250));
        assert_eq!(Integer::checked_add(250_u8, 6), None);
        assert_eq!(Integer::checked_mul(26_u8, 10), None);
        assert_eq!(Integer::checked_add(-120_i8, -9), None);
        assert_eq!(<i8 as Integer>::from_digit(15), 15);
    }

    #[test]
    fn ascii() {
        assert_eq!(b'a'.ascii(), Some(b'a'));
        assert_eq!(0x80_u8.ascii(), None);
        assert_eq!('λ'.ascii(), None);
        assert_eq!(0x130_u16.ascii(), None);
        assert_eq!('~'.ascii(), Some(b'~'));
    }
}
