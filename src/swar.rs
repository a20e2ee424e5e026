//! Module `swar` counts bits with plain word-wide arithmetic.
//!
//! Every step operates on packed sub-fields of a single register:
//!
//! 1. `x - ((x >> 1) & 0x55..)`: each 2-bit field holds its own count.
//! 2. `(x & 0x33..) + ((x >> 2) & 0x33..)`: each 4-bit field holds its count.
//! 3. `(x + (x >> 4)) & 0x0F..`: each byte holds its count.
//! 4. `(x * 0x01..) >> (BITS - 8)`: the top byte accumulates all bytes.
//!
//! An 8-bit word is a single byte, so step 4 is skipped for `u8`.
//! No field ever exceeds its width, so the arithmetic is exact.

// # References
//
// - Hacker's Delight, 2nd ed., 5-1 Counting 1-Bits
// - Broadword Implementation of Rank/Select Queries ( http://sux.di.unimi.it/paper.pdf )

use crate::private;

/// Unsigned words with the masks the SWAR routine needs.
///
/// This trait is public but sealed.
pub trait Swar: Copy + private::Sealed {
    /// Size in bits.
    const BITS: u32;

    /// `0b_0101..`
    const X55: Self;
    /// `0b_0011..`
    const X33: Self;
    /// `0b_0000_1111..`
    const X0F: Self;
    /// `0x01` repeated in every byte.
    /// For `u8` this is `1` and never used.
    const X01: Self;

    /// Counts the one bits of `self`.
    fn swar(self) -> u32;
}

/// Returns the number of one bits in `x` without a popcount instruction.
///
/// ```
/// assert_eq!(popcount::swar::popcount(0b_1011_0100_u8), 4);
/// assert_eq!(popcount::swar::popcount(u64::MAX), 64);
/// ```
#[inline]
pub fn popcount<T: Swar>(x: T) -> u32 {
    x.swar()
}

macro_rules! implSwar {
    ( @x01 ) => { 0x01 };
    ( @x01 $x01:expr ) => { $x01 };

    ( $( $(#[$attr:meta])* fn $name:ident($Uint:ty) = [$x55:expr, $x33:expr, $x0f:expr $(, $x01:expr)?]; )* ) => ($(
        $(#[$attr])*
        #[inline]
        pub const fn $name(x: $Uint) -> u32 {
            let x = x - ((x >> 1) & $x55);
            let x = (x & $x33) + ((x >> 2) & $x33);
            let x = (x + (x >> 4)) & $x0f;
            $( let x = x.wrapping_mul($x01) >> (<$Uint>::BITS - 8); )?
            x as u32
        }

        impl Swar for $Uint {
            const BITS: u32 = <$Uint>::BITS;

            const X55: Self = $x55;
            const X33: Self = $x33;
            const X0F: Self = $x0f;
            const X01: Self = implSwar!(@x01 $($x01)?);

            #[inline(always)]
            fn swar(self) -> u32 {
                $name(self)
            }
        }
    )*);
}

#[rustfmt::skip]
implSwar! {
    /// Counts the one bits of a `u8`.
    ///
    /// ```
    /// const ONES: u32 = popcount::swar::popcount8(0b_1011_0100);
    /// assert_eq!(ONES, 4);
    /// ```
    fn popcount8(u8)   = [0x55, 0x33, 0x0F];

    /// Counts the one bits of a `u16`.
    fn popcount16(u16) = [0x5555, 0x3333, 0x0F0F, 0x0101];

    /// Counts the one bits of a `u32`.
    fn popcount32(u32) = [0x5555_5555, 0x3333_3333, 0x0F0F_0F0F, 0x0101_0101];

    /// Counts the one bits of a `u64`.
    fn popcount64(u64) = [
        0x5555_5555_5555_5555,
        0x3333_3333_3333_3333,
        0x0F0F_0F0F_0F0F_0F0F,
        0x0101_0101_0101_0101
    ];
}
