#![allow(clippy::cast_lossless, clippy::cast_sign_loss)]

#[cfg(popcount_native)]
use crate::native;
use crate::{private, swar};

/// Trait for an 8, 16, 32 or 64 bit integer. This trait is public but sealed.
///
/// Signed integers share the implementation of the unsigned integer of the same width.
pub trait Word: 'static + Copy + private::Sealed {
    /// Size in bits.
    const BITS: u32;

    /// The unsigned integer with the same width.
    type Unsigned: swar::Swar;

    /// Reinterprets the bit pattern as `Self::Unsigned`.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Counts the one bits with the backend selected at build time.
    fn popcount(self) -> u32;

    /// Counts the one bits with the SWAR routine regardless of the backend.
    #[inline]
    fn popcount_swar(self) -> u32 {
        swar::popcount(self.to_unsigned())
    }
}

macro_rules! implWord {
    ( $( ( $Int:ty, $Uint:ty ) ),* ) => ($(
        impl Word for $Int {
            const BITS: u32 = <$Uint as swar::Swar>::BITS;

            type Unsigned = $Uint;

            #[inline(always)]
            fn to_unsigned(self) -> $Uint {
                self as $Uint
            }

            #[inline(always)]
            fn popcount(self) -> u32 {
                #[cfg(popcount_native)]
                {
                    native::popcount(self as $Uint)
                }
                #[cfg(not(popcount_native))]
                {
                    swar::popcount(self as $Uint)
                }
            }
        }
    )*)
}

#[rustfmt::skip]
implWord!((u8, u8), (u16, u16), (u32, u32), (u64, u64));
#[rustfmt::skip]
implWord!((i8, u8), (i16, u16), (i32, u32), (i64, u64));

#[cfg(target_pointer_width = "32")]
implWord!((usize, u32), (isize, u32));
#[cfg(target_pointer_width = "64")]
implWord!((usize, u64), (isize, u64));
