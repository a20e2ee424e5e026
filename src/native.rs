//! Module `native` counts bits with the target's popcount instruction.
//!
//! Compiled only when the build script found the instruction enabled for the target.
//! On x86 the `popcnt` intrinsics are called directly; on the other targets
//! `count_ones` already lowers to one instruction (`cnt`, `cpop`, `i64.popcnt`).

#[cfg(target_arch = "x86")]
use core::arch::x86::_popcnt32;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_popcnt32, _popcnt64};

use crate::private;

/// Unsigned words the popcount instruction accepts.
///
/// This trait is public but sealed.
pub trait Native: Copy + private::Sealed {
    /// Counts the one bits of `self`.
    fn popcnt(self) -> u32;
}

/// Returns the number of one bits in `x` using the popcount instruction.
#[inline]
pub fn popcount<T: Native>(x: T) -> u32 {
    x.popcnt()
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
macro_rules! implNative {
    ( $( $Uint:ty ),* ) => ($(
        impl Native for $Uint {
            #[inline(always)]
            #[allow(unused_unsafe)]
            fn popcnt(self) -> u32 {
                // SAFETY: `popcount_native` is only set with the `popcnt` target feature.
                unsafe { _popcnt32(self as i32) as u32 }
            }
        }
    )*);
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
macro_rules! implNative {
    ( $( $Uint:ty ),* ) => ($(
        impl Native for $Uint {
            #[inline(always)]
            fn popcnt(self) -> u32 {
                self.count_ones()
            }
        }
    )*);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
implNative!(u8, u16, u32);
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
implNative!(u8, u16, u32, u64);

#[cfg(target_arch = "x86_64")]
impl Native for u64 {
    #[inline(always)]
    #[allow(unused_unsafe)]
    fn popcnt(self) -> u32 {
        // SAFETY: see `implNative`.
        unsafe { _popcnt64(self as i64) as u32 }
    }
}

// 32-bit x86 has no 64-bit popcnt; count both halves.
#[cfg(target_arch = "x86")]
impl Native for u64 {
    #[inline(always)]
    fn popcnt(self) -> u32 {
        (self as u32).popcnt() + ((self >> 32) as u32).popcnt()
    }
}
