//! Population count (the number of one bits) of fixed-width integers.
//!
//! ```
//! use popcount::popcount;
//! assert_eq!(popcount(0b_1011_0100_u8), 4);
//! assert_eq!(popcount(0x0F0F_u16), 8);
//! assert_eq!(popcount(0_u32), 0);
//! assert_eq!(popcount(u64::MAX), 64);
//! assert_eq!(popcount(-1_i32), 32);
//! ```
//!
//! Two implementations exist and exactly one is compiled in:
//!
//! - `native`: the target's own instruction (`popcnt` on x86, `cnt` on aarch64, ...).
//! - `swar`: a branch-free broadword fallback that works everywhere.
//!
//! The build script picks `native` when the target has the instruction enabled,
//! e.g. with `RUSTFLAGS="-C target-cpu=native"`. The `portable` feature forces `swar`.
//!
//! Only 8, 16, 32 and 64 bit integers implement [`Word`],
//! so `popcount(1_u128)` is a compile error rather than a runtime failure.
//!
//! ```compile_fail
//! popcount::popcount(1_u128);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod private;
mod word;

#[cfg(popcount_native)]
pub mod native;
pub mod swar;


use core::fmt;

pub use self::word::Word;

/// Implementation compiled into this build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// A single hardware instruction.
    Native,
    /// The portable SWAR routine in [`swar`].
    Swar,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => f.write_str("native"),
            Backend::Swar => f.write_str("swar"),
        }
    }
}

/// The backend [`popcount`] dispatches to, fixed at build time.
pub const BACKEND: Backend = if cfg!(popcount_native) {
    Backend::Native
} else {
    Backend::Swar
};

/// Returns [`BACKEND`].
#[inline]
pub fn backend() -> Backend {
    BACKEND
}

/// Returns the number of one bits in `x`.
///
/// Signed integers are counted by their two's complement bit pattern.
///
/// ```
/// assert_eq!(popcount::popcount(0b_0110_u16), 2);
/// assert_eq!(popcount::popcount(i8::MIN), 1);
/// ```
#[inline(always)]
pub fn popcount<T: Word>(x: T) -> u32 {
    let ones = x.popcount();
    debug_assert!(ones <= T::BITS);
    ones
}

/// Returns the total number of one bits in `words`.
///
/// ```
/// let words = [0b_1010_u8, 0xFF, 0];
/// assert_eq!(popcount::popcount_slice(&words), 10);
/// assert_eq!(popcount::popcount_slice::<u64>(&[]), 0);
/// ```
pub fn popcount_slice<T: Word>(words: &[T]) -> u64 {
    words.iter().map(|&w| u64::from(popcount(w))).sum()
}
