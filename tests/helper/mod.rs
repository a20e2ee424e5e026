#![allow(dead_code)]

use rand::{rngs::StdRng, SeedableRng};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_b175)
}

/// Counts one bits by testing every bit.
pub fn naive(x: u64, bits: u32) -> u32 {
    (0..bits).filter(|&i| x & (1 << i) != 0).count() as u32
}

macro_rules! sample {
    ( $rng:expr, $Uint:ty, $size:expr ) => {{
        let mut vec: Vec<$Uint> = Vec::with_capacity($size);
        for _ in 0..$size {
            vec.push($rng.gen());
        }
        vec
    }};
}
