//! Draw helpers over an injected random source.
//!
//! Every random decision in sizing, placement, and décor goes through these so a
//! single seeded `ChaCha8Rng` reproduces a whole museum.

use rand_chacha::rand_core::Rng;

pub(crate) fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

pub(crate) fn random_range_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> usize {
    debug_assert!(min <= max);
    min + random_index(rng, max - min + 1)
}

/// Fisher-Yates shuffle.
pub(crate) fn shuffle<R: Rng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_index(rng, i + 1);
        items.swap(i, j);
    }
}

pub(crate) fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.next_u64() & 1 == 1
}

/// True with probability `numerator / denominator`.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, numerator: u64, denominator: u64) -> bool {
    debug_assert!(denominator > 0);
    rng.next_u64() % denominator < numerator
}

/// Uniform float in `[0, 1)` built from the top 24 bits of one draw.
pub(crate) fn unit_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u64() >> 40) as f32 / (1_u64 << 24) as f32
}
