/// Stochastic mechanics: RNG helpers for tie-breaks and anomaly sampling.
/// Every helper takes the random source as `&mut impl RngCore` so callers
/// inject their own (a seeded `WyRand` in play, a scripted one in tests).
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Seeded default source.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    unit(rng) < p.clamp(0.0, 1.0)
}

/// Fair coin.
#[inline]
pub fn coin_flip<R: RngCore + ?Sized>(rng: &mut R) -> bool {
    bernoulli(rng, 0.5)
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "uniform_index over an empty range");
    ((unit(rng) * len as f64) as usize).min(len.saturating_sub(1))
}
