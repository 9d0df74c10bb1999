//! Bounded uniform and ternary sampling
//!
//! Both samplers draw from an injected cryptographic source and are bias-free:
//! each coordinate is an independent uniform draw over the full target range.

use rand::{CryptoRng, Rng};

/// Sample a ternary vector: each coordinate uniform on {-1, 0, 1}.
pub fn sample_ternary<R: Rng + CryptoRng>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..3i64) - 1).collect()
}

/// Sample a vector with coordinates uniform on [-bound, bound]
/// (2·bound + 1 values).
///
/// # Panics
///
/// Panics if `bound` is not positive.
pub fn sample_uniform<R: Rng + CryptoRng>(rng: &mut R, len: usize, bound: i64) -> Vec<i64> {
    assert!(bound > 0, "sampling bound must be positive");
    (0..len).map(|_| rng.gen_range(-bound..=bound)).collect()
}

// ============================================================================
// Tests
// ============================================================================
