//! Challenge generation
//!
//! The challenge is a ternary vector of length m. In a deployment the
//! verifier owns this draw; the prover must never pick its own challenge.

use rand::{CryptoRng, Rng};

use crate::lattice::sampling::sample_ternary;

/// Draw a uniform ternary challenge of the given length.
pub fn generate_challenge<R: Rng + CryptoRng>(rng: &mut R, length: usize) -> Vec<i64> {
    sample_ternary(rng, length)
}
