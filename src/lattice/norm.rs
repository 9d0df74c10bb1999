//! Squared norms and the verifier's acceptance threshold
//!
//! The verifier bounds ‖z‖² where the norm is taken over the balanced lift of
//! the response: canonical coordinates above ⌊q/2⌋ count as negative. The
//! threshold B² is the expected honest norm scaled by a safety factor, so
//! honest proofs pass with margin while a forged response must stay short.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Squared ℓ₂ norm of the balanced lift of `v` against q.
///
/// Coordinates are expected canonical in [0, q); a coordinate strictly
/// greater than ⌊q/2⌋ has q subtracted before squaring. Already-negative
/// coordinates pass through unchanged.
pub fn norm_squared(v: &[BigInt], q: &BigUint) -> BigUint {
    let q_signed = BigInt::from(q.clone());
    let half_q = &q_signed / 2;
    let mut acc = BigInt::zero();
    for vi in v {
        let lifted = if vi > &half_q {
            vi - &q_signed
        } else {
            vi.clone()
        };
        acc += &lifted * &lifted;
    }
    acc.magnitude().clone()
}

/// Expected Σ y_i² for y_i uniform on {-Y, ..., Y}: m·(Y² - 1)/3.
pub fn expected_y_contribution(m: usize, y_range: i64) -> f64 {
    m as f64 * ((y_range as f64).powi(2) - 1.0) / 3.0
}

/// Expected Σ (c_i·s_i)² for ternary-like c and s: m·S².
pub fn expected_s_contribution(m: usize, s_range: i64) -> f64 {
    m as f64 * (s_range as f64).powi(2)
}

/// Acceptance threshold B² = ⌈safety_factor · (E_y + E_s)⌉.
///
/// Strictly increasing in every argument, which keeps the completeness and
/// soundness margins ordered across parameter choices.
pub fn calculate_norm_bound(m: usize, y_range: i64, s_range: i64, safety_factor: f64) -> u64 {
    let expected = expected_y_contribution(m, y_range) + expected_s_contribution(m, s_range);
    (safety_factor * expected).ceil() as u64
}

// ============================================================================
// Tests
// ============================================================================
