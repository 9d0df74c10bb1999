//! The three-move proof session
//!
//! A [`Session`] holds one SIS instance for the lifetime of a prover: the
//! public matrix A, the ternary secret s, the public syndrome t = A·s mod q,
//! and the per-round commitment randomness y. The three moves are
//!
//! 1. [`commit`](Session::commit) — sample y, send u = A·y mod q
//! 2. challenge — the verifier draws a ternary c (see
//!    [`generate_challenge`](crate::protocol::challenge::generate_challenge))
//! 3. [`respond`](Session::respond) — send z = y + c⊙s mod q
//!
//! and the verifier accepts iff ‖z‖² stays under the norm threshold and
//! A·z ≡ u + A·(c⊙s) (mod q).
//!
//! # Caveats
//!
//! Responses are released without rejection sampling, so z leaks information
//! about s; this engine is a proof-of-knowledge skeleton, not a
//! production-grade zero-knowledge proof. Answering two different challenges
//! from the same commitment reveals the secret outright (the standard
//! Σ-protocol extractor); the session keeps y across rounds for protocol
//! flexibility, so callers must commit freshly before each respond.

use itertools::izip;
use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use crate::error::{Result, SigmaError};
use crate::lattice::matrix::Matrix;
use crate::lattice::norm::{calculate_norm_bound, norm_squared};
use crate::lattice::sampling::{sample_ternary, sample_uniform};
use crate::lattice::vector::ZqVector;
use crate::protocol::params::Parameters;

// ============================================================================
// Session
// ============================================================================

/// Prover-side state of an interactive SIS proof.
///
/// The randomness source is injected at construction and owned by the
/// session; every sample the protocol draws comes from it.
pub struct Session<R: Rng + CryptoRng> {
    params: Parameters,
    a: Matrix,
    s: Vec<i64>,
    t: ZqVector,
    y: Option<Vec<i64>>,
    rng: R,
}

impl<R: Rng + CryptoRng> Session<R> {
    /// Set up a fresh SIS instance: sample A uniformly in Z_q^{n x m},
    /// sample the ternary secret s, and publish t = A·s mod q.
    pub fn new(params: Parameters, mut rng: R) -> Self {
        let n = params.n();
        let m = params.m();
        let a = Matrix::uniform(&mut rng, n, m, params.q().clone());
        let s = sample_ternary(&mut rng, m);
        let t = a.mul_int_vec(&s);
        trace!("session ready: n={n} m={m} q_bits={}", params.q().bits());
        Self {
            params,
            a,
            s,
            t,
            y: None,
            rng,
        }
    }

    /// First move: resample the commitment randomness y and return
    /// u = A·y mod q (length n).
    ///
    /// Any y left over from a previous round is zeroized before being
    /// replaced.
    pub fn commit(&mut self) -> ZqVector {
        let m = self.params.m();
        let bound = self.params.y_range();
        self.y.zeroize();
        let y = sample_uniform(&mut self.rng, m, bound);
        let u = self.a.mul_int_vec(&y);
        self.y = Some(y);
        u
    }

    /// Third move: z_i = (y_i + c_i·s_i) mod q, canonical in [0, q).
    ///
    /// Fails with `DimensionMismatch` if the challenge length is not m and
    /// with `ProtocolOrder` if no commit preceded this call. The stored y is
    /// retained; see the module docs for why answering a second challenge
    /// without a fresh commit is unsafe.
    pub fn respond(&self, challenge: &[i64]) -> Result<Vec<BigInt>> {
        let m = self.params.m();
        if challenge.len() != m {
            return Err(SigmaError::DimensionMismatch {
                expected: m,
                got: challenge.len(),
            });
        }
        let y = self.y.as_ref().ok_or(SigmaError::ProtocolOrder)?;
        let ctx = self.a.context();
        let z = izip!(y, challenge, &self.s)
            .map(|(&yi, &ci, &si)| {
                let zi = yi as i128 + (ci as i128) * (si as i128);
                BigInt::from(ctx.reduce_signed(&BigInt::from(zi)))
            })
            .collect();
        Ok(z)
    }

    /// Verifier predicate: norm check then algebraic check.
    ///
    /// Returns `Ok(false)` for a well-formed proof that fails either check.
    /// Malformed inputs (wrong lengths, foreign modulus on u) are errors and
    /// leave no trace on the session.
    pub fn verify(&self, u: &ZqVector, challenge: &[i64], z: &[BigInt]) -> Result<bool> {
        let n = self.params.n();
        let m = self.params.m();
        if u.len() != n {
            return Err(SigmaError::DimensionMismatch {
                expected: n,
                got: u.len(),
            });
        }
        if challenge.len() != m {
            return Err(SigmaError::DimensionMismatch {
                expected: m,
                got: challenge.len(),
            });
        }
        if z.len() != m {
            return Err(SigmaError::DimensionMismatch {
                expected: m,
                got: z.len(),
            });
        }
        if u.modulus() != self.params.q() {
            return Err(SigmaError::InternalArithmetic(
                "commitment modulus does not match session modulus",
            ));
        }

        // Check 1: ‖z‖² under the balanced lift stays below B².
        let bound = calculate_norm_bound(
            m,
            self.params.y_range(),
            self.params.s_range(),
            self.params.safety_factor(),
        );
        let norm_sq = norm_squared(z, self.params.q());
        if norm_sq > BigUint::from(bound) {
            debug!("norm check failed: |z|^2 = {norm_sq} exceeds bound {bound}");
            return Ok(false);
        }

        // Check 2: A·z ≡ u + A·(c⊙s) (mod q).
        let lhs = self.a.mul_vec(z);
        let cs: Vec<BigInt> = challenge
            .iter()
            .zip(&self.s)
            .map(|(&ci, &si)| BigInt::from(ci as i128 * si as i128))
            .collect();
        let rhs = u.add(&self.a.mul_vec(&cs))?;

        let accepted = lhs == rhs;
        if !accepted {
            debug!("algebraic check failed: A·z != u + A·(c⊙s)");
        }
        Ok(accepted)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The public matrix A.
    pub fn matrix(&self) -> &Matrix {
        &self.a
    }

    /// The public syndrome t = A·s mod q.
    pub fn syndrome(&self) -> &ZqVector {
        &self.t
    }
}

impl<R: Rng + CryptoRng> Drop for Session<R> {
    fn drop(&mut self) {
        self.s.zeroize();
        self.y.zeroize();
    }
}

// ============================================================================
// Tests
// ============================================================================
