//! Modular arithmetic over Z_q with an arbitrary-precision modulus.
//!
//! This module provides the arithmetic kernel used throughout the protocol:
//! reduction of signed integers to canonical representatives in [0, q),
//! the balanced representative in (-q/2, q/2] used for norm computations,
//! and a trial-division primality test for parameter validation.
//!
//! The modulus is carried inside a [`Zq`] context value rather than living in
//! process-wide state, so sessions with different moduli can coexist.

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use rand::{CryptoRng, Rng};

// ============================================================================
// Arithmetic context
// ============================================================================

/// Modular arithmetic context for Z_q.
///
/// Values handled by this context are canonical representatives in [0, q).
///
/// # Example
/// ```
/// use num_bigint::{BigInt, BigUint};
/// use sigma_sis::lattice::Zq;
///
/// let zq = Zq::new(BigUint::from(17u32));
/// let a = BigUint::from(10u32);
/// let b = BigUint::from(12u32);
/// assert_eq!(zq.add(&a, &b), BigUint::from(5u32));  // (10 + 12) mod 17
/// assert_eq!(zq.reduce_signed(&BigInt::from(-5)), BigUint::from(12u32));
/// assert_eq!(zq.balance(&BigUint::from(12u32)), BigInt::from(-5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zq {
    q: BigUint,
    /// q as a signed integer, cached for signed reduction.
    q_signed: BigInt,
    /// ⌊q/2⌋, cached for balancing.
    half_q: BigUint,
}

impl Zq {
    /// Create a new context for Z_q.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    pub fn new(q: BigUint) -> Self {
        assert!(!q.is_zero(), "modulus must be positive");
        let q_signed = BigInt::from(q.clone());
        let half_q = &q / 2u32;
        Self {
            q,
            q_signed,
            half_q,
        }
    }

    /// The modulus q.
    pub fn modulus(&self) -> &BigUint {
        &self.q
    }

    /// Bit length of q (NumBits).
    pub fn bits(&self) -> u64 {
        self.q.bits()
    }

    /// Canonical representative of a signed integer in [0, q).
    pub fn reduce_signed(&self, a: &BigInt) -> BigUint {
        let mut r = a % &self.q_signed;
        if r.sign() == Sign::Minus {
            r += &self.q_signed;
        }
        r.magnitude().clone()
    }

    /// Lift a machine integer into Z_q.
    pub fn from_i64(&self, a: i64) -> BigUint {
        self.reduce_signed(&BigInt::from(a))
    }

    /// Balanced representative in (-q/2, q/2]: canonical values strictly
    /// greater than ⌊q/2⌋ have q subtracted.
    pub fn balance(&self, a: &BigUint) -> BigInt {
        if a > &self.half_q {
            BigInt::from(a.clone()) - &self.q_signed
        } else {
            BigInt::from(a.clone())
        }
    }

    /// Add two canonical values: (a + b) mod q.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.q {
            sum - &self.q
        } else {
            sum
        }
    }

    /// Subtract two canonical values: (a - b) mod q.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            &self.q - b + a
        }
    }

    /// Multiply two canonical values: (a * b) mod q.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.q
    }

    /// Uniform element of Z_q from a cryptographic source.
    pub fn random_element<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.q)
    }
}

// ============================================================================
// Primality
// ============================================================================

/// Trial-division primality test.
///
/// Divides by odd candidates up to ⌊√n⌋, with a machine-word fast path when
/// n fits in a `u64`. Adequate for the modulus sizes this protocol targets;
/// parameter validation is a one-time cost.
pub fn is_prime(n: &BigUint) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }

    // n exceeds u64, so n > 2; reject even numbers, then walk odd divisors.
    if (n % 2u32).is_zero() {
        return false;
    }
    let limit = n.sqrt();
    let mut i = BigUint::from(3u32);
    while i <= limit {
        if (n % &i).is_zero() {
            return false;
        }
        i += 2u32;
    }
    true
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
