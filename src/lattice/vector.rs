//! Vectors over Z_q

use itertools::Itertools;
use num_bigint::{BigInt, BigUint};
use std::fmt;

use crate::error::{Result, SigmaError};
use crate::lattice::modular::Zq;

// ============================================================================
// Vector over Z_q
// ============================================================================

/// A vector in Z_q^n with canonical coordinates in [0, q).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZqVector {
    coeffs: Vec<BigUint>,
    ctx: Zq,
}

impl ZqVector {
    /// Create a new vector, reducing signed coordinates mod q.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    pub fn new(coeffs: Vec<BigInt>, q: BigUint) -> Self {
        let ctx = Zq::new(q);
        let coeffs = coeffs.iter().map(|c| ctx.reduce_signed(c)).collect();
        Self { coeffs, ctx }
    }

    /// Wrap coordinates already known to be canonical in [0, q).
    pub(crate) fn from_canonical(coeffs: Vec<BigUint>, ctx: Zq) -> Self {
        debug_assert!(coeffs.iter().all(|c| c < ctx.modulus()));
        Self { coeffs, ctx }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn modulus(&self) -> &BigUint {
        self.ctx.modulus()
    }

    /// Canonical coordinates in [0, q).
    pub fn coeffs(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Balanced coordinates in (-q/2, q/2].
    pub fn centered(&self) -> Vec<BigInt> {
        self.coeffs.iter().map(|c| self.ctx.balance(c)).collect()
    }

    /// Coordinate-wise sum mod q.
    ///
    /// Fails with `InternalArithmetic` if the moduli differ and with
    /// `DimensionMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.ctx != other.ctx {
            return Err(SigmaError::InternalArithmetic(
                "vector moduli differ in addition",
            ));
        }
        if self.len() != other.len() {
            return Err(SigmaError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| self.ctx.add(a, b))
            .collect();
        Ok(Self {
            coeffs,
            ctx: self.ctx.clone(),
        })
    }
}

impl fmt::Display for ZqVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (mod {})",
            self.centered().iter().join(" "),
            self.ctx.modulus()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coeffs: Vec<i64>, q: u64) -> ZqVector {
        ZqVector::new(coeffs.into_iter().map(BigInt::from).collect(), BigUint::from(q))
    }

    #[test]
    fn new_reduces_signed_coordinates() {
        let x = v(vec![-1, -5, -17, -18, 20], 17);
        let canonical: Vec<u64> = vec![16, 12, 0, 16, 3];
        assert_eq!(
            x.coeffs(),
            canonical
                .into_iter()
                .map(BigUint::from)
                .collect::<Vec<_>>()
                .as_slice()
        );
    }

    #[test]
    fn add_wraps() {
        let a = v(vec![15, 10], 17);
        let b = v(vec![5, 10], 17);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, v(vec![3, 3], 17));
    }

    #[test]
    fn add_rejects_modulus_mismatch() {
        let a = v(vec![1, 2], 17);
        let b = v(vec![1, 2], 97);
        assert!(matches!(
            a.add(&b),
            Err(SigmaError::InternalArithmetic(_))
        ));
    }

    #[test]
    fn add_rejects_length_mismatch() {
        let a = v(vec![1, 2], 17);
        let b = v(vec![1, 2, 3], 17);
        assert!(matches!(
            a.add(&b),
            Err(SigmaError::DimensionMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn centered_round_trip() {
        let x = v(vec![100, 50, 1], 101);
        assert_eq!(
            x.centered(),
            vec![BigInt::from(-1), BigInt::from(50), BigInt::from(1)]
        );
    }

    #[test]
    fn display_uses_centered_form() {
        let x = v(vec![96, 1], 97);
        assert_eq!(x.to_string(), "[-1 1] (mod 97)");
    }

    #[test]
    fn empty_vector() {
        let x = v(vec![], 17);
        assert!(x.is_empty());
        assert_eq!(x.len(), 0);
        assert!(x.centered().is_empty());
    }
}
