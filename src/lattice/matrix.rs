//! Dense matrices over Z_q
//!
//! Storage is a flat row-major buffer of canonical coordinates, which keeps
//! the matrix-vector product cache-friendly at the 512 x 512 scale of the
//! high-security parameter set.

use itertools::Itertools;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::{CryptoRng, Rng};
use std::fmt;

use crate::lattice::modular::Zq;
use crate::lattice::vector::ZqVector;

// ============================================================================
// Matrix over Z_q
// ============================================================================

/// An n x m matrix over Z_q, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    ctx: Zq,
    entries: Vec<BigUint>,
}

impl Matrix {
    /// Sample a matrix with independently uniform entries in Z_q.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    pub fn uniform<R: Rng + CryptoRng>(rng: &mut R, rows: usize, cols: usize, q: BigUint) -> Self {
        let ctx = Zq::new(q);
        let entries = (0..rows * cols)
            .map(|_| ctx.random_element(rng))
            .collect();
        Self {
            rows,
            cols,
            ctx,
            entries,
        }
    }

    /// Build a matrix from signed rows, reducing each entry mod q.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, the rows are ragged, or `q` is zero.
    pub fn from_rows(rows: Vec<Vec<BigInt>>, q: BigUint) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "matrix rows must have equal length"
        );
        let ctx = Zq::new(q);
        let entries = rows
            .iter()
            .flatten()
            .map(|e| ctx.reduce_signed(e))
            .collect();
        Self {
            rows: rows.len(),
            cols,
            ctx,
            entries,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn modulus(&self) -> &BigUint {
        self.ctx.modulus()
    }

    pub(crate) fn context(&self) -> &Zq {
        &self.ctx
    }

    /// Entry at row `i`, column `j`.
    #[inline]
    pub fn entry(&self, i: usize, j: usize) -> &BigUint {
        debug_assert!(i < self.rows && j < self.cols);
        &self.entries[i * self.cols + j]
    }

    /// Matrix-vector product M·v with machine-integer coordinates, canonical
    /// in [0, q).
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.ncols()`.
    pub fn mul_int_vec(&self, v: &[i64]) -> ZqVector {
        let lifted: Vec<BigUint> = v.iter().map(|&c| self.ctx.from_i64(c)).collect();
        self.mul_lifted(&lifted)
    }

    /// Matrix-vector product M·v; coordinates of `v` are first lifted into
    /// Z_q, the result is canonical in [0, q).
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.ncols()`.
    pub fn mul_vec(&self, v: &[BigInt]) -> ZqVector {
        let lifted: Vec<BigUint> = v.iter().map(|c| self.ctx.reduce_signed(c)).collect();
        self.mul_lifted(&lifted)
    }

    fn mul_lifted(&self, lifted: &[BigUint]) -> ZqVector {
        assert_eq!(
            lifted.len(),
            self.cols,
            "expected {} coordinates, got {}",
            self.cols,
            lifted.len()
        );
        // Row products stay below m * q^2; one reduction per row suffices.
        let coeffs = (0..self.rows)
            .map(|i| {
                let mut acc = BigUint::zero();
                for (j, vj) in lifted.iter().enumerate() {
                    acc += self.entry(i, j) * vj;
                }
                acc % self.ctx.modulus()
            })
            .collect();
        ZqVector::from_canonical(coeffs, self.ctx.clone())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            writeln!(
                f,
                "[{}]",
                (0..self.cols).map(|j| self.entry(i, j).to_string()).join(" ")
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn int_rows(rows: Vec<Vec<i64>>) -> Vec<Vec<BigInt>> {
        rows.into_iter()
            .map(|r| r.into_iter().map(BigInt::from).collect())
            .collect()
    }

    #[test]
    fn uniform_dimensions_and_range() {
        let mut rng = test_rng();
        let m = Matrix::uniform(&mut rng, 3, 5, BigUint::from(97u32));
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 5);
        assert_eq!(m.modulus(), &BigUint::from(97u32));
        for i in 0..3 {
            for j in 0..5 {
                assert!(m.entry(i, j) < &BigUint::from(97u32));
            }
        }
    }

    #[test]
    fn identity_times_vector() {
        let identity = Matrix::from_rows(
            int_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]),
            BigUint::from(101u32),
        );
        let v = vec![BigInt::from(5), BigInt::from(10), BigInt::from(15)];
        let result = identity.mul_vec(&v);
        assert_eq!(
            result,
            ZqVector::new(v, BigUint::from(101u32))
        );
    }

    #[test]
    fn negative_coordinates_are_lifted() {
        let m = Matrix::from_rows(int_rows(vec![vec![1, 2]]), BigUint::from(17u32));
        // 1*(-1) + 2*(-5) = -11 = 6 (mod 17)
        let result = m.mul_int_vec(&[-1, -5]);
        assert_eq!(result.coeffs(), &[BigUint::from(6u32)]);
    }

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_rows(
            int_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            BigUint::from(97u32),
        );
        assert_eq!(m.entry(0, 2), &BigUint::from(3u32));
        assert_eq!(m.entry(1, 0), &BigUint::from(4u32));
    }

    #[test]
    fn rectangular_product_length() {
        let mut rng = test_rng();
        let m = Matrix::uniform(&mut rng, 3, 7, BigUint::from(97u32));
        let v = vec![1i64; 7];
        assert_eq!(m.mul_int_vec(&v).len(), 3);
    }

    #[test]
    #[should_panic(expected = "expected 3 coordinates")]
    fn wrong_length_panics() {
        let m = Matrix::from_rows(int_rows(vec![vec![1, 2, 3]]), BigUint::from(97u32));
        m.mul_int_vec(&[1, 2]);
    }

    #[test]
    fn display_rows() {
        let m = Matrix::from_rows(int_rows(vec![vec![1, 2], vec![3, 4]]), BigUint::from(97u32));
        assert_eq!(m.to_string(), "[1 2]\n[3 4]\n");
    }
}
