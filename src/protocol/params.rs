//! Protocol parameter sets
//!
//! A [`Parameters`] value fixes the SIS instance shape for one session: the
//! matrix dimensions n x m, the prime modulus q, the sampling bounds for the
//! commitment randomness and the secret, and the safety factor applied to the
//! verifier's norm threshold. Validation happens once at construction; the
//! record is immutable afterwards.

use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

use crate::error::{Result, SigmaError};
use crate::lattice::modular::is_prime;

/// Configuration record for a proof session.
///
/// `sigma` is a Gaussian width carried for size reporting only; no sampler
/// in this crate consumes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    n: usize,
    m: usize,
    q: BigUint,
    y_range: i64,
    s_range: i64,
    safety_factor: f64,
    sigma: f64,
}

impl Parameters {
    /// Create and validate a parameter set.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: usize,
        m: usize,
        q: BigUint,
        y_range: i64,
        s_range: i64,
        safety_factor: f64,
        sigma: f64,
    ) -> Result<Self> {
        let params = Self {
            n,
            m,
            q,
            y_range,
            s_range,
            safety_factor,
            sigma,
        };
        params.validate()?;
        Ok(params)
    }

    /// High-security preset: n = m = 512 with a 32-bit prime modulus.
    pub fn high_security() -> Self {
        Self {
            n: 512,
            m: 512,
            q: BigUint::from(4_294_967_291u64), // prime just below 2^32
            y_range: 10,
            s_range: 1,
            safety_factor: 10.0,
            sigma: 1.5,
        }
    }

    /// Check every validation rule; each failure carries a distinct reason.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SigmaError::InvalidParameter("dimension n must be positive"));
        }
        if self.m == 0 {
            return Err(SigmaError::InvalidParameter("dimension m must be positive"));
        }
        if self.q.is_zero() {
            return Err(SigmaError::InvalidParameter("modulus must be positive"));
        }
        if self.y_range <= 0 {
            return Err(SigmaError::InvalidParameter("y_range must be positive"));
        }
        if self.s_range <= 0 {
            return Err(SigmaError::InvalidParameter("s_range must be positive"));
        }
        if !(self.safety_factor > 0.0) {
            return Err(SigmaError::InvalidParameter(
                "safety_factor must be positive",
            ));
        }
        if !(self.sigma > 0.0) {
            return Err(SigmaError::InvalidParameter("sigma must be positive"));
        }
        if !is_prime(&self.q) {
            return Err(SigmaError::InvalidParameter("modulus is not prime"));
        }
        // Completeness precondition: the honest response y + c·s must keep
        // its balanced lift intact, i.e. |y_i + c_i·s_i| < q/2. Bound the
        // left side by y_range·(s_range + 1) and require twice that below q.
        let spread = 2u128 * (self.y_range as u128) * (self.s_range as u128 + 1);
        if BigUint::from(spread) >= self.q {
            return Err(SigmaError::InvalidParameter(
                "sampling ranges too large for modulus",
            ));
        }
        Ok(())
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn y_range(&self) -> i64 {
        self.y_range
    }

    pub fn s_range(&self) -> i64 {
        self.s_range
    }

    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for Parameters {
    /// Small test preset: n = m = 4 over q = 97.
    fn default() -> Self {
        Self {
            n: 4,
            m: 4,
            q: BigUint::from(97u32),
            y_range: 10,
            s_range: 1,
            safety_factor: 10.0,
            sigma: 1.5,
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parameters:")?;
        writeln!(f, "  n = {}", self.n)?;
        writeln!(f, "  m = {}", self.m)?;
        writeln!(f, "  q = {} (bits: {})", self.q, self.q.bits())?;
        writeln!(f, "  y_range = {}", self.y_range)?;
        writeln!(f, "  s_range = {}", self.s_range)?;
        writeln!(f, "  safety_factor = {}", self.safety_factor)?;
        writeln!(f, "  sigma = {}", self.sigma)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(Parameters::default().validate().is_ok());
        assert!(Parameters::high_security().validate().is_ok());
    }

    #[test]
    fn default_preset_shape() {
        let p = Parameters::default();
        assert_eq!(p.n(), 4);
        assert_eq!(p.m(), 4);
        assert_eq!(p.q(), &BigUint::from(97u32));
        assert_eq!(p.y_range(), 10);
        assert_eq!(p.s_range(), 1);
    }

    #[test]
    fn non_prime_modulus_rejected() {
        let err = Parameters::new(4, 4, BigUint::from(100u32), 10, 1, 10.0, 1.5).unwrap_err();
        match err {
            SigmaError::InvalidParameter(reason) => assert!(reason.contains("not prime")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            Parameters::new(0, 4, BigUint::from(97u32), 10, 1, 10.0, 1.5),
            Err(SigmaError::InvalidParameter(_))
        ));
        assert!(matches!(
            Parameters::new(4, 0, BigUint::from(97u32), 10, 1, 10.0, 1.5),
            Err(SigmaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_positive_bounds_rejected() {
        assert!(Parameters::new(4, 4, BigUint::from(97u32), 0, 1, 10.0, 1.5).is_err());
        assert!(Parameters::new(4, 4, BigUint::from(97u32), 10, 0, 10.0, 1.5).is_err());
        assert!(Parameters::new(4, 4, BigUint::from(97u32), 10, 1, 0.0, 1.5).is_err());
        assert!(Parameters::new(4, 4, BigUint::from(97u32), 10, 1, 10.0, 0.0).is_err());
        assert!(Parameters::new(4, 4, BigUint::from(97u32), 10, 1, f64::NAN, 1.5).is_err());
    }

    #[test]
    fn oversized_sampling_ranges_rejected() {
        // 2·(30·1 + 30) = 120 >= 97
        let err = Parameters::new(4, 4, BigUint::from(97u32), 30, 1, 10.0, 1.5).unwrap_err();
        match err {
            SigmaError::InvalidParameter(reason) => assert!(reason.contains("too large")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_includes_bit_length() {
        let text = Parameters::default().to_string();
        assert!(text.contains("n = 4"));
        assert!(text.contains("q = 97 (bits: 7)"));
        assert!(text.contains("sigma = 1.5"));
    }
}
