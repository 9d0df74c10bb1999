//! Proof-size accounting
//!
//! Pure bit-length bookkeeping for one transcript: n modular coordinates for
//! the commitment, two bits per ternary challenge digit, m modular
//! coordinates for the response. Used by the benchmark harness; nothing here
//! touches protocol state.

use num_bigint::BigInt;
use std::fmt;

use crate::error::{Result, SigmaError};
use crate::lattice::vector::ZqVector;
use crate::protocol::params::Parameters;

/// Bit sizes of one (u, c, z) transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofSize {
    pub commitment_bits: u64,
    pub challenge_bits: u64,
    pub response_bits: u64,
    pub total_bits: u64,
}

impl ProofSize {
    pub fn total_kib(&self) -> f64 {
        self.total_bits as f64 / 8.0 / 1024.0
    }
}

impl fmt::Display for ProofSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proof size:")?;
        writeln!(f, "  commitment: {} bits", self.commitment_bits)?;
        writeln!(f, "  challenge:  {} bits", self.challenge_bits)?;
        writeln!(f, "  response:   {} bits", self.response_bits)?;
        writeln!(
            f,
            "  total:      {} bits ({:.3} KiB)",
            self.total_bits,
            self.total_kib()
        )
    }
}

/// Account for one transcript against the session parameters.
///
/// Each modular coordinate costs NumBits(q) bits, each challenge digit two
/// bits. Overflow in the accounting is an `InternalArithmetic` error.
pub fn calculate_proof_size(
    params: &Parameters,
    u: &ZqVector,
    challenge: &[i64],
    z: &[BigInt],
) -> Result<ProofSize> {
    let q_bits = params.q().bits();
    let overflow = SigmaError::InternalArithmetic("overflow in proof-size accounting");

    let commitment_bits = (u.len() as u64)
        .checked_mul(q_bits)
        .ok_or(overflow.clone())?;
    let challenge_bits = (challenge.len() as u64)
        .checked_mul(2)
        .ok_or(overflow.clone())?;
    let response_bits = (z.len() as u64).checked_mul(q_bits).ok_or(overflow.clone())?;
    let total_bits = commitment_bits
        .checked_add(challenge_bits)
        .and_then(|bits| bits.checked_add(response_bits))
        .ok_or(overflow)?;

    Ok(ProofSize {
        commitment_bits,
        challenge_bits,
        response_bits,
        total_bits,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::Zero;

    fn transcript(n: usize, m: usize, q: u64) -> (ZqVector, Vec<i64>, Vec<BigInt>) {
        let u = ZqVector::new(vec![BigInt::zero(); n], BigUint::from(q));
        (u, vec![0i64; m], vec![BigInt::zero(); m])
    }

    #[test]
    fn default_preset_sizes() {
        let params = Parameters::default();
        let (u, c, z) = transcript(4, 4, 97);
        let size = calculate_proof_size(&params, &u, &c, &z).unwrap();
        // NumBits(97) = 7
        assert_eq!(size.commitment_bits, 4 * 7);
        assert_eq!(size.challenge_bits, 4 * 2);
        assert_eq!(size.response_bits, 4 * 7);
        assert_eq!(size.total_bits, 64);
    }

    #[test]
    fn high_security_preset_sizes() {
        let params = Parameters::high_security();
        let (u, c, z) = transcript(512, 512, 4_294_967_291);
        let size = calculate_proof_size(&params, &u, &c, &z).unwrap();
        assert_eq!(size.commitment_bits, 512 * 32);
        assert_eq!(size.challenge_bits, 512 * 2);
        assert_eq!(size.response_bits, 512 * 32);
        assert_eq!(size.total_bits, 33_792);
        assert!((size.total_kib() - 4.125).abs() < 1e-9);
    }

    #[test]
    fn display_reports_all_components() {
        let params = Parameters::default();
        let (u, c, z) = transcript(4, 4, 97);
        let text = calculate_proof_size(&params, &u, &c, &z)
            .unwrap()
            .to_string();
        assert!(text.contains("commitment: 28 bits"));
        assert!(text.contains("total:      64 bits"));
    }
}
