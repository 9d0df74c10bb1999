//! Error types for the Σ-protocol core.
//!
//! Verification failure is not an error: [`Session::verify`](crate::Session::verify)
//! returns `Ok(false)` for a well-formed but unsatisfying proof. Errors are
//! reserved for malformed inputs and internal inconsistencies.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SigmaError>;

/// Errors surfaced by parameter validation and the protocol engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigmaError {
    /// Parameter validation failed; the message names the offending rule.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A supplied vector had a length inconsistent with the session dimensions.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// `respond` was called with no preceding `commit` on this session.
    #[error("respond called before commit")]
    ProtocolOrder,

    /// Modulus-context mismatch or overflow in size accounting; a bug, not
    /// user error.
    #[error("internal arithmetic error: {0}")]
    InternalArithmetic(&'static str),
}
