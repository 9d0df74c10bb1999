//! # Lattice Σ-protocol for the SIS relation
//!
//! An interactive three-move proof of knowledge: the prover demonstrates
//! knowledge of a short ternary vector s with A·s ≡ t (mod q) for a public
//! uniform matrix A and syndrome t, without revealing s.
//!
//! ## The protocol
//!
//! 1. Prover samples y uniformly from [-Y, Y]^m and sends u = A·y mod q
//! 2. Verifier sends a ternary challenge c ∈ {-1, 0, 1}^m
//! 3. Prover sends z = y + c⊙s mod q
//! 4. Verifier accepts iff ‖z‖² ≤ B² and A·z ≡ u + A·(c⊙s) (mod q)
//!
//! The norm threshold B² scales the expected honest norm by a safety factor,
//! keeping honest proofs inside the bound while a prover without s cannot
//! satisfy both checks except with negligible probability.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use sigma_sis::{generate_challenge, Parameters, Session};
//!
//! let mut session = Session::new(Parameters::default(), ChaCha20Rng::seed_from_u64(1));
//! let mut verifier_rng = ChaCha20Rng::seed_from_u64(2);
//!
//! let u = session.commit();
//! let c = generate_challenge(&mut verifier_rng, session.params().m());
//! let z = session.respond(&c)?;
//! assert!(session.verify(&u, &c, &z)?);
//! # Ok::<(), sigma_sis::SigmaError>(())
//! ```
//!
//! ## Caveats
//!
//! Responses are released without rejection sampling, so they leak
//! information about s: treat this crate as a proof-of-knowledge skeleton,
//! not a production zero-knowledge proof. The protocol here is strictly
//! interactive; there is no Fiat-Shamir transform.

pub mod error;
pub mod lattice;
pub mod protocol;

pub use error::{Result, SigmaError};
pub use lattice::{calculate_norm_bound, norm_squared, sample_ternary, sample_uniform, Matrix, ZqVector};
pub use protocol::{calculate_proof_size, generate_challenge, Parameters, ProofSize, Session};
