//! A verifiable re-encryption mixnet: the Bayer–Groth shuffle argument over
//! `G_q ⊂ Z*_p`, built as a tower of zero-knowledge sub-arguments (Zero →
//! Hadamard → Single-Value-Product → Product → Multi-Exponentiation →
//! Shuffle), plus the [`mixnet`] wrapper tying the shuffle itself to its
//! proof.
//!
//! Replaces the teacher's elliptic-curve-generic, `arkworks`-based argument
//! tower with one specialized to a runtime-sized safe-prime-style group;
//! every sub-argument keeps the teacher's `mod.rs`/`prover.rs`/`proof.rs`
//! split and its injected-collaborator style (`RngCore` + [`utils::hash::HashOracle`]
//! in place of `Rng` + `FiatShamirRng`).

pub mod containers;
pub mod error;
pub mod field;
pub mod homomorphic_encryption;
pub mod mixnet;
pub mod shuffle;
pub mod utils;
pub mod vector_commitment;
pub mod zkp;

pub use error::CryptoError;
pub use field::{GqElement, GqGroup, ZqElement};
pub use mixnet::{Mixnet, VerifiableShuffle};
pub use zkp::VerificationResult;
