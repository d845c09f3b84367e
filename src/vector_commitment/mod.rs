//! Commitment scheme abstraction, kept from the teacher's
//! `vector_commitment::HomomorphicCommitmentScheme` trait (generalized from
//! a `ProjectiveCurve` scalar field to this crate's `ZqElement`).

pub mod pedersen;

use crate::error::CryptoError;
use crate::field::{GqElement, ZqElement};

/// A homomorphic commitment scheme over `Z_q`, producing `G_q` commitments.
pub trait HomomorphicCommitmentScheme {
    type CommitKey;

    fn commit(commit_key: &Self::CommitKey, a: &[ZqElement], r: &ZqElement) -> Result<GqElement, CryptoError>;
}
