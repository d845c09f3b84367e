//! An ElGamal collaborator (keygen/encrypt/decrypt are not this crate's
//! concern, and are provided only as test/bench scaffolding) plus the
//! `Ciphertext` data type and its componentwise/re-encryption operations,
//! which are core data used throughout the argument tower.
//!
//! Mirrors the teacher's `homomorphic_encryption::HomomorphicEncryptionScheme`
//! trait (referenced from `benches/shuffle.rs` as `el_gamal::ElGamal`),
//! generalized from a single-message elliptic-curve ciphertext to the
//! multi-message (lifted) `Ciphertext = (γ, φ_0, ..., φ_{l-1})` this spec's
//! data model requires.

pub mod el_gamal;

use crate::error::CryptoError;
use crate::field::ZqElement;

/// A homomorphic public-key encryption scheme over `G_q`.
pub trait HomomorphicEncryptionScheme {
    type PublicKey;
    type SecretKey;
    type Plaintext;
    type Ciphertext: Clone
        + PartialEq
        + std::ops::Add<Output = Self::Ciphertext>
        + crate::field::Tagged;

    fn keygen<R: rand::Rng>(
        group: &std::sync::Arc<crate::field::GqGroup>,
        rng: &mut R,
        size: usize,
    ) -> Result<(Self::PublicKey, Self::SecretKey), CryptoError>;

    fn encrypt(
        public_key: &Self::PublicKey,
        message: &Self::Plaintext,
        randomness: &ZqElement,
    ) -> Result<Self::Ciphertext, CryptoError>;

    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Self::Plaintext, CryptoError>;
}
