use super::HomomorphicEncryptionScheme;
use crate::error::CryptoError;
use crate::field::{GqElement, GqGroup, Tagged, ZqElement};

use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// `pk = (pk_0, ..., pk_{k-1})`, a vector of non-identity `G_q` elements.
#[derive(Clone, Debug, Serialize)]
pub struct PublicKey {
    keys: Vec<GqElement>,
}

impl PublicKey {
    pub fn new(keys: Vec<GqElement>) -> Result<Self, CryptoError> {
        if keys.is_empty() {
            return Err(CryptoError::BoundsViolation("PublicKey".into(), "must have size >= 1".into()));
        }
        let group = keys[0].group().clone();
        for key in &keys {
            if key.group() != &group {
                return Err(CryptoError::GroupMismatch);
            }
            if key.is_identity() {
                return Err(CryptoError::WitnessInconsistent("public key component is the identity".into()));
            }
        }
        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn group(&self) -> &Arc<GqGroup> {
        self.keys[0].group()
    }

    pub fn component(&self, i: usize) -> &GqElement {
        &self.keys[i]
    }

    pub fn components(&self) -> &[GqElement] {
        &self.keys
    }
}

/// A (lifted, multi-message) ElGamal ciphertext `(γ, φ_0, ..., φ_{l-1}) ∈
/// G_q^{l+1}`.
#[derive(Clone, Debug, Serialize)]
pub struct Ciphertext {
    gamma: GqElement,
    phis: Vec<GqElement>,
}

impl PartialEq for Ciphertext {
    fn eq(&self, other: &Self) -> bool {
        self.gamma == other.gamma && self.phis == other.phis
    }
}

impl Tagged for Ciphertext {
    fn group(&self) -> &Arc<GqGroup> {
        self.gamma.group()
    }
}

impl Ciphertext {
    pub fn new(gamma: GqElement, phis: Vec<GqElement>) -> Result<Self, CryptoError> {
        for phi in &phis {
            if phi.group() != gamma.group() {
                return Err(CryptoError::GroupMismatch);
            }
        }
        Ok(Self { gamma, phis })
    }

    pub fn gamma(&self) -> &GqElement {
        &self.gamma
    }

    pub fn phis(&self) -> &[GqElement] {
        &self.phis
    }

    pub fn message_length(&self) -> usize {
        self.phis.len()
    }

    /// Componentwise multiplication.
    pub fn mul(&self, other: &Self) -> Result<Self, CryptoError> {
        if self.phis.len() != other.phis.len() {
            return Err(CryptoError::HadamardProductLengthError(self.phis.len(), other.phis.len()));
        }
        let gamma = self.gamma.mul(&other.gamma)?;
        let phis = self
            .phis
            .iter()
            .zip(other.phis.iter())
            .map(|(a, b)| a.mul(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ciphertext::new(gamma, phis)
    }

    /// Componentwise exponentiation by a `Z_q` scalar.
    pub fn exp(&self, scalar: &ZqElement) -> Self {
        Self {
            gamma: self.gamma.exp(scalar),
            phis: self.phis.iter().map(|phi| phi.exp(scalar)).collect(),
        }
    }

    /// The identity ciphertext of a given message length, the fold-unit for
    /// [`Ciphertext::mul`].
    pub fn identity(group: &Arc<GqGroup>, message_length: usize) -> Self {
        Self {
            gamma: group.identity(),
            phis: (0..message_length).map(|_| group.identity()).collect(),
        }
    }

    /// Folds a (possibly empty) slice of equal-length ciphertexts under
    /// `mul`; an empty slice of `message_length` `l` returns the identity.
    pub fn product(group: &Arc<GqGroup>, message_length: usize, ciphertexts: &[Self]) -> Result<Self, CryptoError> {
        let mut acc = Self::identity(group, message_length);
        for c in ciphertexts {
            acc = acc.mul(c)?;
        }
        Ok(acc)
    }

    /// `ReEnc(m, ρ, pk) = (g^ρ, m_0 · pk_0^ρ, ..., m_{l-1} · pk_{l-1}^ρ)`.
    /// Requires `l <= |pk|`.
    pub fn re_encrypt(message: &[GqElement], randomness: &ZqElement, public_key: &PublicKey) -> Result<Self, CryptoError> {
        if message.len() > public_key.len() {
            return Err(CryptoError::BoundsViolation(
                "re_encrypt".into(),
                format!("message length {} exceeds public key size {}", message.len(), public_key.len()),
            ));
        }
        let group = public_key.group().clone();
        let gamma = group.generator().exp(randomness);
        let phis = message
            .iter()
            .enumerate()
            .map(|(i, m)| m.mul(&public_key.component(i).exp(randomness)))
            .collect::<Result<Vec<_>, _>>()?;
        Ciphertext::new(gamma, phis)
    }

    /// Re-randomizes `self` in place: `self' = ReEnc(1, ρ, pk) · self`, the
    /// operation [`crate::shuffle::gen_shuffle`] applies per-element.
    pub fn masked_by_zero(randomness: &ZqElement, public_key: &PublicKey, message_length: usize) -> Result<Self, CryptoError> {
        let ones = vec![public_key.group().identity(); message_length];
        Self::re_encrypt(&ones, randomness, public_key)
    }

    /// `ReEnc((g^b, ..., g^b), τ, pk)`: encrypts the generator raised to `b`,
    /// lifted uniformly across every message slot. This is the masking
    /// ciphertext the multi-exponentiation argument folds into its diagonal
    /// commitments (`E_k = ReEnc(g^{b_k}, τ_k) · D_k`).
    pub fn mask_generator(b: &ZqElement, randomness: &ZqElement, public_key: &PublicKey, message_length: usize) -> Result<Self, CryptoError> {
        let group = public_key.group().clone();
        let masked_generator = group.generator().exp(b);
        let message = vec![masked_generator; message_length];
        Self::re_encrypt(&message, randomness, public_key)
    }
}

impl std::ops::Add for Ciphertext {
    type Output = Ciphertext;
    fn add(self, rhs: Self) -> Ciphertext {
        self.mul(&rhs).expect("Ciphertext::add requires matching shape and group")
    }
}

/// Minimal ElGamal instantiation over `G_q`, provided so the crate's own
/// tests and benchmarks can produce ciphertexts without depending on an
/// external collaborator; key generation and decryption are outside the
/// shuffle-argument core and exist here purely as test/bench scaffolding.
pub struct ElGamal;

impl HomomorphicEncryptionScheme for ElGamal {
    type PublicKey = PublicKey;
    type SecretKey = Vec<ZqElement>;
    type Plaintext = Vec<GqElement>;
    type Ciphertext = Ciphertext;

    fn keygen<R: Rng>(
        group: &Arc<GqGroup>,
        rng: &mut R,
        size: usize,
    ) -> Result<(PublicKey, Vec<ZqElement>), CryptoError> {
        let secret_key: Vec<ZqElement> = (0..size).map(|_| group.random_scalar(rng)).collect();
        let public_key = secret_key.iter().map(|sk| group.generator().exp(sk)).collect();
        Ok((PublicKey::new(public_key)?, secret_key))
    }

    fn encrypt(public_key: &PublicKey, message: &Vec<GqElement>, randomness: &ZqElement) -> Result<Ciphertext, CryptoError> {
        Ciphertext::re_encrypt(message, randomness, public_key)
    }

    fn decrypt(secret_key: &Vec<ZqElement>, ciphertext: &Ciphertext) -> Result<Vec<GqElement>, CryptoError> {
        if secret_key.len() != ciphertext.message_length() {
            return Err(CryptoError::DotProductLengthError(secret_key.len(), ciphertext.message_length()));
        }
        let shared_secrets: Vec<_> = secret_key.iter().map(|sk| ciphertext.gamma().exp(sk)).collect();
        Ok(ciphertext
            .phis()
            .iter()
            .zip(shared_secrets.iter())
            .map(|(phi, s)| phi.mul(&s.inverse()))
            .collect::<Result<Vec<_>, _>>()?)
    }
}
