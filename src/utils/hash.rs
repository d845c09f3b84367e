//! `HashOracle.recursiveHash`: a deterministic Fiat–Shamir oracle over a
//! tagged, recursive structure of byte strings, big integers, lists, and
//! group elements, whose output bit-length is fixed strictly below
//! `bitlen(q)` at construction.
//!
//! Replaces the teacher's `ark_marlin::rng::FiatShamirRng<Digest>`, which is
//! tied to a compile-time scalar field's `UniformRand` implementation and
//! has no notion of a runtime-sized `Z_q`. Built on `tiny_keccak::Shake`,
//! already a teacher dependency (`vuf::fedl` uses the `sha3` feature of the
//! same crate for its own hash-to-point).

use crate::error::CryptoError;
use crate::field::{GqElement, GqGroup, Tagged, ZqElement};
use crate::homomorphic_encryption::el_gamal::Ciphertext;

use num_bigint::BigUint;
use std::sync::Arc;
use tiny_keccak::{Hasher, Shake, Xof};

/// One node of the recursive structure `recursiveHash` absorbs.
#[derive(Clone, Debug)]
pub enum Hashable {
    Bytes(Vec<u8>),
    Integer(BigUint),
    Group(GqElement),
    Scalar(ZqElement),
    List(Vec<Hashable>),
}

impl Hashable {
    pub fn group_vector(elements: &[GqElement]) -> Self {
        Hashable::List(elements.iter().cloned().map(Hashable::Group).collect())
    }

    pub fn scalar_vector(elements: &[ZqElement]) -> Self {
        Hashable::List(elements.iter().cloned().map(Hashable::Scalar).collect())
    }

    /// A ciphertext `(γ, φ_0, ..., φ_{l-1})` absorbed as the list of its
    /// `G_q` components.
    pub fn ciphertext(c: &Ciphertext) -> Self {
        let mut components = Vec::with_capacity(1 + c.phis().len());
        components.push(Hashable::Group(c.gamma().clone()));
        components.extend(c.phis().iter().cloned().map(Hashable::Group));
        Hashable::List(components)
    }

    pub fn ciphertext_vector(cs: &[Ciphertext]) -> Self {
        Hashable::List(cs.iter().map(Hashable::ciphertext).collect())
    }

    fn absorb(&self, shake: &mut Shake) {
        match self {
            Hashable::Bytes(bytes) => {
                shake.update(&[0u8]);
                shake.update(&(bytes.len() as u64).to_be_bytes());
                shake.update(bytes);
            }
            Hashable::Integer(n) => {
                let bytes = n.to_bytes_be();
                shake.update(&[1u8]);
                shake.update(&(bytes.len() as u64).to_be_bytes());
                shake.update(&bytes);
            }
            Hashable::Group(element) => {
                let bytes = element.value().to_bytes_be();
                shake.update(&[2u8]);
                shake.update(&(bytes.len() as u64).to_be_bytes());
                shake.update(&bytes);
            }
            Hashable::Scalar(scalar) => {
                let bytes = scalar.value().to_bytes_be();
                shake.update(&[3u8]);
                shake.update(&(bytes.len() as u64).to_be_bytes());
                shake.update(&bytes);
            }
            Hashable::List(items) => {
                shake.update(&[4u8]);
                shake.update(&(items.len() as u64).to_be_bytes());
                for item in items {
                    item.absorb(shake);
                }
            }
        }
    }
}

pub trait HashOracle {
    /// Deterministic hash of a structured input; output is a non-negative
    /// integer strictly shorter than `bitlen(q)` bits.
    fn recursive_hash(&self, inputs: &[Hashable]) -> Result<BigUint, CryptoError>;

    /// [`HashOracle::recursive_hash`] reduced into `Z_q` (the masked output
    /// is already `< 2^{bitlen(q)-1} <= q`, so this is a direct lift, never
    /// a modular reduction that could bias the result).
    fn hash_to_scalar(&self, inputs: &[Hashable]) -> Result<ZqElement, CryptoError>;
}

/// Production `HashOracle`, fixed to one `GqGroup` so its output
/// bit-length (`bitlen(q) - 1`) is pinned once at construction.
pub struct ShakeHashOracle {
    group: Arc<GqGroup>,
    target_bits: u64,
}

impl ShakeHashOracle {
    pub fn new(group: Arc<GqGroup>) -> Result<Self, CryptoError> {
        let q_bits = group.q_bit_length();
        if q_bits < 2 {
            return Err(CryptoError::BoundsViolation(
                "ShakeHashOracle".into(),
                "q must be at least 2 bits wide".into(),
            ));
        }
        Ok(Self { group, target_bits: q_bits - 1 })
    }
}

impl HashOracle for ShakeHashOracle {
    fn recursive_hash(&self, inputs: &[Hashable]) -> Result<BigUint, CryptoError> {
        let target_bytes = ((self.target_bits + 7) / 8).max(1) as usize;
        let mut shake = Shake::v256();
        for input in inputs {
            input.absorb(&mut shake);
        }
        let mut out = vec![0u8; target_bytes];
        shake.squeeze(&mut out);
        let mut value = BigUint::from_bytes_be(&out);
        let produced_bits = target_bytes as u64 * 8;
        let excess_bits = produced_bits - self.target_bits;
        if excess_bits > 0 {
            value >>= excess_bits;
        }
        Ok(value)
    }

    fn hash_to_scalar(&self, inputs: &[Hashable]) -> Result<ZqElement, CryptoError> {
        let raw = self.recursive_hash(inputs)?;
        Ok(self.group.scalar(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint as U;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(U::from(23u32), U::from(11u32), U::from(2u32)))
    }

    #[test]
    fn recursive_hash_is_deterministic() {
        let oracle = ShakeHashOracle::new(group()).unwrap();
        let inputs = vec![Hashable::Bytes(b"shuffle_argument".to_vec()), Hashable::Integer(U::from(42u32))];
        let a = oracle.recursive_hash(&inputs).unwrap();
        let b = oracle.recursive_hash(&inputs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn recursive_hash_stays_below_target_bit_length() {
        let group = group();
        let oracle = ShakeHashOracle::new(group.clone()).unwrap();
        let inputs = vec![Hashable::Bytes(b"probe".to_vec())];
        let value = oracle.recursive_hash(&inputs).unwrap();
        assert!(value.bits() < group.q_bit_length());
    }

    #[test]
    fn different_inputs_produce_different_hashes() {
        let oracle = ShakeHashOracle::new(group()).unwrap();
        let a = oracle.recursive_hash(&[Hashable::Bytes(b"a".to_vec())]).unwrap();
        let b = oracle.recursive_hash(&[Hashable::Bytes(b"b".to_vec())]).unwrap();
        assert_ne!(a, b);
    }
}
