//! Fiat–Shamir transcript built on [`HashOracle`], replacing the teacher's
//! `ark_marlin::rng::FiatShamirRng<Digest>` (an absorb/squeeze PRNG tied to
//! a compile-time scalar field). Every `prove`/`verify` absorbs in the same
//! fixed order the argument's component documents, then derives one or more
//! challenges; deriving a challenge folds it back into the transcript so a
//! second call never repeats the first.

use crate::error::CryptoError;
use crate::field::ZqElement;
use crate::utils::hash::{Hashable, HashOracle};

pub struct Transcript<'a, H: HashOracle> {
    oracle: &'a H,
    absorbed: Vec<Hashable>,
}

impl<'a, H: HashOracle> Transcript<'a, H> {
    pub fn new(oracle: &'a H) -> Self {
        Self { oracle, absorbed: Vec::new() }
    }

    pub fn absorb(&mut self, item: Hashable) {
        self.absorbed.push(item);
    }

    pub fn absorb_bytes(&mut self, label: &'static [u8]) {
        self.absorb(Hashable::Bytes(label.to_vec()));
    }

    /// Derives the next challenge from everything absorbed so far, then
    /// absorbs the challenge itself so the transcript advances.
    pub fn challenge_scalar(&mut self) -> Result<ZqElement, CryptoError> {
        let challenge = self.oracle.hash_to_scalar(&self.absorbed)?;
        self.absorb(Hashable::Scalar(challenge.clone()));
        Ok(challenge)
    }
}
