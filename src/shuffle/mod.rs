//! `genShuffle(C, pk)`: the re-encryption mix operation itself, as opposed to
//! the proof that it was done correctly (that's
//! [`crate::zkp::arguments::shuffle_argument`]). Draws a uniform permutation
//! of `C` and re-randomises each entry, returning the shuffled vector
//! alongside the witness (`π`, `ρ`) a [`crate::mixnet::Mixnet`] needs to
//! prove the shuffle.

use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::field::{Tagged, ZqElement};
use crate::homomorphic_encryption::el_gamal::{Ciphertext, PublicKey};
use crate::utils::permutation::Permutation;

use rand::RngCore;

/// Draws `π ← genPermutation(|C|)` and `ρ_i ← Z_q` independently, then sets
/// `C'_i = ReEnc(1, ρ_i, pk) · C_{π(i)}`. An empty input shuffles to an empty
/// output under the (size-zero) identity permutation.
pub fn gen_shuffle<R: RngCore>(
    c: &GroupVector<Ciphertext>,
    public_key: &PublicKey,
    rng: &mut R,
) -> Result<(GroupVector<Ciphertext>, Permutation, GroupVector<ZqElement>), CryptoError> {
    let n = c.len();
    let group = public_key.group().clone();

    let permutation = Permutation::new(rng, n);

    if n == 0 {
        return Ok((GroupVector::new(vec![])?, permutation, GroupVector::new(vec![])?));
    }

    let message_length = c[0].message_length();
    if c[0].group() != &group {
        return Err(CryptoError::GroupMismatch);
    }
    if message_length > public_key.len() {
        return Err(CryptoError::BoundsViolation(
            "gen_shuffle".into(),
            format!("ciphertext message length {message_length} exceeds public key size {}", public_key.len()),
        ));
    }

    let rho: Vec<ZqElement> = (0..n).map(|_| group.random_scalar(rng)).collect();
    let permuted = permutation.permute_array(c.as_slice());
    let shuffled = permuted
        .iter()
        .zip(rho.iter())
        .map(|(cipher, rho_i)| Ciphertext::masked_by_zero(rho_i, public_key, message_length)?.mul(cipher))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((GroupVector::new(shuffled)?, permutation, GroupVector::new(rho)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GqGroup;
    use num_bigint::BigUint;
    use rand::thread_rng;
    use std::sync::Arc;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    #[test]
    fn shuffled_ciphertexts_decrypt_to_a_permutation_of_the_input() {
        use crate::homomorphic_encryption::el_gamal::ElGamal;
        use crate::homomorphic_encryption::HomomorphicEncryptionScheme;

        let g = group();
        let mut rng = thread_rng();
        let (pk, sk) = ElGamal::keygen(&g, &mut rng, 1).unwrap();

        let messages: Vec<_> = (0..4).map(|v| g.element(BigUint::from(2u32 + v))).collect();
        let ciphers: Vec<_> = messages
            .iter()
            .map(|m| Ciphertext::re_encrypt(std::slice::from_ref(m), &g.random_scalar(&mut rng), &pk).unwrap())
            .collect();
        let c = GroupVector::new(ciphers).unwrap();

        let (c_prime, permutation, rho) = gen_shuffle(&c, &pk, &mut rng).unwrap();
        assert_eq!(c_prime.len(), c.len());
        assert_eq!(rho.len(), c.len());

        let mut decrypted: Vec<_> = c_prime.iter().map(|cipher| ElGamal::decrypt(&sk, cipher).unwrap()[0].clone()).collect();
        let mut expected: Vec<_> = messages.clone();
        decrypted.sort_by(|a, b| a.value().cmp(b.value()));
        expected.sort_by(|a, b| a.value().cmp(b.value()));
        assert_eq!(decrypted, expected);

        for i in 0..c.len() {
            let expected_cipher = Ciphertext::masked_by_zero(&rho[i], &pk, 1).unwrap().mul(&c[permutation.apply(i)]).unwrap();
            assert_eq!(expected_cipher, c_prime[i]);
        }
    }

    #[test]
    fn empty_vector_shuffles_to_empty() {
        let g = group();
        let mut rng = thread_rng();
        let (pk, _) = {
            use crate::homomorphic_encryption::el_gamal::ElGamal;
            use crate::homomorphic_encryption::HomomorphicEncryptionScheme;
            ElGamal::keygen(&g, &mut rng, 1).unwrap()
        };
        let c: GroupVector<Ciphertext> = GroupVector::new(vec![]).unwrap();
        let (c_prime, permutation, rho) = gen_shuffle(&c, &pk, &mut rng).unwrap();
        assert!(c_prime.is_empty());
        assert_eq!(permutation.size(), 0);
        assert!(rho.is_empty());
    }
}
