use super::HomomorphicCommitmentScheme;
use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::{GqElement, GqGroup, Tagged, ZqElement};

use serde::Serialize;
use std::sync::Arc;

/// `ck = (h, g_0, ..., g_{ν-1})`, all non-identity, non-generator `G_q`
/// elements. `ν` (`g.len()`) is the maximum commit length.
#[derive(Clone, Debug, Serialize)]
pub struct CommitKey {
    h: GqElement,
    g: Vec<GqElement>,
}

impl CommitKey {
    pub fn new(h: GqElement, g: Vec<GqElement>) -> Result<Self, CryptoError> {
        for element in std::iter::once(&h).chain(g.iter()) {
            if element.group() != h.group() {
                return Err(CryptoError::GroupMismatch);
            }
        }
        Ok(Self { h, g })
    }

    /// Draws a fresh, random commitment key of capacity `len` (the "public
    /// randomness" setup the teacher's `PedersenCommitment::setup` performs).
    pub fn setup<R: rand::Rng>(group: &Arc<GqGroup>, rng: &mut R, len: usize) -> Self {
        let h = group.random_element(rng);
        let g = (0..len).map(|_| group.random_element(rng)).collect();
        Self { h, g }
    }

    pub fn capacity(&self) -> usize {
        self.g.len()
    }

    pub fn h(&self) -> &GqElement {
        &self.h
    }

    pub fn bases(&self) -> &[GqElement] {
        &self.g
    }

    pub fn group(&self) -> &Arc<GqGroup> {
        self.h.group()
    }
}

/// Pedersen vector commitments: `commit(a, r) = h^r · ∏_{i<k} g_i^{a_i}`.
pub struct PedersenCommitment;

impl HomomorphicCommitmentScheme for PedersenCommitment {
    type CommitKey = CommitKey;

    /// `commit(a, r, ck)`. Empty `a` returns `h^r`; `ck` longer than `a` is
    /// simply padded with zero exponents, which is why lengthening `ck`
    /// never changes an existing commitment (key-length-stability) -- only
    /// the first `a.len()` bases are ever touched.
    fn commit(commit_key: &CommitKey, a: &[ZqElement], r: &ZqElement) -> Result<GqElement, CryptoError> {
        if a.len() > commit_key.capacity() {
            return Err(CryptoError::CommitmentLengthError(
                "Pedersen".into(),
                a.len(),
                commit_key.capacity(),
            ));
        }
        if r.group() != commit_key.group() {
            return Err(CryptoError::GroupMismatch);
        }
        let mut acc = commit_key.h().exp(r);
        for (a_i, g_i) in a.iter().zip(commit_key.bases().iter()) {
            if a_i.group() != commit_key.group() {
                return Err(CryptoError::GroupMismatch);
            }
            acc = acc.mul(&g_i.exp(a_i))?;
        }
        Ok(acc)
    }
}

impl PedersenCommitment {
    /// Commits each element of `a` individually, reusing the same base
    /// `g_0`, against a matching randomness vector (`commitVector`).
    pub fn commit_vector(commit_key: &CommitKey, a: &GroupVector<ZqElement>, r: &GroupVector<ZqElement>) -> Result<GroupVector<GqElement>, CryptoError> {
        if a.len() != r.len() {
            return Err(CryptoError::DotProductLengthError(a.len(), r.len()));
        }
        let commitments = a
            .iter()
            .zip(r.iter())
            .map(|(a_i, r_i)| Self::commit(commit_key, std::slice::from_ref(a_i), r_i))
            .collect::<Result<Vec<_>, _>>()?;
        GroupVector::new(commitments)
    }

    /// Commits each column of `A` independently (`commitMatrix`), yielding
    /// `GV<G_q>^{cols(A)}`.
    pub fn commit_matrix(commit_key: &CommitKey, a: &GroupMatrix<ZqElement>, r: &GroupVector<ZqElement>) -> Result<GroupVector<GqElement>, CryptoError> {
        if a.num_columns() != r.len() {
            return Err(CryptoError::DotProductLengthError(a.num_columns(), r.len()));
        }
        let commitments = a
            .columns()
            .iter()
            .zip(r.iter())
            .map(|(column, r_j)| Self::commit(commit_key, column.as_slice(), r_j))
            .collect::<Result<Vec<_>, _>>()?;
        GroupVector::new(commitments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn small_group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    /// S1: `a = (2, 10)`, `r = 5`, `ck = (h=2, g=(3,4))` ⇒ `commit(a, r) = 3`.
    #[test]
    fn s1_single_commit() {
        let g = small_group();
        let ck = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32)), g.element(BigUint::from(4u32))]).unwrap();
        let a = vec![g.scalar(BigUint::from(2u32)), g.scalar(BigUint::from(10u32))];
        let r = g.scalar(BigUint::from(5u32));
        let c = PedersenCommitment::commit(&ck, &a, &r).unwrap();
        assert_eq!(c.value(), &BigUint::from(3u32));
    }

    /// S2: `a = (2, 10)`, `r = (5, 8)`, `ck = (2, (3,))` ⇒ componentwise
    /// commits `(12, 1)`.
    #[test]
    fn s2_commit_vector() {
        let g = small_group();
        let ck = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32))]).unwrap();
        let a = GroupVector::new(vec![g.scalar(BigUint::from(2u32)), g.scalar(BigUint::from(10u32))]).unwrap();
        let r = GroupVector::new(vec![g.scalar(BigUint::from(5u32)), g.scalar(BigUint::from(8u32))]).unwrap();
        let commitments = PedersenCommitment::commit_vector(&ck, &a, &r).unwrap();
        assert_eq!(commitments.get(0).unwrap().value(), &BigUint::from(12u32));
        assert_eq!(commitments.get(1).unwrap().value(), &BigUint::from(1u32));
    }

    /// S3: matrix commit with columns `(2,10),(8,9)`, randomness `(5,8)`,
    /// `ck = (2,(3,4))` ⇒ `(3, 4)`.
    #[test]
    fn s3_commit_matrix() {
        let g = small_group();
        let ck = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32)), g.element(BigUint::from(4u32))]).unwrap();
        let col0 = GroupVector::new(vec![g.scalar(BigUint::from(2u32)), g.scalar(BigUint::from(10u32))]).unwrap();
        let col1 = GroupVector::new(vec![g.scalar(BigUint::from(8u32)), g.scalar(BigUint::from(9u32))]).unwrap();
        let a = GroupMatrix::from_columns(vec![col0, col1]).unwrap();
        let r = GroupVector::new(vec![g.scalar(BigUint::from(5u32)), g.scalar(BigUint::from(8u32))]).unwrap();
        let commitments = PedersenCommitment::commit_matrix(&ck, &a, &r).unwrap();
        assert_eq!(commitments.get(0).unwrap().value(), &BigUint::from(3u32));
        assert_eq!(commitments.get(1).unwrap().value(), &BigUint::from(4u32));
    }

    #[test]
    fn empty_input_returns_h_to_the_r() {
        let g = small_group();
        let ck = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32))]).unwrap();
        let r = g.scalar(BigUint::from(5u32));
        let c = PedersenCommitment::commit(&ck, &[], &r).unwrap();
        assert_eq!(c, ck.h().exp(&r));
    }

    #[test]
    fn key_length_stability() {
        let g = small_group();
        let ck_short = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32))]).unwrap();
        let ck_long = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32)), g.element(BigUint::from(4u32))]).unwrap();
        let a = vec![g.scalar(BigUint::from(10u32))];
        let r = g.scalar(BigUint::from(5u32));
        assert_eq!(
            PedersenCommitment::commit(&ck_short, &a, &r).unwrap(),
            PedersenCommitment::commit(&ck_long, &a, &r).unwrap()
        );
    }

    #[test]
    fn too_long_input_is_rejected() {
        let g = small_group();
        let ck = CommitKey::new(g.element(BigUint::from(2u32)), vec![g.element(BigUint::from(3u32))]).unwrap();
        let a = vec![g.scalar(BigUint::from(2u32)), g.scalar(BigUint::from(10u32))];
        let r = g.scalar(BigUint::from(5u32));
        assert!(matches!(
            PedersenCommitment::commit(&ck, &a, &r),
            Err(CryptoError::CommitmentLengthError(_, 2, 1))
        ));
    }
}
