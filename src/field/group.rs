use super::scalar::ZqElement;
use super::serde_bigint;
use crate::error::CryptoError;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;
use serde::Serialize;
use std::sync::Arc;

/// `G_q ⊂ Z*_p`: the parameters of a prime-order multiplicative subgroup.
///
/// `q | p - 1`; the typical safe-prime setting `p = 2q + 1` is supported but
/// not required. Two `GqGroup`s are "the same group" when
/// `p`, `q`, and `g` agree by value -- there is no notion of object identity
/// here, only of parameter equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GqGroup {
    #[serde(with = "serde_bigint")]
    p: BigUint,
    #[serde(with = "serde_bigint")]
    q: BigUint,
    #[serde(with = "serde_bigint")]
    g: BigUint,
}

impl GqGroup {
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Self {
        Self { p, q, g }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    pub fn order(&self) -> &BigUint {
        &self.q
    }

    pub fn generator_value(&self) -> &BigUint {
        &self.g
    }

    /// `bitlen(q)`, the bound the `HashOracle` output must stay strictly
    /// under.
    pub fn q_bit_length(&self) -> u64 {
        self.q.bits()
    }

    pub fn generator(self: &Arc<Self>) -> GqElement {
        GqElement {
            value: self.g.clone(),
            group: self.clone(),
        }
    }

    pub fn identity(self: &Arc<Self>) -> GqElement {
        GqElement {
            value: BigUint::one(),
            group: self.clone(),
        }
    }

    /// Wraps `value` (reduced mod `p`) as an element of this group. Does
    /// *not* check subgroup membership -- callers constructing elements
    /// from known-good sources (commitments, exponentiations, ciphertext
    /// arithmetic) never need the check; callers parsing untrusted input
    /// should call [`GqElement::is_valid`].
    pub fn element(self: &Arc<Self>, value: BigUint) -> GqElement {
        GqElement {
            value: value % &self.p,
            group: self.clone(),
        }
    }

    pub fn scalar(self: &Arc<Self>, value: BigUint) -> ZqElement {
        ZqElement::new(self.clone(), value % &self.q)
    }

    pub fn scalar_zero(self: &Arc<Self>) -> ZqElement {
        self.scalar(BigUint::zero())
    }

    pub fn scalar_one(self: &Arc<Self>) -> ZqElement {
        self.scalar(BigUint::one())
    }

    /// Uniform element of `Z_q`, i.e. `RandomSource.genRandomInteger(q)`.
    pub fn random_scalar<R: RngCore>(self: &Arc<Self>, rng: &mut R) -> ZqElement {
        let value = rng.gen_biguint_below(&self.q);
        ZqElement::new(self.clone(), value)
    }

    /// Uniform non-identity, non-generator element of `G_q`, used to build
    /// commitment keys.
    pub fn random_element<R: RngCore>(self: &Arc<Self>, rng: &mut R) -> GqElement {
        loop {
            let exponent = rng.gen_biguint_below(&self.q);
            if exponent.is_zero() {
                continue;
            }
            let value = self.g.modpow(&exponent, &self.p);
            if value == self.g || value.is_one() {
                continue;
            }
            return GqElement {
                value,
                group: self.clone(),
            };
        }
    }
}

/// An element of `G_q`.
#[derive(Clone, Debug, Serialize)]
pub struct GqElement {
    #[serde(with = "serde_bigint")]
    value: BigUint,
    #[serde(skip)]
    group: Arc<GqGroup>,
}

impl PartialEq for GqElement {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.value == other.value
    }
}
impl Eq for GqElement {}

impl super::Tagged for GqElement {
    fn group(&self) -> &Arc<GqGroup> {
        &self.group
    }
}

impl GqElement {
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn group(&self) -> &Arc<GqGroup> {
        &self.group
    }

    /// `G_q.mul`: componentwise multiplication modulo `p`.
    pub fn mul(&self, other: &Self) -> Result<Self, CryptoError> {
        if self.group != other.group {
            return Err(CryptoError::GroupMismatch);
        }
        Ok(Self {
            value: (&self.value * &other.value) % self.group.modulus(),
            group: self.group.clone(),
        })
    }

    /// `G_q.inv`: multiplicative inverse modulo `p`, via Fermat's little
    /// theorem (`p` is prime).
    pub fn inverse(&self) -> Self {
        let p_minus_two = self.group.modulus() - BigUint::from(2u8);
        Self {
            value: self.value.modpow(&p_minus_two, self.group.modulus()),
            group: self.group.clone(),
        }
    }

    /// `G_q.exp`: exponentiation by a `Z_q` scalar.
    pub fn exp(&self, scalar: &ZqElement) -> Self {
        Self {
            value: self.value.modpow(scalar.value(), self.group.modulus()),
            group: self.group.clone(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.value.is_one()
    }

    /// `x^q mod p == 1` -- membership in the order-`q` subgroup.
    pub fn is_valid(&self) -> bool {
        if self.value.is_zero() || self.value >= *self.group.modulus() {
            return false;
        }
        self.value.modpow(self.group.order(), self.group.modulus()).is_one()
    }

    /// Folds a non-empty, group-homogeneous slice under `mul`.
    pub fn product(group: &Arc<GqGroup>, elements: &[Self]) -> Result<Self, CryptoError> {
        let mut acc = group.identity();
        for e in elements {
            acc = acc.mul(e)?;
        }
        Ok(acc)
    }
}

impl std::ops::Add for &GqElement {
    type Output = GqElement;
    fn add(self, rhs: Self) -> GqElement {
        self.mul(rhs).expect("GqElement::add requires matching groups")
    }
}

/// Extended Euclidean inverse mod `m`, kept for documentation/testing parity
/// with libraries (e.g. `rmartinho-pbmx`) that expose `invmod` directly
/// rather than relying on Fermat's little theorem.
#[allow(dead_code)]
pub(crate) fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    use num_bigint::BigInt;
    use num_traits::Signed;

    let (a, m) = (BigInt::from(a.clone()), BigInt::from(m.clone()));
    let egcd = extended_gcd(&a, &m);
    if egcd.0 != BigInt::one() {
        return None;
    }
    let mut x = egcd.1 % &m;
    if x.is_negative() {
        x += &m;
    }
    x.to_biguint()
}

fn extended_gcd(a: &num_bigint::BigInt, b: &num_bigint::BigInt) -> (num_bigint::BigInt, num_bigint::BigInt, num_bigint::BigInt) {
    use num_bigint::BigInt;
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x, y) = extended_gcd(b, &a.mod_floor(b));
        (g, y.clone(), x - (a / b) * y)
    }
}
