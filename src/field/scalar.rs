use super::group::GqGroup;
use super::serde_bigint;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::Serialize;
use std::sync::Arc;

/// An element of `Z_q`, the exponent field of `G_q`.
///
/// Tagged with the same `GqGroup` as the `GqElement`s it exponentiates, so
/// the "all operations require group equality" invariant is a single check
/// shared by both element kinds (see [`crate::field::Tagged`]).
#[derive(Clone, Debug, Serialize)]
pub struct ZqElement {
    #[serde(with = "serde_bigint")]
    value: BigUint,
    #[serde(skip)]
    group: Arc<GqGroup>,
}

impl PartialEq for ZqElement {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.value == other.value
    }
}
impl Eq for ZqElement {}

impl super::Tagged for ZqElement {
    fn group(&self) -> &Arc<GqGroup> {
        &self.group
    }
}

impl ZqElement {
    pub(crate) fn new(group: Arc<GqGroup>, value: BigUint) -> Self {
        let q = group.order().clone();
        Self { value: value % q, group }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn group(&self) -> &Arc<GqGroup> {
        &self.group
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.group, other.group);
        Self::new(self.group.clone(), &self.value + &other.value)
    }

    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.group, other.group);
        let q = self.group.order();
        Self::new(self.group.clone(), (&self.value + q - &other.value) % q)
    }

    pub fn neg(&self) -> Self {
        let q = self.group.order();
        if self.value.is_zero() {
            self.clone()
        } else {
            Self::new(self.group.clone(), q - &self.value)
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.group, other.group);
        Self::new(self.group.clone(), &self.value * &other.value)
    }

    /// `Z_q.inv`: multiplicative inverse modulo `q` via Fermat's little
    /// theorem (`q` is prime). Undefined (and unused by any code path) for
    /// the zero element.
    pub fn inverse(&self) -> Self {
        let q_minus_two = self.group.order() - BigUint::from(2u8);
        Self::new(self.group.clone(), self.value.modpow(&q_minus_two, self.group.order()))
    }

    pub fn pow(&self, exponent: u64) -> Self {
        Self::new(self.group.clone(), self.value.modpow(&BigUint::from(exponent), self.group.order()))
    }
}

impl std::ops::Add for &ZqElement {
    type Output = ZqElement;
    fn add(self, rhs: Self) -> ZqElement {
        ZqElement::add(self, rhs)
    }
}
impl std::ops::Sub for &ZqElement {
    type Output = ZqElement;
    fn sub(self, rhs: Self) -> ZqElement {
        ZqElement::sub(self, rhs)
    }
}
impl std::ops::Mul for &ZqElement {
    type Output = ZqElement;
    fn mul(self, rhs: Self) -> ZqElement {
        ZqElement::mul(self, rhs)
    }
}
impl std::ops::Neg for &ZqElement {
    type Output = ZqElement;
    fn neg(self) -> ZqElement {
        ZqElement::neg(self)
    }
}

/// `(x, x^2, ..., x^n)`, the teacher's `scalar_powers` helper (used by
/// every argument to build challenge-power vectors).
pub fn scalar_powers(x: &ZqElement, n: usize) -> Vec<ZqElement> {
    let mut powers = Vec::with_capacity(n);
    let mut current = x.clone();
    for _ in 0..n {
        powers.push(current.clone());
        current = current.mul(x);
    }
    powers
}

/// `(x^0, x^1, ..., x^n)`, i.e. `scalar_powers` with the leading `1`.
pub fn scalar_powers_from_zero(x: &ZqElement, n: usize) -> Vec<ZqElement> {
    let one = x.group().scalar_one();
    let mut powers = Vec::with_capacity(n + 1);
    powers.push(one);
    for p in scalar_powers(x, n) {
        powers.push(p);
    }
    powers
}
