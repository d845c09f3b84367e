//! The prime-order multiplicative group `G_q ⊂ Z*_p` and its exponent field
//! `Z_q`.
//!
//! The teacher's `ProjectiveCurve` generic does not fit here: this crate
//! needs a runtime-sized safe-prime-style group, so `p`/`q`/`g` are data, not
//! a compile-time curve choice. The shape is the one `rmartinho-pbmx` and
//! `provotum-provotum-mixnet` use for the same kind of group: a big-integer
//! type (`num_bigint::BigUint` here) plus an explicit modulus carried next to
//! every element.

mod group;
mod scalar;
pub(crate) mod serde_bigint;

pub use group::{GqElement, GqGroup};
pub use scalar::{scalar_powers, scalar_powers_from_zero, ZqElement};

use crate::error::CryptoError;
use num_bigint::BigUint;

/// A value tagged with the `GqGroup` it belongs to: every element carries a
/// reference to its group, and operations between two elements require that
/// reference to match. Written generically here so the same "same group"
/// check covers `GqElement`, `ZqElement`, and composite types such as
/// ciphertexts.
pub trait Tagged {
    fn group(&self) -> &std::sync::Arc<GqGroup>;

    fn same_group(&self, other: &Self) -> bool {
        self.group() == other.group()
    }
}

/// `multiModExp(bases, exponents, p)`: computes `∏ bases_i ^ exponents_i`.
///
/// All bases must share a group and the two slices must have equal length.
/// This is the naive product-of-modpow construction; a production
/// deployment could window or batch these, but correctness -- not
/// constant-factor performance -- is this crate's concern.
pub fn multi_exponentiate(bases: &[GqElement], exponents: &[ZqElement]) -> Result<GqElement, CryptoError> {
    if bases.len() != exponents.len() {
        return Err(CryptoError::DotProductLengthError(bases.len(), exponents.len()));
    }
    if bases.is_empty() {
        return Err(CryptoError::BoundsViolation(
            "multi_exponentiate".into(),
            "bases must be non-empty".into(),
        ));
    }
    let group = bases[0].group().clone();
    let mut acc = group.identity();
    for (base, exp) in bases.iter().zip(exponents.iter()) {
        if base.group() != &group || exp.group() != &group {
            return Err(CryptoError::GroupMismatch);
        }
        acc = acc.mul(&base.exp(exp))?;
    }
    Ok(acc)
}

/// Reduces an unsigned big integer into `[0, modulus)`.
pub(crate) fn reduce(value: &BigUint, modulus: &BigUint) -> BigUint {
    value % modulus
}
