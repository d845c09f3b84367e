//! `RandomSource.genRandomInteger(bound)`: a uniform integer in `[0, bound)`,
//! injected into every `prove` call the way the teacher injects `R: Rng`.

use crate::field::{GqGroup, ZqElement};

use rand::RngCore;
use std::sync::Arc;

/// Draws `n` independent, uniform `Z_q` elements.
pub fn sample_scalars<R: RngCore>(group: &Arc<GqGroup>, rng: &mut R, n: usize) -> Vec<ZqElement> {
    (0..n).map(|_| group.random_scalar(rng)).collect()
}

/// A single uniform `Z_q` element; shorthand for `sample_scalars(.., 1)[0]`.
pub fn sample_scalar<R: RngCore>(group: &Arc<GqGroup>, rng: &mut R) -> ZqElement {
    group.random_scalar(rng)
}
