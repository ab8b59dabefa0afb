use std::ops::Mul;

use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::{One, Zero};

/// Multi-scalar multiplication of `scalars` against the matching prefix of
/// `bases`. Callers must ensure `scalars.len() <= bases.len()`.
pub(crate) fn msm<G: CurveGroup>(bases: &[G], scalars: &[G::ScalarField]) -> G {
    let bases = G::normalize_batch(&bases[..scalars.len()]);
    G::msm_unchecked(&bases, scalars)
}

// [1, a, a^2, .., a^(n-1)]
pub(crate) fn powers_of<T: Mul<T, Output = T> + One + Copy>(a: T, n: usize) -> Vec<T> {
    let mut res = Vec::with_capacity(n);
    let mut cur = T::one();
    res.push(cur);

    (1..n).for_each(|_| {
        cur = cur * a;
        res.push(cur);
    });

    res
}

/// Overwrites a secret in place.
pub(crate) fn scrub<T: Zero>(value: &mut T) {
    *value = T::zero();
}
