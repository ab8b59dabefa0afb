//! `verkle-tree` builds a tree of KZG commitments: every internal node owns a
//! polynomial interpolating its children's values and commits to it, so one
//! short root commitment binds the whole tree. A proof opens each visited
//! node's polynomial at the selected child indices and recurses, keeping the
//! proof at one opening per level.
//!
//! The verifier holds only the root commitment and never trusts a claimed
//! child value: every y-value is re-derived from the child sub-proof's own
//! commitment via [`NodeValue`].

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, PrimeField};
use ark_serialize::CanonicalSerialize;

pub mod mock;
pub mod node;
pub mod proof;
pub mod verifier;

pub use node::{VerkleError, VerkleNode};
pub use proof::{Opening, PathSelector, ProofNode};
pub use verifier::{VerifyError, VerkleVerifier};

/// Reduction of a commitment into the scalar field, so a node can stand as a
/// data item in its parent's polynomial.
///
/// This injects a group element into the field; it is not a random oracle.
/// Distinct commitments reduce to distinct values with overwhelming
/// probability, which the tree's soundness relies on.
pub trait NodeValue<F> {
    fn to_node_value(&self) -> F;
}

/// A curve point reduces to its affine x-coordinate read as an integer
/// modulo the scalar field order; the identity has no affine coordinates and
/// maps to zero. A point and its mirror share a value, which the tree
/// tolerates as long as not every sibling collides.
impl<G: CurveGroup> NodeValue<G::ScalarField> for G {
    fn to_node_value(&self) -> G::ScalarField {
        match self.into_affine().x() {
            Some(x) => {
                // canonical little-endian bytes of the reduced coordinate
                let mut bytes = Vec::new();
                x.serialize_compressed(&mut bytes).unwrap();
                G::ScalarField::from_le_bytes_mod_order(&bytes)
            }
            None => G::ScalarField::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Projective as G1};
    use ark_ec::Group;
    use ark_ff::Zero;

    #[test]
    fn node_values_reduce_commitments() {
        assert_eq!(G1::zero().to_node_value(), Fr::ZERO);

        let single = G1::generator().to_node_value();
        let double = (G1::generator() + G1::generator()).to_node_value();
        assert!(!single.is_zero());
        assert_ne!(single, double);
    }

    #[test]
    fn node_values_come_from_the_x_coordinate_alone() {
        let point = G1::generator() + G1::generator();
        assert_eq!(point.to_node_value(), (-point).to_node_value());
    }
}
