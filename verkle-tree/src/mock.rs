//! Mock tree construction for tests and benches.
//!
//! Trees are assembled by cloning two recursively-built subtrees across the
//! node width and shuffling their placement, so the duplicated values never
//! sit in an order that collapses a parent's interpolant. Production
//! constructions are expected to guarantee child-value distinctness by
//! design instead of by shuffling.

use std::collections::BTreeMap;

use ark_ec::pairing::Pairing;
use ark_ff::UniformRand;
use kzg_commit::KZGKey;
use rand::{seq::SliceRandom, Rng};

use crate::{
    node::{VerkleError, VerkleNode},
    proof::PathSelector,
};

/// Builds a tree of the given `depth` in which every internal node has
/// `width` children; `depth == 1` is a bare random leaf.
///
/// `width` must be at least 2 so [`sample_path`] can always select two
/// leaves.
pub fn build_tree<E: Pairing, R: Rng>(
    key: &KZGKey<E>,
    depth: usize,
    width: usize,
    rng: &mut R,
) -> Result<VerkleNode<E>, VerkleError> {
    if depth <= 1 {
        return Ok(VerkleNode::leaf(E::ScalarField::rand(rng)));
    }

    let first = build_tree(key, depth - 1, width, rng)?;
    let second = build_tree(key, depth - 1, width, rng)?;

    let mut children = Vec::with_capacity(width);
    children.resize(width / 2, first);
    children.resize(width, second);
    children.shuffle(rng);

    VerkleNode::from_children(key, children)
}

/// A path descriptor mirroring the original smoke test: two leaf claims at
/// the bottom level, a single-child descent everywhere above it.
pub fn sample_path<E: Pairing>(tree: &VerkleNode<E>) -> PathSelector<E::ScalarField> {
    match tree {
        VerkleNode::Leaf { .. } => PathSelector::Leaves(vec![(0, tree.node_value())]),
        VerkleNode::Internal { children, .. } => {
            if matches!(children[0], VerkleNode::Leaf { .. }) {
                PathSelector::Leaves(vec![
                    (0, children[0].node_value()),
                    (1, children[1].node_value()),
                ])
            } else {
                PathSelector::Branch(BTreeMap::from([(0, sample_path(&children[0]))]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::VerkleVerifier;
    use ark_bn254::Bn254;
    use kzg_commit::TrustedSetup;

    #[test]
    fn mock_tree_proofs_validate() {
        let mut rng = rand::thread_rng();
        let key: KZGKey<Bn254> = TrustedSetup::generate(32, &mut rng);

        let tree = build_tree(&key, 3, 8, &mut rng).unwrap();
        assert_eq!(tree.leaf_count(), 64);

        let path = sample_path(&tree);
        let proof = tree.generate_proof(&key, &path).unwrap();

        let verifier = VerkleVerifier::new(*tree.commitment().unwrap(), &key);
        assert_eq!(verifier.validate(&path, &proof), Ok(()));
    }

    #[test]
    fn depth_two_trees_open_their_leaves() {
        let mut rng = rand::thread_rng();
        let key: KZGKey<Bn254> = TrustedSetup::generate(32, &mut rng);

        let tree = build_tree(&key, 2, 30, &mut rng).unwrap();
        let path = sample_path(&tree);
        assert!(matches!(path, PathSelector::Leaves(_)));

        let proof = tree.generate_proof(&key, &path).unwrap();
        let verifier = VerkleVerifier::new(*tree.commitment().unwrap(), &key);
        assert_eq!(verifier.validate(&path, &proof), Ok(()));
    }
}
