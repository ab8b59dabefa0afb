//! Validation of proof trees against a root commitment.

use ark_ec::pairing::Pairing;
use kzg_commit::{KZGCommitment, KZGKey, KZG};
use thiserror::Error;

use crate::{
    proof::{PathSelector, ProofNode},
    NodeValue,
};

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    #[error("the proof's top-level commitment is not the expected root")]
    RootMismatch,
    #[error("a pairing check failed; the proof does not match the commitment")]
    ProofRejected,
    #[error("the proof's shape does not match the path selector")]
    MalformedProof,
}

/// Holds the expected root commitment and checks whole proof trees against
/// it.
///
/// Child y-values are always re-derived from the sub-proof commitments and
/// never read from prover-supplied claims; a forged commitment anywhere in
/// the proof therefore breaks the opening of the level above it, all the way
/// up to the root.
pub struct VerkleVerifier<'a, E: Pairing> {
    root: KZGCommitment<E::G1>,
    key: &'a KZGKey<E>,
}

impl<'a, E: Pairing> VerkleVerifier<'a, E> {
    pub fn new(root: KZGCommitment<E::G1>, key: &'a KZGKey<E>) -> Self {
        Self { root, key }
    }

    /// Checks that `proof` opens the expected root and that every level is
    /// consistent with the one above it.
    pub fn validate(
        &self,
        path: &PathSelector<E::ScalarField>,
        proof: &ProofNode<E>,
    ) -> Result<(), VerifyError> {
        if *proof.commitment() != self.root {
            return Err(VerifyError::RootMismatch);
        }
        self.check(path, proof)
    }

    fn check(
        &self,
        path: &PathSelector<E::ScalarField>,
        proof: &ProofNode<E>,
    ) -> Result<(), VerifyError> {
        match (path, proof) {
            (PathSelector::Leaves(claims), ProofNode::Leaf(opening)) => {
                let points: Vec<_> = claims
                    .iter()
                    .map(|(i, v)| (E::ScalarField::from(*i as u64), *v))
                    .collect();

                if !KZG::verify_batch(self.key, &opening.commitment, &points, &opening.proof) {
                    return Err(VerifyError::ProofRejected);
                }
                Ok(())
            }
            (PathSelector::Branch(selectors), ProofNode::Branch { opening, children }) => {
                let mut points = Vec::with_capacity(selectors.len());
                for &index in selectors.keys() {
                    let sub = children.get(&index).ok_or(VerifyError::MalformedProof)?;
                    points.push((
                        E::ScalarField::from(index as u64),
                        sub.commitment().to_node_value(),
                    ));
                }

                let accepted = match points.as_slice() {
                    [point] => {
                        KZG::verify_point(self.key, &opening.commitment, *point, &opening.proof)
                    }
                    batch => KZG::verify_batch(self.key, &opening.commitment, batch, &opening.proof),
                };
                if !accepted {
                    return Err(VerifyError::ProofRejected);
                }

                for (index, selector) in selectors {
                    self.check(selector, &children[index])?;
                }
                Ok(())
            }
            _ => Err(VerifyError::MalformedProof),
        }
    }
}
