//! Tree nodes and proof generation.

use std::collections::BTreeMap;

use ark_ec::pairing::Pairing;
use ark_poly::univariate::DensePolynomial;
use kzg_commit::{KZGCommitment, KZGError, KZGKey, KZG};
use thiserror::Error;

use crate::{
    proof::{Opening, PathSelector, ProofNode},
    NodeValue,
};

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VerkleError {
    #[error(transparent)]
    Kzg(#[from] KZGError),
    /// Every child reported one identical value, which collapses the node
    /// polynomial to a constant that no longer binds child positions.
    #[error("all children of an internal node share a single value")]
    DuplicateChildValues,
    #[error("path selector shape does not match the tree shape")]
    PathShapeMismatch,
    #[error("path selects child {index} of a node with {len} children")]
    ChildIndexOutOfBounds { index: usize, len: usize },
}

/// A node of the tree. Leaves store a bare scalar; an internal node owns its
/// children together with the polynomial through `(i, child_i value)` and
/// that polynomial's commitment.
///
/// Trees are built bottom-up and never modified afterwards.
#[derive(Clone, Debug)]
pub enum VerkleNode<E: Pairing> {
    Leaf {
        value: E::ScalarField,
    },
    Internal {
        children: Vec<VerkleNode<E>>,
        poly: DensePolynomial<E::ScalarField>,
        commitment: KZGCommitment<E::G1>,
    },
}

impl<E: Pairing> VerkleNode<E> {
    pub fn leaf(value: E::ScalarField) -> Self {
        Self::Leaf { value }
    }

    /// Builds an internal node over `children` by committing to the
    /// polynomial interpolating `(i, child_i.node_value())`.
    ///
    /// Construction is rejected when every child reports the same value;
    /// see [`VerkleError::DuplicateChildValues`].
    pub fn from_children(
        key: &KZGKey<E>,
        children: Vec<VerkleNode<E>>,
    ) -> Result<Self, VerkleError> {
        let values: Vec<E::ScalarField> = children.iter().map(|c| c.node_value()).collect();
        if values.len() > 1 && values.iter().all(|v| *v == values[0]) {
            return Err(VerkleError::DuplicateChildValues);
        }

        let points: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (E::ScalarField::from(i as u64), *v))
            .collect();
        let poly = kzg_commit::poly::interpolate(&points).map_err(KZGError::from)?;
        let commitment = KZG::commit(key, &poly)?;

        Ok(Self::Internal {
            children,
            poly,
            commitment,
        })
    }

    /// A leaf's stored scalar, or the reduction of an internal node's
    /// commitment.
    pub fn node_value(&self) -> E::ScalarField {
        match self {
            Self::Leaf { value } => *value,
            Self::Internal { commitment, .. } => commitment.to_node_value(),
        }
    }

    /// The commitment of an internal node. Leaves have none.
    pub fn commitment(&self) -> Option<&KZGCommitment<E::G1>> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { commitment, .. } => Some(commitment),
        }
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Emits the proof for `path` by structural recursion. The current
    /// node's polynomial is opened at every selected child index; branch
    /// selectors additionally carry one sub-proof per selected child.
    ///
    /// A branch selecting exactly one child uses a single-point opening,
    /// larger selections one batched opening.
    pub fn generate_proof(
        &self,
        key: &KZGKey<E>,
        path: &PathSelector<E::ScalarField>,
    ) -> Result<ProofNode<E>, VerkleError> {
        let Self::Internal {
            children,
            poly,
            commitment,
        } = self
        else {
            return Err(VerkleError::PathShapeMismatch);
        };

        match path {
            PathSelector::Leaves(claims) => {
                if children.iter().any(|c| matches!(c, Self::Internal { .. })) {
                    return Err(VerkleError::PathShapeMismatch);
                }

                let points: Vec<_> = claims
                    .iter()
                    .map(|(i, v)| (E::ScalarField::from(*i as u64), *v))
                    .collect();
                let proof = KZG::open_batch(key, poly, &points)?;

                Ok(ProofNode::Leaf(Opening {
                    commitment: *commitment,
                    proof,
                }))
            }
            PathSelector::Branch(selectors) => {
                let mut points = Vec::with_capacity(selectors.len());
                for &index in selectors.keys() {
                    let child =
                        children
                            .get(index)
                            .ok_or(VerkleError::ChildIndexOutOfBounds {
                                index,
                                len: children.len(),
                            })?;
                    points.push((E::ScalarField::from(index as u64), child.node_value()));
                }
                let proof = match points.as_slice() {
                    [point] => KZG::open_point(key, poly, *point)?,
                    batch => KZG::open_batch(key, poly, batch)?,
                };
                let opening = Opening {
                    commitment: *commitment,
                    proof,
                };

                let mut sub_proofs = BTreeMap::new();
                for (&index, selector) in selectors {
                    sub_proofs.insert(index, children[index].generate_proof(key, selector)?);
                }

                Ok(ProofNode::Branch {
                    opening,
                    children: sub_proofs,
                })
            }
        }
    }
}
