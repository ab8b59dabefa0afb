//! Path selectors and the proof shapes that mirror them.

use std::collections::BTreeMap;

use ark_ec::pairing::Pairing;
use kzg_commit::{KZGCommitment, KZGProof};

/// Selects the part of a tree a proof must cover.
///
/// `Leaves` names `(index, claimed value)` pairs among a node's leaf
/// children; `Branch` maps child indexes to the selector for that subtree.
/// The `BTreeMap` keeps traversal, and with it the point order of every
/// batched opening, deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSelector<F> {
    Leaves(Vec<(usize, F)>),
    Branch(BTreeMap<usize, PathSelector<F>>),
}

/// One node's opening: its commitment and the KZG proof for the selected
/// evaluations of its polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opening<E: Pairing> {
    pub commitment: KZGCommitment<E::G1>,
    pub proof: KZGProof<E::G1>,
}

/// A proof mirroring its [`PathSelector`]'s shape: a bare opening over leaf
/// children, or a branch carrying the current node's opening plus one
/// sub-proof per selected child index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofNode<E: Pairing> {
    Leaf(Opening<E>),
    Branch {
        opening: Opening<E>,
        children: BTreeMap<usize, ProofNode<E>>,
    },
}

impl<E: Pairing> ProofNode<E> {
    /// The commitment this proof claims for the node it covers.
    pub fn commitment(&self) -> &KZGCommitment<E::G1> {
        match self {
            Self::Leaf(opening) => &opening.commitment,
            Self::Branch { opening, .. } => &opening.commitment,
        }
    }
}
