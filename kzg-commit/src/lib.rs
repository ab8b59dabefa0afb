//! `kzg-commit` implements the KZG polynomial commitment scheme over a
//! pairing-friendly curve. A polynomial is bound to one short group element;
//! the committer can later prove evaluations of the committed polynomial at a
//! single point, or at many points with one batched proof, and a verifier
//! checks those claims against the commitment alone using pairings.
//!
//! The binding property relies on a structured reference string produced by a
//! one-time trusted setup whose secret is discarded (see [`TrustedSetup`]).
//! Everyone holding the same [`KZGKey`] can commit, open and verify; no
//! per-party keys exist.

pub mod kzg;
pub mod poly;
pub(crate) mod utils;

pub use kzg::{trusted_setup::TrustedSetup, KZGCommitment, KZGError, KZGKey, KZGProof, KZG};
pub use poly::PolynomialError;
