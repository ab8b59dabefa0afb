use std::marker::PhantomData;

use ark_ec::{pairing::Pairing, Group};
use ark_ff::{One, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use thiserror::Error;

use crate::{
    poly::{self, PolynomialError},
    utils::msm,
};

pub mod trusted_setup;

/// A commitment binds one polynomial and is itself a single G1 element.
pub type KZGCommitment<G> = G;

/// An opening proof is likewise a single G1 element: the commitment to the
/// quotient polynomial witnessing the claimed evaluation(s).
pub type KZGProof<G> = G;

/// KZGKey represents the universal parameters, AKA structured reference
/// string, for both committing polynomials and verifying openings.
///
/// Invariant: there is some discarded secret τ with `g1_powers[i] = G1·τ^i`
/// and `g2_powers[i] = G2·τ^i`; both vectors have length `degree + 1`.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct KZGKey<E: Pairing> {
    g1_powers: Vec<E::G1>,
    g2_powers: Vec<E::G2>,
}

impl<E: Pairing> KZGKey<E> {
    /// The largest polynomial degree this reference string can commit to.
    pub fn max_degree(&self) -> usize {
        self.g1_powers.len() - 1
    }

    pub fn g1_powers(&self) -> &[E::G1] {
        &self.g1_powers
    }

    pub fn g2_powers(&self) -> &[E::G2] {
        &self.g2_powers
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum KZGError {
    #[error("polynomial degree {degree} exceeds the reference string degree {max}")]
    DegreeExceeded { degree: usize, max: usize },
    #[error("the polynomial does not pass through the claimed point(s)")]
    PointNotOnPolynomial,
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// The KZG commitment scheme: coefficient-form polynomials committed against
/// the G1 reference string, opened at single points or point batches, and
/// verified with pairings.
///
/// Every operation is deterministic. The verify operations report malformed
/// input (oversized batches, truncated keys) as a rejection rather than an
/// error, so untrusted proof material can never abort the caller.
pub struct KZG<E> {
    _engine: PhantomData<E>,
}

impl<E: Pairing> KZG<E> {
    /// Commits `poly` as `Σ c_i·[τ^i]_1`.
    pub fn commit(
        key: &KZGKey<E>,
        poly: &DensePolynomial<E::ScalarField>,
    ) -> Result<KZGCommitment<E::G1>, KZGError> {
        Self::check_degree(key, poly)?;
        Ok(msm(&key.g1_powers, &poly.coeffs))
    }

    /// Opens `poly` at one point `(z, v)`, returning the commitment to the
    /// quotient `(poly - v) / (X - z)`.
    pub fn open_point(
        key: &KZGKey<E>,
        poly: &DensePolynomial<E::ScalarField>,
        (z, v): (E::ScalarField, E::ScalarField),
    ) -> Result<KZGProof<E::G1>, KZGError> {
        Self::check_degree(key, poly)?;
        let numerator = poly - &DensePolynomial::from_coefficients_vec(vec![v]);
        let divisor = DensePolynomial::from_coefficients_vec(vec![-z, E::ScalarField::one()]);
        let witness = poly::divide_exact(&numerator, &divisor)
            .map_err(|_| KZGError::PointNotOnPolynomial)?;

        Ok(msm(&key.g1_powers, &witness.coeffs))
    }

    /// Opens `poly` at every point of `points` with one batched proof: the
    /// commitment to `(poly - r) / Z`, where `r` interpolates the points and
    /// `Z` vanishes on their x-coordinates.
    pub fn open_batch(
        key: &KZGKey<E>,
        poly: &DensePolynomial<E::ScalarField>,
        points: &[(E::ScalarField, E::ScalarField)],
    ) -> Result<KZGProof<E::G1>, KZGError> {
        Self::check_degree(key, poly)?;
        let interpolant = poly::interpolate(points)?;
        let vanishing = poly::vanishing_polynomial(points.iter().map(|(x, _)| *x));
        let witness = poly::divide_exact(&(poly - &interpolant), &vanishing)
            .map_err(|_| KZGError::PointNotOnPolynomial)?;

        Ok(msm(&key.g1_powers, &witness.coeffs))
    }

    /// Accepts iff `e(C - v·G1, G2) == e(W, [τ]_2 - z·G2)`, the pairing image
    /// of `f(X) - v = (X - z)·w(X)` at τ.
    pub fn verify_point(
        key: &KZGKey<E>,
        commitment: &KZGCommitment<E::G1>,
        (z, v): (E::ScalarField, E::ScalarField),
        proof: &KZGProof<E::G1>,
    ) -> bool {
        if key.g2_powers.len() < 2 {
            return false;
        }

        let lhs = E::pairing(*commitment - E::G1::generator() * v, E::G2::generator());
        let rhs = E::pairing(*proof, key.g2_powers[1] - E::G2::generator() * z);
        lhs == rhs
    }

    /// Accepts iff `e(C, G2) == e(W, [Z(τ)]_2)·e([r(τ)]_1, G2)`, where `Z`
    /// vanishes on the opened x-coordinates and `r` interpolates the points.
    pub fn verify_batch(
        key: &KZGKey<E>,
        commitment: &KZGCommitment<E::G1>,
        points: &[(E::ScalarField, E::ScalarField)],
        proof: &KZGProof<E::G1>,
    ) -> bool {
        let interpolant = match poly::interpolate(points) {
            Ok(interpolant) => interpolant,
            Err(_) => return false,
        };
        if interpolant.coeffs.len() > key.g1_powers.len() {
            return false;
        }

        let vanishing = poly::vanishing_polynomial(points.iter().map(|(x, _)| *x));
        let vanishing_tau = if vanishing.coeffs.len() <= key.g2_powers.len() {
            msm(&key.g2_powers, &vanishing.coeffs)
        } else if proof.is_zero() {
            // A batch touching every coefficient the key supports pins the
            // whole polynomial: the quotient is zero and Z(τ) drops out of
            // the check, so any stand-in works here.
            E::G2::zero()
        } else {
            return false;
        };

        let interpolant_tau = msm(&key.g1_powers, &interpolant.coeffs);
        let lhs = E::pairing(*commitment, E::G2::generator());
        let rhs = E::pairing(*proof, vanishing_tau)
            + E::pairing(interpolant_tau, E::G2::generator());
        lhs == rhs
    }

    fn check_degree(
        key: &KZGKey<E>,
        poly: &DensePolynomial<E::ScalarField>,
    ) -> Result<(), KZGError> {
        let degree = poly.degree();
        if degree > key.max_degree() {
            return Err(KZGError::DegreeExceeded {
                degree,
                max: key.max_degree(),
            });
        }
        Ok(())
    }
}
