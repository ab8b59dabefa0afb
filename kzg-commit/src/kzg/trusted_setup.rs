//! One-time generation of the structured reference string.
//!
//! The sampled secret exists only inside [`TrustedSetup::generate`]; the
//! scalar and its power ladder are both overwritten before the key is
//! returned. Callers needing a stronger guarantee should run the setup in a
//! short-lived process and keep only the resulting key.

use ark_ec::{pairing::Pairing, Group};
use ark_ff::{UniformRand, Zero};
use rand::{CryptoRng, RngCore};

use crate::utils::{powers_of, scrub};

use super::KZGKey;

/// Produces [`KZGKey`]s and forgets the secret that generated them.
pub struct TrustedSetup;

impl TrustedSetup {
    /// Generates a reference string supporting polynomials up to `degree`,
    /// from a secret τ sampled uniformly over `[1, p-1]`.
    pub fn generate<E: Pairing, R: RngCore + CryptoRng>(degree: usize, rng: &mut R) -> KZGKey<E> {
        let mut tau = E::ScalarField::rand(rng);
        while tau.is_zero() {
            tau = E::ScalarField::rand(rng);
        }

        let key = Self::key_from_secret(tau, degree);
        scrub(&mut tau);
        key
    }

    /// Builds the key from an explicit secret. Outside of tests the secret
    /// must never outlive [`TrustedSetup::generate`].
    pub(crate) fn key_from_secret<E: Pairing>(tau: E::ScalarField, degree: usize) -> KZGKey<E> {
        let mut ladder = powers_of(tau, degree + 1);
        let g1_powers = ladder.iter().map(|t| E::G1::generator() * *t).collect();
        let g2_powers = ladder.iter().map(|t| E::G2::generator() * *t).collect();
        for step in ladder.iter_mut() {
            scrub(step);
        }

        KZGKey { g1_powers, g2_powers }
    }
}
