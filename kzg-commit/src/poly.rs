//! Polynomial helpers layered on `ark-poly`'s dense univariate type:
//! Lagrange interpolation through arbitrary sample points, vanishing
//! polynomials, and division that must leave no remainder.

use ark_ff::{batch_inversion, Field, One, Zero};
use ark_poly::{
    univariate::{DenseOrSparsePolynomial, DensePolynomial},
    DenseUVPolynomial,
};
use itertools::Itertools;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PolynomialError {
    /// A division that was expected to be exact produced a remainder.
    #[error("polynomial division left a non-zero remainder")]
    NonExactDivision,
    /// Two interpolation samples share an x-coordinate.
    #[error("duplicate x-coordinate among interpolation samples")]
    DuplicateInterpolationNode,
}

/// Computes the unique polynomial of degree `< n` passing through all `n`
/// sample points as `Σ_j y_j·L_j(X)`.
///
/// Basis numerators are built by repeated multiplication with the linear
/// factors `(X - x_k)`; the denominators are inverted in one batch.
pub fn interpolate<F: Field>(points: &[(F, F)]) -> Result<DensePolynomial<F>, PolynomialError> {
    if points.iter().map(|(x, _)| *x).duplicates().next().is_some() {
        return Err(PolynomialError::DuplicateInterpolationNode);
    }

    let mut denominators: Vec<F> = points
        .iter()
        .enumerate()
        .map(|(j, (x_j, _))| {
            points
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != j)
                .map(|(_, (x_k, _))| *x_j - *x_k)
                .product()
        })
        .collect();
    batch_inversion(&mut denominators);

    Ok(points
        .par_iter()
        .enumerate()
        .map(|(j, (_, y_j))| {
            let mut basis = DensePolynomial::from_coefficients_vec(vec![*y_j * denominators[j]]);
            for (k, (x_k, _)) in points.iter().enumerate() {
                if k != j {
                    basis = basis.naive_mul(&DensePolynomial::from_coefficients_vec(vec![
                        -*x_k,
                        F::one(),
                    ]));
                }
            }
            basis
        })
        .reduce(DensePolynomial::zero, |a, b| &a + &b))
}

/// `∏ (X - z_i)` over the given roots.
pub fn vanishing_polynomial<F: Field>(roots: impl IntoIterator<Item = F>) -> DensePolynomial<F> {
    roots.into_iter().fold(
        DensePolynomial::from_coefficients_vec(vec![F::one()]),
        |acc, root| acc.naive_mul(&DensePolynomial::from_coefficients_vec(vec![-root, F::one()])),
    )
}

/// Divides `numerator` by `divisor`, failing unless the division is exact.
pub fn divide_exact<F: Field>(
    numerator: &DensePolynomial<F>,
    divisor: &DensePolynomial<F>,
) -> Result<DensePolynomial<F>, PolynomialError> {
    let (quotient, remainder) = DenseOrSparsePolynomial::from(numerator)
        .divide_with_q_and_r(&DenseOrSparsePolynomial::from(divisor))
        .ok_or(PolynomialError::NonExactDivision)?;
    if !remainder.is_zero() {
        return Err(PolynomialError::NonExactDivision);
    }
    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr as F;
    use ark_ff::UniformRand;
    use ark_poly::Polynomial;

    fn gen_points(num: usize) -> Vec<(F, F)> {
        let mut rng = rand::thread_rng();
        (0..num)
            .map(|i| (F::from(i as u64), F::rand(&mut rng)))
            .collect()
    }

    #[test]
    fn interpolation_matches_samples() {
        let points = gen_points(12);
        let poly = interpolate(&points).unwrap();

        assert!(poly.degree() < points.len());
        for (x, y) in &points {
            assert_eq!(poly.evaluate(x), *y);
        }
    }

    #[test]
    fn interpolation_rejects_shared_x() {
        let mut points = gen_points(4);
        points.push((F::from(2u64), F::from(9u64)));

        assert_eq!(
            interpolate(&points),
            Err(PolynomialError::DuplicateInterpolationNode)
        );
    }

    #[test]
    fn exact_division_returns_quotient() {
        // (X^2 - 1) / (X - 1) = X + 1
        let numerator =
            DensePolynomial::from_coefficients_vec(vec![-F::one(), F::zero(), F::one()]);
        let divisor = DensePolynomial::from_coefficients_vec(vec![-F::one(), F::one()]);

        assert_eq!(
            divide_exact(&numerator, &divisor).unwrap(),
            DensePolynomial::from_coefficients_vec(vec![F::one(), F::one()])
        );
    }

    #[test]
    fn division_rejects_remainders() {
        // (X^2 + 1) / (X - 1) leaves remainder 2
        let numerator = DensePolynomial::from_coefficients_vec(vec![F::one(), F::zero(), F::one()]);
        let divisor = DensePolynomial::from_coefficients_vec(vec![-F::one(), F::one()]);

        assert_eq!(
            divide_exact(&numerator, &divisor),
            Err(PolynomialError::NonExactDivision)
        );
    }

    #[test]
    fn vanishing_polynomial_zeroes_its_roots() {
        let roots: Vec<F> = (0u64..5).map(F::from).collect();
        let z = vanishing_polynomial(roots.iter().copied());

        assert_eq!(z.degree(), roots.len());
        for root in &roots {
            assert!(z.evaluate(root).is_zero());
        }
        assert!(!z.evaluate(&F::from(7u64)).is_zero());
    }
}
